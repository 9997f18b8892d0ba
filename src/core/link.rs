//! Link normalization and mention handling for the file registry.

use url::Url;

/// Characters Discord wraps around a user ID in a mention (`<@123>`, `<@!123>`).
const MENTION_DECORATION: [char; 4] = ['<', '@', '!', '>'];

/// Rewrites a Google Drive "view" link into a direct download link.
///
/// `https://drive.google.com/file/d/<id>/view?usp=sharing` becomes
/// `https://drive.google.com/uc?export=download&id=<id>`. Anything else, including links
/// that are already in download form, is returned unchanged.
#[must_use]
pub fn normalize_drive_link(link: &str) -> String {
    drive_file_id(link).map_or_else(
        || link.to_string(),
        |id| format!("https://drive.google.com/uc?export=download&id={id}"),
    )
}

fn drive_file_id(link: &str) -> Option<String> {
    let url = Url::parse(link.trim()).ok()?;
    if url.host_str() != Some("drive.google.com") {
        return None;
    }
    let mut segments = url.path_segments()?;
    match (segments.next(), segments.next(), segments.next()) {
        (Some("file"), Some("d"), Some(id)) if !id.is_empty() => Some(id.to_string()),
        _ => None,
    }
}

/// Strips mention decoration from a token, leaving the bare user ID.
///
/// The result is not checked for being a valid snowflake.
#[must_use]
pub fn extract_user_id(token: &str) -> String {
    token
        .chars()
        .filter(|c| !MENTION_DECORATION.contains(c))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOWNLOAD: &str = "https://drive.google.com/uc?export=download&id=ABC123";

    #[test]
    fn test_view_link_becomes_download_link() {
        assert_eq!(
            normalize_drive_link("https://drive.google.com/file/d/ABC123/view"),
            DOWNLOAD
        );
        assert_eq!(
            normalize_drive_link("https://drive.google.com/file/d/ABC123/view?usp=sharing"),
            DOWNLOAD
        );
        assert_eq!(
            normalize_drive_link("https://drive.google.com/file/d/ABC123"),
            DOWNLOAD
        );
    }

    #[test]
    fn test_other_links_pass_through() {
        for link in [
            "https://example.com/file/d/ABC123/view",
            "https://drive.google.com/drive/folders/XYZ",
            "https://drive.google.com/file/d/",
            "not a url at all",
            "",
        ] {
            assert_eq!(normalize_drive_link(link), link);
        }
    }

    #[test]
    fn test_normalization_is_idempotent() {
        for link in [
            "https://drive.google.com/file/d/ABC123/view",
            "https://drive.google.com/open?id=ABC123",
            "https://cdn.example.org/logo.png",
        ] {
            let once = normalize_drive_link(link);
            assert_eq!(normalize_drive_link(&once), once);
        }
    }

    #[test]
    fn test_extract_user_id_strips_decoration() {
        assert_eq!(extract_user_id("<@123456>"), "123456");
        assert_eq!(extract_user_id("<@!123456>"), "123456");
        assert_eq!(extract_user_id("@123456"), "123456");
        assert_eq!(extract_user_id("123456"), "123456");
        assert_eq!(extract_user_id("<@>"), "");
    }
}
