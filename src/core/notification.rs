//! Notification layout and role checks for the `/noti` command.
//!
//! Everything the DM shows is computed here so the Discord command only has to copy
//! fields into an embed.

/// Horizontal rule between embed sections
pub const SEPARATOR: &str = "----------------";

/// Placeholder for a missing project or file list
pub const DEFAULT_PLACEHOLDER: &str = "—";
/// Placeholder for a missing status
pub const DEFAULT_STATUS: &str = "In progress";
/// Placeholder for a missing size
pub const DEFAULT_SIZE: &str = "N/A";

/// Label of the link button
pub const OPEN_FILES_LABEL: &str = "📥 Open Files";

/// Reply when the caller lacks the notifier role
pub const PERMISSION_DENIED: &str = "❌ You don't have permission to use this command.";
/// Reply when the DM could not be delivered
pub const DELIVERY_FAILED: &str = "❌ User ke DMs closed hain.";

/// Raw slash command options, before defaults are applied
#[derive(Debug, Clone, Default)]
pub struct NotificationRequest {
    /// Project name
    pub project: Option<String>,
    /// File names, `|`-separated for several
    pub filename: Option<String>,
    /// Free-form status
    pub status: Option<String>,
    /// Free-form size
    pub size: Option<String>,
    /// Link for the button
    pub link: Option<String>,
}

/// A notification ready to render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Project line
    pub project: String,
    /// Rendered file list, one or more lines
    pub files: String,
    /// Status line
    pub status: String,
    /// Size line
    pub size: String,
    /// Button target, if any
    pub link: Option<String>,
}

fn or_default(value: Option<String>, default: &str) -> String {
    value.unwrap_or_else(|| default.to_string())
}

impl From<NotificationRequest> for Notification {
    fn from(request: NotificationRequest) -> Self {
        Self {
            project: or_default(request.project, DEFAULT_PLACEHOLDER),
            files: render_file_list(request.filename.as_deref().unwrap_or(DEFAULT_PLACEHOLDER)),
            status: or_default(request.status, DEFAULT_STATUS),
            size: or_default(request.size, DEFAULT_SIZE),
            link: request
                .link
                .map(|link| link.trim().to_string())
                .filter(|link| !link.is_empty()),
        }
    }
}

impl Notification {
    /// Embed description: project, files, status and size between separators.
    #[must_use]
    pub fn description(&self) -> String {
        format!(
            "**Project:** {}\n{SEPARATOR}\n**Files:**\n{}\n{SEPARATOR}\nStatus: {}\nSize: {}",
            self.project, self.files, self.status, self.size
        )
    }
}

/// Turns `a | b | c` into a bulleted list; input without `|` is used as-is.
#[must_use]
pub fn render_file_list(input: &str) -> String {
    if !input.contains('|') {
        return input.to_string();
    }
    input
        .split('|')
        .map(|file| format!("• {}", file.trim()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// True when any of the member's role names equals `required`.
pub fn has_required_role<'a, I>(role_names: I, required: &str) -> bool
where
    I: IntoIterator<Item = &'a str>,
{
    role_names.into_iter().any(|name| name == required)
}

/// Ephemeral confirmation naming the recipient.
#[must_use]
pub fn delivered_message(recipient_tag: &str) -> String {
    format!("✅ Notification sent to **{recipient_tag}**")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_missing_fields() {
        let notification = Notification::from(NotificationRequest::default());
        assert_eq!(notification.project, "—");
        assert_eq!(notification.files, "—");
        assert_eq!(notification.status, "In progress");
        assert_eq!(notification.size, "N/A");
        assert_eq!(notification.link, None);
    }

    #[test]
    fn test_pipe_list_becomes_bullets_in_order() {
        assert_eq!(
            render_file_list("logo.psd | banner.png|  cover.jpg "),
            "• logo.psd\n• banner.png\n• cover.jpg"
        );
    }

    #[test]
    fn test_single_file_is_kept_raw() {
        assert_eq!(render_file_list("  logo.psd "), "  logo.psd ");
    }

    #[test]
    fn test_description_layout() {
        let notification = Notification::from(NotificationRequest {
            project: Some("Rebrand".to_string()),
            filename: Some("a|b".to_string()),
            status: Some("Done".to_string()),
            size: Some("12 MB".to_string()),
            link: None,
        });
        assert_eq!(
            notification.description(),
            "**Project:** Rebrand\n----------------\n**Files:**\n• a\n• b\n----------------\nStatus: Done\nSize: 12 MB"
        );
    }

    #[test]
    fn test_link_is_trimmed_and_blank_dropped() {
        let with_link = Notification::from(NotificationRequest {
            link: Some("  https://example.com/x ".to_string()),
            ..Default::default()
        });
        assert_eq!(with_link.link.as_deref(), Some("https://example.com/x"));

        let blank = Notification::from(NotificationRequest {
            link: Some("   ".to_string()),
            ..Default::default()
        });
        assert_eq!(blank.link, None);
    }

    #[test]
    fn test_role_check() {
        assert!(has_required_role(["Member", "Aniketshare/Noti"], "Aniketshare/Noti"));
        assert!(!has_required_role(["Member", "aniketshare/noti"], "Aniketshare/Noti"));
        assert!(!has_required_role(Vec::<&str>::new(), "Aniketshare/Noti"));
    }
}
