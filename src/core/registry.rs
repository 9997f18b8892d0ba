//! Reply text for each file registry command.
//!
//! [`respond`] is the whole registry: it takes who sent what and returns the text to send
//! back. Storage failures are logged here and turned into a generic reply so nothing
//! internal reaches the user.

use crate::{
    core::{
        command::Command,
        file_record::{self, NewFileRecord},
    },
    entities::FileRecordModel,
    errors::Result,
};
use sea_orm::DatabaseConnection;
use tracing::{error, info, instrument, warn};

/// Static help text
pub const HELP_TEXT: &str = "📁 **File Bot Help**\n\
    • `list` - Shows the files saved for you.\n\
    • `get <file name>` - Sends the link for one of your files.\n\
    • `help` - Shows this message.\n\n\
    **Admin only**\n\
    • `save @user <file name> <link>` - Saves a file for a client.\n\
    • `list @user` - Shows every file saved for a client.";

/// Reply to a non-admin using an admin command
pub const PERMISSION_DENIED: &str = "❌ You don't have permission to use this command.";
/// Reply to a malformed `save`
pub const SAVE_USAGE: &str = "⚠️ Usage: `save @user <file name> <link>`";
/// Reply to `list` with a mention that holds no user ID
pub const LIST_USAGE: &str = "⚠️ Usage: `list @user`";
/// Reply when the database fails
pub const STORAGE_ERROR: &str = "❌ Something went wrong while accessing the database. Please try again later.";
/// Reply to `list` with no files
pub const NO_FILES: &str = "📭 You don't have any saved files yet.";
/// Reply to anything unrecognized
pub const UNKNOWN_COMMAND: &str = "❓ Unknown command. Type `help` to see what I can do.";

/// Who is asking, as far as the registry cares
#[derive(Debug, Clone, Copy)]
pub struct Caller<'a> {
    /// Discord user ID of the sender
    pub user_id: &'a str,
    /// Whether the sender is the configured admin
    pub is_admin: bool,
}

impl<'a> Caller<'a> {
    /// Builds a caller, comparing the sender against the single admin ID.
    #[must_use]
    pub fn new(user_id: &'a str, admin_id: &str) -> Self {
        Self {
            user_id,
            is_admin: user_id == admin_id,
        }
    }
}

/// Parses `text` and produces the reply for `caller`.
#[instrument(skip(db, text), fields(user_id = caller.user_id))]
pub async fn respond(db: &DatabaseConnection, caller: Caller<'_>, text: &str) -> String {
    let command = Command::parse(text);
    info!(?command, "Registry command received");

    match execute(db, caller, command).await {
        Ok(reply) => reply,
        Err(e) => {
            error!("Registry command failed: {:?}", e);
            STORAGE_ERROR.to_string()
        }
    }
}

async fn execute(db: &DatabaseConnection, caller: Caller<'_>, command: Command) -> Result<String> {
    match command {
        Command::Help => Ok(HELP_TEXT.to_string()),
        Command::SaveUsage => Ok(SAVE_USAGE.to_string()),
        Command::ListUsage => Ok(LIST_USAGE.to_string()),
        Command::Save { .. } | Command::ListFor { .. } if !caller.is_admin => {
            warn!("Admin command refused");
            Ok(PERMISSION_DENIED.to_string())
        }
        Command::Save { target, name, link } => {
            let record = match NewFileRecord::new(&target, &name, &link, caller.user_id) {
                Ok(record) => record,
                Err(e) => {
                    warn!("Save rejected: {}", e);
                    return Ok(SAVE_USAGE.to_string());
                }
            };
            let saved = file_record::save_file(db, record).await?;
            Ok(format!(
                "✅ Saved **{}** for client {}",
                saved.name, saved.client_id
            ))
        }
        Command::List => {
            let files = file_record::list_files_for_client(db, caller.user_id).await?;
            Ok(render_own_list(&files))
        }
        Command::Get { name } => {
            let found = file_record::find_file_by_name(db, caller.user_id, &name).await?;
            Ok(found.map_or_else(
                || format!("❌ No file named **{name}** was found."),
                |file| format!("✅ **{}**\n🔗 {}", file.name, file.link),
            ))
        }
        Command::ListFor { target } => {
            let files = file_record::list_files_for_client(db, &target).await?;
            Ok(render_client_list(&target, &files))
        }
        Command::Unknown => Ok(UNKNOWN_COMMAND.to_string()),
    }
}

fn render_own_list(files: &[FileRecordModel]) -> String {
    if files.is_empty() {
        return NO_FILES.to_string();
    }
    let lines = files
        .iter()
        .enumerate()
        .map(|(i, file)| format!("{}. {}", i + 1, file.name))
        .collect::<Vec<_>>()
        .join("\n");
    format!("📁 **Your files:**\n{lines}\n\nUse `get <file name>` to get a link.")
}

fn render_client_list(target: &str, files: &[FileRecordModel]) -> String {
    if files.is_empty() {
        return format!("📭 No files saved for client {target}.");
    }
    let lines = files
        .iter()
        .enumerate()
        .map(|(i, file)| format!("{}. **{}** → {}", i + 1, file.name, file.link))
        .collect::<Vec<_>>()
        .join("\n");
    format!("📁 **Files for client {target}:**\n{lines}")
}
