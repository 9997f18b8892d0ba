//! The `/noti` command - sends a formatted notification to a user's DMs.
//!
//! Only members holding the configured role may use it. The layout itself comes from
//! [`crate::core::notification`]; this module only checks the role and talks to Discord.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::notifier::NotifierData,
        config::settings::NotifierSettings,
        core::notification::{
            DELIVERY_FAILED, Notification, NotificationRequest, OPEN_FILES_LABEL,
            PERMISSION_DENIED, delivered_message, has_required_role,
        },
        errors::{Error, Result},
    };
    use poise::serenity_prelude as serenity;
    use tracing::{info, warn};

    type Context<'a> = poise::Context<'a, NotifierData, Error>;

    /// Send professional DM notification
    #[poise::command(
        slash_command,
        guild_only,
        default_member_permissions = "ADMINISTRATOR"
    )]
    pub async fn noti(
        ctx: Context<'_>,
        #[description = "User to notify"] user: serenity::User,
        #[description = "Project name"] project: Option<String>,
        #[description = "File names (use | for multiple)"] filename: Option<String>,
        #[description = "Status"] status: Option<String>,
        #[description = "File size"] size: Option<String>,
        #[description = "File link (button only)"] link: Option<String>,
    ) -> Result<()> {
        let settings = &ctx.data().settings;

        let role_names = caller_role_names(ctx).await;
        if !has_required_role(role_names.iter().map(String::as_str), &settings.role_name) {
            warn!(
                caller = %ctx.author().name,
                "Notification refused: missing role {}", settings.role_name
            );
            reply_ephemeral(ctx, PERMISSION_DENIED).await?;
            return Ok(());
        }

        let notification = Notification::from(NotificationRequest {
            project,
            filename,
            status,
            size,
            link,
        });
        let message = build_message(ctx, settings, &notification);

        match user.direct_message(ctx.serenity_context(), message).await {
            Ok(_) => {
                info!(recipient = %user.tag(), "Notification delivered");
                reply_ephemeral(ctx, &delivered_message(&user.tag())).await?;
            }
            Err(e) => {
                warn!(recipient = %user.tag(), "Notification not delivered: {}", e);
                reply_ephemeral(ctx, DELIVERY_FAILED).await?;
            }
        }
        Ok(())
    }

    /// Names of the caller's guild roles, empty if the member cannot be resolved.
    async fn caller_role_names(ctx: Context<'_>) -> Vec<String> {
        let Some(member) = ctx.author_member().await else {
            return Vec::new();
        };
        member
            .roles(ctx.serenity_context())
            .map(|roles| roles.into_iter().map(|role| role.name).collect())
            .unwrap_or_default()
    }

    fn build_message(
        ctx: Context<'_>,
        settings: &NotifierSettings,
        notification: &Notification,
    ) -> serenity::CreateMessage {
        let mut author = serenity::CreateEmbedAuthor::new(&settings.author_name);
        if let Some(icon_url) = ctx.guild().and_then(|guild| guild.icon_url()) {
            author = author.icon_url(icon_url);
        }

        let embed = serenity::CreateEmbed::new()
            .colour(settings.brand_color)
            .author(author)
            .description(notification.description())
            .timestamp(serenity::Timestamp::now());

        let mut message = serenity::CreateMessage::new().embed(embed);
        if let Some(link) = &notification.link {
            let button = serenity::CreateButton::new_link(link).label(OPEN_FILES_LABEL);
            message = message.components(vec![serenity::CreateActionRow::Buttons(vec![button])]);
        }
        message
    }

    async fn reply_ephemeral(ctx: Context<'_>, content: &str) -> Result<()> {
        ctx.send(
            poise::CreateReply::default()
                .content(content)
                .ephemeral(true),
        )
        .await?;
        Ok(())
    }
}

pub use inner::*;
