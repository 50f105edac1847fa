//! Serenity event handler for the Warden bot.
//!
//! Records presence and nickname changes and answers prefix commands.

use std::sync::Arc;

use chrono::Utc;
use serenity::all::{
    Context, CreateMessage, GatewayIntents, GuildId, GuildMemberUpdateEvent, Member, Message,
    Ready, UserId,
};
use serenity::async_trait;
use serenity::client::EventHandler;
use tracing::{debug, error, info, instrument, warn};
use warden_cache::{ConfigCache, GuildConfig};
use warden_error::{CommandError, CommandErrorKind, WardenError};

use super::conversions::{
    card_to_embed, member_snapshot, presence_of, to_db_id, to_naive, to_user_id,
};
use super::{DiscordError, DiscordErrorKind};
use crate::{
    BotCommand, Card, Invocation, MemberSnapshot, Whois, can_configure, parse_user_id,
    render_config, set_config,
};

/// Why a command produced no card.
#[derive(Debug, derive_more::From)]
enum Failure {
    User(WardenError),
    Platform(DiscordError),
}

impl From<CommandError> for Failure {
    fn from(err: CommandError) -> Self {
        Self::User(err.into())
    }
}

impl Failure {
    fn user_message(&self) -> String {
        match self {
            Self::User(err) => err.user_message(),
            Self::Platform(err) => match err.kind() {
                DiscordErrorKind::MemberNotFound(_) => "I couldn't find that member.".to_string(),
                _ => "Something went wrong, try again later.".to_string(),
            },
        }
    }
}

/// Event handler for the Warden Discord bot.
pub struct WardenHandler {
    configs: Arc<ConfigCache>,
    whois: Arc<Whois>,
}

impl WardenHandler {
    /// Create a handler sharing the given configuration cache and tracker.
    pub fn new(configs: Arc<ConfigCache>, whois: Arc<Whois>) -> Self {
        Self { configs, whois }
    }

    /// Required gateway intents for the bot.
    ///
    /// Presences feed the status shown on `info` cards.
    pub fn intents() -> GatewayIntents {
        GatewayIntents::GUILDS
            | GatewayIntents::GUILD_MEMBERS
            | GatewayIntents::GUILD_MESSAGES
            | GatewayIntents::MESSAGE_CONTENT
            | GatewayIntents::GUILD_PRESENCES
    }

    async fn resolve_member(
        &self,
        ctx: &Context,
        guild_id: GuildId,
        arg: Option<&String>,
        author: UserId,
    ) -> Result<MemberSnapshot, Failure> {
        let user_id = match arg {
            None => author,
            Some(raw) => {
                let id = parse_user_id(raw).ok_or_else(|| {
                    CommandError::new(CommandErrorKind::InvalidArgument(format!(
                        "'{}' is not a member",
                        raw
                    )))
                })?;
                to_user_id(id)?
            }
        };

        let member = guild_id.member(ctx, user_id).await.map_err(|e| {
            debug!(user_id = %user_id, error = %e, "Member lookup failed");
            DiscordError::new(DiscordErrorKind::MemberNotFound(to_db_id(user_id.get())))
        })?;
        let presence = presence_of(&ctx.cache, guild_id, user_id);
        Ok(member_snapshot(&member, presence)?)
    }

    async fn owner_id(&self, ctx: &Context, guild_id: GuildId) -> Result<UserId, Failure> {
        if let Some(owner) = ctx.cache.guild(guild_id).map(|g| g.owner_id) {
            return Ok(owner);
        }
        let guild = guild_id
            .to_partial_guild(ctx)
            .await
            .map_err(DiscordError::from)?;
        Ok(guild.owner_id)
    }

    async fn configure(
        &self,
        ctx: &Context,
        msg: &Message,
        guild_id: GuildId,
        config: &GuildConfig,
        args: &[String],
    ) -> Result<Card, Failure> {
        match args {
            [] => Ok(render_config(config)),
            [sub, rest @ ..] if sub.eq_ignore_ascii_case("set") => {
                let owner = self.owner_id(ctx, guild_id).await?;
                let roles: Vec<i64> = msg
                    .member
                    .as_ref()
                    .map(|m| m.roles.iter().map(|r| to_db_id(r.get())).collect())
                    .unwrap_or_default();
                if !can_configure(
                    to_db_id(msg.author.id.get()),
                    to_db_id(owner.get()),
                    &roles,
                    config.mod_role_id(),
                ) {
                    return Err(CommandError::new(CommandErrorKind::PermissionDenied).into());
                }

                let (field, value) = match rest {
                    [field, value @ ..] if !value.is_empty() => (field, value.join(" ")),
                    _ => {
                        return Err(CommandError::new(CommandErrorKind::MissingArgument(
                            "config set <field> <value>".to_string(),
                        ))
                        .into());
                    }
                };
                Ok(set_config(config, field, &value).await?)
            }
            [sub, ..] => Err(CommandError::new(CommandErrorKind::InvalidArgument(sub.clone())).into()),
        }
    }

    #[instrument(skip_all, fields(guild_id = %guild_id, command = %invocation.name))]
    async fn dispatch(
        &self,
        ctx: &Context,
        msg: &Message,
        guild_id: GuildId,
        config: &GuildConfig,
        invocation: &Invocation,
    ) -> Result<Option<Card>, Failure> {
        let Some(command) = invocation.command() else {
            return Ok(None);
        };
        let gid = to_db_id(guild_id.get());
        let now = Utc::now().naive_utc();
        let target = invocation.args.first();

        let card = match command {
            BotCommand::Info => {
                let member = self.resolve_member(ctx, guild_id, target, msg.author.id).await?;
                self.whois
                    .info_card(gid, &member, now)
                    .await
                    .map_err(WardenError::from)?
            }
            BotCommand::Seen => {
                let Some(target) = target else {
                    return Err(CommandError::new(CommandErrorKind::MissingArgument(
                        "member".to_string(),
                    ))
                    .into());
                };
                let member = self
                    .resolve_member(ctx, guild_id, Some(target), msg.author.id)
                    .await?;
                self.whois.seen_card(gid, &member, now).await?
            }
            BotCommand::Nicks => {
                let member = self.resolve_member(ctx, guild_id, target, msg.author.id).await?;
                self.whois.nicks_card(gid, &member).await?
            }
            BotCommand::Config => {
                self.configure(ctx, msg, guild_id, config, &invocation.args)
                    .await?
            }
        };
        Ok(Some(card))
    }
}

#[async_trait]
impl EventHandler for WardenHandler {
    /// Called when the bot successfully connects to Discord.
    async fn ready(&self, _ctx: Context, ready: Ready) {
        info!(
            bot_user = %ready.user.name,
            bot_id = %ready.user.id,
            guilds = ready.guilds.len(),
            "Bot connected to Discord"
        );
    }

    /// Called for every message the bot can see.
    async fn message(&self, ctx: Context, msg: Message) {
        let Some(guild_id) = msg.guild_id else {
            return;
        };
        let gid = to_db_id(guild_id.get());
        let author_id = to_db_id(msg.author.id.get());
        let at = to_naive(msg.timestamp).unwrap_or_else(|_| Utc::now().naive_utc());

        if let Err(e) = self
            .whois
            .record_message(gid, author_id, msg.author.bot, at)
            .await
        {
            error!(guild_id = %guild_id, user_id = author_id, error = %e, "Failed to record message");
        }
        if msg.author.bot {
            return;
        }

        let config = match self.configs.get_or_create(gid).await {
            Ok(config) => config,
            Err(e) => {
                error!(guild_id = %guild_id, error = %e, "Failed to load guild config");
                return;
            }
        };
        let Some(invocation) = Invocation::parse(&config.prefix(), &msg.content) else {
            return;
        };

        let reply = match self.dispatch(&ctx, &msg, guild_id, &config, &invocation).await {
            Ok(None) => return,
            Ok(Some(card)) => CreateMessage::new().embed(card_to_embed(&card)),
            Err(failure) => {
                match &failure {
                    Failure::User(e) => debug!(error = %e, "Command rejected"),
                    Failure::Platform(e) => warn!(error = %e, "Command failed"),
                }
                CreateMessage::new().content(failure.user_message())
            }
        };

        if let Err(e) = msg.channel_id.send_message(&ctx.http, reply).await {
            let e = DiscordError::new(DiscordErrorKind::MessageSendFailed(e.to_string()));
            error!(channel_id = %msg.channel_id, error = %e, "Failed to send reply");
        }
    }

    /// Called when a member's nickname, roles, or profile changes.
    async fn guild_member_update(
        &self,
        _ctx: Context,
        old_if_available: Option<Member>,
        new: Option<Member>,
        event: GuildMemberUpdateEvent,
    ) {
        let guild_id = to_db_id(event.guild_id.get());
        let user_id = to_db_id(event.user.id.get());
        let before = old_if_available.as_ref().map(|m| m.display_name().to_string());
        let after = match &new {
            Some(member) => member.display_name().to_string(),
            None => event
                .nick
                .clone()
                .or_else(|| event.user.global_name.clone())
                .unwrap_or_else(|| event.user.name.clone()),
        };

        match self
            .whois
            .record_member_update(
                guild_id,
                user_id,
                event.user.bot,
                before.as_deref(),
                &after,
                Utc::now().naive_utc(),
            )
            .await
        {
            Ok(0) => {}
            Ok(stored) => debug!(guild_id, user_id, stored, "Stored nickname change"),
            Err(e) => error!(guild_id, user_id, error = %e, "Failed to store nickname change"),
        }
    }
}
