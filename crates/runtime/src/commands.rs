//! The `portalblocker` admin command and its tab completion.
use portal_core::{ActorId, Capability, Env, MessageKey};

use crate::guard::PortalGuard;

pub const COMMAND_NAME: &str = "portalblocker";

const HELP_HEADER_PREFIX: &str = "§e";
const HELP_LINE_PREFIX: &str = "§6";

#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum AdminCommand {
    Reload,
    GenerateWorldConfig,
}

impl AdminCommand {
    pub const ALL: [Self; 2] = [Self::Reload, Self::GenerateWorldConfig];

    /// Subcommand named by the first argument, if any.
    pub fn parse(args: &[&str]) -> Option<Self> {
        args.first().and_then(|arg| arg.parse().ok())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CommandOutcome {
    Success(AdminCommand),
    /// The sender lacks `portalblocker.admin`; nothing changed.
    NoPermission,
    /// Unknown or missing subcommand; the help lines were sent.
    Help,
    /// `reload` could not read the data files; the old settings remain.
    Failed(String),
}

/// Runs `/portalblocker <args>` for `sender`. Every outcome sends the sender
/// at least one line.
pub fn dispatch(
    guard: &PortalGuard,
    env: &Env<'_>,
    sender: ActorId,
    args: &[&str],
) -> CommandOutcome {
    let Some(command) = AdminCommand::parse(args) else {
        send_help(guard, env, sender);
        return CommandOutcome::Help;
    };

    if !sender.is_console() && !env.actors().has_capability(sender, Capability::Admin) {
        send_key(guard, env, sender, MessageKey::NoPermission);
        return CommandOutcome::NoPermission;
    }

    match command {
        AdminCommand::Reload => {
            if let Err(e) = guard.reload(env) {
                tracing::error!("{}", e);
                let text = e.to_string();
                env.messages().deliver(sender, &format!("§c{text}"));
                return CommandOutcome::Failed(text);
            }
            send_key(guard, env, sender, MessageKey::ReloadDone);
        }
        AdminCommand::GenerateWorldConfig => {
            guard.generate_world_config(env);
            send_key(guard, env, sender, MessageKey::WorldConfigGenerated);
        }
    }
    tracing::info!(%sender, %command, "admin command");
    CommandOutcome::Success(command)
}

/// Suggestions for the argument being typed. Only the first argument
/// completes.
pub fn complete(args: &[&str]) -> Vec<&'static str> {
    if args.len() == 1 {
        AdminCommand::ALL.into_iter().map(<&'static str>::from).collect()
    } else {
        Vec::new()
    }
}

fn send_key(guard: &PortalGuard, env: &Env<'_>, recipient: ActorId, key: MessageKey) {
    let text = guard.catalog().render(key, &[]);
    env.messages().deliver(recipient, &text);
}

fn send_help(guard: &PortalGuard, env: &Env<'_>, recipient: ActorId) {
    let catalog = guard.catalog();
    let lines = [
        (HELP_HEADER_PREFIX, MessageKey::HelpHeader),
        (HELP_LINE_PREFIX, MessageKey::HelpReload),
        (HELP_LINE_PREFIX, MessageKey::HelpGenerate),
    ];
    for (prefix, key) in lines {
        let text = catalog.render(key, &[]);
        env.messages().deliver(recipient, &format!("{prefix}{text}"));
    }
}
