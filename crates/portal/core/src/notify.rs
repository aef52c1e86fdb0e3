//! Who is told about a denial, and with which messages.
//!
//! The policy emits structured [`Notice`]s only. Rendering the message keys
//! into text is left to whoever owns the language resources.

use crate::admission::{Decision, Denial, DenialReason};
use crate::config::GuardConfig;
use crate::env::{ActorId, ActorPresence};
use crate::zone::within_proximity;

/// Keys of every user-facing message.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum MessageKey {
    PortalCreateDeny,
    PortalUseDeny,
    /// Detail line: `(radius, world)`.
    WithinLimit,
    NoPermission,
    ReloadDone,
    WorldConfigGenerated,
    HelpHeader,
    HelpReload,
    HelpGenerate,
}

/// Positional parameter of a message.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum MessageArg {
    Int(i64),
    Text(String),
}

impl From<i32> for MessageArg {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<&str> for MessageArg {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

/// One message for one recipient.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Notice {
    pub recipient: ActorId,
    pub key: MessageKey,
    pub args: Vec<MessageArg>,
}

impl Notice {
    pub fn new(recipient: ActorId, key: MessageKey) -> Self {
        Self {
            recipient,
            key,
            args: Vec::new(),
        }
    }

    pub fn with_args(mut self, args: Vec<MessageArg>) -> Self {
        self.args = args;
        self
    }
}

/// Turns denials into notices.
#[derive(Clone, Copy, Debug)]
pub struct NotificationPolicy {
    proximity: i32,
}

impl NotificationPolicy {
    pub fn new(config: &GuardConfig) -> Self {
        Self {
            proximity: config.notify_proximity,
        }
    }

    /// Notices for a creation decision. `present` lists every online actor in
    /// the portal's world; those within reach of the offending block are told.
    pub fn for_creation(&self, decision: &Decision, present: &[ActorPresence]) -> Vec<Notice> {
        let Some(denial) = decision.denial() else {
            return Vec::new();
        };
        within_proximity(present, denial.at, self.proximity)
            .flat_map(|presence| Self::pair(presence.actor, denial))
            .collect()
    }

    /// Notices for a travel decision: only the traveler is told.
    pub fn for_travel(&self, decision: &Decision, traveler: ActorId) -> Vec<Notice> {
        decision
            .denial()
            .map(|denial| Vec::from(Self::pair(traveler, denial)))
            .unwrap_or_default()
    }

    /// Short deny line, then the detail line.
    fn pair(recipient: ActorId, denial: &Denial) -> [Notice; 2] {
        let deny_key = match denial.reason {
            DenialReason::CreationInZone => MessageKey::PortalCreateDeny,
            DenialReason::TravelInZone => MessageKey::PortalUseDeny,
        };
        [
            Notice::new(recipient, deny_key),
            Notice::new(recipient, MessageKey::WithinLimit).with_args(vec![
                MessageArg::from(denial.radius),
                MessageArg::from(denial.world.as_str()),
            ]),
        ]
    }
}

impl Default for NotificationPolicy {
    fn default() -> Self {
        Self::new(&GuardConfig::default())
    }
}
