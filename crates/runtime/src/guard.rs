//! The portal guard: loaded settings, the message catalog, and the handlers
//! the host calls for portal events and admin operations.
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;
use portal_content::{ConfigLoader, MessageCatalog, PluginConfig, WorldsLoader};
use portal_core::{
    AdmissionEngine, Capability, CreationRequest, Decision, Env, GuardConfig, MessageKey,
    NearbyPlayer, Notice, NotificationPolicy, SettingsSnapshot, SettingsStore, TravelRequest,
    WorldOverride,
};

use crate::error::{GuardError, Result};
use crate::events::{EventOutcome, PlayerPortalEvent, PortalCreateEvent};

/// Gray color code put in front of the detail line.
const DETAIL_PREFIX: &str = "§7";

/// Locations of the guard's data files.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DataPaths {
    pub config: PathBuf,
    pub worlds: PathBuf,
    /// Optional overrides for the bundled language files.
    pub lang_dir: PathBuf,
}

impl DataPaths {
    pub const CONFIG_FILE: &'static str = "config.toml";
    pub const WORLDS_FILE: &'static str = "world.toml";
    pub const LANG_DIR: &'static str = "lang";

    /// Standard layout inside one data directory.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            config: dir.join(Self::CONFIG_FILE),
            worlds: dir.join(Self::WORLDS_FILE),
            lang_dir: dir.join(Self::LANG_DIR),
        }
    }
}

/// Owns everything that survives between events.
///
/// Handlers take `&self`; the settings store and the catalog swap whole
/// snapshots, so the guard can be shared across threads behind an `Arc`.
#[derive(Debug)]
pub struct PortalGuard {
    paths: DataPaths,
    config: GuardConfig,
    store: SettingsStore,
    catalog: RwLock<Arc<MessageCatalog>>,
}

impl PortalGuard {
    /// Loads the data files (creating defaults on first run), registers
    /// every known world, and saves the world table.
    pub fn enable(paths: DataPaths, env: &Env<'_>) -> Result<Self> {
        Self::enable_with(paths, GuardConfig::default(), env)
    }

    pub fn enable_with(paths: DataPaths, config: GuardConfig, env: &Env<'_>) -> Result<Self> {
        let (plugin, overrides) = load_files(&paths)?;

        let guard = Self {
            catalog: RwLock::new(Arc::new(MessageCatalog::load(
                plugin.language,
                Some(paths.lang_dir.as_path()),
            ))),
            store: SettingsStore::from_snapshot(SettingsSnapshot::new(plugin.settings, overrides)),
            config,
            paths,
        };
        guard.ensure_and_save(env);

        tracing::info!("== === ==");
        tracing::info!("Portal guard v{}", env!("CARGO_PKG_VERSION"));
        tracing::info!("== === ==");
        Ok(guard)
    }

    pub fn paths(&self) -> &DataPaths {
        &self.paths
    }

    pub fn config(&self) -> GuardConfig {
        self.config
    }

    pub fn settings(&self) -> &SettingsStore {
        &self.store
    }

    pub fn catalog(&self) -> Arc<MessageCatalog> {
        Arc::clone(&self.catalog.read())
    }

    /// Handles a portal about to be created.
    pub fn on_portal_create(&self, env: &Env<'_>, event: &PortalCreateEvent) -> EventOutcome {
        if event.reason.is_exempt() {
            return EventOutcome::Proceed;
        }

        let worlds = env.worlds();
        let dimension = worlds.dimension_kind(&event.world);
        if dimension.is_exempt() {
            return EventOutcome::Proceed;
        }

        let actors = env.actors();
        let present = actors.online_actors_in_world(&event.world);
        let nearby: Vec<NearbyPlayer> = present
            .iter()
            .map(|presence| {
                NearbyPlayer::new(
                    presence.location,
                    actors.has_capability(presence.actor, Capability::CreateBypass),
                )
            })
            .collect();

        let request = CreationRequest {
            world: &event.world,
            dimension,
            spawn: worlds.spawn_point(&event.world),
            blocks: &event.blocks,
            nearby_players: &nearby,
        };
        let decision = AdmissionEngine::new(&self.store, self.config).evaluate_creation(&request);
        tracing::debug!(
            world = %event.world,
            reason = event.reason.as_str(),
            blocks = event.blocks.len(),
            ?decision,
            "portal creation"
        );

        let notices = NotificationPolicy::new(&self.config).for_creation(&decision, &present);
        self.deliver(env, &notices);
        outcome(&decision)
    }

    /// Handles a player stepping into a portal.
    pub fn on_player_portal(&self, env: &Env<'_>, event: &PlayerPortalEvent) -> EventOutcome {
        let worlds = env.worlds();
        let dimension = worlds.dimension_kind(&event.world);
        if dimension.is_exempt() {
            return EventOutcome::Proceed;
        }

        let request = TravelRequest {
            world: &event.world,
            dimension,
            spawn: worlds.spawn_point(&event.world),
            from: event.from,
            allow_travel_override: self.store.global_settings().allow_travel_in_zone,
        };
        let decision = AdmissionEngine::new(&self.store, self.config).evaluate_travel(&request);
        tracing::debug!(world = %event.world, player = %event.player, ?decision, "portal travel");

        let notices = NotificationPolicy::new(&self.config).for_travel(&decision, event.player);
        self.deliver(env, &notices);
        outcome(&decision)
    }

    /// Re-reads both data files and the language, then runs the ensure pass.
    ///
    /// On a load failure nothing changes and the error is returned.
    pub fn reload(&self, env: &Env<'_>) -> Result<()> {
        let (plugin, overrides) = load_files(&self.paths)?;

        self.store.replace_all(plugin.settings, overrides);
        *self.catalog.write() = Arc::new(MessageCatalog::load(
            plugin.language,
            Some(self.paths.lang_dir.as_path()),
        ));
        self.ensure_and_save(env);

        tracing::info!(
            "Reloaded {} and {}",
            self.paths.config.display(),
            self.paths.worlds.display()
        );
        Ok(())
    }

    /// Adds missing worlds to the table and saves it. Returns the added names.
    pub fn generate_world_config(&self, env: &Env<'_>) -> Vec<String> {
        self.ensure_and_save(env)
    }

    /// Final save on shutdown.
    pub fn disable(&self) {
        self.save_logged();
    }

    /// Writes the current override table to `world.toml`.
    pub fn save_world_table(&self) -> Result<()> {
        WorldsLoader::save(&self.paths.worlds, self.store.snapshot().overrides())
            .map_err(GuardError::Persist)
    }

    /// Text for one notice in the active language.
    pub fn render(&self, notice: &Notice) -> String {
        render_with(&self.catalog.read(), notice)
    }

    fn deliver(&self, env: &Env<'_>, notices: &[Notice]) {
        if notices.is_empty() {
            return;
        }
        let catalog = self.catalog();
        for notice in notices {
            env.messages()
                .deliver(notice.recipient, &render_with(&catalog, notice));
        }
    }

    fn ensure_and_save(&self, env: &Env<'_>) -> Vec<String> {
        let names = env.worlds().world_names();
        let added = self
            .store
            .ensure_overrides(names.iter().map(String::as_str));
        if !added.is_empty() {
            tracing::info!(
                "Added {} world(s) to {}: {}",
                added.len(),
                self.paths.worlds.display(),
                added.join(", ")
            );
        }
        self.save_logged();
        added
    }

    fn save_logged(&self) {
        if let Err(e) = self.save_world_table() {
            tracing::error!("{}", e);
        }
    }
}

fn load_files(paths: &DataPaths) -> Result<(PluginConfig, BTreeMap<String, WorldOverride>)> {
    let plugin = ConfigLoader::load_or_init(&paths.config).map_err(GuardError::Load)?;
    let overrides = WorldsLoader::load_or_init(&paths.worlds).map_err(GuardError::Load)?;
    Ok((plugin, overrides))
}

fn render_with(catalog: &MessageCatalog, notice: &Notice) -> String {
    let text = catalog.render(notice.key, &notice.args);
    match notice.key {
        MessageKey::WithinLimit => format!("{DETAIL_PREFIX}{text}"),
        _ => text,
    }
}

fn outcome(decision: &Decision) -> EventOutcome {
    if decision.is_denied() {
        EventOutcome::Cancelled
    } else {
        EventOutcome::Proceed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portal_core::{ActorId, MessageArg};

    #[test]
    fn data_paths_use_standard_names() {
        let paths = DataPaths::in_dir("/srv/guard");
        assert_eq!(paths.config, PathBuf::from("/srv/guard/config.toml"));
        assert_eq!(paths.worlds, PathBuf::from("/srv/guard/world.toml"));
        assert_eq!(paths.lang_dir, PathBuf::from("/srv/guard/lang"));
    }

    #[test]
    fn detail_line_is_gray() {
        let catalog = MessageCatalog::from_sources(portal_content::Language::En, |_| {
            Some("WITHIN_LIMIT = \"%d in %s\"\nPORTAL_USE_DENY = \"no\"".to_owned())
        });
        let detail = Notice::new(ActorId(1), MessageKey::WithinLimit)
            .with_args(vec![MessageArg::Int(14), MessageArg::from("nether")]);

        assert_eq!(render_with(&catalog, &detail), "§714 in nether");
        assert_eq!(
            render_with(&catalog, &Notice::new(ActorId(1), MessageKey::PortalUseDeny)),
            "no"
        );
    }
}
