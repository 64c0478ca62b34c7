//! A cache of guilds and the stickers they own.
//!
//! The [`Cache`] is the [`State`] implementation shipped with the library. Stickers built with a
//! cache as their state resolve their [`guild`] from it.
//!
//! Following a policy to never hand out locks, the cache will clone all values when calling its
//! methods.
//!
//! ```rust
//! # fn main() -> sticker_model::Result<()> {
//! use std::sync::Arc;
//!
//! use serde_json::json;
//! use sticker_model::cache::Cache;
//! use sticker_model::model::prelude::*;
//!
//! let cache = Arc::new(Cache::new());
//! cache.insert_guild(Guild::new(GuildId::new(81384788765712384), "Discord API"));
//!
//! let payload = json!({
//!     "id": "749054660769218631",
//!     "name": "Wave",
//!     "description": "Wumpus waves hello",
//!     "format_type": 1,
//!     "type": 2,
//!     "version": 1,
//!     "available": true,
//! });
//! let sticker = Sticker::from_payload(GuildId::new(81384788765712384), &cache, &payload)?;
//!
//! assert_eq!(sticker.guild().map(|g| g.name), Some("Discord API".to_string()));
//! # Ok(())
//! # }
//! ```
//!
//! [`guild`]: crate::model::sticker::Sticker::guild
//! [`State`]: crate::state::State

use dashmap::DashMap;
#[cfg(feature = "tracing_instrument")]
use tracing::instrument;
use tracing::{debug, trace};

use crate::model::prelude::*;
use crate::state::State;

mod settings;

pub use self::settings::Settings;

pub(crate) type BuildHasher = fxhash::FxBuildHasher;

/// A cache containing guilds and their stickers.
#[derive(Debug)]
pub struct Cache {
    guilds: DashMap<GuildId, Guild, BuildHasher>,
    settings: Settings,
}

impl Cache {
    /// Creates a new cache with the default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new cache with the given settings.
    #[must_use]
    pub fn new_with_settings(settings: Settings) -> Self {
        Self {
            guilds: DashMap::with_hasher(BuildHasher::default()),
            settings,
        }
    }

    /// The settings the cache was created with.
    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Retrieves a clone of a guild from the cache.
    pub fn guild<G: Into<GuildId>>(&self, id: G) -> Option<Guild> {
        self._guild(id.into())
    }

    fn _guild(&self, id: GuildId) -> Option<Guild> {
        let guild = self.guilds.get(&id).map(|guild| guild.value().clone());
        if guild.is_none() {
            trace!("guild {} is not cached", id);
        }

        guild
    }

    /// The number of guilds in the cache.
    #[must_use]
    pub fn guild_count(&self) -> usize {
        self.guilds.len()
    }

    /// Inserts a guild, returning the guild it replaced.
    ///
    /// Nothing is stored if guild caching is disabled, or if the cache is full and does not
    /// already hold a guild with the same Id.
    #[cfg_attr(feature = "tracing_instrument", instrument(skip_all))]
    pub fn insert_guild(&self, mut guild: Guild) -> Option<Guild> {
        if !self.settings.cache_guilds {
            return None;
        }

        let max = self.settings.max_guilds;
        if max != 0 && self.guilds.len() >= max && !self.guilds.contains_key(&guild.id) {
            debug!("cache is full ({} guilds), not caching guild {}", max, guild.id);
            return None;
        }

        if !self.settings.cache_stickers {
            guild.stickers.clear();
        }

        debug!("caching guild {} with {} stickers", guild.id, guild.stickers.len());
        self.guilds.insert(guild.id, guild)
    }

    /// Removes a guild, returning it if it was cached.
    pub fn remove_guild<G: Into<GuildId>>(&self, id: G) -> Option<Guild> {
        let id = id.into();
        debug!("removing guild {} from the cache", id);
        self.guilds.remove(&id).map(|(_, guild)| guild)
    }

    /// Stores a sticker in its owning guild, replacing any sticker with the same Id.
    ///
    /// Returns `false` if sticker caching is disabled or the guild is not cached.
    pub fn insert_sticker(&self, sticker: Sticker) -> bool {
        if !self.settings.cache_stickers {
            return false;
        }

        let Some(mut guild) = self.guilds.get_mut(&sticker.guild_id()) else {
            trace!("guild {} is not cached, dropping sticker {}", sticker.guild_id(), sticker.id());
            return false;
        };

        match guild.stickers.iter_mut().find(|cached| **cached == sticker) {
            Some(cached) => *cached = sticker,
            None => guild.stickers.push(sticker),
        }

        true
    }

    /// Retrieves a clone of a sticker from its cached guild.
    pub fn sticker<G: Into<GuildId>, S: Into<StickerId>>(
        &self,
        guild_id: G,
        sticker_id: S,
    ) -> Option<Sticker> {
        let guild = self.guilds.get(&guild_id.into())?;
        guild.sticker(sticker_id.into()).cloned()
    }
}

impl Default for Cache {
    fn default() -> Self {
        Self::new_with_settings(Settings::default())
    }
}

impl State for Cache {
    fn guild(&self, id: GuildId) -> Option<Guild> {
        self._guild(id)
    }
}
