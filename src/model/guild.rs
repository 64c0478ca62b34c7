//! Models relating to guilds.

use std::sync::{Arc, Weak};

use super::id::{GuildId, StickerId};
use super::sticker::Sticker;
use super::utils::deserialize_payload;
use crate::internal::prelude::*;
use crate::state::State;

/// The parts of a guild that stickers need: its identity and the stickers it owns.
#[derive(Clone, Debug, Serialize)]
#[non_exhaustive]
pub struct Guild {
    /// The unique Id identifying the guild.
    pub id: GuildId,
    /// The name of the guild.
    pub name: String,
    /// All of the guild's custom stickers.
    pub stickers: Vec<Sticker>,
}

#[derive(Deserialize)]
struct GuildPayload {
    id: GuildId,
    name: String,
    #[serde(default)]
    stickers: Option<Vec<Value>>,
}

impl Guild {
    /// Creates a guild without any stickers.
    pub fn new(id: impl Into<GuildId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            stickers: Vec::new(),
        }
    }

    /// Reads a guild payload, building each entry of its optional `stickers` array with
    /// [`Sticker::from_payload`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Model`] if the payload lacks an `id` or `name`, or if any of its stickers
    /// fails to parse.
    pub fn from_payload<S: State + 'static>(state: &Arc<S>, payload: &Value) -> Result<Self> {
        Self::from_payload_with_state(Arc::downgrade(state) as Weak<dyn State>, payload)
    }

    /// Reads a guild payload, handing `state` to each of its stickers.
    ///
    /// # Errors
    ///
    /// The same as [`Self::from_payload`].
    pub fn from_payload_with_state(state: Weak<dyn State>, payload: &Value) -> Result<Self> {
        let payload: GuildPayload = deserialize_payload(payload, &["id"])?;
        let id = payload.id;

        let stickers = payload
            .stickers
            .unwrap_or_default()
            .iter()
            .map(|sticker| Sticker::from_payload_with_state(id, Weak::clone(&state), sticker))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            id,
            name: payload.name,
            stickers,
        })
    }

    /// Finds one of the guild's stickers by its Id.
    #[must_use]
    pub fn sticker(&self, id: StickerId) -> Option<&Sticker> {
        self.stickers.iter().find(|sticker| sticker.id() == id)
    }
}

impl From<&Guild> for GuildId {
    /// Gets the Id of a guild.
    fn from(guild: &Guild) -> GuildId {
        guild.id
    }
}

impl From<Guild> for GuildId {
    /// Gets the Id of a guild.
    fn from(guild: Guild) -> GuildId {
        guild.id
    }
}
