//! The handle models use to reach the rest of the application.

use crate::internal::prelude::*;
use crate::model::asset::Asset;
use crate::model::guild::Guild;
use crate::model::id::GuildId;
use crate::model::sticker::Sticker;

/// Lookups a [`Sticker`] needs after it has been built.
///
/// A sticker only holds a weak handle to its state, so the state may own the sticker (the
/// [`Cache`] stores stickers inside their guilds) without forming a reference cycle.
///
/// # Examples
///
/// A state that knows no guilds, relying on the default CDN resolution:
///
/// ```rust
/// use sticker_model::model::prelude::*;
/// use sticker_model::state::State;
///
/// struct Detached;
///
/// impl State for Detached {
///     fn guild(&self, _: GuildId) -> Option<Guild> {
///         None
///     }
/// }
/// ```
///
/// [`Cache`]: crate::cache::Cache
pub trait State: Send + Sync {
    /// Returns the guild with the given Id, if it is known.
    fn guild(&self, id: GuildId) -> Option<Guild>;

    /// Resolves the CDN asset for a sticker's image.
    ///
    /// The default implementation builds the asset with [`Asset::from_sticker`].
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidImageSize`] if `size` is not a power of 2 between 16 and
    /// 4096. Implementations must not clamp the size.
    fn sticker_asset(&self, sticker: &Sticker, size: u16) -> Result<Option<Asset>> {
        Asset::from_sticker(sticker, size).map(Some)
    }
}
