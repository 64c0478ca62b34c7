//! Mappings of objects received from the API, with helper methods for ease of use.
//!
//! The central type is [`Sticker`], which is read from a raw payload with
//! [`Sticker::from_payload`]. Objects that need to reach other parts of the application, such as
//! the guild that owns a sticker, do so through the [`State`] handle they were built with.
//!
//! [`Sticker`]: sticker::Sticker
//! [`Sticker::from_payload`]: sticker::Sticker::from_payload
//! [`State`]: crate::state::State

mod utils;

pub mod asset;
pub mod error;
pub mod guild;
pub mod id;
pub mod sticker;

mod timestamp;

pub use self::error::Error as ModelError;
pub use self::timestamp::Timestamp;
pub use self::utils::split_tags;

/// The model prelude re-exports all types in the model sub-modules.
///
/// This allows for quick and easy access to all of the model types.
///
/// # Examples
///
/// Import all model types into scope:
///
/// ```rust,no_run
/// use sticker_model::model::prelude::*;
/// ```
pub mod prelude {
    pub use super::asset::*;
    pub use super::guild::*;
    pub use super::id::*;
    pub use super::sticker::*;
    pub use super::timestamp::Timestamp;
    pub use super::ModelError;
}
