//! A set of exports which can be helpful to use.
//!
//! Note that the `StickerModelError` re-export is equivalent to [`crate::Error`], although is
//! re-exported as a separate name to remove likely ambiguity with other crate error enums.
//!
//! # Examples
//!
//! Import all of the exports:
//!
//! ```rust
//! use sticker_model::prelude::*;
//! ```

#[cfg(feature = "cache")]
pub use crate::cache::{Cache, Settings as CacheSettings};
pub use crate::error::Error as StickerModelError;
pub use crate::model::ModelError;
pub use crate::state::State;
