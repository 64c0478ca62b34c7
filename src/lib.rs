//! Typed models for Discord stickers.
//!
//! A [`Sticker`] is built from a raw gateway or REST payload together with the id of the guild
//! that owns it and a [`State`] handle. The handle is how the sticker reaches back into the rest
//! of the application: it resolves the owning [`Guild`] and builds CDN [`Asset`]s for the
//! sticker image.
//!
//! An in-memory [`Cache`] implementing [`State`] is provided behind the `cache` feature, which is
//! enabled by default.
//!
//! ```rust
//! # #[cfg(feature = "cache")]
//! # fn main() -> sticker_model::Result<()> {
//! use std::sync::Arc;
//!
//! use serde_json::json;
//! use sticker_model::cache::Cache;
//! use sticker_model::model::prelude::*;
//!
//! let cache = Arc::new(Cache::new());
//! let payload = json!({
//!     "id": "749054660769218631",
//!     "name": "Wave",
//!     "description": "Wumpus waves hello",
//!     "format_type": 3,
//!     "type": 1,
//!     "version": 1,
//!     "available": true,
//!     "tags": "wumpus, hello, sup",
//! });
//!
//! let sticker = Sticker::from_payload(GuildId::new(1), &cache, &payload)?;
//! assert_eq!(sticker.to_string(), "<a:Wave:749054660769218631>");
//! assert_eq!(sticker.tags(), ["wumpus", "hello", "sup"]);
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "cache"))]
//! # fn main() {}
//! ```
//!
//! [`Asset`]: crate::model::asset::Asset
//! [`Cache`]: crate::cache::Cache
//! [`Guild`]: crate::model::guild::Guild
//! [`State`]: crate::state::State
//! [`Sticker`]: crate::model::sticker::Sticker
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![forbid(unsafe_code)]
#![warn(
    unused,
    rust_2018_idioms,
    clippy::unwrap_used,
    clippy::clone_on_ref_ptr,
    clippy::non_ascii_literal,
    clippy::fallible_impl_from,
    clippy::let_underscore_must_use,
    clippy::format_push_string,
    clippy::pedantic
)]
#![allow(
    // Allowed as they are too pedantic
    clippy::cast_possible_truncation,
    clippy::module_name_repetitions,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::unreadable_literal,
    clippy::doc_markdown,
    clippy::missing_panics_doc
)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

#[macro_use]
extern crate serde;

#[macro_use]
mod internal;

pub mod constants;
pub mod model;
pub mod prelude;
pub mod state;

#[cfg(feature = "cache")]
pub mod cache;

mod error;

pub use crate::error::{Error, Result};
