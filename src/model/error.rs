//! Error enum definition wrapping potential model implementation errors.

use std::error::Error as StdError;
use std::fmt;

use serde::de::Error as DeError;

/// An error returned from the [`model`] module.
///
/// This is always wrapped within the library's [`Error::Model`] variant.
///
/// # Examples
///
/// Matching an [`Error`] with this variant would look something like the following for the
/// [`Sticker::image_url_with_size`] method:
///
/// ```rust
/// # #[cfg(feature = "cache")]
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use std::sync::Arc;
///
/// use serde_json::json;
/// use sticker_model::cache::Cache;
/// use sticker_model::model::prelude::*;
/// use sticker_model::Error;
///
/// let payload = json!({
///     "id": "749054660769218631",
///     "name": "Wave",
///     "description": "Wumpus waves hello",
///     "format_type": 1,
///     "type": 2,
///     "version": 1,
///     "available": true,
///     "asset": "a1b2c3",
/// });
/// let sticker = Sticker::from_payload(GuildId::new(1), &Arc::new(Cache::new()), &payload)?;
///
/// match sticker.image_url_with_size(100) {
///     Ok(asset) => println!("{:?}", asset),
///     Err(Error::Model(ModelError::InvalidImageSize(size))) => {
///         println!("{} is not a size the CDN serves", size);
///     },
///     Err(why) => println!("Unexpected error: {:?}", why),
/// }
/// #     Ok(())
/// # }
/// # #[cfg(not(feature = "cache"))]
/// # fn main() {}
/// ```
///
/// [`Error`]: crate::Error
/// [`Error::Model`]: crate::Error::Model
/// [`Sticker::image_url_with_size`]: crate::model::sticker::Sticker::image_url_with_size
/// [`model`]: crate::model
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// A key the payload must carry was not present.
    MissingField(&'static str),
    /// A snowflake field held a string or number that does not parse as an unsigned 64-bit
    /// integer.
    InvalidSnowflake {
        /// The payload key.
        field: String,
        /// The offending value, as it appeared in the payload.
        value: String,
    },
    /// A field was present but held a JSON value of the wrong type, including `null` for a
    /// required key.
    InvalidFieldType {
        /// The payload key.
        field: String,
        /// What the decoder expected and what it found instead.
        reason: String,
    },
    /// The requested image size is not a power of two between 16 and 4096.
    InvalidImageSize(u16),
    /// The payload was not a JSON object.
    NotAnObject,
    /// The payload could not be decoded for a reason not tied to a single key.
    Decode(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "payload is missing the `{field}` field"),
            Self::InvalidSnowflake {
                field,
                value,
            } => write!(f, "`{field}` is not a valid snowflake: {value}"),
            Self::InvalidFieldType {
                field,
                reason,
            } => write!(f, "`{field}` has the wrong type: {reason}"),
            Self::InvalidImageSize(size) => {
                write!(f, "size must be a power of 2 between 16 and 4096, got {size}")
            },
            Self::NotAnObject => f.write_str("payload must be a JSON object"),
            Self::Decode(msg) => f.write_str(msg),
        }
    }
}

impl StdError for Error {}

impl DeError for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Self::Decode(msg.to_string())
    }

    fn missing_field(field: &'static str) -> Self {
        Self::MissingField(field)
    }
}
