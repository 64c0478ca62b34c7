//! Models relating to stickers.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, Weak};

#[cfg(feature = "tracing_instrument")]
use tracing::instrument;
use tracing::{debug, warn};

use super::asset::Asset;
use super::guild::Guild;
use super::id::{GuildId, StickerId, StickerPackId};
use super::utils::{
    deserialize_comma_separated_string,
    deserialize_payload,
    serialize_comma_separated_string,
};
use super::Timestamp;
use crate::constants::DEFAULT_IMAGE_SIZE;
use crate::internal::prelude::*;
use crate::state::State;

/// A sticker owned by a guild.
///
/// Stickers are compared and hashed by their [`id`] alone: two stickers with the same Id are
/// equal even if the rest of their data differs.
///
/// The `Display` implementation renders the sticker in the same form Discord uses for custom
/// emojis, `<:name:id>`, or `<a:name:id>` if the format is animated.
///
/// [Discord docs](https://discord.com/developers/docs/resources/sticker#sticker-object).
///
/// [`id`]: Self::id
#[derive(Clone, Serialize)]
pub struct Sticker {
    id: StickerId,
    guild_id: GuildId,
    name: String,
    description: String,
    pack_id: StickerPackId,
    #[serde(rename = "format_type")]
    format: StickerFormatType,
    #[serde(rename = "asset")]
    image: String,
    #[serde(rename = "type")]
    kind: StickerType,
    version: u64,
    available: bool,
    #[serde(serialize_with = "serialize_comma_separated_string")]
    tags: Vec<String>,
    #[serde(rename = "preview_asset", skip_serializing_if = "Option::is_none")]
    preview_image: Option<String>,
    #[serde(skip)]
    state: Weak<dyn State>,
}

/// The wire form of a sticker, as sent by the API.
#[derive(Deserialize)]
struct StickerPayload {
    id: StickerId,
    name: String,
    description: String,
    #[serde(default)]
    pack_id: Option<StickerPackId>,
    format_type: StickerFormatType,
    #[serde(default)]
    asset: Option<String>,
    #[serde(rename = "type")]
    kind: StickerType,
    version: u64,
    available: bool,
    #[serde(default, deserialize_with = "deserialize_comma_separated_string")]
    tags: Vec<String>,
    #[serde(default)]
    preview_asset: Option<String>,
}

impl Sticker {
    /// Reads a sticker from a raw payload.
    ///
    /// The payload must carry `id`, `name`, `description`, `format_type`, `type`, `version` and
    /// `available`. `pack_id`, `asset`, `tags` and `preview_asset` are optional, and an explicit
    /// `null` counts as absent. Unknown `format_type` and `type` codes are kept as
    /// [`StickerFormatType::Unknown`] and [`StickerType::Unknown`].
    ///
    /// Only a weak handle to `state` is kept, so a sticker stored inside its own state does not
    /// keep that state alive.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # #[cfg(feature = "cache")]
    /// # fn main() -> sticker_model::Result<()> {
    /// use std::sync::Arc;
    ///
    /// use serde_json::json;
    /// use sticker_model::cache::Cache;
    /// use sticker_model::model::prelude::*;
    ///
    /// let payload = json!({
    ///     "id": "123",
    ///     "name": "n",
    ///     "description": "d",
    ///     "format_type": 1,
    ///     "type": 1,
    ///     "version": 1,
    ///     "available": true,
    /// });
    /// let sticker = Sticker::from_payload(GuildId::new(1), &Arc::new(Cache::new()), &payload)?;
    ///
    /// assert_eq!(sticker.pack_id(), StickerPackId::new(0));
    /// assert_eq!(sticker.image(), "");
    /// assert!(sticker.tags().is_empty());
    /// assert_eq!(sticker.to_string(), "<:n:123>");
    /// # Ok(())
    /// # }
    /// # #[cfg(not(feature = "cache"))]
    /// # fn main() {}
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::MissingField`] if a required key is absent,
    /// [`ModelError::InvalidSnowflake`] if `id` or `pack_id` is not numeric, and
    /// [`ModelError::InvalidFieldType`] if a key holds a JSON value of the wrong type.
    pub fn from_payload<S: State + 'static>(
        guild_id: impl Into<GuildId>,
        state: &Arc<S>,
        payload: &Value,
    ) -> Result<Self> {
        let state = Arc::downgrade(state) as Weak<dyn State>;
        Self::from_payload_with_state(guild_id, state, payload)
    }

    /// Reads a sticker from a raw payload, keeping the given handle to its state.
    ///
    /// This is [`Self::from_payload`] for callers holding their state as a trait object.
    ///
    /// ```rust
    /// # fn main() -> sticker_model::Result<()> {
    /// use std::sync::Arc;
    ///
    /// use serde_json::json;
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
    ///
    /// let state: Arc<dyn State> = Arc::new(Detached);
    /// let payload = json!({
    ///     "id": "123",
    ///     "name": "n",
    ///     "description": "d",
    ///     "format_type": 2,
    ///     "type": 2,
    ///     "version": 1,
    ///     "available": true,
    /// });
    /// let sticker =
    ///     Sticker::from_payload_with_state(GuildId::new(1), Arc::downgrade(&state), &payload)?;
    /// assert_eq!(sticker.to_string(), "<a:n:123>");
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    ///
    /// The same as [`Self::from_payload`].
    #[cfg_attr(feature = "tracing_instrument", instrument(skip_all))]
    pub fn from_payload_with_state(
        guild_id: impl Into<GuildId>,
        state: Weak<dyn State>,
        payload: &Value,
    ) -> Result<Self> {
        let guild_id = guild_id.into();
        let payload: StickerPayload = deserialize_payload(payload, &["id", "pack_id"])?;

        if let StickerFormatType::Unknown(raw) = payload.format_type {
            warn!("sticker {} has unknown format type {}", payload.id, raw);
        }
        if let StickerType::Unknown(raw) = payload.kind {
            warn!("sticker {} has unknown sticker type {}", payload.id, raw);
        }
        debug!("parsed sticker {} ({}) for guild {}", payload.id, payload.name, guild_id);

        Ok(Self {
            id: payload.id,
            guild_id,
            name: payload.name,
            description: payload.description,
            pack_id: payload.pack_id.unwrap_or_default(),
            format: payload.format_type,
            image: payload.asset.unwrap_or_default(),
            kind: payload.kind,
            version: payload.version,
            available: payload.available,
            tags: payload.tags,
            preview_image: payload.preview_asset,
            state,
        })
    }

    /// Reads a sticker from a JSON string. See [`Self::from_payload`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] if `json` is not valid JSON, otherwise the errors of
    /// [`Self::from_payload`].
    pub fn from_json_str<S: State + 'static>(
        guild_id: impl Into<GuildId>,
        state: &Arc<S>,
        json: &str,
    ) -> Result<Self> {
        let payload: Value = serde_json::from_str(json)?;
        Self::from_payload(guild_id, state, &payload)
    }

    /// The unique Id of the sticker.
    #[must_use]
    pub fn id(&self) -> StickerId {
        self.id
    }

    /// The Id of the guild that owns the sticker.
    #[must_use]
    pub fn guild_id(&self) -> GuildId {
        self.guild_id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The pack the sticker belongs to, or the zero Id if it is not part of a pack.
    #[must_use]
    pub fn pack_id(&self) -> StickerPackId {
        self.pack_id
    }

    /// The format of the sticker's image.
    #[must_use]
    pub fn format(&self) -> StickerFormatType {
        self.format
    }

    /// The hash of the sticker's image asset.
    ///
    /// A payload without an `asset`, or with `"asset": null`, gives an empty hash rather than no
    /// hash, so [`Self::fields`] always yields `image`.
    #[must_use]
    pub fn image(&self) -> &str {
        &self.image
    }

    /// The type of sticker.
    #[must_use]
    pub fn kind(&self) -> StickerType {
        self.kind
    }

    #[must_use]
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Whether the sticker can be used. This may be false due to loss of Server Boosts.
    #[must_use]
    pub fn available(&self) -> bool {
        self.available
    }

    /// Tags related to the sticker, in the order the payload listed them.
    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// The hash of the sticker's preview asset.
    #[must_use]
    pub fn preview_image(&self) -> Option<&str> {
        self.preview_image.as_deref()
    }

    /// Retrieves the time that the sticker was created at.
    #[must_use]
    pub fn created_at(&self) -> Timestamp {
        self.id.created_at()
    }

    /// Looks up the guild that owns this sticker in the state the sticker was built with.
    ///
    /// Returns `None` if the guild is not known to the state, or if the state has been dropped.
    #[must_use]
    pub fn guild(&self) -> Option<Guild> {
        self.state.upgrade()?.guild(self.guild_id)
    }

    /// Retrieves the CDN asset for the sticker's image at the default size of 1024.
    ///
    /// **Note**: This will return `None` for [`StickerFormatType::Lottie`] stickers.
    ///
    /// # Errors
    ///
    /// Returns the error of the state's [`State::sticker_asset`].
    pub fn image_url(&self) -> Result<Option<Asset>> {
        self.image_url_with_size(DEFAULT_IMAGE_SIZE)
    }

    /// Retrieves the CDN asset for the sticker's image at the given size.
    ///
    /// The size must be a power of 2 between 16 and 4096. Lottie stickers have no image, so the
    /// size is not checked for them.
    ///
    /// **Note**: This will return `None` for [`StickerFormatType::Lottie`] stickers.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidImageSize`] if the size is not allowed.
    pub fn image_url_with_size(&self, size: u16) -> Result<Option<Asset>> {
        if self.format == StickerFormatType::Lottie {
            return Ok(None);
        }

        match self.state.upgrade() {
            Some(state) => state.sticker_asset(self, size),
            None => Asset::from_sticker(self, size).map(Some),
        }
    }

    /// Iterates over the sticker's fields in declaration order, as `(name, value)` pairs.
    ///
    /// Fields without a value, such as a missing [`preview_image`], are skipped. Each call
    /// returns a fresh iterator.
    ///
    /// [`preview_image`]: Self::preview_image
    pub fn fields(&self) -> impl Iterator<Item = (&'static str, FieldValue<'_>)> + '_ {
        STICKER_FIELDS.iter().filter_map(move |(name, get)| get(self).map(|value| (*name, value)))
    }
}

type FieldGetter = for<'a> fn(&'a Sticker) -> Option<FieldValue<'a>>;

static STICKER_FIELDS: [(&str, FieldGetter); 12] = [
    ("id", |s| Some(FieldValue::Snowflake(s.id.get()))),
    ("guild_id", |s| Some(FieldValue::Snowflake(s.guild_id.get()))),
    ("name", |s| Some(FieldValue::Str(&s.name))),
    ("description", |s| Some(FieldValue::Str(&s.description))),
    ("pack_id", |s| Some(FieldValue::Snowflake(s.pack_id.get()))),
    ("format", |s| Some(FieldValue::Format(s.format))),
    ("image", |s| Some(FieldValue::Str(&s.image))),
    ("type", |s| Some(FieldValue::Kind(s.kind))),
    ("version", |s| Some(FieldValue::Integer(s.version))),
    ("available", |s| Some(FieldValue::Bool(s.available))),
    ("tags", |s| Some(FieldValue::Tags(&s.tags))),
    ("preview_image", |s| s.preview_image.as_deref().map(FieldValue::Str)),
];

/// A single field value yielded by [`Sticker::fields`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum FieldValue<'a> {
    Snowflake(u64),
    Str(&'a str),
    Format(StickerFormatType),
    Kind(StickerType),
    Integer(u64),
    Bool(bool),
    Tags(&'a [String]),
}

impl fmt::Display for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Snowflake(id) | Self::Integer(id) => fmt::Display::fmt(id, f),
            Self::Str(s) => f.write_str(s),
            Self::Format(format) => fmt::Display::fmt(format, f),
            Self::Kind(kind) => fmt::Display::fmt(kind, f),
            Self::Bool(b) => fmt::Display::fmt(b, f),
            Self::Tags(tags) => f.write_str(&tags.join(", ")),
        }
    }
}

impl PartialEq for Sticker {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Sticker {}

impl Hash for Sticker {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (self.id.get() >> 22).hash(state);
    }
}

impl fmt::Display for Sticker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.format.is_animated() {
            write!(f, "<a:{}:{}>", self.name, self.id)
        } else {
            write!(f, "<:{}:{}>", self.name, self.id)
        }
    }
}

impl fmt::Debug for Sticker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sticker")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("format", &self.format)
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

impl From<&Sticker> for StickerId {
    /// Gets the Id of a sticker.
    fn from(sticker: &Sticker) -> StickerId {
        sticker.id
    }
}

enum_number! {
    /// Differentiates between sticker types.
    ///
    /// [Discord docs](https://discord.com/developers/docs/resources/sticker#sticker-object-sticker-types).
    #[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Deserialize, Serialize)]
    #[serde(from = "i64", into = "i64")]
    #[non_exhaustive]
    pub enum StickerType {
        /// An official sticker in a pack, part of Nitro or in a removed purchasable pack.
        Standard = 1,
        /// A sticker uploaded to a Boosted guild for the guild's members.
        Guild = 2,
        _ => Unknown(i64),
    }
}

impl fmt::Display for StickerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Standard => f.write_str("standard"),
            Self::Guild => f.write_str("guild"),
            Self::Unknown(raw) => fmt::Display::fmt(raw, f),
        }
    }
}

enum_number! {
    /// Differentiates between sticker formats.
    ///
    /// [Discord docs](https://discord.com/developers/docs/resources/sticker#sticker-object-sticker-format-types).
    #[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Deserialize, Serialize)]
    #[serde(from = "i64", into = "i64")]
    #[non_exhaustive]
    pub enum StickerFormatType {
        /// A PNG format sticker.
        Png = 1,
        /// An APNG format animated sticker.
        Apng = 2,
        /// A LOTTIE format animated sticker.
        Lottie = 3,
        /// A GIF format animated sticker.
        Gif = 4,
        _ => Unknown(i64),
    }
}

impl StickerFormatType {
    /// Whether stickers of this format are animated.
    #[must_use]
    pub fn is_animated(self) -> bool {
        matches!(self, Self::Apng | Self::Lottie | Self::Gif)
    }
}

impl fmt::Display for StickerFormatType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Png => f.write_str("png"),
            Self::Apng => f.write_str("apng"),
            Self::Lottie => f.write_str("lottie"),
            Self::Gif => f.write_str("gif"),
            Self::Unknown(raw) => fmt::Display::fmt(raw, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::hash_map::DefaultHasher;
    use std::sync::Arc;

    use serde_json::json;

    use super::*;

    struct NoGuilds;

    impl State for NoGuilds {
        fn guild(&self, _: GuildId) -> Option<Guild> {
            None
        }
    }

    fn payload() -> Value {
        json!({
            "id": "123",
            "name": "n",
            "description": "d",
            "format_type": 1,
            "type": 1,
            "version": 1,
            "available": true,
        })
    }

    fn sticker(payload: &Value) -> Sticker {
        Sticker::from_payload(GuildId::new(7), &Arc::new(NoGuilds), payload).unwrap()
    }

    fn hash_of(sticker: &Sticker) -> u64 {
        let mut hasher = DefaultHasher::new();
        sticker.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn minimal_payload_defaults() {
        let sticker = sticker(&payload());

        assert_eq!(sticker.id(), StickerId::new(123));
        assert_eq!(sticker.guild_id(), GuildId::new(7));
        assert_eq!(sticker.name(), "n");
        assert_eq!(sticker.description(), "d");
        assert_eq!(sticker.pack_id(), StickerPackId::new(0));
        assert_eq!(sticker.format(), StickerFormatType::Png);
        assert_eq!(sticker.image(), "");
        assert_eq!(sticker.kind(), StickerType::Standard);
        assert_eq!(sticker.version(), 1);
        assert!(sticker.available());
        assert!(sticker.tags().is_empty());
        assert_eq!(sticker.preview_image(), None);
    }

    #[test]
    fn optional_fields() {
        let mut payload = payload();
        payload["pack_id"] = json!("847199849233514549");
        payload["asset"] = json!("abcdef");
        payload["tags"] = json!("a, b ,c");
        payload["preview_asset"] = json!("preview");

        let sticker = sticker(&payload);
        assert_eq!(sticker.pack_id(), StickerPackId::new(847199849233514549));
        assert_eq!(sticker.image(), "abcdef");
        assert_eq!(sticker.tags(), ["a", "b", "c"]);
        assert_eq!(sticker.preview_image(), Some("preview"));
    }

    #[test]
    fn tags_keep_empty_pieces() {
        for (tags, expected) in [
            ("a,,b", &["a", "", "b"][..]),
            ("", &[""][..]),
            ("   ", &[""][..]),
            (" , ", &["", ""][..]),
        ] {
            let mut payload = payload();
            payload["tags"] = json!(tags);
            assert_eq!(sticker(&payload).tags(), expected, "tags {tags:?}");
        }

        let mut payload = payload();
        payload["tags"] = Value::Null;
        assert!(sticker(&payload).tags().is_empty());
    }

    #[test]
    fn null_optional_fields_are_absent() {
        let mut payload = payload();
        payload["pack_id"] = Value::Null;
        payload["asset"] = Value::Null;
        payload["preview_asset"] = Value::Null;

        let sticker = sticker(&payload);
        assert_eq!(sticker.pack_id(), StickerPackId::new(0));
        assert_eq!(sticker.image(), "");
        assert_eq!(sticker.preview_image(), None);
        assert!(sticker.fields().any(|field| field == ("image", FieldValue::Str(""))));
        assert!(sticker.fields().all(|(name, _)| name != "preview_image"));
    }

    #[test]
    fn missing_required_fields() {
        for field in ["id", "name", "description", "format_type", "type", "version", "available"] {
            let mut payload = payload();
            payload.as_object_mut().unwrap().remove(field);

            let err = Sticker::from_payload(GuildId::new(7), &Arc::new(NoGuilds), &payload);
            match err {
                Err(Error::Model(ModelError::MissingField(missing))) => assert_eq!(missing, field),
                other => panic!("expected missing {field}, got {other:?}"),
            }
        }
    }

    #[test]
    fn malformed_snowflakes() {
        for field in ["id", "pack_id"] {
            let mut payload = payload();
            payload[field] = json!("twelve");

            match Sticker::from_payload(GuildId::new(7), &Arc::new(NoGuilds), &payload) {
                Err(Error::Model(ModelError::InvalidSnowflake {
                    field: bad,
                    value,
                })) => {
                    assert_eq!(bad, field);
                    assert_eq!(value, "twelve");
                },
                other => panic!("expected a bad {field}, got {other:?}"),
            }
        }
    }

    #[test]
    fn required_fields_reject_null_and_wrong_types() {
        let cases = [
            ("name", Value::Null),
            ("description", json!(5)),
            ("version", json!("1")),
            ("version", json!(-1)),
            ("available", json!("yes")),
            ("available", Value::Null),
            ("format_type", json!("1")),
            ("format_type", json!(1.5)),
            ("type", Value::Null),
            ("tags", json!(["a"])),
            ("asset", json!(false)),
        ];

        for (field, value) in cases {
            let mut payload = payload();
            payload[field] = value.clone();

            match Sticker::from_payload(GuildId::new(7), &Arc::new(NoGuilds), &payload) {
                Err(Error::Model(ModelError::InvalidFieldType {
                    field: bad,
                    ..
                })) => assert_eq!(bad, field),
                other => panic!("expected {field} = {value} to be rejected, got {other:?}"),
            }
        }
    }

    #[test]
    fn not_an_object() {
        assert!(matches!(
            Sticker::from_payload(GuildId::new(7), &Arc::new(NoGuilds), &json!([])),
            Err(Error::Model(ModelError::NotAnObject))
        ));
    }

    #[test]
    fn unknown_codes_fall_back() {
        let mut payload = payload();
        payload["format_type"] = json!(9);
        payload["type"] = json!(5);

        let sticker = sticker(&payload);
        assert_eq!(sticker.format(), StickerFormatType::Unknown(9));
        assert_eq!(sticker.kind(), StickerType::Unknown(5));
        assert_eq!(sticker.format().to_string(), "9");
        assert_eq!(sticker.to_string(), "<:n:123>");
    }

    #[test]
    fn out_of_range_codes_fall_back() {
        for (format, kind) in [(300, 1), (1, 256), (-1, 1), (0, -7)] {
            let mut payload = payload();
            payload["format_type"] = json!(format);
            payload["type"] = json!(kind);

            let sticker = sticker(&payload);
            assert_eq!(i64::from(sticker.format()), format);
            assert_eq!(i64::from(sticker.kind()), kind);
        }

        let mut payload = payload();
        payload["format_type"] = json!(300);
        payload["type"] = json!(-1);
        let sticker = sticker(&payload);
        assert_eq!(sticker.format(), StickerFormatType::Unknown(300));
        assert_eq!(sticker.kind(), StickerType::Unknown(-1));
        assert_eq!(sticker.to_string(), "<:n:123>");

        let value = serde_json::to_value(&sticker).unwrap();
        assert_eq!(value["format_type"], json!(300));
        assert_eq!(value["type"], json!(-1));
    }

    #[test]
    fn identity_is_the_id() {
        let a = sticker(&payload());

        let mut other = payload();
        other["name"] = json!("renamed");
        other["format_type"] = json!(4);
        other["available"] = json!(false);
        let b = sticker(&other);

        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));

        let mut different = payload();
        different["id"] = json!("124");
        assert_ne!(a, sticker(&different));
    }

    #[test]
    fn display_depends_on_format() {
        for (code, animated) in [(1, false), (2, true), (3, true), (4, true), (200, false)] {
            let mut payload = payload();
            payload["format_type"] = json!(code);

            let expected = if animated { "<a:n:123>" } else { "<:n:123>" };
            assert_eq!(sticker(&payload).to_string(), expected);
        }
    }

    #[test]
    fn fields_in_declaration_order() {
        let sticker = sticker(&payload());
        let fields: Vec<_> = sticker.fields().collect();

        assert_eq!(fields, [
            ("id", FieldValue::Snowflake(123)),
            ("guild_id", FieldValue::Snowflake(7)),
            ("name", FieldValue::Str("n")),
            ("description", FieldValue::Str("d")),
            ("pack_id", FieldValue::Snowflake(0)),
            ("format", FieldValue::Format(StickerFormatType::Png)),
            ("image", FieldValue::Str("")),
            ("type", FieldValue::Kind(StickerType::Standard)),
            ("version", FieldValue::Integer(1)),
            ("available", FieldValue::Bool(true)),
            ("tags", FieldValue::Tags(&[])),
        ]);

        // A fresh iterator each call.
        assert_eq!(sticker.fields().count(), fields.len());
    }

    #[test]
    fn fields_include_preview_when_present() {
        let mut payload = payload();
        payload["preview_asset"] = json!("preview");

        let sticker = sticker(&payload);
        assert_eq!(sticker.fields().last(), Some(("preview_image", FieldValue::Str("preview"))));
    }

    #[test]
    fn lottie_has_no_image() {
        let mut payload = payload();
        payload["format_type"] = json!(3);
        let sticker = sticker(&payload);

        assert_eq!(sticker.image_url().unwrap(), None);
        assert_eq!(sticker.image_url_with_size(7).unwrap(), None);
    }

    #[test]
    fn image_url_uses_the_default_size() {
        let mut payload = payload();
        payload["asset"] = json!("abcdef");
        let sticker = sticker(&payload);

        let asset = sticker.image_url().unwrap().unwrap();
        assert_eq!(asset.as_str(), "https://cdn.discordapp.com/stickers/123/abcdef.png?size=1024");

        let asset = sticker.image_url_with_size(64).unwrap().unwrap();
        assert_eq!(asset.as_str(), "https://cdn.discordapp.com/stickers/123/abcdef.png?size=64");
    }

    #[test]
    fn image_url_rejects_bad_sizes() {
        let sticker = sticker(&payload());
        assert!(matches!(
            sticker.image_url_with_size(7),
            Err(Error::Model(ModelError::InvalidImageSize(7)))
        ));
        assert!(matches!(
            sticker.image_url_with_size(8192),
            Err(Error::Model(ModelError::InvalidImageSize(8192)))
        ));
    }

    #[test]
    fn created_at_decodes_the_id() {
        let mut payload = payload();
        payload["id"] = json!("175928847299117063");
        assert_eq!(sticker(&payload).created_at().unix_timestamp(), 1462015105);
    }

    #[test]
    fn guild_lookup_misses() {
        assert!(sticker(&payload()).guild().is_none());
    }

    #[test]
    fn image_url_escapes_the_hash() {
        let mut payload = payload();
        payload["asset"] = json!("a#b?c");
        let asset = sticker(&payload).image_url_with_size(32).unwrap().unwrap();

        assert_eq!(asset.as_str(), "https://cdn.discordapp.com/stickers/123/a%23b%3Fc.png?size=32");
        assert_eq!(asset.url().fragment(), None);
        assert_eq!(asset.url().query(), Some("size=32"));
    }

    #[test]
    fn trait_object_state() {
        let state: Arc<dyn State> = Arc::new(NoGuilds);
        let sticker =
            Sticker::from_payload_with_state(GuildId::new(7), Arc::downgrade(&state), &payload())
                .unwrap();

        assert_eq!(sticker.id(), StickerId::new(123));
        assert_eq!(Arc::weak_count(&state), 1);
        assert!(sticker.guild().is_none());

        let detached = Sticker::from_payload_with_state(
            GuildId::new(7),
            Weak::<NoGuilds>::new() as Weak<dyn State>,
            &payload(),
        )
        .unwrap();
        assert!(detached.image_url().unwrap().is_some());
    }

    #[test]
    fn dropped_state_still_builds_urls() {
        let state = Arc::new(NoGuilds);
        let sticker = Sticker::from_payload(GuildId::new(7), &state, &payload()).unwrap();
        drop(state);

        assert!(sticker.guild().is_none());
        assert!(sticker.image_url().unwrap().is_some());
    }

    #[test]
    fn serializes_payload_shape() {
        let mut payload = payload();
        payload["tags"] = json!("a, b");
        let value = serde_json::to_value(sticker(&payload)).unwrap();

        assert_eq!(value, json!({
            "id": "123",
            "guild_id": "7",
            "name": "n",
            "description": "d",
            "pack_id": "0",
            "format_type": 1,
            "asset": "",
            "type": 1,
            "version": 1,
            "available": true,
            "tags": "a,b",
        }));
    }

    #[test]
    fn debug_hides_state() {
        let debug = format!("{:?}", sticker(&payload()));
        assert_eq!(debug, "Sticker { id: StickerId(123), name: \"n\", format: Png, kind: Standard, .. }");
    }
}
