/// Settings for the cache.
///
/// # Examples
///
/// Create new settings, limiting the number of cached guilds:
///
/// ```rust
/// use sticker_model::cache::Settings as CacheSettings;
///
/// let mut settings = CacheSettings::default();
/// settings.max_guilds = 10;
/// ```
#[derive(Clone, Debug)]
#[non_exhaustive]
pub struct Settings {
    /// Whether to cache guilds at all.
    ///
    /// Defaults to true.
    pub cache_guilds: bool,
    /// Whether to keep the stickers of cached guilds.
    ///
    /// Defaults to true.
    pub cache_stickers: bool,
    /// The maximum number of guilds to store. Guilds inserted past this limit are not cached.
    ///
    /// Defaults to 0, meaning no limit.
    pub max_guilds: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            cache_guilds: true,
            cache_stickers: true,
            max_guilds: 0,
        }
    }
}
