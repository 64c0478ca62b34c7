//! A set of constants used by the library.

/// The base URL of Discord's CDN.
pub const CDN_BASE: &str = "https://cdn.discordapp.com";

/// Discord's epoch, "2015-01-01T00:00:00+00:00", in milliseconds since the Unix epoch.
pub const DISCORD_EPOCH: u64 = 1_420_070_400_000;

/// The image size requested from the CDN when none is given.
pub const DEFAULT_IMAGE_SIZE: u16 = 1024;

/// The smallest image size the CDN accepts.
pub const MIN_IMAGE_SIZE: u16 = 16;

/// The largest image size the CDN accepts.
pub const MAX_IMAGE_SIZE: u16 = 4096;
