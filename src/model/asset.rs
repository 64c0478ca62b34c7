//! Resolved CDN assets.

use std::fmt;

use url::Url;

use super::sticker::Sticker;
use crate::constants::{CDN_BASE, MAX_IMAGE_SIZE, MIN_IMAGE_SIZE};
use crate::internal::prelude::*;

/// Whether the CDN serves images at `size`: a power of 2 between 16 and 4096.
#[must_use]
pub fn valid_image_size(size: u16) -> bool {
    size.is_power_of_two() && (MIN_IMAGE_SIZE..=MAX_IMAGE_SIZE).contains(&size)
}

/// A resource served from Discord's CDN.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Asset {
    url: Url,
}

impl Asset {
    /// Builds the asset for a sticker's image at the given size, of the form
    /// `https://cdn.discordapp.com/stickers/{id}/{image}.png?size={size}`.
    ///
    /// The image hash is a single path segment: characters such as `/`, `?` or `#` in it are
    /// percent-encoded.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidImageSize`] if `size` is not a power of 2 between 16 and
    /// 4096.
    pub fn from_sticker(sticker: &Sticker, size: u16) -> Result<Self> {
        if !valid_image_size(size) {
            return Err(Error::Model(ModelError::InvalidImageSize(size)));
        }

        let mut url = Url::parse(CDN_BASE)?;
        url.path_segments_mut()
            .map_err(|()| Error::Url(url::ParseError::RelativeUrlWithCannotBeABaseBase))?
            .pop_if_empty()
            .push("stickers")
            .push(&sticker.id().to_string())
            .push(&format!("{}.png", sticker.image()));
        url.query_pairs_mut().append_pair("size", &size.to_string());

        Ok(Self {
            url,
        })
    }

    /// The full URL of the asset.
    #[must_use]
    pub fn url(&self) -> &Url {
        &self.url
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        self.url.as_str()
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Asset> for Url {
    fn from(asset: Asset) -> Self {
        asset.url
    }
}
