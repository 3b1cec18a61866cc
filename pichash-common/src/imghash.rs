use image_hasher::{HashAlg, HasherConfig};

use self::hamming::Hamming;

pub mod hamming;
pub mod kind;
#[cfg(feature = "wavelet")]
pub mod wavelet;

pub use kind::{HashError, HashKind, ImageHash};

/// Width and height of the hashes in bits.
pub const HASH_SIDE: u32 = 8;

pub struct Hasher {
    hasher: image_hasher::Hasher<[u8; Hamming::BYTES]>,
}

impl Hasher {
    /// Downscale to 8x8 and compare every pixel against the mean.
    pub fn average() -> Self {
        Self::from_config(Self::config().hash_alg(HashAlg::Mean))
    }

    /// Compare horizontally adjacent pixels of a 9x8 downscale.
    pub fn difference() -> Self {
        Self::from_config(Self::config().hash_alg(HashAlg::Gradient))
    }

    /// Compare the low frequency DCT coefficients against their mean.
    pub fn perception() -> Self {
        Self::from_config(Self::config().hash_alg(HashAlg::Mean).preproc_dct())
    }

    fn config() -> HasherConfig<[u8; Hamming::BYTES]> {
        HasherConfig::with_bytes_type::<[u8; Hamming::BYTES]>()
            .hash_size(HASH_SIDE, HASH_SIDE)
    }

    fn from_config(config: HasherConfig<[u8; Hamming::BYTES]>) -> Self {
        Self {
            hasher: config.to_hasher(),
        }
    }

    pub fn hash<I>(&self, img: &I) -> Hamming
    where
        I: image_hasher::Image,
    {
        let hash = self.hasher.hash_image(img);
        Hamming::from_slice(hash.as_bytes())
    }
}
