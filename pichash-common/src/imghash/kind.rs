use std::fmt;

use image::DynamicImage;

use super::{
    hamming::{Distance, Hamming},
    Hasher,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HashKind {
    Average,
    Difference,
    Perception,
    Wavelet,
}

#[derive(Debug, thiserror::Error)]
pub enum HashError {
    #[error("can not compare a {0} hash with a {1} hash")]
    KindMismatch(HashKind, HashKind),
    #[error("the {0} hash is not supported by this build")]
    Unsupported(HashKind),
    #[error("the image does not have any pixels")]
    EmptyImage,
}

impl HashKind {
    pub const ALL: [HashKind; 4] = [
        HashKind::Average,
        HashKind::Difference,
        HashKind::Perception,
        HashKind::Wavelet,
    ];

    pub fn name(self) -> &'static str {
        match self {
            HashKind::Average => "average",
            HashKind::Difference => "difference",
            HashKind::Perception => "perception",
            HashKind::Wavelet => "wavelet",
        }
    }

    pub fn hash(self, img: &DynamicImage) -> Result<ImageHash, HashError> {
        let hash = match self {
            HashKind::Average => Hasher::average().hash(img),
            HashKind::Difference => Hasher::difference().hash(img),
            HashKind::Perception => Hasher::perception().hash(img),
            HashKind::Wavelet => wavelet_hash(img)?,
        };
        Ok(ImageHash { kind: self, hash })
    }
}

#[cfg(feature = "wavelet")]
fn wavelet_hash(img: &DynamicImage) -> Result<Hamming, HashError> {
    super::wavelet::hash(img)
}

#[cfg(not(feature = "wavelet"))]
fn wavelet_hash(_img: &DynamicImage) -> Result<Hamming, HashError> {
    Err(HashError::Unsupported(HashKind::Wavelet))
}

impl fmt::Display for HashKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A hash together with the algorithm that produced it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageHash {
    kind: HashKind,
    hash: Hamming,
}

impl ImageHash {
    pub fn new(kind: HashKind, hash: Hamming) -> Self {
        Self { kind, hash }
    }

    pub fn kind(&self) -> HashKind {
        self.kind
    }

    /// Only hashes of the same kind are comparable.
    pub fn distance_to(&self, other: &Self) -> Result<Distance, HashError> {
        if self.kind != other.kind {
            return Err(HashError::KindMismatch(self.kind, other.kind));
        }
        Ok(self.hash.distance_to(other.hash))
    }
}

impl fmt::Display for ImageHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.hash)
    }
}
