use std::fmt;

use pichash_common::imghash::{hamming::Distance, HashError, HashKind, ImageHash};

use crate::image_source::{self, ImageSource};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Load(#[from] image_source::Error),
    #[error("failed to hash '{source_name}': {error}")]
    Hash {
        source_name: String,
        error: HashError,
    },
    #[error(transparent)]
    Distance(HashError),
}

/// Two hashes of the same kind and how far apart they are
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Comparison {
    pub first: ImageHash,
    pub second: ImageHash,
    pub distance: Distance,
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.first, self.second, self.distance)
    }
}

/// Load and hash one image
pub fn hash_one(source: &ImageSource, kind: HashKind) -> Result<ImageHash> {
    let img = source.load()?;
    let hash = kind.hash(&img).map_err(|error| Error::Hash {
        source_name: source.to_string(),
        error,
    })?;
    log::debug!("The {kind} hash of {source} is {hash}");
    Ok(hash)
}

/// Hash both images, one after the other, and compute their distance. Stops at the
/// first failure.
pub fn compare(
    first: &ImageSource,
    second: &ImageSource,
    kind: HashKind,
) -> Result<Comparison> {
    let first = hash_one(first, kind)?;
    let second = hash_one(second, kind)?;
    let distance = first.distance_to(&second).map_err(Error::Distance)?;
    Ok(Comparison {
        first,
        second,
        distance,
    })
}
