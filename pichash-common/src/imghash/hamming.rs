pub type Distance = u32;
pub type Container = u64;

/// A 64 bit perceptual hash.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Ord, PartialOrd, Hash)]
pub struct Hamming(pub Container);

impl Hamming {
    pub const BITS: u32 = Container::BITS;
    pub const BYTES: usize = std::mem::size_of::<Container>();
    pub const MIN_DIST: Distance = 0;
    pub const MAX_DIST: Distance = Hamming::BITS;

    /// Reads the bytes as big endian, so the numeric value of a hash is the same on
    /// every platform.
    pub fn from_slice(bytes: &[u8]) -> Self {
        assert_eq!(Hamming::BYTES, bytes.len());
        let mut array = [0; Hamming::BYTES];
        array.copy_from_slice(bytes);
        Self(Container::from_be_bytes(array))
    }

    pub fn bits(self) -> Container {
        self.0
    }

    pub fn is_set(self, bit: u32) -> bool {
        bit < Hamming::BITS && self.0 & (1 << bit) != 0
    }

    pub fn distance_to(self, other: Self) -> Distance {
        (self.0 ^ other.0).count_ones()
    }

    pub fn distance(a: Container, b: Container) -> Distance {
        Hamming(a).distance_to(Hamming(b))
    }
}

impl std::fmt::Display for Hamming {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
