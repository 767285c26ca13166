//! Global tile ids and their flip flags.

use serde::{Deserialize, Serialize};

/// Tile is flipped horizontally.
pub const FLIP_H: u32 = 0x8000_0000; // bit 31
/// Tile is flipped vertically.
pub const FLIP_V: u32 = 0x4000_0000; // bit 30
/// Tile is flipped anti-diagonally (or rotated 60° on hexagonal maps).
pub const FLIP_D: u32 = 0x2000_0000; // bit 29
/// Keeps the lower 29 bits (bit 28 is reserved for hexagonal 120° rotation).
pub const GID_MASK: u32 = 0x1FFF_FFFF;

/// A raw global tile id as stored in tile data or `Object::gid`.
///
/// The high bits carry flip flags; use [`Gid::clean`] to get the id used for
/// tileset lookup. Zero means "no tile".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Gid(pub u32);

impl Gid {
    /// Id with flags, as stored.
    #[inline] pub fn raw(self) -> u32 { self.0 }
    /// Id without flip flags.
    #[inline] pub fn clean(self) -> u32 { self.0 & GID_MASK }
    /// See [`FLIP_H`].
    #[inline] pub fn flip_h(self) -> bool { (self.0 & FLIP_H) != 0 }
    /// See [`FLIP_V`].
    #[inline] pub fn flip_v(self) -> bool { (self.0 & FLIP_V) != 0 }
    /// See [`FLIP_D`].
    #[inline] pub fn flip_d(self) -> bool { (self.0 & FLIP_D) != 0 }
    /// No tile, whatever the flags say.
    #[inline] pub fn is_empty(self) -> bool { self.clean() == 0 }
}

impl From<u32> for Gid {
    fn from(raw: u32) -> Self {
        Gid(raw)
    }
}
