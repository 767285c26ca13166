use crate::layer::Layer;
use crate::property::Property;
use serde::{Deserialize, Serialize};

/// Orientation of a tileset's overlay grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GridOrientation {
    #[default]
    Orthogonal,
    Isometric,
}

/// How terrain and collision overlays are drawn. Only used for isometric maps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Grid {
    pub orientation: GridOrientation,
    pub width: u32,
    pub height: u32,
}

/// Pixel offset applied when drawing tiles from a tileset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Offset {
    pub x: i32,
    pub y: i32,
}

/// A tile source, embedded in a map or loaded from its own file.
///
/// When `source` is set the tileset is external: only `firstgid` and `source`
/// are filled in and everything else stays at its default until the caller
/// loads the referenced file with [`load_tileset`](crate::load_tileset).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tileset {
    pub firstgid: u32,
    pub source: String,
    pub name: String,
    pub class: String,
    /// "tileset" in standalone tileset files.
    #[serde(rename = "type")]
    pub kind: String,
    pub columns: u32,
    pub image: String,
    pub imagewidth: u32,
    pub imageheight: u32,
    pub margin: u32,
    pub spacing: u32,
    pub tilecount: u32,
    pub tilewidth: u32,
    pub tileheight: u32,
    pub transparentcolor: String,
    pub tileoffset: Offset,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid: Option<Grid>,
    pub properties: Vec<Property>,
    pub terrains: Vec<Terrain>,
    pub tiles: Vec<Tile>,
    pub wangsets: Vec<WangSet>,
}

impl Tileset {
    /// True when only `firstgid` and `source` are set.
    pub fn is_external(&self) -> bool {
        !self.source.is_empty()
    }

    /// Metadata for the tile with local id `id`, if the tileset lists any.
    pub fn tile(&self, id: u32) -> Option<&Tile> {
        self.tiles.iter().find(|t| t.id == id)
    }
}

/// Corners of a tile, in the order of [`Tile::terrain`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    TopLeft = 0,
    TopRight = 1,
    BottomLeft = 2,
    BottomRight = 3,
}

/// Per-tile metadata. Only tiles that carry some appear in a tileset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tile {
    /// Local id within the owning tileset.
    pub id: u32,
    #[serde(rename = "type")]
    pub kind: String,
    pub class: String,
    pub properties: Vec<Property>,
    pub animation: Vec<Frame>,
    /// Terrain index per corner, `-1` where a corner has none.
    pub terrain: Vec<i32>,
    pub image: String,
    pub imagewidth: u32,
    pub imageheight: u32,
    /// Collision shapes, an `objectgroup` layer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub objectgroup: Option<Layer>,
}

impl Tile {
    /// Index into [`Tileset::terrains`] for one corner.
    pub fn corner_terrain(&self, corner: Corner) -> Option<usize> {
        self.terrain
            .get(corner as usize)
            .and_then(|&t| usize::try_from(t).ok())
    }
}

/// One step of a tile animation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Frame {
    /// Milliseconds.
    pub duration: u32,
    pub tileid: u32,
}

/// A named terrain type (Tiled < 1.5; newer files use wang sets).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Terrain {
    pub name: String,
    /// Local id of the representative tile.
    pub tile: i32,
    pub properties: Vec<Property>,
}

/// Edge and corner blending rules for automatic terrain placement.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WangSet {
    pub name: String,
    pub tile: i32,
    pub cornercolors: Vec<WangColor>,
    pub edgecolors: Vec<WangColor>,
    pub wangtiles: Vec<WangTile>,
    pub properties: Vec<Property>,
}

/// A color in a [`WangSet`] palette.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WangColor {
    pub name: String,
    /// Hex-formatted color (#RRGGBB or #AARRGGBB).
    pub color: String,
    pub tile: i32,
    /// Weight used when randomizing, in `[0, 1]`.
    pub probability: f64,
}

/// Maps a tile to the Wang colors on its corners and edges.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WangTile {
    pub tileid: u32,
    /// Color index per corner and edge.
    pub wangid: [u8; 8],
    pub dflip: bool,
    pub hflip: bool,
    pub vflip: bool,
}
