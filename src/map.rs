use crate::gid::Gid;
use crate::layer::{Layer, Layers};
use crate::property::Property;
use crate::tileset::Tileset;
use serde::{Deserialize, Serialize};

/// Map projection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Orthogonal,
    Isometric,
    Staggered,
    Hexagonal,
}

/// Order in which tiles are drawn (orthogonal maps only).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RenderOrder {
    RightDown,
    RightUp,
    LeftDown,
    LeftUp,
}

/// Axis along which rows or columns are staggered (staggered and hexagonal maps).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StaggerAxis {
    X,
    Y,
}

/// Whether odd or even rows/columns are shifted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StaggerIndex {
    Odd,
    Even,
}

/// A Tiled map as stored in a `.json` map file.
///
/// `nextlayerid` and `nextobjectid` are written by the editor to exceed every
/// layer id (groups included) and every object id in the map. They are kept
/// as-is and not checked.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Map {
    /// Hex-formatted color (#RRGGBB or #AARRGGBB), empty if unset.
    pub backgroundcolor: String,
    pub class: String,
    /// Number of tile columns.
    pub width: u32,
    /// Number of tile rows.
    pub height: u32,
    pub tilewidth: u32,
    pub tileheight: u32,
    /// Length of the side of a hex tile in pixels (hexagonal maps only).
    pub hexsidelength: u32,
    pub infinite: bool,
    pub orientation: Orientation,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub renderorder: Option<RenderOrder>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub staggeraxis: Option<StaggerAxis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub staggerindex: Option<StaggerIndex>,
    /// "map".
    #[serde(rename = "type")]
    pub kind: String,
    /// JSON format version.
    #[serde(deserialize_with = "crate::de::string_or_number")]
    pub version: String,
    /// Version of the editor that saved the file.
    pub tiledversion: String,
    pub nextlayerid: u32,
    pub nextobjectid: u32,
    pub layers: Vec<Layer>,
    pub tilesets: Vec<Tileset>,
    pub properties: Vec<Property>,
}

impl Map {
    /// Every layer in the map, descending into groups depth first.
    pub fn layers_recursive(&self) -> Layers<'_> {
        Layers::new(&self.layers)
    }

    /// The tileset a global tile id belongs to, and the id local to it.
    ///
    /// Picks the tileset with the greatest `firstgid` not above the cleaned
    /// gid. Flip flags are ignored. Returns `None` for the empty tile.
    pub fn tileset_for_gid(&self, gid: impl Into<Gid>) -> Option<(&Tileset, u32)> {
        let clean = gid.into().clean();
        if clean == 0 {
            return None;
        }
        let ts = self
            .tilesets
            .iter()
            .filter(|t| t.firstgid != 0 && t.firstgid <= clean)
            .max_by_key(|t| t.firstgid)?;
        Some((ts, clean - ts.firstgid))
    }
}
