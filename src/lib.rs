//! Tiled JSON map and tileset loader.
//!
//! [`load_map`] and [`load_tileset`] read a file exported by the
//! [Tiled](https://www.mapeditor.org/) editor in its JSON format and return
//! plain records mirroring the file's schema. Field names match the JSON keys,
//! so the records also serialize back to the same format.
//!
//! Nothing is resolved or decoded beyond the JSON itself: external tilesets
//! stay as `source` references, template paths are stored as strings, and
//! base64/compressed tile data is handed back as the original string.

mod de;
mod error;
mod gid;
mod layer;
mod loader {
    pub mod json_loader;
}
mod map;
mod object;
mod property;
mod tileset;

pub use error::LoadError;
pub use gid::{Gid, FLIP_D, FLIP_H, FLIP_V, GID_MASK};
pub use layer::{Chunk, Compression, DrawOrder, Encoding, Layer, LayerType, Layers, TileData};
pub use loader::json_loader::{load_map, load_tileset};
pub use map::{Map, Orientation, RenderOrder, StaggerAxis, StaggerIndex};
pub use object::{Coordinate, Object, ObjectShape, ObjectTemplate, Text};
pub use property::{find_property, Property, PropertyType, PropertyValue};
pub use tileset::{
    Corner, Frame, Grid, GridOrientation, Offset, Terrain, Tile, Tileset, WangColor, WangSet,
    WangTile,
};
