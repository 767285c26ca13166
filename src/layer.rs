use crate::object::Object;
use crate::property::Property;
use serde::{Deserialize, Serialize};

/// Which of the four layer variants a [`Layer`] is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayerType {
    #[default]
    TileLayer,
    ObjectGroup,
    ImageLayer,
    Group,
}

/// How tile data is written: a JSON array (`csv`) or a base64 string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    #[default]
    Csv,
    Base64,
}

/// Compression applied to base64 tile data before encoding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Compression {
    #[default]
    #[serde(rename = "")]
    None,
    Zlib,
    Gzip,
    Zstd,
}

/// Object drawing order within an object group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrawOrder {
    #[default]
    TopDown,
    Index,
}

/// Tile data exactly as it appears in the file.
///
/// Base64 payloads are kept verbatim; decoding them (and any zlib/gzip/zstd
/// decompression) is left to the caller, driven by the owning layer's
/// [`Encoding`] and [`Compression`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TileData {
    /// Literal array of global tile ids, flip flags included.
    Gids(Vec<u32>),
    /// Base64 string, possibly compressed.
    Encoded(String),
}

impl Default for TileData {
    fn default() -> Self {
        TileData::Gids(Vec::new())
    }
}

impl TileData {
    /// The ids, if the data was a JSON array.
    pub fn as_gids(&self) -> Option<&[u32]> {
        match self {
            TileData::Gids(gids) => Some(gids),
            TileData::Encoded(_) => None,
        }
    }

    /// The raw base64 string, if the data was a string.
    pub fn as_encoded(&self) -> Option<&str> {
        match self {
            TileData::Encoded(s) => Some(s),
            TileData::Gids(_) => None,
        }
    }

    /// True for base64 string data.
    pub fn is_encoded(&self) -> bool {
        matches!(self, TileData::Encoded(_))
    }

    pub fn is_empty(&self) -> bool {
        match self {
            TileData::Gids(gids) => gids.is_empty(),
            TileData::Encoded(s) => s.is_empty(),
        }
    }
}

/// Rectangular piece of an infinite map's tile layer. `x`/`y` are in tiles.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Chunk {
    pub data: TileData,
    pub height: u32,
    pub width: u32,
    pub x: i32,
    pub y: i32,
}

/// One map layer. All variant fields are always present; `kind` says which of
/// them are meaningful.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Layer {
    // Common
    pub id: u32,
    pub name: String,
    pub class: String,
    #[serde(rename = "type")]
    pub kind: LayerType,
    pub visible: bool,
    pub opacity: f64,
    pub width: u32,
    pub height: u32,
    /// Tile offset, always 0 in files written by Tiled.
    pub x: i32,
    pub y: i32,
    /// Pixel offset.
    pub offsetx: f64,
    pub offsety: f64,
    pub properties: Vec<Property>,

    // Tile layer
    pub data: TileData,
    pub chunks: Vec<Chunk>,
    pub encoding: Encoding,
    pub compression: Compression,

    // Object group
    pub objects: Vec<Object>,
    pub draworder: DrawOrder,

    // Group
    pub layers: Vec<Layer>,

    // Image layer
    pub image: String,
    pub transparentcolor: String,
}

impl Layer {
    /// `kind` checks, one per [`LayerType`].
    pub fn is_tile_layer(&self) -> bool {
        self.kind == LayerType::TileLayer
    }

    pub fn is_object_group(&self) -> bool {
        self.kind == LayerType::ObjectGroup
    }

    pub fn is_image_layer(&self) -> bool {
        self.kind == LayerType::ImageLayer
    }

    pub fn is_group(&self) -> bool {
        self.kind == LayerType::Group
    }

    /// Depth-first, pre-order walk over this layer's descendants (not itself).
    pub fn descendants(&self) -> Layers<'_> {
        Layers::new(&self.layers)
    }
}

/// Pre-order iterator over a layer tree, see [`Map::layers_recursive`](crate::Map::layers_recursive).
pub struct Layers<'a> {
    stack: Vec<std::slice::Iter<'a, Layer>>,
}

impl<'a> Layers<'a> {
    pub(crate) fn new(roots: &'a [Layer]) -> Self {
        Layers {
            stack: vec![roots.iter()],
        }
    }
}

impl<'a> Iterator for Layers<'a> {
    type Item = &'a Layer;

    fn next(&mut self) -> Option<&'a Layer> {
        loop {
            let top = self.stack.last_mut()?;
            match top.next() {
                Some(layer) => {
                    if !layer.layers.is_empty() {
                        self.stack.push(layer.layers.iter());
                    }
                    return Some(layer);
                }
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn array_data_stays_gids() {
        let l: Layer = serde_json::from_str(
            r#"{"type":"tilelayer","name":"ground","width":2,"height":2,"data":[1,0,0,2147483649]}"#,
        )
        .expect("decode");
        assert!(l.is_tile_layer());
        assert_eq!(l.data.as_gids(), Some(&[1, 0, 0, 0x8000_0001][..]));
        assert_eq!(l.encoding, Encoding::Csv);
        assert_eq!(l.compression, Compression::None);
    }

    #[test]
    fn string_data_is_not_decoded() {
        let l: Layer = serde_json::from_str(
            r#"{"type":"tilelayer","encoding":"base64","compression":"zlib","data":"eJxjYGBgAAAABAAB"}"#,
        )
        .expect("decode");
        assert_eq!(l.data.as_encoded(), Some("eJxjYGBgAAAABAAB"));
        assert!(l.data.as_gids().is_none());
        assert_eq!(l.encoding, Encoding::Base64);
        assert_eq!(l.compression, Compression::Zlib);
    }

    #[test]
    fn empty_compression_string_means_none() {
        let l: Layer =
            serde_json::from_str(r#"{"compression":"","encoding":"base64","data":"AAAA"}"#)
                .expect("decode");
        assert_eq!(l.compression, Compression::None);
    }

    #[test]
    fn unknown_compression_is_rejected() {
        assert!(serde_json::from_str::<Layer>(r#"{"compression":"lz4"}"#).is_err());
    }

    #[test]
    fn chunks_keep_negative_offsets() {
        let l: Layer = serde_json::from_str(
            r#"{
                "type":"tilelayer",
                "chunks":[
                    {"x":-16,"y":0,"width":16,"height":16,"data":"AAAA"},
                    {"x":0,"y":-16,"width":1,"height":1,"data":[5]}
                ]
            }"#,
        )
        .expect("decode");
        assert_eq!(l.chunks.len(), 2);
        assert_eq!(l.chunks[0].x, -16);
        assert!(l.chunks[0].data.is_encoded());
        assert_eq!(l.chunks[1].y, -16);
        assert_eq!(l.chunks[1].data.as_gids(), Some(&[5][..]));
    }

    #[test]
    fn image_layer_fields() {
        let l: Layer = serde_json::from_str(
            r##"{"type":"imagelayer","image":"sky.png","transparentcolor":"#ff00ff","opacity":0.5}"##,
        )
        .expect("decode");
        assert!(l.is_image_layer());
        assert_eq!(l.image, "sky.png");
        assert_eq!(l.transparentcolor, "#ff00ff");
        assert_eq!(l.opacity, 0.5);
        assert!(l.data.is_empty());
    }

    #[test]
    fn absent_fields_are_zero() {
        let l: Layer = serde_json::from_str("{}").expect("decode");
        assert_eq!(l, Layer::default());
        assert!(!l.visible);
        assert_eq!(l.opacity, 0.0);
    }

    #[test]
    fn descendants_walk_pre_order() {
        let l: Layer = serde_json::from_str(
            r#"{"type":"group","name":"root","layers":[
                {"type":"group","name":"a","layers":[{"name":"a1"},{"name":"a2"}]},
                {"name":"b"}
            ]}"#,
        )
        .expect("decode");
        let names: Vec<_> = l.descendants().map(|l| l.name.as_str()).collect();
        assert_eq!(names, ["a", "a1", "a2", "b"]);
    }
}
