use crate::gid::Gid;
use crate::property::Property;
use crate::tileset::Tileset;
use serde::{Deserialize, Serialize};

/// A pixel-space point in a polygon or polyline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
}

/// Text payload of a text object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Text {
    pub text: String,
    pub fontfamily: String,
    pub pixelsize: u32,
    /// Hex-formatted color (#RRGGBB or #AARRGGBB).
    pub color: String,
    pub wrap: bool,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub strikeout: bool,
    pub kerning: bool,
    /// "center", "right", "justify" or "left".
    pub halign: String,
    /// "center", "bottom" or "top".
    pub valign: String,
}

/// Geometry of an [`Object`], derived from which fields are populated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ObjectShape<'a> {
    Rectangle,
    Ellipse,
    Point,
    Polygon(&'a [Coordinate]),
    Polyline(&'a [Coordinate]),
    Tile(Gid),
    Text(&'a Text),
}

/// An object placed in an object group (or in a tile's collision group).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Object {
    pub id: u32,
    /// Non-zero only for tile objects.
    pub gid: u32,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub class: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Degrees clockwise.
    pub rotation: f64,
    pub visible: bool,
    pub ellipse: bool,
    pub point: bool,
    pub polygon: Vec<Coordinate>,
    pub polyline: Vec<Coordinate>,
    pub properties: Vec<Property>,
    /// Path of the template file this object instantiates. Not resolved.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub template: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<Text>,
}

impl Object {
    /// Classifies the object; a non-zero `gid` wins, then point, ellipse,
    /// polygon, polyline and text, with rectangle as the fallback.
    pub fn shape(&self) -> ObjectShape<'_> {
        if self.gid != 0 {
            ObjectShape::Tile(Gid(self.gid))
        } else if self.point {
            ObjectShape::Point
        } else if self.ellipse {
            ObjectShape::Ellipse
        } else if !self.polygon.is_empty() {
            ObjectShape::Polygon(&self.polygon)
        } else if !self.polyline.is_empty() {
            ObjectShape::Polyline(&self.polyline)
        } else if let Some(text) = &self.text {
            ObjectShape::Text(text)
        } else {
            ObjectShape::Rectangle
        }
    }

    /// `class` if set, else the legacy `type` field.
    pub fn class_name(&self) -> &str {
        if !self.class.is_empty() {
            &self.class
        } else {
            &self.kind
        }
    }
}

/// Contents of a standalone template file (`"type": "template"`).
///
/// Objects refer to templates by path through [`Object::template`]; merging a
/// template into its instances is up to the caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObjectTemplate {
    #[serde(rename = "type")]
    pub kind: String,
    /// External tileset reference, present when the object is a tile object.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tileset: Option<Tileset>,
    pub object: Object,
}
