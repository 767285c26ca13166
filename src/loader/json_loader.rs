// src/loader/json_loader.rs
use crate::error::LoadError;
use crate::map::Map;
use crate::tileset::Tileset;
use serde::de::DeserializeOwned;
use std::path::Path;
use tracing::{debug, instrument, trace};

fn load_json<T: DeserializeOwned>(p: &Path) -> Result<T, LoadError> {
    let txt = std::fs::read_to_string(p).map_err(|source| LoadError::Io {
        path: p.to_path_buf(),
        source,
    })?;
    trace!(bytes = txt.len(), "read file");

    serde_json::from_str(&txt).map_err(|source| LoadError::Decode {
        path: p.to_path_buf(),
        source,
    })
}

/// Reads a Tiled JSON map file.
///
/// External tilesets are left as references (`firstgid` + `source`), and tile
/// data is returned exactly as stored. Unknown fields are ignored; missing
/// fields take their default value.
///
/// `serde_json` stops at 128 levels of JSON nesting, which allows group layers
/// to nest about 60 deep. Deeper files fail with [`LoadError::Decode`].
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn load_map(path: impl AsRef<Path>) -> Result<Map, LoadError> {
    let map: Map = load_json(path.as_ref())?;
    debug!(
        layers = map.layers.len(),
        tilesets = map.tilesets.len(),
        "loaded map"
    );
    Ok(map)
}

/// Reads a standalone Tiled JSON tileset file, such as one referenced by
/// [`Tileset::source`].
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn load_tileset(path: impl AsRef<Path>) -> Result<Tileset, LoadError> {
    let tileset: Tileset = load_json(path.as_ref())?;
    debug!(
        name = %tileset.name,
        tiles = tileset.tiles.len(),
        "loaded tileset"
    );
    Ok(tileset)
}
