// tests/load_tests.rs

use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};
use tiled_json::{load_map, load_tileset, LoadError, TileData};

fn temp_dir(tag: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock went backwards")
        .as_nanos();
    let dir = std::env::temp_dir().join(format!("tiled_json_{tag}_{nanos}"));
    fs::create_dir_all(&dir).expect("failed to create temp dir");
    dir
}

const MINIMAL_MAP: &str = r#"
{
    "width": 2,
    "height": 2,
    "tilewidth": 32,
    "tileheight": 32,
    "orientation": "orthogonal",
    "layers": [
        { "type": "tilelayer", "data": [1, 2, 3, 4], "width": 2, "height": 2 }
    ],
    "tilesets": [ { "firstgid": 1, "source": "tiles.json" } ]
}
"#;

#[test]
fn minimal_orthogonal_map() -> anyhow::Result<()> {
    let path = temp_dir("minimal").join("map.json");
    fs::write(&path, MINIMAL_MAP)?;

    let map = load_map(&path)?;
    assert_eq!(map.width, 2);
    assert_eq!(map.height, 2);
    assert_eq!(map.tilewidth, 32);
    assert_eq!(map.layers.len(), 1);
    assert_eq!(map.layers[0].data.as_gids(), Some(&[1, 2, 3, 4][..]));

    let ts = &map.tilesets[0];
    assert_eq!(ts.firstgid, 1);
    assert!(ts.is_external());
    assert_eq!(ts.name, "");
    assert_eq!(ts.tilecount, 0);
    assert_eq!(ts.columns, 0);
    assert!(ts.tiles.is_empty());
    assert!(ts.grid.is_none());
    Ok(())
}

#[test]
fn missing_path_is_io_error() {
    let path = temp_dir("missing").join("does_not_exist.json");
    let err = load_map(&path).unwrap_err();
    match err {
        LoadError::Io { path: p, source } => {
            assert_eq!(p, path);
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("expected Io, got {:?}", other),
    }
}

#[test]
fn invalid_syntax_is_decode_error() {
    let path = temp_dir("syntax").join("broken.json");
    fs::write(&path, "{ \"width\": 2, ").unwrap();
    let err = load_map(&path).unwrap_err();
    assert!(matches!(err, LoadError::Decode { .. }), "got {:?}", err);

    let err = load_tileset(&path).unwrap_err();
    assert!(err.is_decode());
}

#[test]
fn each_call_builds_a_fresh_map() -> anyhow::Result<()> {
    let dir = temp_dir("fresh");
    let full = dir.join("full.json");
    let empty = dir.join("empty.json");
    fs::write(&full, MINIMAL_MAP)?;
    fs::write(&empty, "{}")?;

    let first = load_map(&full)?;
    let second = load_map(&empty)?;
    assert_eq!(first.width, 2);
    assert_eq!(second, tiled_json::Map::default());
    Ok(())
}

#[test]
fn base64_layer_and_chunks_are_left_encoded() -> anyhow::Result<()> {
    let path = temp_dir("base64").join("infinite.json");
    fs::write(
        &path,
        r#"{
            "infinite": true,
            "layers": [{
                "type": "tilelayer",
                "encoding": "base64",
                "compression": "gzip",
                "chunks": [
                    {"x": -16, "y": -16, "width": 16, "height": 16,
                     "data": "H4sIAAAAAAAACmNgYGBgAAAAAAAAAP//AwBHq7BTCAAAAA=="}
                ]
            }]
        }"#,
    )?;

    let map = load_map(&path)?;
    assert!(map.infinite);
    let layer = &map.layers[0];
    assert_eq!(layer.compression, tiled_json::Compression::Gzip);
    assert_eq!(layer.encoding, tiled_json::Encoding::Base64);
    assert_eq!(layer.data, TileData::default());
    assert_eq!(
        layer.chunks[0].data.as_encoded(),
        Some("H4sIAAAAAAAACmNgYGBgAAAAAAAAAP//AwBHq7BTCAAAAA==")
    );
    Ok(())
}

#[test]
fn standalone_tileset_file() -> anyhow::Result<()> {
    let dir = temp_dir("tileset");
    let map_path = dir.join("map.json");
    let ts_path = dir.join("tiles.json");
    fs::write(&map_path, MINIMAL_MAP)?;
    fs::write(
        &ts_path,
        r#"{
            "type": "tileset",
            "name": "overworld",
            "tiledversion": "1.10.2",
            "tilewidth": 32, "tileheight": 32,
            "tilecount": 4, "columns": 2,
            "image": "overworld.png", "imagewidth": 64, "imageheight": 64,
            "properties": [{"name": "biome", "type": "string", "value": "forest"}],
            "tiles": [{"id": 0, "properties": [{"name": "damage", "type": "int", "value": 10}]}]
        }"#,
    )?;

    let map = load_map(&map_path)?;
    let reference = &map.tilesets[0];
    let ts = load_tileset(dir.join(&reference.source))?;

    assert_eq!(ts.name, "overworld");
    assert_eq!(ts.firstgid, 0);
    assert_eq!(ts.tilecount, 4);
    assert_eq!(ts.properties[0].value.as_str(), Some("forest"));
    assert_eq!(ts.tile(0).map(|t| t.properties[0].value.as_i64()), Some(Some(10)));
    Ok(())
}
