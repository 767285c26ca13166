use anyhow::Context;
use tiled_json::{load_map, load_tileset, LayerType, TileData};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let path = std::env::args()
        .nth(1)
        .context("usage: map_summary <map.json>")?;
    let map = load_map(&path).with_context(|| format!("Loading map {}", path))?;

    println!(
        "{}x{} tiles of {}x{} px, {:?}, saved by Tiled {}",
        map.width, map.height, map.tilewidth, map.tileheight, map.orientation, map.tiledversion
    );

    for layer in map.layers_recursive() {
        let detail = match layer.kind {
            LayerType::TileLayer => match &layer.data {
                TileData::Gids(gids) => format!("{} gids", gids.len()),
                TileData::Encoded(s) => {
                    format!("{} base64 chars ({:?})", s.len(), layer.compression)
                }
            },
            LayerType::ObjectGroup => format!("{} objects", layer.objects.len()),
            LayerType::ImageLayer => layer.image.clone(),
            LayerType::Group => format!("{} children", layer.layers.len()),
        };
        println!("layer #{} {:?} [{:?}] {}", layer.id, layer.name, layer.kind, detail);
    }

    let map_dir = std::path::Path::new(&path)
        .parent()
        .map(|d| d.to_path_buf())
        .unwrap_or_default();
    for ts in &map.tilesets {
        if ts.is_external() {
            let ext = load_tileset(map_dir.join(&ts.source))
                .with_context(|| format!("Loading tileset {}", ts.source))?;
            println!("tileset {} (firstgid {}): {} tiles", ext.name, ts.firstgid, ext.tilecount);
        } else {
            println!("tileset {} (firstgid {}): {} tiles", ts.name, ts.firstgid, ts.tilecount);
        }
    }

    Ok(())
}
