//! Convert command: Tachi exports to tier list dataset.

use std::path::Path;

use anyhow::{Context, Result};
use cgtier_core::storage::{load_json, write_file_create_path};
use cgtier_core::{TachiChart, TachiSong, convert_charts};

pub fn run(charts_path: &Path, songs_path: &Path, output_path: &Path) -> Result<()> {
    let charts: Vec<TachiChart> = load_json(charts_path)
        .with_context(|| format!("Failed to read charts from {}", charts_path.display()))?;
    let songs: Vec<TachiSong> = load_json(songs_path)
        .with_context(|| format!("Failed to read songs from {}", songs_path.display()))?;

    let data = convert_charts(&charts, songs).context("Conversion failed")?;

    let json = data
        .to_pretty_json()
        .context("Failed to serialize tier list data")?;
    write_file_create_path(output_path, &json)
        .with_context(|| format!("Failed to write {}", output_path.display()))?;

    println!(
        "Successfully wrote tier list data to {}",
        output_path.display()
    );
    Ok(())
}
