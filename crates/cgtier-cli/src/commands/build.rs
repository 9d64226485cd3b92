//! Build command: render the userscript with the dataset embedded.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use cgtier_core::build_userscript;
use cgtier_core::storage::write_file_create_path;

use crate::cli_utils;

pub fn run(
    version: &str,
    template_path: &Path,
    tierlist_path: &Path,
    output_path: &Path,
) -> Result<()> {
    let data = cli_utils::load_tierlist(tierlist_path)?;
    let template = fs::read_to_string(template_path)
        .with_context(|| format!("Failed to read template {}", template_path.display()))?;

    let userscript =
        build_userscript(&template, version, &data).context("Failed to render userscript")?;

    write_file_create_path(output_path, &userscript)
        .with_context(|| format!("Failed to write {}", output_path.display()))?;

    println!("Successfully wrote userscript to {}", output_path.display());
    Ok(())
}
