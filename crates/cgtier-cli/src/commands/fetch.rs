//! Fetch command: download a file verbatim.

use std::path::Path;

use anyhow::{Context, Result};
use cgtier_core::HttpClient;
use cgtier_core::storage::write_file_create_path;

pub fn run(url: &str, output_path: &Path) -> Result<()> {
    let content = HttpClient::new(None)
        .get(url)
        .with_context(|| format!("Failed to fetch {}", url))?;

    write_file_create_path(output_path, &content)
        .with_context(|| format!("Failed to write {}", output_path.display()))?;

    println!(
        "Successfully fetched file from {} and wrote to {}",
        url,
        output_path.display()
    );
    Ok(())
}
