//! File helpers shared by the conversion and packaging tools.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::Result;

/// Read and parse a JSON file
pub fn load_json<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<T> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Write `data` to `path`, creating missing parent directories first
pub fn write_file_create_path<P: AsRef<Path>>(path: P, data: &str) -> Result<()> {
    let path = path.as_ref();
    if let Some(dir) = path.parent()
        && !dir.as_os_str().is_empty()
    {
        fs::create_dir_all(dir)?;
    }
    fs::write(path, data)?;
    Ok(())
}
