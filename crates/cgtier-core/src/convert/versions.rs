/// Whether a Tachi version string names a mainline arcade release.
///
/// Mainline versions are plain numbers (`"30"`); INFINITAS and omnimix style
/// releases use other identifiers (`"inf"`, `"30-omni"`).
pub fn is_mainline_version(version: &str) -> bool {
    version.parse::<u32>().is_ok()
}

/// Keep only mainline versions, preserving order
pub fn filter_game_versions(versions: &[String]) -> Vec<String> {
    versions
        .iter()
        .filter(|version| is_mainline_version(version))
        .cloned()
        .collect()
}
