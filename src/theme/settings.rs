//! Theme preference persistence.
//!
//! The conf file is a plain `key = value` list; only the `mode` key is
//! recognized today. Anything missing or malformed falls back to the light
//! palette — the preference file must never be able to break startup.

use std::fs;
use std::path::Path;

use super::types::ThemeMode;

/// Parse a theme mode from conf `content`.
fn parse_mode(content: &str) -> Option<ThemeMode> {
    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let Some((key, val)) = trimmed.split_once('=') else {
            continue;
        };
        if key.trim().eq_ignore_ascii_case("mode") {
            return ThemeMode::from_config_key(val);
        }
    }
    None
}

/// Load the preferred mode from `path`, defaulting to light.
#[must_use]
pub fn load_mode_from(path: &Path) -> ThemeMode {
    fs::read_to_string(path)
        .ok()
        .and_then(|s| parse_mode(&s))
        .unwrap_or_default()
}

/// Write `mode` to `path`. Failures are logged and swallowed.
pub fn save_mode_to(path: &Path, mode: ThemeMode) {
    let content = format!("mode = {}\n", mode.as_config_key());
    if let Err(e) = fs::write(path, content) {
        tracing::warn!(path = %path.display(), error = %e, "failed to save theme preference");
    }
}
