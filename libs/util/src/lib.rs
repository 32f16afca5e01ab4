use std::path::{Path, PathBuf};

use anyhow::Context;
use toml::{map::Map, Value};

/// Root of the cargo workspace. Only meaningful under cargo, e.g. in tests
/// that read fixtures.
pub fn workspace_dir() -> anyhow::Result<PathBuf> {
    let output = std::process::Command::new(env!("CARGO"))
        .arg("locate-project")
        .arg("--workspace")
        .arg("--message-format=plain")
        .output()
        .context("failed to run cargo locate-project")?
        .stdout;
    let cargo_path = Path::new(
        std::str::from_utf8(&output)
            .context("cargo locate-project printed invalid utf-8")?
            .trim(),
    );
    cargo_path
        .parent()
        .map(Path::to_path_buf)
        .context("workspace manifest has no parent directory")
}

/// Reads a flat `KEY = "value"` secrets file.
pub fn load_env(path: impl AsRef<Path>) -> anyhow::Result<Map<String, Value>> {
    let path = path.as_ref();
    let secrets = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    toml::from_str::<Map<String, Value>>(&secrets)
        .with_context(|| format!("failed to parse {}", path.display()))
}
