//! Event catalog loading (`catalog.yml`).

use std::path::Path;

use confkit_shared::{Catalog, ConfkitError, Result};

/// Load the event catalog from a YAML file.
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfkitError::io(path, e))?;

    let catalog: Catalog = serde_yaml::from_str(&content).map_err(|e| {
        ConfkitError::config(format!("failed to parse {}: {e}", path.display()))
    })?;

    if catalog.base_path.is_empty() {
        return Err(ConfkitError::validation("catalog base_path is empty"));
    }

    Ok(catalog)
}
