//! Thumbnail resolution: existence checking only.

use std::path::Path;

/// Raster extensions probed when the declared thumbnail is absent.
const FALLBACK_EXTENSIONS: [&str; 4] = ["webp", "png", "jpg", "jpeg"];

/// Resolve an event's thumbnail under the assets root.
///
/// Returns the candidate relative path if the file exists, otherwise
/// probes the same stem with the usual raster extensions, otherwise
/// returns the candidate unchanged so templates still have a path to
/// point at.
pub fn resolve_thumbnail(assets_dir: &Path, candidate: &str) -> String {
    if assets_dir.join(candidate).exists() {
        return candidate.to_string();
    }

    let stem = candidate.rsplit_once('.').map_or(candidate, |(s, _)| s);
    for ext in FALLBACK_EXTENSIONS {
        let alternative = format!("{stem}.{ext}");
        if assets_dir.join(&alternative).exists() {
            return alternative;
        }
    }

    candidate.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ASSETS: &str = "../../../fixtures/static";

    #[test]
    fn existing_candidate_is_kept() {
        let resolved = resolve_thumbnail(Path::new(ASSETS), "cloudscale2024.png");
        assert_eq!(resolved, "cloudscale2024.png");
    }

    #[test]
    fn falls_back_to_alternate_extension() {
        let resolved = resolve_thumbnail(Path::new(ASSETS), "cloudscale2023.png");
        assert_eq!(resolved, "cloudscale2023.webp");
    }

    #[test]
    fn unresolvable_candidate_passes_through() {
        let resolved = resolve_thumbnail(Path::new(ASSETS), "missing.png");
        assert_eq!(resolved, "missing.png");
    }
}
