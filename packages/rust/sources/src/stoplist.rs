//! Reference dictionary loading for the keyword stoplist.

use std::path::Path;

use confkit_keywords::Stoplist;
use confkit_shared::{ConfkitError, Result};

/// Load a stoplist from a one-word-per-line file. Blank lines and `#`
/// comments are skipped; words are stored as written (the extractor
/// matches against lowercased candidates).
pub fn load_stoplist(path: &Path) -> Result<Stoplist> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfkitError::io(path, e))?;

    let words = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string);

    Ok(Stoplist::new(words))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_stoplist_loads() {
        let stoplist =
            load_stoplist(Path::new("../../../fixtures/stoplist.txt")).expect("load stoplist");
        assert!(stoplist.contains("the"));
        assert!(stoplist.contains("and"));
        assert!(!stoplist.contains("kubernetes"));
        // Comment and blank lines are not entries.
        assert!(!stoplist.contains("# common english words"));
    }
}
