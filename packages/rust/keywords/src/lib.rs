//! Search keyword extraction for talks.
//!
//! Derives a bounded, deduplicated keyword set from a talk's free-text
//! and structured fields, filtered against an injected stoplist of
//! common words. The candidate pipeline order matters: the stoplist is
//! checked against the lowercased, pre-stripped form of each candidate,
//! and empties are only dropped after the strip pass.

use std::collections::{BTreeSet, HashSet};
use std::sync::LazyLock;

use regex::Regex;

use confkit_shared::TalkRecord;

/// Hard cap on the keyword set size per talk.
pub const MAX_KEYWORDS: usize = 1000;

/// Keywords are truncated to this many whitespace-delimited tokens.
pub const MAX_KEYWORD_TOKENS: usize = 6;

/// Runs of whitespace inside title/abstract text.
static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Everything that is not a word character.
static NON_WORD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\W+").expect("valid regex"));

/// Everything that is not a lowercase letter or space.
static NON_KEYWORD_CHAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z ]").expect("valid regex"));

// ---------------------------------------------------------------------------
// Stoplist
// ---------------------------------------------------------------------------

/// A membership-testable set of common words excluded from keyword
/// extraction. Constructed once and passed by reference; there is no
/// global dictionary state.
#[derive(Debug, Clone, Default)]
pub struct Stoplist {
    words: HashSet<String>,
}

impl Stoplist {
    /// Build a stoplist from any iterator of words.
    pub fn new(words: impl IntoIterator<Item = String>) -> Self {
        Self {
            words: words.into_iter().collect(),
        }
    }

    /// An empty stoplist (nothing filtered).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Exact, case-sensitive membership test.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl FromIterator<String> for Stoplist {
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        Self::new(iter)
    }
}

// ---------------------------------------------------------------------------
// Extractor
// ---------------------------------------------------------------------------

/// Derives search keywords from talk records.
#[derive(Debug, Clone)]
pub struct KeywordExtractor {
    stoplist: Stoplist,
    brand: String,
}

impl KeywordExtractor {
    /// `brand` is the fixed label seeded into every talk's keyword set.
    pub fn new(stoplist: Stoplist, brand: impl Into<String>) -> Self {
        Self {
            stoplist,
            brand: brand.into(),
        }
    }

    /// Extract a sorted, deduplicated set of at most [`MAX_KEYWORDS`]
    /// keywords, each lowercase letters-and-spaces only and at most
    /// [`MAX_KEYWORD_TOKENS`] tokens long. Missing fields contribute
    /// nothing; they never fail the extraction. Interior whitespace
    /// runs in a multi-word keyword collapse to single spaces, so
    /// padded input never yields space-padded keywords.
    pub fn extract(&self, talk: &TalkRecord) -> Vec<String> {
        let mut candidates: Vec<String> = vec![self.brand.clone()];

        // Structured fields go in verbatim: company names and job titles
        // are multi-word keywords in their own right.
        for field in [
            &talk.job_title1,
            &talk.job_title2,
            &talk.name1,
            &talk.name2,
            &talk.company1,
            &talk.company2,
        ] {
            candidates.push(field.clone().unwrap_or_default());
        }

        // Title and abstract contribute individual words: collapse
        // whitespace to a separator, drop non-word characters, split.
        for content in [&talk.title, &talk.abstract_text] {
            let joined = WHITESPACE_RE.replace_all(content, "_");
            let stripped = NON_WORD_RE.replace_all(&joined, "");
            candidates.extend(stripped.split('_').map(str::to_string));
        }

        // The free-text keywords field is comma-separated.
        candidates.extend(talk.keywords.split(',').map(str::to_string));

        let mut keywords = BTreeSet::new();
        for candidate in candidates {
            let lowered = candidate.to_lowercase();
            // Stoplist check happens on the pre-strip form.
            if self.stoplist.contains(&lowered) {
                continue;
            }
            let stripped = NON_KEYWORD_CHAR_RE.replace_all(&lowered, "");
            if stripped.is_empty() {
                continue;
            }
            let truncated = stripped
                .split_whitespace()
                .take(MAX_KEYWORD_TOKENS)
                .collect::<Vec<_>>()
                .join(" ");
            if truncated.is_empty() {
                continue;
            }
            keywords.insert(truncated);
        }

        keywords.into_iter().take(MAX_KEYWORDS).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor(stopwords: &[&str]) -> KeywordExtractor {
        KeywordExtractor::new(
            Stoplist::new(stopwords.iter().map(|w| w.to_string())),
            "cloudscale conference",
        )
    }

    #[test]
    fn title_and_keywords_field_are_tokenized() {
        let talk = TalkRecord {
            title: "Hello World!!".into(),
            abstract_text: "".into(),
            keywords: "cloud,  Security ".into(),
            ..Default::default()
        };
        let keywords = extractor(&[]).extract(&talk);

        for expected in ["hello", "world", "cloud", "security"] {
            assert!(keywords.contains(&expected.to_string()), "missing {expected}");
        }
        // Sorted ascending, no duplicates.
        let mut sorted = keywords.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(keywords, sorted);
    }

    #[test]
    fn brand_label_is_seeded() {
        let keywords = extractor(&[]).extract(&TalkRecord::default());
        assert_eq!(keywords, vec!["cloudscale conference".to_string()]);
    }

    #[test]
    fn structured_fields_stay_whole() {
        let talk = TalkRecord {
            company1: Some("Amazon Web Services".into()),
            job_title1: Some("Site Reliability Engineer".into()),
            ..Default::default()
        };
        let keywords = extractor(&[]).extract(&talk);
        assert!(keywords.contains(&"amazon web services".to_string()));
        assert!(keywords.contains(&"site reliability engineer".to_string()));
    }

    #[test]
    fn stoplist_drops_common_words() {
        let talk = TalkRecord {
            title: "The Future of Storage".into(),
            ..Default::default()
        };
        let keywords = extractor(&["the", "of"]).extract(&talk);
        assert!(!keywords.contains(&"the".to_string()));
        assert!(!keywords.contains(&"of".to_string()));
        assert!(keywords.contains(&"future".to_string()));
        assert!(keywords.contains(&"storage".to_string()));
    }

    #[test]
    fn stoplist_is_checked_before_stripping() {
        // "don't" is stoplisted in its pre-strip form; "can't" is not,
        // so it survives and is stripped to "cant".
        let talk = TalkRecord {
            keywords: "don't,can't".into(),
            ..Default::default()
        };
        let keywords = extractor(&["don't"]).extract(&talk);
        assert!(!keywords.iter().any(|k| k.contains("dont")));
        assert!(keywords.contains(&"cant".to_string()));
    }

    #[test]
    fn keywords_are_capped_at_six_tokens() {
        let talk = TalkRecord {
            company1: Some("one two three four five six seven eight".into()),
            ..Default::default()
        };
        let keywords = extractor(&[]).extract(&talk);
        assert!(keywords.contains(&"one two three four five six".to_string()));
    }

    #[test]
    fn set_never_exceeds_the_cap() {
        // 17576 distinct three-letter candidates.
        let mut many = String::new();
        for a in 'a'..='z' {
            for b in 'a'..='z' {
                for c in 'a'..='z' {
                    many.extend([a, b, c, ',']);
                }
            }
        }
        let talk = TalkRecord {
            keywords: many,
            ..Default::default()
        };
        let keywords = extractor(&[]).extract(&talk);
        assert_eq!(keywords.len(), MAX_KEYWORDS);
        // Deterministic: the cap applies to the sorted set.
        let mut sorted = keywords.clone();
        sorted.sort();
        assert_eq!(keywords, sorted);
    }

    #[test]
    fn interior_whitespace_collapses_to_single_spaces() {
        let talk = TalkRecord {
            company1: Some("Acme   Rocket   Skates".into()),
            keywords: "  padded entry  ".into(),
            ..Default::default()
        };
        let keywords = extractor(&[]).extract(&talk);
        assert!(keywords.contains(&"acme rocket skates".to_string()));
        assert!(keywords.contains(&"padded entry".to_string()));
    }

    #[test]
    fn missing_fields_are_treated_as_empty() {
        let keywords = extractor(&[]).extract(&TalkRecord::default());
        assert!(!keywords.iter().any(|k| k.is_empty()));
    }

    #[test]
    fn digits_and_punctuation_are_stripped() {
        let talk = TalkRecord {
            keywords: "kubernetes!, web3".into(),
            ..Default::default()
        };
        let keywords = extractor(&[]).extract(&talk);
        assert!(keywords.contains(&"kubernetes".to_string()));
        assert!(keywords.contains(&"web".to_string()));
    }
}
