//! Cross-year edition matching.
//!
//! Event identifiers encode a year suffix in their trailing 4
//! characters; stripping it yields a series slug that links editions of
//! the same event without an explicit series ID field.

use confkit_shared::{EditionRef, Event};

/// Number of trailing identifier characters that encode the year.
const YEAR_SUFFIX_LEN: usize = 4;

/// The series slug of an identifier: everything before the trailing
/// year suffix. Identifiers too short to carry both a slug and a suffix
/// never match anything.
pub fn series_slug(short_url: &str) -> Option<&str> {
    if short_url.len() <= YEAR_SUFFIX_LEN {
        return None;
    }
    let cut = short_url.len() - YEAR_SUFFIX_LEN;
    if !short_url.is_char_boundary(cut) {
        return None;
    }
    Some(&short_url[..cut])
}

/// Populate `other_editions` on every event: all events in a different
/// year whose identifier shares the same series slug, sorted ascending
/// by year. Matching is symmetric and never produces self or duplicate
/// entries; multiple matches within one other year are all kept.
pub fn match_editions(events: &mut [Event]) {
    let index: Vec<Option<(String, String, String)>> = events
        .iter()
        .map(|e| {
            let short_url = e.short_url.as_deref()?;
            let slug = series_slug(short_url)?;
            Some((slug.to_string(), e.year.clone(), short_url.to_string()))
        })
        .collect();

    for (i, event) in events.iter_mut().enumerate() {
        let Some((slug, year, _)) = &index[i] else {
            event.other_editions = Vec::new();
            continue;
        };

        let mut others: Vec<EditionRef> = index
            .iter()
            .enumerate()
            .filter(|(j, _)| *j != i)
            .filter_map(|(_, entry)| entry.as_ref())
            .filter(|(other_slug, other_year, _)| other_slug == slug && other_year != year)
            .map(|(_, other_year, other_url)| EditionRef {
                year: other_year.clone(),
                short_url: other_url.clone(),
            })
            .collect();

        others.sort_by(|a, b| a.year.cmp(&b.year));
        event.other_editions = others;
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use confkit_shared::EventRecord;

    use super::*;

    fn event(name: &str, date: (i32, u32, u32), short_url: Option<&str>) -> Event {
        Event::from_record(EventRecord {
            name: name.into(),
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            short_url: short_url.map(str::to_string),
            external_url: None,
            talks_path: None,
            thumbnail: None,
            videos_reveal_date: None,
            premiere_duration: 0,
            sponsors: vec![],
        })
    }

    #[test]
    fn slug_strips_year_suffix() {
        assert_eq!(series_slug("confx2023"), Some("confx"));
        assert_eq!(series_slug("cloudscale2024"), Some("cloudscale"));
    }

    #[test]
    fn short_identifiers_have_no_slug() {
        assert_eq!(series_slug("2024"), None);
        assert_eq!(series_slug("ab"), None);
        assert_eq!(series_slug(""), None);
    }

    #[test]
    fn editions_match_symmetrically() {
        let mut events = vec![
            event("ConfX 2023", (2023, 5, 1), Some("confx2023")),
            event("ConfX 2024", (2024, 5, 1), Some("confx2024")),
            event("Other 2024", (2024, 6, 1), Some("other2024")),
        ];
        match_editions(&mut events);

        assert_eq!(
            events[0].other_editions,
            vec![EditionRef {
                year: "2024".into(),
                short_url: "confx2024".into(),
            }]
        );
        assert_eq!(
            events[1].other_editions,
            vec![EditionRef {
                year: "2023".into(),
                short_url: "confx2023".into(),
            }]
        );
        assert!(events[2].other_editions.is_empty());
    }

    #[test]
    fn same_year_editions_do_not_match() {
        let mut events = vec![
            event("ConfX Spring", (2024, 3, 1), Some("confx2024")),
            event("ConfX Fall", (2024, 10, 1), Some("confx2024")),
        ];
        match_editions(&mut events);
        assert!(events[0].other_editions.is_empty());
        assert!(events[1].other_editions.is_empty());
    }

    #[test]
    fn results_are_sorted_by_year() {
        let mut events = vec![
            event("ConfX 2025", (2025, 5, 1), Some("confx2025")),
            event("ConfX 2022", (2022, 5, 1), Some("confx2022")),
            event("ConfX 2024", (2024, 5, 1), Some("confx2024")),
        ];
        match_editions(&mut events);
        let years: Vec<&str> = events[0]
            .other_editions
            .iter()
            .map(|e| e.year.as_str())
            .collect();
        assert_eq!(years, vec!["2022", "2024"]);
    }

    #[test]
    fn events_without_identifiers_are_skipped() {
        let mut events = vec![
            event("Hosted elsewhere", (2024, 5, 1), None),
            event("ConfX 2024", (2024, 6, 1), Some("confx2024")),
        ];
        match_editions(&mut events);
        assert!(events[0].other_editions.is_empty());
        assert!(events[1].other_editions.is_empty());
    }
}
