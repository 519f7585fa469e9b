//! "Did you mean" hints for unknown section ids.

use crate::corpus::ContentIndex;
use rapidfuzz::distance::jaro_winkler;

/// Minimum Jaro-Winkler similarity for a section id to be suggested.
const SUGGESTION_THRESHOLD: f64 = 0.8;

/// Maximum number of suggestions returned.
const MAX_SUGGESTIONS: usize = 3;

/// Known section ids that resemble `unknown`, most similar first.
///
/// Only used to enrich error messages; navigation itself never resolves an
/// id by similarity.
pub fn suggest_sections(unknown: &str, index: &ContentIndex) -> Vec<String> {
    let query = unknown.to_lowercase();
    let mut scored: Vec<(f64, &str)> = index
        .section_ids()
        .map(|id| (jaro_winkler::similarity(query.chars(), id.chars()), id))
        .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
        .collect();

    scored.sort_by(|(a, _), (b, _)| b.total_cmp(a));
    scored
        .into_iter()
        .take(MAX_SUGGESTIONS)
        .map(|(_, id)| id.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::{Corpus, Section};
    use assert2::check;

    fn index(ids: &[&str]) -> ContentIndex {
        ContentIndex::new(Corpus {
            sections: ids
                .iter()
                .map(|id| Section {
                    id: id.to_string(),
                    title: id.to_string(),
                    description: String::new(),
                    items: vec![],
                })
                .collect(),
        })
        .unwrap()
    }

    #[test]
    fn suggests_close_ids() {
        let index = index(&["basics", "advanced-waits", "form-handling"]);
        check!(suggest_sections("basic", &index) == ["basics"]);
        check!(suggest_sections("Advanced-Wait", &index) == ["advanced-waits"]);
    }

    #[test]
    fn unrelated_ids_get_no_suggestions() {
        let index = index(&["basics", "advanced-waits"]);
        check!(suggest_sections("zzz-no-match", &index).is_empty());
    }
}
