use std::borrow::Cow;

use shared_models::ResourceRecord;

/// Case-insensitive substring match of `term` against any of `fields`.
/// An empty term matches everything.
pub fn matches_term(fields: &[Cow<'_, str>], term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    fields
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// The records whose search fields contain `term`, in their original order.
pub fn filter_records<'a, R: ResourceRecord>(records: &'a [R], term: &str) -> Vec<&'a R> {
    records
        .iter()
        .filter(|record| matches_term(&record.search_fields(), term))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_term_matches() {
        assert!(matches_term(&[], ""));
        assert!(matches_term(&[Cow::Borrowed("x")], ""));
    }

    #[test]
    fn test_case_insensitive_substring() {
        let fields = [Cow::Borrowed("Amit Sharma"), Cow::Borrowed("UH1")];
        assert!(matches_term(&fields, "sharma"));
        assert!(matches_term(&fields, "T SH"));
        assert!(matches_term(&fields, "uh1"));
        assert!(!matches_term(&fields, "patel"));
    }

    #[test]
    fn test_no_fields_never_match_non_empty_term() {
        assert!(!matches_term(&[], "a"));
    }
}
