//! # Autocomplete Module
//!
//! Suggestion filtering for the ingredient input: a case-insensitive
//! substring match over the catalog, capped at a fixed number of entries.

/// Maximum number of suggestions shown for one input.
pub const MAX_SUGGESTIONS: usize = 10;

/// Filter the catalog down to suggestions for the typed input.
///
/// Empty or whitespace-only input yields no suggestions. Otherwise every
/// catalog entry containing the trimmed input as a case-insensitive
/// substring is kept, in catalog order, up to [`MAX_SUGGESTIONS`].
pub fn suggest<'a>(catalog: &'a [String], input: &str) -> Vec<&'a str> {
    let needle = input.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    catalog
        .iter()
        .filter(|entry| entry.to_lowercase().contains(&needle))
        .map(String::as_str)
        .take(MAX_SUGGESTIONS)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog(entries: &[&str]) -> Vec<String> {
        entries.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_substring_match_is_case_insensitive() {
        let catalog = catalog(&["Light rum", "Dark rum", "Gin", "Lime juice"]);
        assert_eq!(suggest(&catalog, "RUM"), vec!["Light rum", "Dark rum"]);
    }

    #[test]
    fn test_blank_input_yields_nothing() {
        let catalog = catalog(&["Gin"]);
        assert!(suggest(&catalog, "").is_empty());
        assert!(suggest(&catalog, "   ").is_empty());
    }

    #[test]
    fn test_suggestions_are_capped() {
        let catalog: Vec<String> = (0..25).map(|i| format!("Rum {i}")).collect();
        assert_eq!(suggest(&catalog, "rum").len(), MAX_SUGGESTIONS);
    }

    #[test]
    fn test_empty_catalog_degrades_to_no_suggestions() {
        assert!(suggest(&[], "gin").is_empty());
    }
}
