//! # Cocktail Search Module
//!
//! Orchestrates one full search: fan out one catalog query per selected
//! ingredient, merge and deduplicate the candidates, fan out one detail
//! lookup per unique candidate, then score and rank the resolved drinks.
//!
//! Both fan-outs spawn one tokio task per item and await the handles in
//! input order, so the requests run in parallel while the collected order
//! stays deterministic. Failures are item-local: a single failing ingredient
//! search or drink lookup is dropped and the batch continues. Only two
//! conditions abort a search outright - an empty selection (rejected before
//! any network call) and the case where every ingredient search failed.

use log::{info, warn};

use crate::api::{CocktailDbClient, DrinkSummary};
use crate::matching::{score_recipe, ScoredRecipe};
use crate::ranking::rank_recipes;

/// Errors a search can surface to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The user triggered a search with no ingredients selected.
    EmptySelection,
    /// Every ingredient search in the batch failed.
    Upstream,
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchError::EmptySelection => {
                write!(f, "Please select at least one ingredient")
            }
            SearchError::Upstream => {
                write!(f, "Failed to fetch cocktails. Please try again.")
            }
        }
    }
}

impl std::error::Error for SearchError {}

/// Merge per-ingredient result lists into one candidate list, deduplicated
/// by drink id.
///
/// Order follows first occurrence across the concatenated input lists, so a
/// drink returned by several ingredient searches keeps the position of its
/// earliest appearance.
pub fn dedupe_candidates(result_lists: Vec<Vec<DrinkSummary>>) -> Vec<DrinkSummary> {
    let mut seen = std::collections::HashSet::new();
    let mut candidates = Vec::new();

    for summary in result_lists.into_iter().flatten() {
        if seen.insert(summary.id.clone()) {
            candidates.push(summary);
        }
    }

    candidates
}

/// Run a full search for the given pantry selection.
///
/// # Arguments
///
/// * `client` - API client, cloned into each fetch task
/// * `selection` - the user's selected ingredient names, must be non-empty
///
/// # Returns
///
/// Recipes matching at least half the pantry threshold, ranked best first,
/// or a [`SearchError`] when the selection is empty or the upstream API was
/// unreachable for every ingredient.
pub async fn find_cocktails(
    client: &CocktailDbClient,
    selection: &[String],
) -> Result<Vec<ScoredRecipe>, SearchError> {
    if selection.is_empty() {
        return Err(SearchError::EmptySelection);
    }

    info!("Searching cocktails for {} ingredients", selection.len());

    // One search task per selected ingredient
    let search_handles: Vec<_> = selection
        .iter()
        .map(|ingredient| {
            let client = client.clone();
            let ingredient = ingredient.clone();
            tokio::spawn(async move { client.filter_by_ingredient(&ingredient).await })
        })
        .collect();

    let mut result_lists = Vec::new();
    let mut failures = 0usize;
    for (handle, ingredient) in search_handles.into_iter().zip(selection) {
        match handle.await {
            Ok(Ok(summaries)) => result_lists.push(summaries),
            Ok(Err(e)) => {
                warn!("Search failed for ingredient '{ingredient}': {e:#}");
                failures += 1;
            }
            Err(e) => {
                warn!("Search task for ingredient '{ingredient}' did not complete: {e}");
                failures += 1;
            }
        }
    }

    if failures == selection.len() {
        return Err(SearchError::Upstream);
    }

    let candidates = dedupe_candidates(result_lists);
    info!("Resolving details for {} unique candidates", candidates.len());

    // One lookup task per unique candidate; missing drinks are dropped
    let lookup_handles: Vec<_> = candidates
        .iter()
        .map(|candidate| {
            let client = client.clone();
            let id = candidate.id.clone();
            tokio::spawn(async move { client.lookup_drink(&id).await })
        })
        .collect();

    let mut resolved = Vec::new();
    for handle in lookup_handles {
        match handle.await {
            Ok(Some(detail)) => resolved.push(detail),
            Ok(None) => {}
            Err(e) => warn!("Lookup task did not complete: {e}"),
        }
    }

    let scored = resolved
        .into_iter()
        .map(|detail| score_recipe(selection, detail))
        .collect();

    Ok(rank_recipes(scored))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(id: &str, name: &str) -> DrinkSummary {
        DrinkSummary {
            id: id.to_string(),
            name: name.to_string(),
            thumb: None,
        }
    }

    #[test]
    fn test_dedupe_keeps_first_occurrence_order() {
        let lists = vec![
            vec![summary("11000", "Mojito"), summary("11001", "Old Fashioned")],
            vec![summary("11001", "Old Fashioned"), summary("11007", "Margarita")],
        ];

        let candidates = dedupe_candidates(lists);
        let ids: Vec<&str> = candidates.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["11000", "11001", "11007"]);
    }

    #[tokio::test]
    async fn test_empty_selection_is_rejected_before_any_request() {
        // Unroutable base URL: the validation error must fire first
        let client = CocktailDbClient::new("http://127.0.0.1:1");
        let result = find_cocktails(&client, &[]).await;
        assert_eq!(result.unwrap_err(), SearchError::EmptySelection);
    }

    #[tokio::test]
    async fn test_unreachable_upstream_surfaces_one_generic_error() {
        let client = CocktailDbClient::new("http://127.0.0.1:1");
        let selection = vec!["Gin".to_string(), "Lime".to_string()];
        let result = find_cocktails(&client, &selection).await;
        assert_eq!(result.unwrap_err(), SearchError::Upstream);
    }
}
