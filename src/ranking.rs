//! # Result Ranking Module
//!
//! Filters and orders scored recipes for presentation: only recipes where
//! the user already has at least half the ingredients are worth showing, and
//! the best matches come first.

use std::cmp::Ordering;

use crate::matching::ScoredRecipe;

/// Minimum match percentage for a recipe to appear in the results.
pub const MATCH_THRESHOLD: f64 = 50.0;

/// Keep recipes at or above [`MATCH_THRESHOLD`], sorted descending by match
/// percentage.
///
/// The sort is stable (`Vec::sort_by`), so recipes with equal percentages
/// keep their relative order from the merged candidate list.
pub fn rank_recipes(recipes: Vec<ScoredRecipe>) -> Vec<ScoredRecipe> {
    let mut ranked: Vec<ScoredRecipe> = recipes
        .into_iter()
        .filter(|recipe| recipe.match_percentage >= MATCH_THRESHOLD)
        .collect();

    ranked.sort_by(|a, b| {
        b.match_percentage
            .partial_cmp(&a.match_percentage)
            .unwrap_or(Ordering::Equal)
    });

    ranked
}
