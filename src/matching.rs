//! # Ingredient Matching Module
//!
//! This module implements the pantry-to-recipe matching heuristic and the
//! 0-100 match score derived from it.
//!
//! ## Matching rule
//!
//! A recipe ingredient counts as "matched" when at least one user ingredient
//! contains it, or is contained by it, as a case-insensitive substring.
//! The rule is deliberately permissive so that free-text pantry entries like
//! "Lime" still match catalog spellings like "Lime juice" (and vice versa).
//! The loose behavior is part of the observable contract of the application:
//! a false positive such as "Lime" matching "Limestone" is accepted, and the
//! rule must not be tightened into a smarter similarity measure.

use crate::api::DrinkDetail;

/// A resolved drink together with its pantry match data.
#[derive(Debug, Clone)]
pub struct ScoredRecipe {
    pub drink: DrinkDetail,
    /// Share of the drink's ingredients present in the user's pantry, 0-100.
    pub match_percentage: f64,
    /// Drink ingredients judged present in the user's selection.
    pub available: Vec<String>,
    /// Drink ingredients the user is missing.
    pub missing: Vec<String>,
}

/// Bidirectional case-insensitive substring test between one user ingredient
/// and one recipe ingredient.
fn ingredient_matches(user: &str, recipe: &str) -> bool {
    let user = user.to_lowercase();
    let recipe = recipe.to_lowercase();
    user.contains(&recipe) || recipe.contains(&user)
}

/// True when any ingredient in the user's selection matches `recipe_ingredient`.
pub fn is_available(user_ingredients: &[String], recipe_ingredient: &str) -> bool {
    user_ingredients
        .iter()
        .any(|user| ingredient_matches(user, recipe_ingredient))
}

/// Compute the match percentage between a pantry and a recipe ingredient list.
///
/// # Returns
///
/// `(matched / total) * 100.0`, or `0.0` when the recipe has no ingredients
/// (guards the divide by zero).
///
/// # Examples
///
/// ```rust
/// use lastcall::matching::match_percentage;
///
/// let pantry = vec!["Light rum".to_string(), "Lime".to_string()];
/// let recipe = vec![
///     "Light rum".to_string(),
///     "Lime juice".to_string(),
///     "Sugar".to_string(),
/// ];
/// let pct = match_percentage(&pantry, &recipe);
/// assert!((pct - 200.0 / 3.0).abs() < 1e-9);
/// ```
pub fn match_percentage(user_ingredients: &[String], recipe_ingredients: &[String]) -> f64 {
    if recipe_ingredients.is_empty() {
        return 0.0;
    }

    let matched = recipe_ingredients
        .iter()
        .filter(|ingredient| is_available(user_ingredients, ingredient))
        .count();

    (matched as f64 / recipe_ingredients.len() as f64) * 100.0
}

/// Partition a recipe's ingredients into (available, missing) against the
/// user's selection.
///
/// Uses the same matching rule as [`match_percentage`], so the size of the
/// available side always agrees with the score. The two halves never overlap
/// and together cover the full input list, order preserved.
pub fn partition_ingredients(
    user_ingredients: &[String],
    recipe_ingredients: &[String],
) -> (Vec<String>, Vec<String>) {
    recipe_ingredients
        .iter()
        .cloned()
        .partition(|ingredient| is_available(user_ingredients, ingredient))
}

/// Score one resolved drink against the user's selection.
pub fn score_recipe(user_ingredients: &[String], drink: DrinkDetail) -> ScoredRecipe {
    let recipe_ingredients = drink.ingredients();
    let match_percentage = match_percentage(user_ingredients, &recipe_ingredients);
    let (available, missing) = partition_ingredients(user_ingredients, &recipe_ingredients);

    ScoredRecipe {
        drink,
        match_percentage,
        available,
        missing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pantry(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_substring_match_is_bidirectional() {
        assert!(ingredient_matches("Gin", "Dry Gin"));
        assert!(ingredient_matches("Dry Gin", "Gin"));
        assert!(!ingredient_matches("Vodka", "Gin"));
    }

    #[test]
    fn test_match_is_case_insensitive() {
        assert!(ingredient_matches("light RUM", "Light rum"));
    }

    #[test]
    fn test_empty_recipe_scores_zero() {
        assert_eq!(match_percentage(&pantry(&["Gin"]), &[]), 0.0);
    }

    #[test]
    fn test_identical_lists_score_one_hundred() {
        let list = pantry(&["Gin", "Dry Vermouth", "Olive"]);
        assert_eq!(match_percentage(&list, &list), 100.0);
    }

    #[test]
    fn test_partition_is_exact() {
        let user = pantry(&["Light rum", "Lime"]);
        let recipe = pantry(&["Light rum", "Lime juice", "Sugar"]);

        let (available, missing) = partition_ingredients(&user, &recipe);
        assert_eq!(available, pantry(&["Light rum", "Lime juice"]));
        assert_eq!(missing, pantry(&["Sugar"]));
        assert_eq!(available.len() + missing.len(), recipe.len());
    }
}
