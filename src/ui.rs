//! # Terminal Rendering Module
//!
//! Plain-text rendering of the session for the interactive loop: the pantry
//! chip list, the ranked result grid, and the full detail view with its
//! per-ingredient checklist.

use crate::matching::ScoredRecipe;

/// Format the current pantry selection as a one-line chip list.
pub fn format_selection(selected: &[String]) -> String {
    if selected.is_empty() {
        return "No ingredients selected yet. Try `add <ingredient>`.".to_string();
    }
    format!("Your ingredients: [{}]", selected.join("] ["))
}

/// Format the ranked result list, one numbered line per recipe.
pub fn format_results(results: &[ScoredRecipe]) -> String {
    if results.is_empty() {
        return "No cocktails found. Try adding more ingredients or different combinations."
            .to_string();
    }

    let mut output = format!("Cocktails you can make ({}):\n", results.len());
    for (index, recipe) in results.iter().enumerate() {
        output.push_str(&format!(
            "{:>3}. {} - {}% match ({} of {} ingredients)\n",
            index + 1,
            recipe.drink.name,
            recipe.match_percentage.round() as i64,
            recipe.available.len(),
            recipe.available.len() + recipe.missing.len(),
        ));
    }
    output
}

/// Format the full detail view for one scored recipe: name, match badge,
/// checklist of available/missing ingredients, and the instructions text.
pub fn format_detail(recipe: &ScoredRecipe) -> String {
    let mut output = format!(
        "{}\nMatch: {}%\n\nIngredients:\n",
        recipe.drink.name,
        recipe.match_percentage.round() as i64
    );

    for ingredient in recipe.drink.ingredients() {
        let mark = if recipe.available.contains(&ingredient) {
            '✓'
        } else {
            '✗'
        };
        output.push_str(&format!("  {mark} {ingredient}\n"));
    }

    output.push_str("\nInstructions:\n");
    match recipe.drink.instructions.as_deref() {
        Some(text) if !text.trim().is_empty() => output.push_str(text.trim()),
        _ => output.push_str("No instructions available."),
    }
    output.push('\n');

    output
}

/// Format autocomplete suggestions, one per line.
pub fn format_suggestions(suggestions: &[&str]) -> String {
    if suggestions.is_empty() {
        return "No matching ingredients in the catalog.".to_string();
    }
    suggestions
        .iter()
        .map(|s| format!("  {s}"))
        .collect::<Vec<_>>()
        .join("\n")
}
