//! # TheCocktailDB API Client Module
//!
//! This module provides a typed client for the three read-only endpoints of
//! TheCocktailDB JSON API that the application consumes:
//!
//! - `list.php?i=list` - the full ingredient catalog
//! - `filter.php?i=<ingredient>` - drink summaries matching one ingredient
//! - `lookup.php?i=<id>` - the full record for one drink
//!
//! All three endpoints wrap their payload in a `{ "drinks": [...] | null }`
//! envelope. A `null` (or missing) `drinks` field means "no results" and is
//! never treated as an error.

use anyhow::Result;
use log::{debug, warn};
use serde::Deserialize;

/// Default base URL for TheCocktailDB public API (v1, test key).
pub const DEFAULT_BASE_URL: &str = "https://www.thecocktaildb.com/api/json/v1/1";

/// Maximum number of ingredient slots in a drink record.
pub const MAX_INGREDIENT_SLOTS: usize = 15;

/// The `{ "drinks": ... }` envelope every endpoint responds with.
///
/// `drinks` is `null` when a query matches nothing, and some error paths
/// omit the field entirely; both decode to `None` here.
#[derive(Debug, Deserialize)]
pub struct DrinksEnvelope<T> {
    #[serde(default = "Option::default")]
    pub drinks: Option<Vec<T>>,
}

impl<T> DrinksEnvelope<T> {
    /// Unwrap the envelope into a (possibly empty) list of records.
    pub fn into_drinks(self) -> Vec<T> {
        self.drinks.unwrap_or_default()
    }
}

/// One entry of the ingredient catalog returned by `list.php?i=list`.
#[derive(Debug, Deserialize)]
pub struct CatalogEntry {
    #[serde(rename = "strIngredient1")]
    pub name: String,
}

/// Minimal identity and display data for a drink, as returned by
/// `filter.php?i=<ingredient>`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct DrinkSummary {
    #[serde(rename = "idDrink")]
    pub id: String,
    #[serde(rename = "strDrink")]
    pub name: String,
    #[serde(rename = "strDrinkThumb")]
    pub thumb: Option<String>,
}

/// Full drink record returned by `lookup.php?i=<id>`.
///
/// The upstream schema exposes ingredients as fifteen fixed, ordered slots
/// (`strIngredient1` through `strIngredient15`); unused slots are `null` or
/// blank. Use [`DrinkDetail::ingredients`] to get the effective list.
#[derive(Debug, Clone, Deserialize)]
pub struct DrinkDetail {
    #[serde(rename = "idDrink")]
    pub id: String,
    #[serde(rename = "strDrink")]
    pub name: String,
    #[serde(rename = "strInstructions")]
    pub instructions: Option<String>,
    #[serde(rename = "strDrinkThumb")]
    pub thumb: Option<String>,
    #[serde(rename = "strIngredient1")]
    pub ingredient1: Option<String>,
    #[serde(rename = "strIngredient2")]
    pub ingredient2: Option<String>,
    #[serde(rename = "strIngredient3")]
    pub ingredient3: Option<String>,
    #[serde(rename = "strIngredient4")]
    pub ingredient4: Option<String>,
    #[serde(rename = "strIngredient5")]
    pub ingredient5: Option<String>,
    #[serde(rename = "strIngredient6")]
    pub ingredient6: Option<String>,
    #[serde(rename = "strIngredient7")]
    pub ingredient7: Option<String>,
    #[serde(rename = "strIngredient8")]
    pub ingredient8: Option<String>,
    #[serde(rename = "strIngredient9")]
    pub ingredient9: Option<String>,
    #[serde(rename = "strIngredient10")]
    pub ingredient10: Option<String>,
    #[serde(rename = "strIngredient11")]
    pub ingredient11: Option<String>,
    #[serde(rename = "strIngredient12")]
    pub ingredient12: Option<String>,
    #[serde(rename = "strIngredient13")]
    pub ingredient13: Option<String>,
    #[serde(rename = "strIngredient14")]
    pub ingredient14: Option<String>,
    #[serde(rename = "strIngredient15")]
    pub ingredient15: Option<String>,
}

impl DrinkDetail {
    fn slots(&self) -> [&Option<String>; MAX_INGREDIENT_SLOTS] {
        [
            &self.ingredient1,
            &self.ingredient2,
            &self.ingredient3,
            &self.ingredient4,
            &self.ingredient5,
            &self.ingredient6,
            &self.ingredient7,
            &self.ingredient8,
            &self.ingredient9,
            &self.ingredient10,
            &self.ingredient11,
            &self.ingredient12,
            &self.ingredient13,
            &self.ingredient14,
            &self.ingredient15,
        ]
    }

    /// Extract the effective ingredient list from the fixed slots.
    ///
    /// Scans the fifteen slots in order, trims each value, and keeps only
    /// the non-empty ones. Order is preserved.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lastcall::api::DrinkDetail;
    ///
    /// let drink: DrinkDetail = serde_json::from_str(
    ///     r#"{"idDrink":"11000","strDrink":"Mojito",
    ///         "strIngredient1":" Light rum ","strIngredient2":null}"#,
    /// ).unwrap();
    /// assert_eq!(drink.ingredients(), vec!["Light rum".to_string()]);
    /// ```
    pub fn ingredients(&self) -> Vec<String> {
        self.slots()
            .into_iter()
            .flatten()
            .map(|slot| slot.trim())
            .filter(|slot| !slot.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Client for TheCocktailDB API.
#[derive(Debug, Clone)]
pub struct CocktailDbClient {
    client: reqwest::Client,
    base_url: String,
}

impl CocktailDbClient {
    /// Create a client against the given base URL (no trailing slash).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Fetch the full ingredient catalog.
    ///
    /// # Returns
    ///
    /// The list of known ingredient names, or an empty list if the request
    /// fails for any reason (network error, malformed response). This method
    /// never returns an error: a missing catalog only degrades autocomplete,
    /// it must not take the application down.
    pub async fn list_ingredients(&self) -> Vec<String> {
        let url = format!("{}/list.php", self.base_url);
        let result: Result<DrinksEnvelope<CatalogEntry>> = async {
            let response = self.client.get(&url).query(&[("i", "list")]).send().await?;
            Ok(response.json().await?)
        }
        .await;

        match result {
            Ok(envelope) => {
                let names: Vec<String> = envelope
                    .into_drinks()
                    .into_iter()
                    .map(|entry| entry.name)
                    .collect();
                debug!("Loaded ingredient catalog with {} entries", names.len());
                names
            }
            Err(e) => {
                warn!("Failed to fetch ingredient catalog: {e:#}");
                Vec::new()
            }
        }
    }

    /// Fetch drink summaries matching a single ingredient name.
    ///
    /// An empty result set (`drinks: null`) yields an empty vec; transport
    /// and decode failures are propagated so the caller can decide whether
    /// the surrounding batch survives.
    pub async fn filter_by_ingredient(&self, ingredient: &str) -> Result<Vec<DrinkSummary>> {
        let url = format!("{}/filter.php", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[("i", ingredient)])
            .send()
            .await?;
        let envelope: DrinksEnvelope<DrinkSummary> = response.json().await?;
        Ok(envelope.into_drinks())
    }

    /// Fetch the full record for one drink id.
    ///
    /// Returns `None` when the drink does not exist upstream, when the
    /// response cannot be decoded, or when the request itself fails. An
    /// individual missing drink is never worth aborting a result set over,
    /// so failures are logged and swallowed here.
    pub async fn lookup_drink(&self, id: &str) -> Option<DrinkDetail> {
        let url = format!("{}/lookup.php", self.base_url);
        let result: Result<DrinksEnvelope<DrinkDetail>> = async {
            let response = self.client.get(&url).query(&[("i", id)]).send().await?;
            Ok(response.json().await?)
        }
        .await;

        match result {
            Ok(envelope) => envelope.into_drinks().into_iter().next(),
            Err(e) => {
                warn!("Lookup failed for drink {id}: {e:#}");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_drinks_decodes_as_no_results() {
        let envelope: DrinksEnvelope<DrinkSummary> =
            serde_json::from_str(r#"{"drinks": null}"#).unwrap();
        assert!(envelope.into_drinks().is_empty());
    }

    #[test]
    fn test_missing_drinks_field_decodes_as_no_results() {
        let envelope: DrinksEnvelope<DrinkSummary> = serde_json::from_str("{}").unwrap();
        assert!(envelope.into_drinks().is_empty());
    }

    #[test]
    fn test_ingredient_slot_scan_skips_blanks_and_preserves_order() {
        let drink: DrinkDetail = serde_json::from_str(
            r#"{
                "idDrink": "11006",
                "strDrink": "Daiquiri",
                "strIngredient1": "Light rum",
                "strIngredient2": "  ",
                "strIngredient3": " Lime juice ",
                "strIngredient4": null,
                "strIngredient5": "Sugar"
            }"#,
        )
        .unwrap();

        assert_eq!(
            drink.ingredients(),
            vec![
                "Light rum".to_string(),
                "Lime juice".to_string(),
                "Sugar".to_string()
            ]
        );
    }
}
