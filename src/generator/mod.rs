pub mod rules;
pub mod templates;

pub use rules::{PairRule, PAIR_RULES};
pub use templates::{build_fallback_recipe, build_rule_recipe, PLACEHOLDER_IMAGE};

use crate::error::GenerationError;
use crate::models::{Ingredient, Recipe};
use std::collections::HashSet;
use std::future::Future;
use std::time::Duration;
use tracing::debug;

/// Simulated backend latency.
pub const DEFAULT_GENERATION_DELAY: Duration = Duration::from_millis(1500);

/// Anything that can turn a selection of ingredients into recipe suggestions.
pub trait RecipeSource {
    fn generate(
        &self,
        ingredients: &[Ingredient],
    ) -> impl Future<Output = Result<Vec<Recipe>, GenerationError>> + Send;
}

#[derive(Debug, Clone)]
pub struct RuleBasedGenerator {
    pub delay: Duration,
}

impl RuleBasedGenerator {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for RuleBasedGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_GENERATION_DELAY)
    }
}

impl RecipeSource for RuleBasedGenerator {
    async fn generate(&self, ingredients: &[Ingredient]) -> Result<Vec<Recipe>, GenerationError> {
        generate_recipes(ingredients, self.delay).await
    }
}

/// Waits out `delay`, then runs [`compose_recipes`].
pub async fn generate_recipes(
    ingredients: &[Ingredient],
    delay: Duration,
) -> Result<Vec<Recipe>, GenerationError> {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
    compose_recipes(ingredients)
}

/// Applies [`PAIR_RULES`] to the selection and falls back to a generic
/// recipe when none of them match. Never returns an empty list.
pub fn compose_recipes(ingredients: &[Ingredient]) -> Result<Vec<Recipe>, GenerationError> {
    if ingredients.is_empty() {
        return Err(GenerationError::EmptySelection);
    }

    let names: Vec<String> = ingredients.iter().map(|i| i.name.to_lowercase()).collect();
    let present: HashSet<String> = names.iter().cloned().collect();

    let mut recipes: Vec<Recipe> = rules::matching_rules(PAIR_RULES, &present)
        .map(build_rule_recipe)
        .collect();

    if recipes.is_empty() {
        let fallback = build_fallback_recipe(&names).ok_or(GenerationError::EmptySelection)?;
        recipes.push(fallback);
    }

    debug!(
        ingredients = ?names,
        titles = ?recipes.iter().map(|r| r.title.as_str()).collect::<Vec<_>>(),
        "composed recipes"
    );
    Ok(recipes)
}
