//! Plain-text layouts for terminal output.

use crate::catalog::CategoryGroup;
use crate::models::Recipe;
use std::fmt;

/// One-paragraph summary used in lists.
pub struct RecipeCard<'a>(pub &'a Recipe);

impl fmt::Display for RecipeCard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let recipe = self.0;
        writeln!(f, "{} [{}]", recipe.title, recipe.cuisine_type)?;
        writeln!(f, "  id: {}", recipe.id)?;
        writeln!(
            f,
            "  {} min • {} servings • {} ingredients",
            recipe.cooking_time,
            recipe.servings,
            recipe.ingredients.len()
        )?;
        if !recipe.dietary_labels.is_empty() {
            let labels: Vec<String> = recipe.dietary_labels.iter().map(|l| l.to_string()).collect();
            writeln!(f, "  {}", labels.join(", "))?;
        }
        writeln!(f, "  {}", recipe.description)
    }
}

/// The full recipe page.
pub struct RecipeDetail<'a> {
    pub recipe: &'a Recipe,
    pub is_saved: bool,
}

impl fmt::Display for RecipeDetail<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let recipe = self.recipe;
        writeln!(f, "{}", recipe.title)?;
        writeln!(f, "{}", "=".repeat(recipe.title.chars().count()))?;
        writeln!(f, "{}", recipe.description)?;
        writeln!(f)?;
        writeln!(
            f,
            "Cuisine: {}  |  Time: {} min  |  Serves: {}  |  Difficulty: {}",
            recipe.cuisine_type, recipe.cooking_time, recipe.servings, recipe.difficulty
        )?;
        writeln!(f, "Image: {}", recipe.image_url)?;
        if self.is_saved {
            writeln!(f, "Saved")?;
        }

        writeln!(f, "\nIngredients")?;
        for ingredient in &recipe.ingredients {
            writeln!(f, "  - {}: {}", ingredient.name, ingredient.amount)?;
        }

        writeln!(f, "\nInstructions")?;
        for step in &recipe.instructions {
            writeln!(f, "  {}. {}", step.step, step.instruction)?;
        }
        Ok(())
    }
}

/// Catalog entries listed under their category headings.
pub struct CatalogListing<'g, 'a>(pub &'g [CategoryGroup<'a>]);

impl fmt::Display for CatalogListing<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for group in self.0 {
            writeln!(f, "{}", group.category.to_uppercase())?;
            let names: Vec<&str> = group.items.iter().map(|i| i.name.as_str()).collect();
            writeln!(f, "  {}", names.join(", "))?;
        }
        Ok(())
    }
}

pub fn recipe_card(recipe: &Recipe) -> String {
    RecipeCard(recipe).to_string()
}

pub fn recipe_detail(recipe: &Recipe, is_saved: bool) -> String {
    RecipeDetail { recipe, is_saved }.to_string()
}

pub fn catalog_groups(groups: &[CategoryGroup<'_>]) -> String {
    CatalogListing(groups).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::compose_recipes;
    use crate::models::Ingredient;

    #[test]
    fn test_detail_lists_numbered_steps() {
        let recipes = compose_recipes(&[Ingredient::new("9", "Egg", None), Ingredient::new("8", "Cheese", None)]).unwrap();
        let text = recipe_detail(&recipes[0], true);
        assert!(text.starts_with("Cheese Omelette\n===============\n"));
        assert!(text.contains("  - Olive Oil: 2 tablespoons"));
        assert!(text.contains("  5. Serve hot and enjoy!"));
        assert!(text.contains("Saved"));
    }

    #[test]
    fn test_card_summary_line() {
        let recipes = compose_recipes(&[Ingredient::new("10", "Carrot", None)]).unwrap();
        let card = recipe_card(&recipes[0]);
        assert!(card.contains("Carrot Special [American]"));
        assert!(card.contains("20 min • 2 servings • 3 ingredients"));
    }

    #[test]
    fn test_catalog_listing_uses_category_headings() {
        let catalog = crate::catalog::common_ingredients();
        let dairy: Vec<&Ingredient> = catalog.iter().filter(|i| i.name == "Cheese").collect();
        let groups = crate::catalog::group_by_category(&dairy);
        assert_eq!(catalog_groups(&groups), "DAIRY\n  Cheese\n");
    }
}
