pub mod data_loader;

pub use data_loader::load_catalog_csv;

use crate::models::Ingredient;
use time::OffsetDateTime;

const COMMON_INGREDIENTS: &[(&str, &str, &str)] = &[
    ("1", "Chicken", "Protein"),
    ("2", "Beef", "Protein"),
    ("3", "Pasta", "Grain"),
    ("4", "Rice", "Grain"),
    ("5", "Potato", "Vegetable"),
    ("6", "Onion", "Vegetable"),
    ("7", "Tomato", "Vegetable"),
    ("8", "Cheese", "Dairy"),
    ("9", "Egg", "Protein"),
    ("10", "Carrot", "Vegetable"),
    ("11", "Garlic", "Vegetable"),
    ("12", "Broccoli", "Vegetable"),
];

pub const UNCATEGORIZED: &str = "Other";

/// The built-in pick list shown on the generator page.
pub fn common_ingredients() -> Vec<Ingredient> {
    COMMON_INGREDIENTS
        .iter()
        .map(|(id, name, category)| Ingredient::new(*id, *name, Some(*category)))
        .collect()
}

/// Catalog entries whose name contains `term` (case-insensitive) and that
/// are not already in `selected`.
pub fn filter<'a>(catalog: &'a [Ingredient], term: &str, selected: &[Ingredient]) -> Vec<&'a Ingredient> {
    let needle = term.to_lowercase();
    catalog
        .iter()
        .filter(|i| i.name.to_lowercase().contains(&needle))
        .filter(|i| !selected.iter().any(|s| s.id == i.id))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryGroup<'a> {
    pub category: String,
    pub items: Vec<&'a Ingredient>,
}

/// Groups by category in order of first appearance.
pub fn group_by_category<'a>(items: &[&'a Ingredient]) -> Vec<CategoryGroup<'a>> {
    let mut groups: Vec<CategoryGroup<'a>> = Vec::new();
    for item in items {
        let category = item.category.as_deref().unwrap_or(UNCATEGORIZED);
        match groups.iter_mut().find(|g| g.category == category) {
            Some(group) => group.items.push(*item),
            None => groups.push(CategoryGroup {
                category: category.to_string(),
                items: vec![*item],
            }),
        }
    }
    groups
}

/// Turns free text into an uncategorized ingredient. Blank input yields `None`.
pub fn custom_ingredient(text: &str) -> Option<Ingredient> {
    let name = text.trim();
    if name.is_empty() {
        return None;
    }
    let millis = OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000;
    Some(Ingredient::new(format!("custom-{}", millis), name, None))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_ingredients() {
        let catalog = common_ingredients();
        assert_eq!(catalog.len(), 12);
        assert_eq!(catalog[0].name, "Chicken");
        assert_eq!(catalog[11].category.as_deref(), Some("Vegetable"));
    }

    #[test]
    fn test_filter_excludes_selected_and_ignores_case() {
        let catalog = common_ingredients();
        let selected = vec![catalog[4].clone()]; // Potato
        let names: Vec<&str> = filter(&catalog, "O", &selected).iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Onion", "Tomato", "Carrot", "Broccoli"]);
    }

    #[test]
    fn test_group_by_category_preserves_first_appearance() {
        let catalog = common_ingredients();
        let all: Vec<&Ingredient> = catalog.iter().collect();
        let groups = group_by_category(&all);
        let order: Vec<&str> = groups.iter().map(|g| g.category.as_str()).collect();
        assert_eq!(order, vec!["Protein", "Grain", "Vegetable", "Dairy"]);
        assert_eq!(groups[0].items.len(), 3);
    }

    #[test]
    fn test_uncategorized_items_go_to_other() {
        let kale = Ingredient::new("x", "Kale", None);
        let groups = group_by_category(&[&kale]);
        assert_eq!(groups[0].category, UNCATEGORIZED);
    }

    #[test]
    fn test_custom_ingredient() {
        let ingredient = custom_ingredient("  Saffron ").unwrap();
        assert_eq!(ingredient.name, "Saffron");
        assert!(ingredient.id.starts_with("custom-"));
        assert!(ingredient.category.is_none());
        assert!(custom_ingredient("   ").is_none());
    }
}
