use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Ingredient {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl Ingredient {
    pub fn new(id: impl Into<String>, name: impl Into<String>, category: Option<&str>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.map(str::to_string),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct RecipeIngredient {
    pub name: String,
    pub amount: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct RecipeInstruction {
    pub step: u32,
    pub instruction: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DietaryLabel {
    Vegetarian,
    Vegan,
    #[serde(rename = "Gluten-Free")]
    GlutenFree,
    #[serde(rename = "Dairy-Free")]
    DairyFree,
    #[serde(rename = "Low-Carb")]
    LowCarb,
    Keto,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CuisineType {
    Italian,
    Mexican,
    Asian,
    American,
    Mediterranean,
    Indian,
    French,
}

impl CuisineType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CuisineType::Italian => "Italian",
            CuisineType::Mexican => "Mexican",
            CuisineType::Asian => "Asian",
            CuisineType::American => "American",
            CuisineType::Mediterranean => "Mediterranean",
            CuisineType::Indian => "Indian",
            CuisineType::French => "French",
        }
    }
}

impl fmt::Display for CuisineType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        };
        f.write_str(label)
    }
}

impl fmt::Display for DietaryLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DietaryLabel::Vegetarian => "Vegetarian",
            DietaryLabel::Vegan => "Vegan",
            DietaryLabel::GlutenFree => "Gluten-Free",
            DietaryLabel::DairyFree => "Dairy-Free",
            DietaryLabel::LowCarb => "Low-Carb",
            DietaryLabel::Keto => "Keto",
        };
        f.write_str(label)
    }
}

// Field names follow the stored JSON layout, which predates this crate.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub description: String,
    pub ingredients: Vec<RecipeIngredient>,
    pub instructions: Vec<RecipeInstruction>,
    pub cooking_time: u32,
    pub servings: u32,
    pub difficulty: Difficulty,
    pub image_url: String,
    #[serde(default)]
    pub dietary_labels: Vec<DietaryLabel>,
    pub cuisine_type: CuisineType,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recipe_serializes_with_camel_case_fields() {
        let recipe = Recipe {
            id: "abc".to_string(),
            title: "Tomato Pasta".to_string(),
            description: "d".to_string(),
            ingredients: vec![RecipeIngredient { name: "Pasta".to_string(), amount: "1 cup".to_string() }],
            instructions: vec![RecipeInstruction { step: 1, instruction: "Boil.".to_string() }],
            cooking_time: 30,
            servings: 4,
            difficulty: Difficulty::Medium,
            image_url: "http://img".to_string(),
            dietary_labels: vec![DietaryLabel::GlutenFree],
            cuisine_type: CuisineType::Italian,
        };

        let value = serde_json::to_value(&recipe).unwrap();
        assert_eq!(value["cookingTime"], 30);
        assert_eq!(value["imageUrl"], "http://img");
        assert_eq!(value["cuisineType"], "Italian");
        assert_eq!(value["difficulty"], "Medium");
        assert_eq!(value["dietaryLabels"][0], "Gluten-Free");
        assert_eq!(value["instructions"][0]["step"], 1);
    }

    #[test]
    fn test_ingredient_without_category_omits_field() {
        let ingredient = Ingredient::new("custom-1", "Kale", None);
        let json = serde_json::to_string(&ingredient).unwrap();
        assert_eq!(json, r#"{"id":"custom-1","name":"Kale"}"#);
    }
}
