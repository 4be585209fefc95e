use super::rules::PairRule;
use crate::models::{CuisineType, Difficulty, Recipe, RecipeIngredient, RecipeInstruction};
use uuid::Uuid;

pub const PLACEHOLDER_IMAGE: &str = "https://images.pexels.com/photos/1640772/pexels-photo-1640772.jpeg";

#[derive(Clone, Copy, Debug)]
pub struct RecipeImage {
    pub title: &'static str,
    pub url: &'static str,
}

pub const RECIPE_IMAGES: &[RecipeImage] = &[
    RecipeImage {
        title: "Chicken and Rice Bowl",
        url: "https://images.pexels.com/photos/723198/pexels-photo-723198.jpeg",
    },
    RecipeImage {
        title: "Tomato Pasta",
        url: "https://images.pexels.com/photos/1527603/pexels-photo-1527603.jpeg",
    },
    RecipeImage {
        title: "Beef Stir Fry",
        url: "https://images.pexels.com/photos/2233729/pexels-photo-2233729.jpeg",
    },
    RecipeImage {
        title: "Cheese Omelette",
        url: "https://images.pexels.com/photos/6294344/pexels-photo-6294344.jpeg",
    },
];

pub fn image_for_title(title: &str) -> &'static str {
    RECIPE_IMAGES
        .iter()
        .find(|image| image.title == title)
        .map(|image| image.url)
        .unwrap_or(PLACEHOLDER_IMAGE)
}

/// Uppercases the first character, leaving the rest untouched.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn numbered(steps: Vec<String>) -> Vec<RecipeInstruction> {
    steps
        .into_iter()
        .zip(1..)
        .map(|(instruction, step)| RecipeInstruction { step, instruction })
        .collect()
}

fn seasoning(include_oil: bool) -> Vec<RecipeIngredient> {
    let mut items = vec![
        RecipeIngredient { name: "Salt".to_string(), amount: "to taste".to_string() },
        RecipeIngredient { name: "Pepper".to_string(), amount: "to taste".to_string() },
    ];
    if include_oil {
        items.push(RecipeIngredient { name: "Olive Oil".to_string(), amount: "2 tablespoons".to_string() });
    }
    items
}

fn by_the_cup(names: &[&str]) -> Vec<RecipeIngredient> {
    names
        .iter()
        .map(|name| RecipeIngredient { name: capitalize(name), amount: "1 cup".to_string() })
        .collect()
}

pub fn build_rule_recipe(rule: &PairRule) -> Recipe {
    let (first, second) = (rule.first, rule.second);

    let mut ingredients = by_the_cup(&[first, second]);
    ingredients.extend(seasoning(true));

    Recipe {
        id: Uuid::new_v4().to_string(),
        title: rule.title.to_string(),
        description: format!(
            "A delicious {} recipe featuring {} and {}.",
            rule.title.to_lowercase(),
            first,
            second
        ),
        ingredients,
        instructions: numbered(vec![
            format!("Prepare the {} by washing and cutting it into pieces.", first),
            format!("Cook the {} in a pan with olive oil.", first),
            format!("Add the {} and cook for another 5 minutes.", second),
            "Season with salt and pepper to taste.".to_string(),
            "Serve hot and enjoy!".to_string(),
        ]),
        cooking_time: 30,
        servings: 4,
        difficulty: Difficulty::Medium,
        image_url: image_for_title(rule.title).to_string(),
        dietary_labels: Vec::new(),
        cuisine_type: rule.cuisine,
    }
}

/// Builds the catch-all recipe. Returns `None` when `names` is empty.
pub fn build_fallback_recipe(names: &[String]) -> Option<Recipe> {
    let main: Vec<&str> = names.iter().take(3).map(String::as_str).collect();
    let lead = *main.first()?;

    let mut ingredients = by_the_cup(&main);
    ingredients.extend(seasoning(false));

    Some(Recipe {
        id: Uuid::new_v4().to_string(),
        title: format!("{} Special", capitalize(lead)),
        description: format!(
            "A custom recipe featuring your selected ingredients: {}.",
            main.join(", ")
        ),
        ingredients,
        instructions: numbered(vec![
            "Combine all ingredients in a large bowl.".to_string(),
            "Mix well and season to taste.".to_string(),
            "Cook over medium heat for 15 minutes.".to_string(),
            "Let it cool for 5 minutes before serving.".to_string(),
        ]),
        cooking_time: 20,
        servings: 2,
        difficulty: Difficulty::Easy,
        image_url: PLACEHOLDER_IMAGE.to_string(),
        dietary_labels: Vec::new(),
        cuisine_type: CuisineType::American,
    })
}
