use crate::models::CuisineType;
use std::collections::HashSet;

/// A recipe that is suggested whenever both of its ingredients are selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairRule {
    pub first: &'static str,
    pub second: &'static str,
    pub title: &'static str,
    pub cuisine: CuisineType,
}

impl PairRule {
    /// `present` must hold lowercased ingredient names.
    pub fn matches(&self, present: &HashSet<String>) -> bool {
        present.contains(self.first) && present.contains(self.second)
    }
}

/// Evaluated in order; every matching rule contributes one recipe.
pub const PAIR_RULES: &[PairRule] = &[
    PairRule {
        first: "chicken",
        second: "rice",
        title: "Chicken and Rice Bowl",
        cuisine: CuisineType::Asian,
    },
    PairRule {
        first: "pasta",
        second: "tomato",
        title: "Tomato Pasta",
        cuisine: CuisineType::Italian,
    },
    PairRule {
        first: "beef",
        second: "onion",
        title: "Beef Stir Fry",
        cuisine: CuisineType::Asian,
    },
    PairRule {
        first: "egg",
        second: "cheese",
        title: "Cheese Omelette",
        cuisine: CuisineType::French,
    },
];

pub fn matching_rules<'a>(
    rules: &'a [PairRule],
    present: &'a HashSet<String>,
) -> impl Iterator<Item = &'a PairRule> + 'a {
    rules.iter().filter(move |rule| rule.matches(present))
}
