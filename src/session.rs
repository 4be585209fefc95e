use crate::catalog;
use crate::models::Ingredient;
use std::time::Duration;
use tokio::time::Instant;

pub const SAVE_NOTICE_TEXT: &str = "Recipe saved!";
pub const SAVE_NOTICE_DURATION: Duration = Duration::from_secs(3);

/// Ingredients picked on the generator page, in the order they were picked.
#[derive(Debug, Clone, Default)]
pub struct IngredientSelection {
    selected: Vec<Ingredient>,
}

impl IngredientSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[Ingredient] {
        &self.selected
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Returns false if an ingredient with the same id is already picked.
    pub fn select(&mut self, ingredient: Ingredient) -> bool {
        if self.contains_id(&ingredient.id) {
            return false;
        }
        self.selected.push(ingredient);
        true
    }

    pub fn deselect(&mut self, id: &str) -> Option<Ingredient> {
        let pos = self.selected.iter().position(|i| i.id == id)?;
        Some(self.selected.remove(pos))
    }

    fn contains_id(&self, id: &str) -> bool {
        self.selected.iter().any(|i| i.id == id)
    }

    /// Adds free text as a custom ingredient. Blank text is ignored.
    ///
    /// Custom ids are stamped to the millisecond, so an id already in the
    /// selection gets a `-2`, `-3`, ... suffix.
    pub fn add_custom(&mut self, text: &str) -> Option<&Ingredient> {
        let mut ingredient = catalog::custom_ingredient(text)?;
        ingredient.id = self.unused_id(ingredient.id);
        self.selected.push(ingredient);
        self.selected.last()
    }

    fn unused_id(&self, base: String) -> String {
        if !self.contains_id(&base) {
            return base;
        }
        let mut n = 2;
        loop {
            let candidate = format!("{}-{}", base, n);
            if !self.contains_id(&candidate) {
                return candidate;
            }
            n += 1;
        }
    }

    /// Generation is offered only with something selected and nothing in flight.
    pub fn can_generate(&self, is_loading: bool) -> bool {
        !self.selected.is_empty() && !is_loading
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }
}

/// The transient confirmation shown after saving from a detail view.
#[derive(Debug, Clone, Default)]
pub struct SaveNotice {
    shown_until: Option<Instant>,
}

impl SaveNotice {
    pub fn show(&mut self) {
        self.shown_until = Some(Instant::now() + SAVE_NOTICE_DURATION);
    }

    pub fn message(&self) -> &'static str {
        match self.shown_until {
            Some(deadline) if Instant::now() < deadline => SAVE_NOTICE_TEXT,
            _ => "",
        }
    }
}
