use crate::error::{StorageError, StoreError};
use crate::generator::RecipeSource;
use crate::models::{Ingredient, Recipe};
use crate::storage::KeyValueStorage;
use tokio::sync::watch;
use tracing::{debug, error, info, instrument, warn};

/// Storage key holding the saved recipes as a JSON array.
pub const SAVED_RECIPES_KEY: &str = "savedRecipes";

/// What subscribers see after every state change.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoreSnapshot {
    pub generated: Vec<Recipe>,
    pub saved: Vec<Recipe>,
    pub is_loading: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationOutcome {
    Generated(usize),
    /// The source failed; the previous generated list is kept.
    Failed,
}

pub struct RecipeStore<S> {
    source: S,
    storage: Box<dyn KeyValueStorage>,
    generated: Vec<Recipe>,
    saved: Vec<Recipe>,
    is_loading: bool,
    updates: watch::Sender<StoreSnapshot>,
}

impl<S: RecipeSource> RecipeStore<S> {
    /// Opens the store, reading the saved set from `storage`. A missing or
    /// unreadable entry starts the store with nothing saved.
    pub fn open(source: S, storage: impl KeyValueStorage + 'static) -> Self {
        let storage: Box<dyn KeyValueStorage> = Box::new(storage);
        let saved = load_saved(storage.as_ref());
        let (updates, _) = watch::channel(StoreSnapshot {
            saved: saved.clone(),
            ..Default::default()
        });

        Self {
            source,
            storage,
            generated: Vec::new(),
            saved,
            is_loading: false,
            updates,
        }
    }

    pub fn generated(&self) -> &[Recipe] {
        &self.generated
    }

    pub fn saved(&self) -> &[Recipe] {
        &self.saved
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn subscribe(&self) -> watch::Receiver<StoreSnapshot> {
        self.updates.subscribe()
    }

    pub fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            generated: self.generated.clone(),
            saved: self.saved.clone(),
            is_loading: self.is_loading,
        }
    }

    fn publish(&self) {
        // send_replace never fails, even with no receivers left.
        self.updates.send_replace(self.snapshot());
    }

    fn set_loading(&mut self, loading: bool) {
        self.is_loading = loading;
        self.publish();
    }

    /// Replaces the generated set with fresh suggestions for `ingredients`.
    ///
    /// Source failures are logged and reported as [`GenerationOutcome::Failed`];
    /// the loading flag is cleared either way.
    #[instrument(skip_all, fields(ingredients = ingredients.len()))]
    pub async fn generate(&mut self, ingredients: &[Ingredient]) -> Result<GenerationOutcome, StoreError> {
        if ingredients.is_empty() {
            return Err(StoreError::NoIngredientsSelected);
        }

        self.set_loading(true);
        let result = self.source.generate(ingredients).await;

        let outcome = match result {
            Ok(recipes) => {
                info!(count = recipes.len(), "generated recipes");
                let count = recipes.len();
                self.generated = recipes;
                GenerationOutcome::Generated(count)
            }
            Err(e) => {
                error!(error = %e, "failed to generate recipes");
                GenerationOutcome::Failed
            }
        };

        self.set_loading(false);
        Ok(outcome)
    }

    /// Adds `recipe` to the saved set unless its id is already there.
    /// Only recipes from the current generated set can be saved.
    /// Returns whether anything changed.
    pub fn save(&mut self, recipe: &Recipe) -> Result<bool, StoreError> {
        if self.is_saved(&recipe.id) {
            debug!(id = %recipe.id, "recipe already saved");
            return Ok(false);
        }
        if !self.generated.iter().any(|r| r.id == recipe.id) {
            return Err(StoreError::NotGenerated(recipe.id.clone()));
        }

        let mut updated = self.saved.clone();
        updated.push(recipe.clone());
        self.persist_saved(updated)?;
        info!(id = %recipe.id, title = %recipe.title, "saved recipe");
        Ok(true)
    }

    /// Drops `id` from the saved set. Storage is rewritten even when the id
    /// was not saved.
    pub fn remove(&mut self, id: &str) -> Result<bool, StorageError> {
        let before = self.saved.len();
        let updated: Vec<Recipe> = self.saved.iter().filter(|r| r.id != id).cloned().collect();
        let removed = updated.len() != before;
        self.persist_saved(updated)?;
        if removed {
            info!(id, "removed saved recipe");
        }
        Ok(removed)
    }

    /// Looks in the generated set first, then the saved set.
    pub fn find_by_id(&self, id: &str) -> Option<&Recipe> {
        self.generated.iter().chain(self.saved.iter()).find(|r| r.id == id)
    }

    pub fn is_saved(&self, id: &str) -> bool {
        self.saved.iter().any(|r| r.id == id)
    }

    /// Case-insensitive match on title or cuisine; an empty term matches all.
    pub fn search_saved(&self, term: &str) -> Vec<&Recipe> {
        let needle = term.trim().to_lowercase();
        self.saved
            .iter()
            .filter(|r| {
                r.title.to_lowercase().contains(&needle)
                    || r.cuisine_type.as_str().to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Writes `updated` to storage and only then adopts it in memory.
    fn persist_saved(&mut self, updated: Vec<Recipe>) -> Result<(), StorageError> {
        let payload = serde_json::to_string(&updated)?;
        if let Err(e) = self.storage.set(SAVED_RECIPES_KEY, &payload) {
            warn!(error = %e, "failed to persist saved recipes");
            return Err(e);
        }
        self.saved = updated;
        self.publish();
        Ok(())
    }
}

fn load_saved(storage: &dyn KeyValueStorage) -> Vec<Recipe> {
    let raw = match storage.get(SAVED_RECIPES_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            warn!(error = %e, "could not read saved recipes, starting empty");
            return Vec::new();
        }
    };

    match serde_json::from_str::<Vec<Recipe>>(&raw) {
        Ok(recipes) => {
            // Saved ids are unique; keep the first copy of any repeat.
            let mut seen = std::collections::HashSet::new();
            let recipes: Vec<Recipe> = recipes.into_iter().filter(|r| seen.insert(r.id.clone())).collect();
            debug!(count = recipes.len(), "loaded saved recipes");
            recipes
        }
        Err(e) => {
            warn!(error = %e, "saved recipes are corrupt, starting empty");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GenerationError;
    use crate::generator::{compose_recipes, RuleBasedGenerator};
    use crate::storage::MemoryStorage;
    use std::time::Duration;

    struct FailingSource;

    impl RecipeSource for FailingSource {
        async fn generate(&self, _ingredients: &[Ingredient]) -> Result<Vec<Recipe>, GenerationError> {
            Err(GenerationError::Internal("boom".to_string()))
        }
    }

    fn instant() -> RuleBasedGenerator {
        RuleBasedGenerator::new(Duration::ZERO)
    }

    fn picks(names: &[&str]) -> Vec<Ingredient> {
        names.iter().map(|n| Ingredient::new(*n, *n, None)).collect()
    }

    #[tokio::test]
    async fn test_generate_replaces_generated_list() {
        let mut store = RecipeStore::open(instant(), MemoryStorage::new());
        store.generate(&picks(&["Pasta", "Tomato"])).await.unwrap();
        let first_id = store.generated()[0].id.clone();

        let outcome = store.generate(&picks(&["Carrot"])).await.unwrap();
        assert_eq!(outcome, GenerationOutcome::Generated(1));
        assert_eq!(store.generated().len(), 1);
        assert_eq!(store.generated()[0].title, "Carrot Special");
        assert!(store.find_by_id(&first_id).is_none());
        assert!(!store.is_loading());
    }

    #[tokio::test]
    async fn test_generate_rejects_empty_selection() {
        let mut store = RecipeStore::open(instant(), MemoryStorage::new());
        let result = store.generate(&[]).await;
        assert!(matches!(result, Err(StoreError::NoIngredientsSelected)));
        assert!(!store.is_loading());
    }

    #[tokio::test]
    async fn test_failed_generation_keeps_previous_list() {
        let mut store = RecipeStore::open(FailingSource, MemoryStorage::new());
        let outcome = store.generate(&picks(&["Egg"])).await.unwrap();
        assert_eq!(outcome, GenerationOutcome::Failed);
        assert!(store.generated().is_empty());
        assert!(!store.is_loading());
    }

    #[tokio::test]
    async fn test_save_is_idempotent() {
        let storage = MemoryStorage::new();
        let mut store = RecipeStore::open(instant(), storage.clone());
        store.generate(&picks(&["Chicken", "Rice"])).await.unwrap();
        let recipe = store.generated()[0].clone();

        assert!(store.save(&recipe).unwrap());
        assert!(!store.save(&recipe).unwrap());
        assert_eq!(store.saved().iter().filter(|r| r.id == recipe.id).count(), 1);
        assert_eq!(storage.writes().unwrap(), 1);
    }

    #[test]
    fn test_save_rejects_recipe_that_was_never_generated() {
        let storage = MemoryStorage::new();
        let mut store = RecipeStore::open(instant(), storage.clone());
        let stray = compose_recipes(&picks(&["Kale"])).unwrap().remove(0);

        let result = store.save(&stray);
        assert!(matches!(result, Err(StoreError::NotGenerated(id)) if id == stray.id));
        assert!(store.saved().is_empty());
        assert_eq!(storage.writes().unwrap(), 0);
        assert!(storage.get(SAVED_RECIPES_KEY).unwrap().is_none());
    }

    #[tokio::test]
    async fn test_remove_missing_id_still_rewrites_storage() {
        let storage = MemoryStorage::new();
        let mut store = RecipeStore::open(instant(), storage.clone());
        store.generate(&picks(&["Beef", "Onion"])).await.unwrap();
        let recipe = store.generated()[0].clone();
        store.save(&recipe).unwrap();
        let before = store.saved().to_vec();

        assert!(!store.remove("no-such-id").unwrap());
        assert_eq!(store.saved(), before.as_slice());
        assert_eq!(storage.writes().unwrap(), 2);
    }

    #[tokio::test]
    async fn test_failed_write_does_not_change_memory() {
        let storage = MemoryStorage::new();
        let mut store = RecipeStore::open(instant(), storage.clone());
        store.generate(&picks(&["Garlic"])).await.unwrap();
        let recipe = store.generated()[0].clone();

        storage.fail_writes(true).unwrap();
        assert!(store.save(&recipe).is_err());
        assert!(store.saved().is_empty());
        assert!(storage.get(SAVED_RECIPES_KEY).unwrap().is_none());
    }

    #[tokio::test]
    async fn test_corrupt_storage_opens_empty() {
        let storage = MemoryStorage::new();
        storage.set(SAVED_RECIPES_KEY, "{not json").unwrap();
        let store = RecipeStore::open(instant(), storage);
        assert!(store.saved().is_empty());
    }

    #[tokio::test]
    async fn test_search_saved_matches_title_or_cuisine() {
        let mut store = RecipeStore::open(instant(), MemoryStorage::new());
        store
            .generate(&picks(&["Pasta", "Tomato", "Egg", "Cheese"]))
            .await
            .unwrap();
        for recipe in store.generated().to_vec() {
            store.save(&recipe).unwrap();
        }

        let italian: Vec<&str> = store.search_saved("ital").iter().map(|r| r.title.as_str()).collect();
        assert_eq!(italian, vec!["Tomato Pasta"]);
        let omelette: Vec<&str> = store.search_saved("OMELETTE").iter().map(|r| r.title.as_str()).collect();
        assert_eq!(omelette, vec!["Cheese Omelette"]);
        assert_eq!(store.search_saved("").len(), 2);
    }

    #[tokio::test]
    async fn test_subscribers_see_latest_snapshot() {
        let mut store = RecipeStore::open(instant(), MemoryStorage::new());
        let mut updates = store.subscribe();
        store.generate(&picks(&["Pasta", "Tomato"])).await.unwrap();

        assert!(updates.has_changed().unwrap());
        let snapshot = updates.borrow_and_update().clone();
        assert_eq!(snapshot.generated.len(), 1);
        assert!(!snapshot.is_loading);
    }
}
