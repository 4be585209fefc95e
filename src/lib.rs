pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod generator;
pub mod models;
pub mod navigation;
pub mod render;
pub mod session;
pub mod storage;
pub mod store;

pub use error::{CatalogError, GenerationError, StorageError, StoreError};
pub use models::{CuisineType, DietaryLabel, Difficulty, Ingredient, Recipe};
pub use store::{GenerationOutcome, RecipeStore, StoreSnapshot};
