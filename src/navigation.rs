use crate::catalog;
use crate::generator::RecipeSource;
use crate::models::{Ingredient, Recipe};
use crate::store::RecipeStore;
use std::fmt;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Generator,
    RecipeDetail(String),
    Saved,
}

impl Route {
    /// Parses an app path such as `/recipe/<id>`. Unknown paths yield `None`.
    pub fn parse(path: &str) -> Option<Route> {
        let trimmed = path.trim().trim_end_matches('/');
        let segments: Vec<&str> = trimmed.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Some(Route::Home),
            ["generator"] => Some(Route::Generator),
            ["saved"] => Some(Route::Saved),
            ["recipe", id] => Some(Route::RecipeDetail(id.to_string())),
            _ => None,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Generator => "/generator".to_string(),
            Route::RecipeDetail(id) => format!("/recipe/{}", id),
            Route::Saved => "/saved".to_string(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Data a front end needs to draw one page.
#[derive(Debug, Clone, PartialEq)]
pub enum View<'a> {
    Home,
    Generator {
        catalog: Vec<Ingredient>,
        results: &'a [Recipe],
        is_loading: bool,
    },
    RecipeDetail {
        recipe: &'a Recipe,
        is_saved: bool,
    },
    Saved {
        recipes: &'a [Recipe],
    },
    /// The requested page cannot be shown; go here instead.
    Redirect(Route),
}

pub fn resolve<'a, S: RecipeSource>(route: &Route, store: &'a RecipeStore<S>) -> View<'a> {
    match route {
        Route::Home => View::Home,
        Route::Generator => View::Generator {
            catalog: catalog::common_ingredients(),
            results: store.generated(),
            is_loading: store.is_loading(),
        },
        Route::RecipeDetail(id) => match store.find_by_id(id) {
            Some(recipe) => View::RecipeDetail {
                recipe,
                is_saved: store.is_saved(id),
            },
            None => {
                debug!(id = %id, "recipe not found, redirecting to generator");
                View::Redirect(Route::Generator)
            }
        },
        Route::Saved => View::Saved { recipes: store.saved() },
    }
}
