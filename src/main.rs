use anyhow::{Context, Result};
use recipe_finder::catalog::{self, load_catalog_csv};
use recipe_finder::cli::{parse_args, Cli, Command};
use recipe_finder::config::AppConfig;
use recipe_finder::generator::RuleBasedGenerator;
use recipe_finder::models::{Ingredient, Recipe};
use recipe_finder::navigation::{resolve, Route, View};
use recipe_finder::render;
use recipe_finder::session::IngredientSelection;
use recipe_finder::storage::FileStorage;
use recipe_finder::store::{GenerationOutcome, RecipeStore};
use std::time::Duration;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

type Store = RecipeStore<RuleBasedGenerator>;

fn init_logging(verbose: bool) {
    let default_level = if verbose { "recipe_finder=debug" } else { "recipe_finder=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(cli: &Cli) -> Result<AppConfig> {
    let mut config = AppConfig::from_env().context("Failed to read configuration from the environment")?;
    if let Some(dir) = &cli.data_dir {
        config.data_dir = dir.clone();
    }
    if let Some(millis) = cli.delay_ms {
        config.generation_delay = Duration::from_millis(millis);
    }
    Ok(config)
}

/// Catalog entries are matched by name so picks keep their category;
/// anything else becomes a custom ingredient.
fn select_ingredients(names: &[String]) -> IngredientSelection {
    let known = catalog::common_ingredients();
    let mut selection = IngredientSelection::new();
    for name in names {
        match known.iter().find(|i| i.name.eq_ignore_ascii_case(name.trim())) {
            Some(ingredient) => {
                selection.select(ingredient.clone());
            }
            None => {
                selection.add_custom(name);
            }
        }
    }
    selection
}

fn print_recipes(recipes: &[&Recipe], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(recipes)?);
    } else {
        for recipe in recipes {
            println!("{}", render::recipe_card(recipe));
        }
    }
    Ok(())
}

fn list_ingredients(search: Option<String>, catalog_path: Option<std::path::PathBuf>) -> Result<()> {
    let items: Vec<Ingredient> = match catalog_path {
        Some(path) => load_catalog_csv(&path)
            .with_context(|| format!("Failed to load ingredient catalog from '{}'", path.display()))?,
        None => catalog::common_ingredients(),
    };
    let matches = catalog::filter(&items, search.as_deref().unwrap_or(""), &[]);
    if matches.is_empty() {
        println!("No ingredients match.");
        return Ok(());
    }
    print!("{}", render::catalog_groups(&catalog::group_by_category(&matches)));
    Ok(())
}

async fn generate(store: &mut Store, names: &[String], save: bool, json: bool) -> Result<()> {
    let selection = select_ingredients(names);
    if !selection.can_generate(store.is_loading()) {
        anyhow::bail!("Select at least one ingredient before generating recipes");
    }

    debug!(selected = ?selection.items().iter().map(|i| &i.name).collect::<Vec<_>>(), "generating");
    if !json {
        println!("Generating recipes...");
    }

    match store.generate(selection.items()).await? {
        GenerationOutcome::Generated(count) => info!(count, "generation finished"),
        GenerationOutcome::Failed => {
            println!("No recipes found for your ingredients. Try adding more or different ones.");
            return Ok(());
        }
    }

    let generated = store.generated().to_vec();
    if save {
        for recipe in &generated {
            store
                .save(recipe)
                .with_context(|| format!("Failed to save recipe '{}'", recipe.title))?;
        }
    }

    let refs: Vec<&Recipe> = generated.iter().collect();
    print_recipes(&refs, json)?;
    if save && !json {
        println!("Saved {} recipe(s).", generated.len());
    }
    Ok(())
}

fn show(store: &Store, id: &str) {
    match resolve(&Route::RecipeDetail(id.to_string()), store) {
        View::RecipeDetail { recipe, is_saved } => print!("{}", render::recipe_detail(recipe, is_saved)),
        View::Redirect(route) => {
            eprintln!("Recipe '{}' was not found.", id);
            if route == Route::Generator {
                eprintln!("Generate some with: recipe-finder generate -i <ingredient>");
            }
        }
        _ => {}
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = parse_args();
    init_logging(cli.verbose);

    let config = load_config(&cli)?;
    debug!(?config, "configuration loaded");

    let storage = FileStorage::new(&config.data_dir);
    let mut store = RecipeStore::open(RuleBasedGenerator::new(config.generation_delay), storage);

    match cli.command {
        Command::Ingredients { search, catalog } => list_ingredients(search, catalog)?,
        Command::Generate { ingredients, save, json } => generate(&mut store, &ingredients, save, json).await?,
        Command::Saved { search, json } => {
            let recipes = store.search_saved(search.as_deref().unwrap_or(""));
            if recipes.is_empty() && !json {
                println!("No saved recipes yet.");
            } else {
                print_recipes(&recipes, json)?;
            }
        }
        Command::Show { id } => show(&store, &id),
        Command::Remove { id } => {
            let removed = store
                .remove(&id)
                .with_context(|| format!("Failed to update saved recipes in '{}'", config.data_dir.display()))?;
            if removed {
                println!("Removed recipe {}.", id);
            } else {
                println!("Recipe {} was not in your saved list.", id);
            }
        }
    }

    Ok(())
}
