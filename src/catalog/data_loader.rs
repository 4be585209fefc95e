use crate::error::CatalogError;
use crate::models::Ingredient;
use csv::ReaderBuilder;
use std::path::Path;

const ID_COL: &str = "id";
const NAME_COL: &str = "name";
const CATEGORY_COL: &str = "category";

/// Loads an ingredient catalog from a CSV file.
///
/// `name` is required. `id` and `category` are optional columns; rows
/// without an id get their 1-based row number, blank categories become
/// `None`. Rows with an empty name are skipped.
pub fn load_catalog_csv(csv_path: &Path) -> Result<Vec<Ingredient>, CatalogError> {
    if !csv_path.exists() {
        return Err(CatalogError::NotFound(csv_path.to_path_buf()));
    }

    let file = std::fs::File::open(csv_path)?;
    let mut rdr = ReaderBuilder::new().has_headers(true).trim(csv::Trim::All).from_reader(file);

    let headers = rdr.headers()?.clone();
    let column = |wanted: &str| headers.iter().position(|h| h.eq_ignore_ascii_case(wanted));

    let name_idx = column(NAME_COL).ok_or(CatalogError::MissingColumn(NAME_COL))?;
    let id_idx = column(ID_COL);
    let category_idx = column(CATEGORY_COL);

    let mut catalog = Vec::new();
    for (row_index, result) in rdr.records().enumerate() {
        let record = result?;

        let name = record.get(name_idx).unwrap_or("").to_string();
        if name.is_empty() {
            continue;
        }

        let id = id_idx
            .and_then(|idx| record.get(idx))
            .filter(|id| !id.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| (row_index + 1).to_string());
        let category = category_idx
            .and_then(|idx| record.get(idx))
            .filter(|c| !c.is_empty());

        catalog.push(Ingredient::new(id, name, category));
    }

    if catalog.is_empty() {
        return Err(CatalogError::Empty(csv_path.to_path_buf()));
    }

    Ok(catalog)
}
