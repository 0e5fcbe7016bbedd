use std::fs;
use std::path::Path;

use plife_core::Recipe;

/// Write a recipe to disk as plain text, truncating any existing file.
/// A failure partway may leave a truncated file behind; no cleanup is
/// attempted.
pub fn save_recipe(recipe: &Recipe, path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| format!("Failed to create dir: {e}"))?;
    }
    fs::write(path, recipe.render()).map_err(|e| format!("Write error: {e}"))
}
