//! Recipe Repository
//!
//! At most one recipe is active at any time; `set_active` flips the
//! flags of the whole table inside one transaction to preserve that.

use chrono::{DateTime, Utc};
use serde::Serialize;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult, record_id};
use crate::db::models::{Recipe, RecipeCreate, RecipeUpdate};

const TABLE: &str = "recipe";

#[derive(Clone)]
pub struct RecipeRepository {
    base: BaseRepository,
}

impl RecipeRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// All recipes, oldest first.
    pub async fn find_all(&self) -> RepoResult<Vec<Recipe>> {
        let recipes: Vec<Recipe> = self
            .base
            .db()
            .query("SELECT * FROM recipe ORDER BY created_at ASC")
            .await?
            .take(0)?;
        Ok(recipes)
    }

    /// Find recipe by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Recipe>> {
        let recipe: Option<Recipe> = self.base.db().select(record_id(TABLE, id)).await?;
        Ok(recipe)
    }

    /// Find recipe by name
    pub async fn find_by_name(&self, name: &str) -> RepoResult<Option<Recipe>> {
        let name = name.to_string();
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM recipe WHERE name = $name LIMIT 1")
            .bind(("name", name))
            .await?;
        let recipes: Vec<Recipe> = result.take(0)?;
        Ok(recipes.into_iter().next())
    }

    /// The currently active recipe, if any.
    pub async fn active(&self) -> RepoResult<Option<Recipe>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM recipe WHERE is_active = true LIMIT 1")
            .await?;
        let recipes: Vec<Recipe> = result.take(0)?;
        Ok(recipes.into_iter().next())
    }

    /// Create a new, inactive recipe.
    pub async fn create(&self, data: RecipeCreate) -> RepoResult<Recipe> {
        if self.find_by_name(&data.name).await?.is_some() {
            return Err(RepoError::Duplicate(format!(
                "Recipe '{}' already exists",
                data.name
            )));
        }

        #[derive(Serialize)]
        struct RecipeContent {
            name: String,
            ingredients: Vec<String>,
            is_active: bool,
            created_at: DateTime<Utc>,
        }

        let created: Option<Recipe> = self
            .base
            .db()
            .create(TABLE)
            .content(RecipeContent {
                name: data.name,
                ingredients: data.ingredients,
                is_active: false,
                created_at: Utc::now(),
            })
            .await?;
        created.ok_or_else(|| RepoError::Database("Failed to create recipe".to_string()))
    }

    /// Update name and/or ingredient list of a recipe.
    pub async fn update(&self, id: &str, data: RecipeUpdate) -> RepoResult<Recipe> {
        let existing = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Recipe {} not found", id)))?;

        if let Some(ref new_name) = data.name
            && new_name != &existing.name
            && self.find_by_name(new_name).await?.is_some()
        {
            return Err(RepoError::Duplicate(format!(
                "Recipe '{}' already exists",
                new_name
            )));
        }

        #[derive(Serialize)]
        struct RecipeMerge {
            #[serde(skip_serializing_if = "Option::is_none")]
            name: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            ingredients: Option<Vec<String>>,
        }

        let mut result = self
            .base
            .db()
            .query("UPDATE $recipe MERGE $data RETURN AFTER")
            .bind(("recipe", record_id(TABLE, id)))
            .bind((
                "data",
                RecipeMerge {
                    name: data.name,
                    ingredients: data.ingredients,
                },
            ))
            .await?;
        let recipes: Vec<Recipe> = result.take(0)?;
        recipes
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::NotFound(format!("Recipe {} not found", id)))
    }

    /// Delete a recipe. Deleting the active one leaves no recipe
    /// active.
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let rid = record_id(TABLE, id);
        let deleted: Option<Recipe> = self.base.db().delete(rid).await?;
        Ok(deleted.is_some())
    }

    /// Make the given recipe the single active one.
    pub async fn set_active(&self, id: &str) -> RepoResult<Recipe> {
        if self.find_by_id(id).await?.is_none() {
            return Err(RepoError::NotFound(format!("Recipe {} not found", id)));
        }

        let rid = record_id(TABLE, id);
        self.base
            .db()
            .query(
                "BEGIN TRANSACTION;
                 UPDATE recipe SET is_active = false WHERE is_active = true;
                 UPDATE $recipe SET is_active = true;
                 COMMIT TRANSACTION;",
            )
            .bind(("recipe", rid))
            .await?
            .check()?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Recipe {} not found", id)))
    }
}
