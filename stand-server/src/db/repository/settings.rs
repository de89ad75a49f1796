//! Settings Repository
//!
//! Singleton documents in the `setting` table: the ingredient master
//! list, the prices and the order counter. Missing documents read as
//! their defaults; writes go through upserts.

use shared::models::{OrderCounter, PriceSettings};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoResult};
use crate::db::models::IngredientsDoc;

const TABLE: &str = "setting";
const INGREDIENTS_KEY: &str = "ingredients";
const PRICES_KEY: &str = "prices";
const COUNTER_KEY: &str = "order_counter";

#[derive(Clone)]
pub struct SettingsRepository {
    base: BaseRepository,
}

impl SettingsRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// The ingredient master list, in insertion order.
    pub async fn ingredients(&self) -> RepoResult<Vec<String>> {
        let doc: Option<IngredientsDoc> =
            self.base.db().select((TABLE, INGREDIENTS_KEY)).await?;
        Ok(doc.unwrap_or_default().ingredients)
    }

    /// Add an ingredient. Adding an existing one is a no-op.
    pub async fn add_ingredient(&self, ingredient: &str) -> RepoResult<Vec<String>> {
        let mut list = self.ingredients().await?;
        if !list.iter().any(|i| i == ingredient) {
            list.push(ingredient.to_string());
            self.save_ingredients(list.clone()).await?;
        }
        Ok(list)
    }

    /// Remove an ingredient from the master list.
    pub async fn remove_ingredient(&self, ingredient: &str) -> RepoResult<Vec<String>> {
        let mut list = self.ingredients().await?;
        list.retain(|i| i != ingredient);
        self.save_ingredients(list.clone()).await?;
        Ok(list)
    }

    async fn save_ingredients(&self, ingredients: Vec<String>) -> RepoResult<()> {
        let _: Option<IngredientsDoc> = self
            .base
            .db()
            .upsert((TABLE, INGREDIENTS_KEY))
            .content(IngredientsDoc { ingredients })
            .await?;
        Ok(())
    }

    /// Unit prices; defaults when never configured.
    pub async fn prices(&self) -> RepoResult<PriceSettings> {
        let prices: Option<PriceSettings> = self.base.db().select((TABLE, PRICES_KEY)).await?;
        Ok(prices.unwrap_or_default())
    }

    /// Replace the unit prices.
    pub async fn set_prices(&self, prices: PriceSettings) -> RepoResult<PriceSettings> {
        let _: Option<PriceSettings> = self
            .base
            .db()
            .upsert((TABLE, PRICES_KEY))
            .content(prices.clone())
            .await?;
        Ok(prices)
    }

    /// Current order counter value (0 when never used).
    pub async fn order_counter(&self) -> RepoResult<OrderCounter> {
        let counter: Option<OrderCounter> = self.base.db().select((TABLE, COUNTER_KEY)).await?;
        Ok(counter.unwrap_or_default())
    }

    /// Manually set the order counter (season resets).
    pub async fn set_order_counter(&self, current_number: i64) -> RepoResult<OrderCounter> {
        let counter = OrderCounter { current_number };
        let _: Option<OrderCounter> = self
            .base
            .db()
            .upsert((TABLE, COUNTER_KEY))
            .content(counter)
            .await?;
        Ok(counter)
    }
}
