//! Settings, recipe and account integration tests.

use rust_decimal::Decimal;
use stand_server::db::DbService;
use stand_server::db::models::{RecipeCreate, RecipeUpdate};
use stand_server::db::repository::{
    RecipeRepository, RepoError, SettingsRepository, UserRepository,
};
use shared::models::PriceSettings;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

async fn test_db() -> Surreal<Db> {
    DbService::open_in_memory().await.unwrap()
}

fn classic() -> RecipeCreate {
    RecipeCreate {
        name: "Classic".to_string(),
        ingredients: vec![
            "bun".to_string(),
            "patty".to_string(),
            "cheese".to_string(),
            "onion".to_string(),
        ],
    }
}

#[tokio::test]
async fn test_ingredient_list_add_is_idempotent() {
    let db = test_db().await;
    let repo = SettingsRepository::new(db);

    assert!(repo.ingredients().await.unwrap().is_empty());

    repo.add_ingredient("cheese").await.unwrap();
    repo.add_ingredient("onion").await.unwrap();
    let list = repo.add_ingredient("cheese").await.unwrap();
    assert_eq!(list, vec!["cheese".to_string(), "onion".to_string()]);

    let list = repo.remove_ingredient("cheese").await.unwrap();
    assert_eq!(list, vec!["onion".to_string()]);

    // Removing something unknown is harmless
    let list = repo.remove_ingredient("pineapple").await.unwrap();
    assert_eq!(list, vec!["onion".to_string()]);
}

#[tokio::test]
async fn test_at_most_one_recipe_is_active() {
    let db = test_db().await;
    let repo = RecipeRepository::new(db);

    let first = repo.create(classic()).await.unwrap();
    let second = repo
        .create(RecipeCreate {
            name: "Spicy".to_string(),
            ingredients: vec!["bun".to_string(), "patty".to_string(), "jalapeno".to_string()],
        })
        .await
        .unwrap();

    // New recipes start inactive
    assert!(repo.active().await.unwrap().is_none());

    let first_id = first.id.unwrap().to_string();
    let second_id = second.id.unwrap().to_string();

    repo.set_active(&first_id).await.unwrap();
    assert_eq!(repo.active().await.unwrap().unwrap().name, "Classic");

    repo.set_active(&second_id).await.unwrap();
    let recipes = repo.find_all().await.unwrap();
    let active: Vec<_> = recipes.iter().filter(|r| r.is_active).collect();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].name, "Spicy");

    // Deleting the active recipe leaves none active
    assert!(repo.delete(&second_id).await.unwrap());
    assert!(repo.active().await.unwrap().is_none());
}

#[tokio::test]
async fn test_recipe_names_are_unique() {
    let db = test_db().await;
    let repo = RecipeRepository::new(db);

    repo.create(classic()).await.unwrap();
    assert!(matches!(
        repo.create(classic()).await,
        Err(RepoError::Duplicate(_))
    ));
}

#[tokio::test]
async fn test_recipe_update_changes_only_target() {
    let db = test_db().await;
    let repo = RecipeRepository::new(db);

    let first = repo.create(classic()).await.unwrap();
    let second = repo
        .create(RecipeCreate {
            name: "Vegan".to_string(),
            ingredients: vec!["bun".to_string(), "falafel".to_string()],
        })
        .await
        .unwrap();

    let first_id = first.id.unwrap().to_string();
    let updated = repo
        .update(
            &first_id,
            RecipeUpdate {
                name: Some("Classic XL".to_string()),
                ingredients: Some(vec![
                    "bun".to_string(),
                    "patty".to_string(),
                    "patty".to_string(),
                ]),
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.name, "Classic XL");
    assert_eq!(updated.ingredients.len(), 3);

    let second_again = repo
        .find_by_id(&second.id.unwrap().to_string())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(second_again.name, "Vegan");
    assert_eq!(second_again.ingredients.len(), 2);
}

#[tokio::test]
async fn test_prices_default_and_roundtrip() {
    let db = test_db().await;
    let repo = SettingsRepository::new(db);

    // Unconfigured prices read as the defaults
    let prices = repo.prices().await.unwrap();
    assert_eq!(prices.burger_price, Decimal::from(5));
    assert_eq!(prices.fries_price, Decimal::from(2));

    repo.set_prices(PriceSettings {
        burger_price: Decimal::new(6_50, 2),
        fries_price: Decimal::new(2_25, 2),
    })
    .await
    .unwrap();

    let prices = repo.prices().await.unwrap();
    assert_eq!(prices.burger_price, Decimal::new(6_50, 2));
    assert_eq!(prices.fries_price, Decimal::new(2_25, 2));
}

#[tokio::test]
async fn test_nicknames_are_unique() {
    let db = test_db().await;
    let repo = UserRepository::new(db);

    let user = repo.create("maja").await.unwrap();
    assert!(matches!(
        repo.create("maja").await,
        Err(RepoError::Duplicate(_))
    ));

    let other = repo.create("peto").await.unwrap();
    let other_id = other.id.unwrap().to_string();
    assert!(matches!(
        repo.update_nickname(&other_id, "maja").await,
        Err(RepoError::Duplicate(_))
    ));

    let renamed = repo.update_nickname(&other_id, "petra").await.unwrap();
    assert_eq!(renamed.nickname, "petra");

    // The original account is untouched
    let first = repo
        .find_by_id(&user.id.unwrap().to_string())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(first.nickname, "maja");
}
