//! Gallery and expense integration tests: denormalized counters and
//! cascade deletes.

use rust_decimal::Decimal;
use stand_server::db::DbService;
use stand_server::db::repository::{
    AlbumRepository, ExpenseRepository, PhotoRepository, UserRepository,
};
use stand_server::db::models::ExpenseItemUpdate;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

async fn test_db() -> Surreal<Db> {
    DbService::open_in_memory().await.unwrap()
}

async fn test_user(db: &Surreal<Db>, nickname: &str) -> surrealdb::RecordId {
    UserRepository::new(db.clone())
        .create(nickname)
        .await
        .unwrap()
        .id
        .unwrap()
}

/// Cent amounts exactly representable as binary floats, since amounts
/// cross the storage layer as floats.
fn eur(cents: i64) -> Decimal {
    assert_eq!(cents % 25, 0);
    Decimal::new(cents, 2)
}

#[tokio::test]
async fn test_photo_count_tracks_inserts_and_deletes() {
    let db = test_db().await;
    let user = test_user(&db, "maja").await;
    let albums = AlbumRepository::new(db.clone());
    let photos = PhotoRepository::new(db.clone());

    let album = albums.create("Opening day", user.clone()).await.unwrap();
    let album_rid = album.id.unwrap();
    let album_id = album_rid.to_string();
    assert_eq!(album.photo_count, 0);

    let p1 = photos
        .create(album_rid.clone(), "/photos/a/1.jpg", "/photos/a/thumbnails/1.jpg", "1.jpg", user.clone())
        .await
        .unwrap();
    photos
        .create(album_rid.clone(), "/photos/a/2.jpg", "/photos/a/thumbnails/2.jpg", "2.jpg", user)
        .await
        .unwrap();

    let album = albums.find_by_id(&album_id).await.unwrap().unwrap();
    assert_eq!(album.photo_count, 2);
    assert_eq!(photos.find_by_album(album_rid.clone()).await.unwrap().len(), 2);

    let deleted = photos.delete(&p1.id.unwrap().to_string()).await.unwrap();
    assert_eq!(deleted.file_name, "1.jpg");

    let album = albums.find_by_id(&album_id).await.unwrap().unwrap();
    assert_eq!(album.photo_count, 1);
}

#[tokio::test]
async fn test_album_delete_cascades_photos() {
    let db = test_db().await;
    let user = test_user(&db, "maja").await;
    let albums = AlbumRepository::new(db.clone());
    let photos = PhotoRepository::new(db.clone());

    let album = albums.create("Halloween", user.clone()).await.unwrap();
    let album_rid = album.id.unwrap();
    let album_id = album_rid.to_string();

    for n in 0..3 {
        photos
            .create(
                album_rid.clone(),
                &format!("/photos/h/{n}.jpg"),
                &format!("/photos/h/thumbnails/{n}.jpg"),
                &format!("{n}.jpg"),
                user.clone(),
            )
            .await
            .unwrap();
    }

    assert!(albums.delete(&album_id).await.unwrap());
    assert!(albums.find_by_id(&album_id).await.unwrap().is_none());
    assert!(photos.find_by_album(album_rid).await.unwrap().is_empty());
    assert!(photos.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_album_rename_leaves_others_alone() {
    let db = test_db().await;
    let user = test_user(&db, "maja").await;
    let albums = AlbumRepository::new(db.clone());

    let first = albums.create("Spring", user.clone()).await.unwrap();
    let second = albums.create("Summer", user).await.unwrap();

    let first_id = first.id.unwrap().to_string();
    let renamed = albums.rename(&first_id, "Spring 2026").await.unwrap();
    assert_eq!(renamed.name, "Spring 2026");

    let second_again = albums
        .find_by_id(&second.id.unwrap().to_string())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(second_again.name, "Summer");
}

#[tokio::test]
async fn test_expense_totals_follow_items() {
    let db = test_db().await;
    let user = test_user(&db, "maja").await;
    let expenses = ExpenseRepository::new(db.clone());

    let action = expenses.create_action("Halloween 2025", user.clone()).await.unwrap();
    let action_rid = action.id.unwrap();
    let action_id = action_rid.to_string();
    assert_eq!(action.total_amount, Decimal::ZERO);
    assert_eq!(action.item_count, 0);

    let groceries = expenses
        .add_item(action_rid.clone(), "Kaufland", eur(12_50), None, user.clone())
        .await
        .unwrap();
    expenses
        .add_item(action_rid.clone(), "Napkins", eur(7_25), None, user)
        .await
        .unwrap();

    let action = expenses.find_action(&action_id).await.unwrap().unwrap();
    assert_eq!(action.total_amount, eur(19_75));
    assert_eq!(action.item_count, 2);

    // Amount change adjusts the total by the difference
    let groceries_id = groceries.id.unwrap().to_string();
    let updated = expenses
        .update_item(
            &groceries_id,
            ExpenseItemUpdate {
                description: None,
                amount: Some(eur(10_00)),
                photo_id: None,
                clear_photo: false,
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.amount, eur(10_00));
    assert_eq!(updated.description, "Kaufland");

    let action = expenses.find_action(&action_id).await.unwrap().unwrap();
    assert_eq!(action.total_amount, eur(17_25));
    assert_eq!(action.item_count, 2);

    // Deleting subtracts amount and count
    expenses.delete_item(&groceries_id).await.unwrap();
    let action = expenses.find_action(&action_id).await.unwrap().unwrap();
    assert_eq!(action.total_amount, eur(7_25));
    assert_eq!(action.item_count, 1);
}

#[tokio::test]
async fn test_expense_action_delete_cascades_items() {
    let db = test_db().await;
    let user = test_user(&db, "maja").await;
    let expenses = ExpenseRepository::new(db.clone());

    let action = expenses.create_action("Closing party", user.clone()).await.unwrap();
    let action_rid = action.id.unwrap();
    let action_id = action_rid.to_string();

    let item = expenses
        .add_item(action_rid.clone(), "Drinks", eur(25_00), None, user)
        .await
        .unwrap();

    assert!(expenses.delete_action(&action_id).await.unwrap());
    assert!(expenses.find_action(&action_id).await.unwrap().is_none());
    assert!(expenses.find_items(action_rid).await.unwrap().is_empty());
    assert!(
        expenses
            .find_item(&item.id.unwrap().to_string())
            .await
            .unwrap()
            .is_none()
    );
}

#[tokio::test]
async fn test_expense_photo_link_set_and_cleared() {
    let db = test_db().await;
    let user = test_user(&db, "maja").await;
    let albums = AlbumRepository::new(db.clone());
    let photos = PhotoRepository::new(db.clone());
    let expenses = ExpenseRepository::new(db.clone());

    let album = albums.create("Receipts", user.clone()).await.unwrap();
    let photo = photos
        .create(
            album.id.unwrap(),
            "/photos/r/1.jpg",
            "/photos/r/thumbnails/1.jpg",
            "1.jpg",
            user.clone(),
        )
        .await
        .unwrap();
    let photo_rid = photo.id.unwrap();

    let action = expenses.create_action("Autumn", user.clone()).await.unwrap();
    let item = expenses
        .add_item(
            action.id.unwrap(),
            "Kaufland",
            eur(5_00),
            Some(photo_rid.clone()),
            user,
        )
        .await
        .unwrap();
    assert_eq!(item.photo, Some(photo_rid));

    let item_id = item.id.unwrap().to_string();
    let cleared = expenses
        .update_item(
            &item_id,
            ExpenseItemUpdate {
                description: None,
                amount: None,
                photo_id: None,
                clear_photo: true,
            },
        )
        .await
        .unwrap();
    assert_eq!(cleared.photo, None);
    assert_eq!(cleared.amount, eur(5_00));
}
