//! Order lifecycle integration tests against an in-memory database.

use shared::models::{ItemCustomizations, ItemKind, OrderItem, OrderStatus};
use stand_server::db::DbService;
use stand_server::db::repository::{
    CommentRepository, OrderRepository, SettingsRepository, UserRepository,
};
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

fn item(id: &str, kind: ItemKind, paid: bool, delivered: bool) -> OrderItem {
    OrderItem {
        item_id: id.to_string(),
        kind,
        customizations: ItemCustomizations::default(),
        is_paid: paid,
        is_delivered: delivered,
    }
}

#[tokio::test]
async fn test_order_numbers_are_monotonic() {
    let db = test_db().await;
    let user = test_user(&db, "maja").await;
    let repo = OrderRepository::new(db.clone());

    let first = repo
        .create(user.clone(), vec![item("a", ItemKind::Burger, false, false)], 1)
        .await
        .unwrap();
    let second = repo
        .create(user, vec![item("b", ItemKind::Fries, false, false)], 1)
        .await
        .unwrap();

    assert_eq!(first.order_number, 1);
    assert_eq!(second.order_number, 2);
    assert_eq!(first.status, OrderStatus::Waiting);
    assert!(first.completed_at.is_none());
}

#[tokio::test]
async fn test_counter_continues_after_manual_set() {
    let db = test_db().await;
    let user = test_user(&db, "maja").await;

    SettingsRepository::new(db.clone())
        .set_order_counter(100)
        .await
        .unwrap();

    let order = OrderRepository::new(db.clone())
        .create(user, vec![item("a", ItemKind::Burger, false, false)], 1)
        .await
        .unwrap();
    assert_eq!(order.order_number, 101);
}

#[tokio::test]
async fn test_completion_is_stamped_once() {
    let db = test_db().await;
    let user = test_user(&db, "maja").await;
    let repo = OrderRepository::new(db.clone());

    let order = repo
        .create(
            user,
            vec![
                item("a", ItemKind::Burger, false, false),
                item("b", ItemKind::Fries, false, false),
            ],
            1,
        )
        .await
        .unwrap();
    let id = order.id.unwrap().to_string();

    // Partially done: still waiting
    let partial = vec![
        item("a", ItemKind::Burger, true, true),
        item("b", ItemKind::Fries, true, false),
    ];
    let updated = repo.update_items(&id, partial).await.unwrap();
    assert_eq!(updated.status, OrderStatus::Waiting);
    assert!(updated.completed_at.is_none());

    // Everything paid and delivered: transitions exactly now
    let done = vec![
        item("a", ItemKind::Burger, true, true),
        item("b", ItemKind::Fries, true, true),
    ];
    let completed = repo.update_items(&id, done.clone()).await.unwrap();
    assert_eq!(completed.status, OrderStatus::Completed);
    let stamp = completed.completed_at.expect("completed_at must be set");

    // Reapplying the identical update changes nothing
    let again = repo.update_items(&id, done).await.unwrap();
    assert_eq!(again.status, OrderStatus::Completed);
    assert_eq!(again.completed_at, Some(stamp));

    // Completed is terminal: un-toggling an item keeps status and stamp
    let reverted = repo
        .update_items(&id, vec![item("a", ItemKind::Burger, false, false)])
        .await
        .unwrap();
    assert_eq!(reverted.status, OrderStatus::Completed);
    assert_eq!(reverted.completed_at, Some(stamp));
}

#[tokio::test]
async fn test_priority_orders_the_list() {
    let db = test_db().await;
    let user = test_user(&db, "maja").await;
    let repo = OrderRepository::new(db.clone());

    let first = repo
        .create(user.clone(), vec![item("a", ItemKind::Burger, false, false)], 1)
        .await
        .unwrap();
    let second = repo
        .create(user, vec![item("b", ItemKind::Burger, false, false)], 1)
        .await
        .unwrap();

    // Same priority: creation order wins
    let orders = repo.find_all().await.unwrap();
    assert_eq!(orders[0].order_number, first.order_number);

    // Bumping the second order moves it to the front
    let second_id = second.id.unwrap().to_string();
    repo.update_priority(&second_id, 5).await.unwrap();
    let orders = repo.find_all().await.unwrap();
    assert_eq!(orders[0].order_number, second.order_number);
    assert_eq!(orders[0].priority, 5);
}

#[tokio::test]
async fn test_delete_cascades_comments() {
    let db = test_db().await;
    let user = test_user(&db, "maja").await;
    let orders = OrderRepository::new(db.clone());
    let comments = CommentRepository::new(db.clone());

    let order = orders
        .create(user.clone(), vec![item("a", ItemKind::Burger, false, false)], 1)
        .await
        .unwrap();
    let order_rid = order.id.unwrap();
    let order_id = order_rid.to_string();

    comments
        .create(order_rid.clone(), "extra ketchup", user.clone(), "maja")
        .await
        .unwrap();
    comments
        .create(order_rid.clone(), "no rush", user, "maja")
        .await
        .unwrap();
    assert_eq!(comments.find_by_order(order_rid.clone()).await.unwrap().len(), 2);

    assert!(orders.delete(&order_id).await.unwrap());

    // No orphans left behind
    assert!(orders.find_by_id(&order_id).await.unwrap().is_none());
    assert!(comments.find_by_order(order_rid).await.unwrap().is_empty());

    // Deleting again reports false
    assert!(!orders.delete(&order_id).await.unwrap());
}

#[tokio::test]
async fn test_comment_resolution() {
    let db = test_db().await;
    let user = test_user(&db, "maja").await;
    let orders = OrderRepository::new(db.clone());
    let comments = CommentRepository::new(db.clone());

    let order = orders
        .create(user.clone(), vec![item("a", ItemKind::Burger, false, false)], 1)
        .await
        .unwrap();
    let order_rid = order.id.unwrap();

    let comment = comments
        .create(order_rid.clone(), "gluten free bun?", user, "maja")
        .await
        .unwrap();
    assert!(!comment.is_resolved);

    let comment_id = comment.id.unwrap().to_string();
    let resolved = comments
        .resolve(order_rid.clone(), &comment_id)
        .await
        .unwrap();
    assert!(resolved.is_resolved);

    // Resolving through the wrong order is a not-found
    let other = orders
        .create(
            resolved.author.clone(),
            vec![item("x", ItemKind::Fries, false, false)],
            1,
        )
        .await
        .unwrap();
    assert!(
        comments
            .resolve(other.id.unwrap(), &comment_id)
            .await
            .is_err()
    );
}
