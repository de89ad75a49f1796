//! Type conversions
//!
//! Database records (`db::models`) to API response models
//! (`shared::models`). Record ids go out in their full "table:key"
//! form, which the repositories accept back.

use surrealdb::RecordId;

use crate::db::models as db;
use shared::models as api;

// ============ Helpers ============

pub fn record_id_to_string(id: &RecordId) -> String {
    id.to_string()
}

pub fn option_record_id_to_string(id: &Option<RecordId>) -> Option<String> {
    id.as_ref().map(record_id_to_string)
}

// ============ User ============

impl From<db::User> for api::User {
    fn from(u: db::User) -> Self {
        Self {
            id: option_record_id_to_string(&u.id),
            nickname: u.nickname,
            created_at: u.created_at,
        }
    }
}

// ============ Order ============

impl From<db::Order> for api::Order {
    fn from(o: db::Order) -> Self {
        Self {
            id: option_record_id_to_string(&o.id),
            order_number: o.order_number,
            priority: o.priority,
            created_at: o.created_at,
            completed_at: o.completed_at,
            created_by: record_id_to_string(&o.created_by),
            status: o.status,
            items: o.items,
        }
    }
}

// ============ Comment ============

impl From<db::Comment> for api::Comment {
    fn from(c: db::Comment) -> Self {
        Self {
            id: option_record_id_to_string(&c.id),
            order_id: record_id_to_string(&c.order_id),
            text: c.text,
            author_id: record_id_to_string(&c.author),
            author_nickname: c.author_nickname,
            is_resolved: c.is_resolved,
            created_at: c.created_at,
        }
    }
}

// ============ Recipe ============

impl From<db::Recipe> for api::Recipe {
    fn from(r: db::Recipe) -> Self {
        Self {
            id: option_record_id_to_string(&r.id),
            name: r.name,
            ingredients: r.ingredients,
            is_active: r.is_active,
            created_at: r.created_at,
        }
    }
}

// ============ Gallery ============

impl From<db::Album> for api::Album {
    fn from(a: db::Album) -> Self {
        Self {
            id: option_record_id_to_string(&a.id),
            name: a.name,
            created_at: a.created_at,
            created_by: record_id_to_string(&a.created_by),
            photo_count: a.photo_count,
        }
    }
}

impl From<db::Photo> for api::Photo {
    fn from(p: db::Photo) -> Self {
        Self {
            id: option_record_id_to_string(&p.id),
            album_id: record_id_to_string(&p.album),
            url: p.url,
            thumbnail_url: p.thumbnail_url,
            file_name: p.file_name,
            uploaded_at: p.uploaded_at,
            uploaded_by: record_id_to_string(&p.uploaded_by),
        }
    }
}

// ============ Expenses ============

impl From<db::ExpenseAction> for api::ExpenseAction {
    fn from(a: db::ExpenseAction) -> Self {
        Self {
            id: option_record_id_to_string(&a.id),
            name: a.name,
            created_at: a.created_at,
            created_by: record_id_to_string(&a.created_by),
            total_amount: a.total_amount,
            item_count: a.item_count,
        }
    }
}

impl From<db::ExpenseItem> for api::ExpenseItem {
    fn from(i: db::ExpenseItem) -> Self {
        Self {
            id: option_record_id_to_string(&i.id),
            action_id: record_id_to_string(&i.action),
            description: i.description,
            amount: i.amount,
            photo_id: option_record_id_to_string(&i.photo),
            created_at: i.created_at,
            created_by: record_id_to_string(&i.created_by),
        }
    }
}
