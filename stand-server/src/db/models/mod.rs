//! Database Models
//!
//! Record types as stored in SurrealDB, plus the API request payloads
//! they are created and updated from. API responses use the models
//! from the `shared` crate; conversions live in `api::convert`.

pub mod comment;
pub mod expense;
pub mod gallery;
pub mod order;
pub mod settings;
pub mod user;

pub use comment::{Comment, CommentCreate};
pub use expense::{
    ExpenseAction, ExpenseActionCreate, ExpenseActionRename, ExpenseItem, ExpenseItemCreate,
    ExpenseItemUpdate,
};
pub use gallery::{Album, AlbumCreate, AlbumRename, Photo};
pub use order::{ItemsUpdate, Order, OrderCreate, OrderItemInput, PriorityUpdate};
pub use settings::{CounterUpdate, IngredientAdd, IngredientsDoc, Recipe, RecipeCreate, RecipeUpdate};
pub use user::{NicknameRequest, User};
