//! API-facing entity models
//!
//! One module per collection, mirroring the server's database layer.

pub mod comment;
pub mod expense;
pub mod gallery;
pub mod order;
pub mod settings;
pub mod user;

pub use comment::Comment;
pub use expense::{ExpenseAction, ExpenseItem};
pub use gallery::{Album, Photo};
pub use order::{ItemCustomizations, ItemKind, Order, OrderItem, OrderStatus};
pub use settings::{ActiveRecipe, OrderCounter, PriceSettings, Recipe};
pub use user::User;
