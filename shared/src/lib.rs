//! Types shared between the stand server and its clients.
//!
//! Holds the API-facing entity models, the pure order calculations
//! (filters, ingredient customization, statistics), and the message
//! bus envelope used for real-time sync. The server never exposes its
//! database records directly; everything on the wire is defined here.

pub mod customize;
pub mod filter;
pub mod message;
pub mod models;
pub mod stats;

pub use customize::IngredientLevel;
pub use filter::{FilterState, OrderFilters};
pub use message::{BusMessage, EventType, SyncPayload};
pub use models::{ItemKind, Order, OrderItem, OrderStatus};
