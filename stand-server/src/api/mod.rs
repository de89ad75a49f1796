//! API routes
//!
//! # Structure
//!
//! - [`health`] - liveness check
//! - [`auth`] - nickname accounts and tokens
//! - [`orders`] - orders and the item lifecycle
//! - [`comments`] - order comment threads
//! - [`settings`] - recipes, ingredients, prices, order counter
//! - [`stats`] - queue and stand-wide statistics
//! - [`albums`] / [`photos`] - photo gallery and uploads
//! - [`expenses`] - cash expense tracking
//! - [`events`] - real-time sync WebSocket

pub mod convert;

pub mod albums;
pub mod auth;
pub mod comments;
pub mod events;
pub mod expenses;
pub mod health;
pub mod orders;
pub mod photos;
pub mod settings;
pub mod stats;

// Re-export common types for handlers
pub use crate::utils::{AppError, AppResult};
