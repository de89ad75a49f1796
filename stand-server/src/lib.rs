//! Stand Server - ordering backend for a food stand
//!
//! # Overview
//!
//! A single server process owning an embedded SurrealDB instance,
//! serving the HTTP API the stand's browser clients run against:
//!
//! - **Orders** (`api/orders`, `api/comments`): burgers and fries with
//!   per-ingredient customization, payment/delivery tracking and an
//!   automatic waiting -> completed transition
//! - **Settings** (`api/settings`): recipes, the ingredient master
//!   list, prices and the order counter
//! - **Gallery** (`api/albums`, `api/photos`): albums with compressed
//!   photo storage on disk
//! - **Expenses** (`api/expenses`): cash expense tracking with
//!   denormalized per-action totals
//! - **Real-time sync** (`message`): broadcast bus pushed to clients
//!   over the events WebSocket
//!
//! # Module structure
//!
//! ```text
//! stand-server/src/
//! ├── core/          # config, state, server
//! ├── auth/          # JWT auth for nickname accounts
//! ├── api/           # HTTP routes and handlers
//! ├── db/            # embedded SurrealDB, models, repositories
//! ├── message/       # broadcast bus
//! ├── storage/       # photo files on disk
//! └── utils/         # errors, logging, validation
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod message;
pub mod storage;
pub mod utils;

// Re-export public types
pub use auth::{CurrentUser, JwtService};
pub use core::{Config, Server, ServerState};
pub use db::DbService;
pub use message::MessageBus;
pub use storage::PhotoStore;
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

pub fn print_banner() {
    println!(
        r#"
   _____ __                  __
  / ___// /_____ _____  ____/ /
  \__ \/ __/ __ `/ __ \/ __  /
 ___/ / /_/ /_/ / / / / /_/ /
/____/\__/\__,_/_/ /_/\__,_/
    "#
    );
}
