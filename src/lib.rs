//! Booking Server — table reservation backend
//!
//! # Architecture
//!
//! - **HTTP API** (`api`): booking CRUD and health check routes
//! - **Database** (`db`): SQLite store (sqlx pool) and booking repository
//! - **Core** (`core`): configuration, shared state, server startup
//!
//! # Module structure
//!
//! ```text
//! src/
//! ├── core/          # config, state, server
//! ├── api/           # HTTP routes and handlers
//! ├── db/            # models and repository
//! └── utils/         # errors, logging
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod utils;

// Re-export public types
pub use core::{Config, Server, ServerState};
pub use utils::{AppError, AppResult};

/// Prepare the process environment: `.env` file and logging
pub fn setup_environment() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    let config = Config::from_env();
    utils::logger::init_logger_with_file(&config.log_level, config.log_dir.as_deref());

    Ok(())
}
