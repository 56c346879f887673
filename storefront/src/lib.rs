//! Urban Plate storefront
//!
//! Backend for the restaurant website: menu browsing, a session cart,
//! three checkout flows (delivery, pre-order, table booking) and sign-in.
//!
//! # Module structure
//!
//! ```text
//! storefront/src/
//! ├── core/       # config, state, server
//! ├── catalog/    # menu and restaurant content
//! ├── cart/       # cart store, badge and drawer
//! ├── flows/      # step flows and the three checkouts
//! ├── messaging/  # WhatsApp deep links
//! ├── auth/       # auth provider capability + in-memory provider
//! ├── api/        # HTTP routes and handlers
//! ├── routes/     # router assembly and middleware
//! └── utils/      # logging, validation, dates
//! ```

pub mod api;
pub mod auth;
pub mod cart;
pub mod catalog;
pub mod core;
pub mod flows;
pub mod messaging;
pub mod money;
pub mod routes;
pub mod utils;

// Re-export public types
pub use auth::{AuthProvider, MockAuthProvider};
pub use cart::{CartStore, SharedCart};
pub use catalog::Catalog;
pub use crate::core::{Config, Server, ServerState};
pub use routes::{build_app, build_router};
pub use utils::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{cleanup_old_logs, init_logger, init_logger_with_file};

/// Load `.env` and start logging
///
/// JSON log lines in production, pretty console output elsewhere.
pub fn setup_environment() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let config = Config::from_env();
    init_logger_with_file(
        &config.log_level,
        config.is_production(),
        config.log_dir.as_deref(),
    )?;
    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
  _   _      _                   ____  _       _
 | | | |_ __| |__   __ _ _ __   |  _ \| | __ _| |_ ___
 | | | | '__| '_ \ / _` | '_ \  | |_) | |/ _` | __/ _ \
 | |_| | |  | |_) | (_| | | | | |  __/| | (_| | ||  __/
  \___/|_|  |_.__/ \__,_|_| |_| |_|   |_|\__,_|\__\___|
    "#
    );
}
