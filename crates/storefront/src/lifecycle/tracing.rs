//! # Observability & Tracing
//!
//! The [`setup_tracing`] function initializes structured logging for the storefront.
//!
//! ## Configuration
//!
//! `RUST_LOG` wins when it is set. Otherwise the level from
//! [`LoggingConfig`](crate::config::LoggingConfig) is used as the filter. The compact
//! format hides the crate/module prefix (`with_target(false)`) because every actor log
//! line already carries a `collection` field; the JSON format is for log shippers.
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: `Actor started` and `Shutdown` with the final size
//! - **Appends**: `Appended` with the key and new size, `Append declined` for unknown
//!   cart ids, `Append rejected` when admission fails
//! - **Reads**: `List` and `Find` at debug level
//! - **Client calls**: one span per call, with its arguments
//!
//! ## Usage Examples
//!
//! ```bash
//! # Compact logs (default)
//! RUST_LOG=info cargo run
//!
//! # Show payloads and reads
//! RUST_LOG=debug cargo run
//!
//! # JSON lines
//! STOREFRONT_LOG_FORMAT=json cargo run
//! ```
//!
//! ## Workflow Trace Example
//!
//! **With `RUST_LOG=info`**:
//!
//! ```text
//! INFO Actor started collection="Catalog"
//! INFO Actor started collection="Cart"
//! INFO Appended collection="Catalog" key=product_1 size=1
//! INFO Appended collection="Cart" key=product_1 size=1
//! INFO add_item{product_id=ProductId(1)}: Cart updated size=1
//! ```
use crate::config::{LogFormat, LoggingConfig};
use tracing_subscriber::EnvFilter;

pub fn setup_tracing(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    match config.format {
        LogFormat::Compact => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init(),
        LogFormat::Json => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init(),
    }
}
