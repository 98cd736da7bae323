//! # Shopdash Core
//!
//! Domain types, errors and configuration for the Shopdash dashboard.
//!
//! - **Types**: identifiers, `UserError`, `MutationResult`, confirm button states
//! - **Attributes**: `Attribute` and `AttributeValue`
//! - **Store**: the in-process catalogue API and its validation
//! - **Persistence**: JSON save/load of the store
//! - **Config**: TOML dashboard configuration
//! - **Errors**: `DashError` and `DashResult`
//!

pub mod attribute;
pub mod config;
pub mod error;
pub mod persistence;
pub mod store;
pub mod types;

// Re-export commonly used items at crate root
pub use attribute::{Attribute, AttributeValue, MAX_VALUE_NAME_LENGTH, slugify};
pub use config::{ConfigSource, DashboardConfig, WindowConfig};
pub use error::{DashError, DashResult};
pub use persistence::{load_or_sample, load_store, save_store};
pub use store::{AttributeStore, AttributeValueInput, NAME_FIELD};
pub use types::{
    AttributeId, AttributeValueId, ConfirmButtonTransitionState, MutationResult, UserError,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
