//! # Shopdash UI
//!
//! Dioxus Desktop UI for Shopdash.
//!
//! ## Features
//!
//! - Attribute details page listing an attribute's values
//! - Create/edit and delete dialogs for attribute values
//! - Confirm buttons reflecting the progress of each mutation
//! - Localised strings loaded from a JSON catalog
//!

// ============================================================================
// Modules
// ============================================================================

pub mod app;
pub mod components;
pub mod form;
pub mod hooks;
pub mod intl;
pub mod pages;
pub mod state;

// ============================================================================
// Re-exports
// ============================================================================

pub use shopdash_core;

pub use app::App;
pub use components::{
    AttributeValueDeleteDialog, AttributeValueEditDialog, Button, ButtonVariant, ConfirmButton,
    ConfirmButtonSettings, ModalDialog, TextInput,
};
pub use form::{FormData, FormErrors, FormState};
pub use hooks::{ModalDialogErrors, use_modal_dialog_errors};
pub use intl::{CATALOG, Catalog, Message, t, t_with};
pub use pages::AttributeDetailsPage;
pub use state::{
    APP_STATE, AppState, StatusLevel, StatusMessage, ValueDialog, ValueMutation, init_app_state,
};

use shopdash_core::{AttributeStore, DashboardConfig, load_or_sample};

// ============================================================================
// Constants
// ============================================================================

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const NAME: &str = "Shopdash";

/// Minimal styling injected into the window head
const BASE_STYLES: &str = r#"
body { margin: 0; font-family: system-ui, sans-serif; background: #0f172a; color: #f1f5f9; }
button:disabled { opacity: 0.5; }
"#;

// ============================================================================
// Bootstrap
// ============================================================================

/// Everything the app root installs on first render
#[derive(Debug, Clone, PartialEq)]
pub struct Bootstrap {
    pub config: DashboardConfig,
    pub store: AttributeStore,
    pub catalog: Catalog,
}

impl Bootstrap {
    /// Load the catalog and store named by `config`.
    ///
    /// A missing or broken catalog falls back to default messages; a broken
    /// store falls back to the sample catalogue. Both are logged.
    pub fn load(config: DashboardConfig) -> Self {
        let catalog = match config.catalog_path() {
            Some(path) => Catalog::load(config.locale.clone(), &path).unwrap_or_else(|err| {
                tracing::warn!(error = %err, "using default messages");
                Catalog::empty(config.locale.clone())
            }),
            None => Catalog::empty(config.locale.clone()),
        };

        let store = match &config.data_path {
            Some(path) => load_or_sample(path).unwrap_or_else(|err| {
                tracing::warn!(error = %err, "using sample catalogue");
                AttributeStore::sample()
            }),
            None => AttributeStore::sample(),
        };

        tracing::info!(
            locale = %catalog.locale(),
            translations = catalog.len(),
            attributes = store.attributes().len(),
            "bootstrap loaded"
        );

        Self {
            config,
            store,
            catalog,
        }
    }

    /// Install into the global signals. Must run inside the app runtime.
    pub fn install(self) {
        *CATALOG.write() = self.catalog;
        init_app_state(self.store, self.config);
    }
}

// ============================================================================
// Launch Function
// ============================================================================

/// Launch the Shopdash desktop application
///
/// ```rust,ignore
/// fn main() {
///     shopdash_ui::launch(DashboardConfig::default());
/// }
/// ```
pub fn launch(config: DashboardConfig) {
    tracing::info!("Starting {} v{}", NAME, VERSION);

    let window = config.window.clone();
    let bootstrap = Bootstrap::load(config);
    let custom_head = format!(r#"<style type="text/css">{}</style>"#, BASE_STYLES);

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(
                    dioxus::desktop::WindowBuilder::new()
                        .with_title(window.title)
                        .with_resizable(true)
                        .with_inner_size(dioxus::desktop::LogicalSize::new(
                            window.width,
                            window.height,
                        ))
                        .with_min_inner_size(dioxus::desktop::LogicalSize::new(640.0, 480.0)),
                )
                .with_menu(None)
                .with_custom_head(custom_head),
        )
        .with_context(bootstrap)
        .launch(App);
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use shopdash_core::{Attribute, save_store};
    use tempfile::TempDir;

    #[test]
    fn test_version_exists() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_name() {
        assert_eq!(NAME, "Shopdash");
    }

    #[test]
    fn test_bootstrap_defaults() {
        let bootstrap = Bootstrap::load(DashboardConfig::default());
        assert!(bootstrap.catalog.is_empty());
        assert_eq!(bootstrap.store.attributes().len(), 2);
    }

    #[test]
    fn test_bootstrap_reads_catalog_and_store() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join("fr.json"),
            r#"{"attributeValueEditDialogNameField": {"string": "Nom"}}"#,
        )
        .unwrap();

        let data_path = temp_dir.path().join("store.json");
        let mut store = AttributeStore::new();
        store.add_attribute(Attribute::new("Material").with_value("Wool"));
        save_store(&store, &data_path).unwrap();

        let config = DashboardConfig {
            locale: "fr".to_string(),
            locale_dir: Some(temp_dir.path().to_path_buf()),
            data_path: Some(data_path),
            ..DashboardConfig::default()
        };
        let bootstrap = Bootstrap::load(config);

        assert_eq!(bootstrap.catalog.locale(), "fr");
        assert_eq!(
            bootstrap
                .catalog
                .format(&intl::attributes::VALUE_DIALOG_NAME_FIELD),
            "Nom"
        );
        assert_eq!(bootstrap.store, store);
    }

    #[test]
    fn test_bootstrap_falls_back_on_broken_files() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("en.json"), "not json").unwrap();
        let data_path = temp_dir.path().join("store.json");
        std::fs::write(&data_path, "{ broken").unwrap();

        let config = DashboardConfig {
            locale_dir: Some(temp_dir.path().to_path_buf()),
            data_path: Some(data_path),
            ..DashboardConfig::default()
        };
        let bootstrap = Bootstrap::load(config);

        assert!(bootstrap.catalog.is_empty());
        assert_eq!(bootstrap.store.attributes().len(), 2);
    }
}
