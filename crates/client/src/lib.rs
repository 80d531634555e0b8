//! # Dex Client
//!
//! Collaborator plumbing around the pure engine in `dex-filter`:
//!
//! ```text
//! Session ──┐
//!           ├──> DexLoader ──try_join──> DexApi::fetch_catalog ─┐
//! Settings ─┘        │                   DexApi::fetch_owned  ──┤
//!     ▲              │                                          ▼
//!     │              └──<── generation check ──<── sort + OwnershipIndex
//! PreferenceStore                                   │
//!                                                   └──> DexSnapshot::view()
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use dex_client::{DexConfig, Pokedex, Session};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     dex_client::init_logging(false);
//!     let pokedex = Pokedex::connect(DexConfig::from_env(), Session::from_env())?;
//!     pokedex.mount().await?;
//!     if let Some(view) = pokedex.view() {
//!         println!("{} visible forms", view.visible_count());
//!     }
//!     Ok(())
//! }
//! ```

mod api;
mod config;
mod error;
mod load;
mod logging;
mod pokedex;
mod preferences;
mod session;

pub use api::{catalog_query, endpoint_url, owned_query, DexApi, HttpDexApi};
pub use config::{DexConfig, DEFAULT_API_BASE_URL, PREFERENCES_DIR_NAME};
pub use error::{ClientError, Endpoint, Result};
pub use load::{DexLoader, DexSnapshot, LoadOutcome, LoadState};
pub use logging::init_logging;
pub use pokedex::Pokedex;
pub use preferences::{FilePreferenceStore, MemoryPreferenceStore, PreferenceStore, SETTINGS_KEY};
pub use session::{Session, TOKEN_ENV};

// Re-export engine types for convenience
pub use dex_filter::{CatalogView, FilterSettings, SettingsAction};
