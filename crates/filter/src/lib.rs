//! # Dex Filter
//!
//! Pure reconciliation and filtering over a fetched catalog:
//!
//! ```text
//! [OwnedInstance] ──> OwnershipIndex ──┐
//!                                      ├──> is_visible ──> CatalogView
//! FilterSettings ──(display modes)─────┘
//!       │
//!       └──(natures / berries / types)──> collaborator query parameters
//! ```
//!
//! Settings transitions (`toggle_item`, `toggle_display_mode`,
//! `clear_filters`, `reduce`) never persist or reload; callers do that.

mod berry;
mod ownership;
mod settings;
mod view;
mod visibility;

pub use berry::{berries_for, natures_for};
pub use ownership::{build_index, OwnershipIndex, VariantIds};
pub use settings::{
    clear_filters, reduce, toggle_display_mode, toggle_item, FilterAxis, FilterItem,
    FilterSettings, SettingsAction,
};
pub use view::{build_view, CatalogView, FormView, OwnedLink, RegionView, VariantSlot};
pub use visibility::{is_visible, variant_passes};

// Re-export protocol types for convenience
pub use dex_protocol::{Berry, DisplayMode, Form, Nature, OwnedInstance, PokemonType, Region, Variant};
