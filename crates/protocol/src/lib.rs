//! Wire and domain types shared across the Pokédex workspace.

use thiserror::Error;

mod catalog;
mod names;

pub use catalog::{clean_forme_name, sort_regions, Form, OwnedInstance, Region, TRAILING_REGION};
pub use names::{Berry, DisplayMode, Nature, PokemonType, Variant};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown {kind}: {value}")]
pub struct ParseNameError {
    pub kind: &'static str,
    pub value: String,
}
