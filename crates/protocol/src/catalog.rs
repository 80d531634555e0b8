use serde::{Deserialize, Serialize};

/// Region that always renders after every other region.
pub const TRAILING_REGION: &str = "PokéFarm Q";

const FORME_NOISE: &[&str] = &[" Forme", " Flower", " Pattern", " Drive", "Type: ", " Mode"];

/// One catalog entry: a species or one of its alternate forms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Form {
    pub formeid: String,
    pub name: String,
    #[serde(default)]
    pub formename: Option<String>,
    #[serde(default)]
    pub sprite: String,
}

impl Form {
    pub fn new(formeid: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            formeid: formeid.into(),
            name: name.into(),
            formename: None,
            sprite: String::new(),
        }
    }

    pub fn with_formename(mut self, formename: impl Into<String>) -> Self {
        self.formename = Some(formename.into());
        self
    }

    pub fn with_sprite(mut self, sprite: impl Into<String>) -> Self {
        self.sprite = sprite.into();
        self
    }

    /// Cleaned form suffix, `None` when the catalog carries none.
    pub fn suffix(&self) -> Option<String> {
        self.formename
            .as_deref()
            .map(str::trim)
            .filter(|raw| !raw.is_empty())
            .map(clean_forme_name)
    }

    /// `name` or `name [suffix]`.
    pub fn display_name(&self) -> String {
        match self.suffix() {
            Some(suffix) => format!("{} [{}]", self.name, suffix),
            None => self.name.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub region_name: String,
    #[serde(default)]
    pub pokemon: Vec<Form>,
}

impl Region {
    pub fn new(region_name: impl Into<String>, pokemon: Vec<Form>) -> Self {
        Self {
            region_name: region_name.into(),
            pokemon,
        }
    }

    pub fn is_trailing(&self) -> bool {
        self.region_name == TRAILING_REGION
    }
}

/// A single owned creature as reported by the ownership endpoint.
///
/// The colour is kept raw; values outside the closed variant set are
/// dropped when the ownership index is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnedInstance {
    pub id: u64,
    pub formeid: String,
    #[serde(rename = "color", alias = "variantColor")]
    pub variant_color: String,
}

impl OwnedInstance {
    pub fn new(id: u64, formeid: impl Into<String>, variant_color: impl Into<String>) -> Self {
        Self {
            id,
            formeid: formeid.into(),
            variant_color: variant_color.into(),
        }
    }
}

/// Stable sort that moves the trailing region to the end and keeps every
/// other region in source order.
pub fn sort_regions(regions: &mut [Region]) {
    regions.sort_by_key(Region::is_trailing);
}

/// Strips presentation noise from a form suffix ("Alolan Forme" -> "Alolan").
/// Only the first occurrence of each noise fragment is removed.
pub fn clean_forme_name(formename: &str) -> String {
    let mut cleaned = formename.to_string();
    for noise in FORME_NOISE {
        if let Some(pos) = cleaned.find(noise) {
            cleaned.replace_range(pos..pos + noise.len(), "");
        }
    }
    cleaned
}
