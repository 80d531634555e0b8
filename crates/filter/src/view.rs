use dex_protocol::{Region, Variant};
use dex_shortlink::ShortLinkError;

use crate::ownership::OwnershipIndex;
use crate::settings::FilterSettings;
use crate::visibility::is_visible;

/// Deep link for one owned variant. An id that cannot be encoded only
/// breaks this link, never the surrounding view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnedLink {
    pub instance_id: u64,
    pub url: Result<String, ShortLinkError>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantSlot {
    pub variant: Variant,
    pub owned: Option<OwnedLink>,
}

impl VariantSlot {
    pub fn is_owned(&self) -> bool {
        self.owned.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub formeid: String,
    pub name: String,
    pub display_name: String,
    pub sprite: String,
    pub variants: Vec<VariantSlot>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionView {
    pub region_name: String,
    pub forms: Vec<FormView>,
}

/// Visible slice of the catalog after the variant gate, in catalog order.
/// Regions whose forms are all hidden are kept with an empty list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogView {
    pub regions: Vec<RegionView>,
}

impl CatalogView {
    pub fn contains(&self, formeid: &str) -> bool {
        self.find(formeid).is_some()
    }

    pub fn find(&self, formeid: &str) -> Option<&FormView> {
        self.regions
            .iter()
            .flat_map(|region| region.forms.iter())
            .find(|form| form.formeid == formeid)
    }

    pub fn visible_count(&self) -> usize {
        self.regions.iter().map(|region| region.forms.len()).sum()
    }
}

pub fn build_view(
    regions: &[Region],
    index: &OwnershipIndex,
    settings: &FilterSettings,
) -> CatalogView {
    let regions = regions
        .iter()
        .map(|region| RegionView {
            region_name: region.region_name.clone(),
            forms: region
                .pokemon
                .iter()
                .filter_map(|form| {
                    let ownership = index.variants_for(&form.formeid);
                    if !is_visible(form, ownership, settings) {
                        return None;
                    }
                    let variants = Variant::ALL
                        .iter()
                        .map(|variant| VariantSlot {
                            variant: *variant,
                            owned: ownership.get(variant).map(|id| OwnedLink {
                                instance_id: *id,
                                url: dex_shortlink::summary_url(*id),
                            }),
                        })
                        .collect();
                    Some(FormView {
                        formeid: form.formeid.clone(),
                        name: form.name.clone(),
                        display_name: form.display_name(),
                        sprite: form.sprite.clone(),
                        variants,
                    })
                })
                .collect(),
        })
        .collect();

    CatalogView { regions }
}
