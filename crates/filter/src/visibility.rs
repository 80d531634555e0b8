use dex_protocol::{DisplayMode, Form, Variant};

use crate::ownership::VariantIds;
use crate::settings::FilterSettings;

pub fn variant_passes(mode: DisplayMode, owned: bool) -> bool {
    match mode {
        DisplayMode::All => true,
        DisplayMode::HideUnacquired => owned,
        DisplayMode::ShowOnlyUnacquired => !owned,
    }
}

/// Variant-ownership gate: a form is visible only when every variant's
/// display mode passes. Catalog axes (natures, berries, types) are applied
/// upstream by the collaborator API and are not re-checked here.
pub fn is_visible(form: &Form, ownership: &VariantIds, settings: &FilterSettings) -> bool {
    let failing = Variant::ALL.iter().copied().find(|variant| {
        !variant_passes(settings.display_mode(*variant), ownership.contains_key(variant))
    });

    match failing {
        Some(variant) => {
            log::trace!("Hiding {} on the {} axis", form.formeid, variant);
            false
        }
        None => true,
    }
}
