use std::collections::{BTreeMap, HashMap};

use dex_protocol::{OwnedInstance, Region, Variant};

/// Owned instance id per variant for a single form.
pub type VariantIds = BTreeMap<Variant, u64>;

static UNOWNED: VariantIds = BTreeMap::new();

/// `formeid -> variant -> instance id`, rebuilt from scratch every load cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OwnershipIndex {
    by_form: HashMap<String, VariantIds>,
}

impl OwnershipIndex {
    /// Single pass in arrival order. Later records for the same
    /// `(formeid, variant)` overwrite earlier ones. Colours must match a
    /// variant label exactly; anything else is skipped.
    pub fn build<'a, I>(instances: I) -> Self
    where
        I: IntoIterator<Item = &'a OwnedInstance>,
    {
        let mut by_form: HashMap<String, VariantIds> = HashMap::new();
        let mut skipped = 0usize;
        for instance in instances {
            let Ok(variant) = instance.variant_color.parse::<Variant>() else {
                skipped += 1;
                log::debug!(
                    "Ignoring instance {} with unknown colour '{}'",
                    instance.id,
                    instance.variant_color
                );
                continue;
            };
            by_form
                .entry(instance.formeid.clone())
                .or_default()
                .insert(variant, instance.id);
        }

        if skipped > 0 {
            log::debug!("Ownership index skipped {skipped} instances with unknown colours");
        }
        Self { by_form }
    }

    pub fn variants_for(&self, formeid: &str) -> &VariantIds {
        self.by_form.get(formeid).unwrap_or(&UNOWNED)
    }

    pub fn instance_id(&self, formeid: &str, variant: Variant) -> Option<u64> {
        self.variants_for(formeid).get(&variant).copied()
    }

    /// Number of forms owned in at least one variant.
    pub fn len(&self) -> usize {
        self.by_form.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_form.is_empty()
    }

    /// Indexed form ids that the given catalog slice never mentions, sorted.
    /// These never attach to a rendered form; exposed for diagnostics only.
    pub fn unmatched_formeids(&self, regions: &[Region]) -> Vec<&str> {
        let mut unmatched: Vec<&str> = self
            .by_form
            .keys()
            .map(String::as_str)
            .filter(|formeid| {
                !regions
                    .iter()
                    .flat_map(|region| region.pokemon.iter())
                    .any(|form| form.formeid == *formeid)
            })
            .collect();
        unmatched.sort_unstable();
        unmatched
    }
}

pub fn build_index(instances: &[OwnedInstance]) -> OwnershipIndex {
    OwnershipIndex::build(instances)
}
