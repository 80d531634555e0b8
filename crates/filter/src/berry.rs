use dex_protocol::{Berry, Nature};

/// Natures implied by each berry preference.
pub fn natures_for(berry: Berry) -> &'static [Nature] {
    use Nature::*;
    match berry {
        Berry::Any => &[Docile, Hardy, Bashful, Serious, Quirky],
        Berry::Sour => &[Bold, Impish, Relaxed, Lax],
        Berry::Spicy => &[Lonely, Adamant, Brave, Naughty],
        Berry::Dry => &[Mild, Modest, Quiet, Rash],
        Berry::Sweet => &[Hasty, Timid, Jolly, Naive],
        Berry::Bitter => &[Gentle, Calm, Careful, Sassy],
    }
}

pub fn berries_for(nature: Nature) -> impl Iterator<Item = Berry> {
    Berry::ALL
        .iter()
        .copied()
        .filter(move |berry| natures_for(*berry).contains(&nature))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn every_nature_is_reachable_from_a_berry() {
        let covered: BTreeSet<Nature> = Berry::ALL
            .iter()
            .flat_map(|berry| natures_for(*berry).iter().copied())
            .collect();
        assert_eq!(covered.len(), Nature::ALL.len());
    }

    #[test]
    fn reverse_lookup_matches_table() {
        assert_eq!(berries_for(Nature::Timid).collect::<Vec<_>>(), vec![Berry::Sweet]);
        assert_eq!(berries_for(Nature::Hardy).collect::<Vec<_>>(), vec![Berry::Any]);
    }
}
