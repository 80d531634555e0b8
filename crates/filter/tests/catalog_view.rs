use dex_filter::{
    build_index, build_view, reduce, DisplayMode, FilterSettings, Form, OwnedInstance, Region,
    SettingsAction, Variant,
};
use dex_shortlink::ShortLinkError;
use pretty_assertions::assert_eq;

fn catalog() -> Vec<Region> {
    vec![
        Region::new(
            "Kanto",
            vec![
                Form::new("bulbasaur", "Bulbasaur").with_sprite("001.png"),
                Form::new("charmander", "Charmander"),
            ],
        ),
        Region::new(
            "Johto",
            vec![Form::new("chikorita", "Chikorita").with_formename("Type: Grass")],
        ),
    ]
}

fn visible_ids(view: &dex_filter::CatalogView) -> Vec<&str> {
    view.regions
        .iter()
        .flat_map(|r| r.forms.iter())
        .map(|f| f.formeid.as_str())
        .collect()
}

#[test]
fn owned_variant_carries_golden_deep_link() {
    let index = build_index(&[OwnedInstance::new(12345, "bulbasaur", "shiny")]);
    let view = build_view(&catalog(), &index, &FilterSettings::default());

    let bulbasaur = view.find("bulbasaur").expect("bulbasaur visible");
    let shiny = &bulbasaur.variants[1];
    assert_eq!(shiny.variant, Variant::Shiny);
    let link = shiny.owned.as_ref().expect("shiny owned");
    assert_eq!(link.instance_id, 12345);
    assert_eq!(link.url.as_deref(), Ok("https://pokefarm.com/summary/Y65"));

    assert!(!bulbasaur.variants[0].is_owned());
    assert_eq!(bulbasaur.sprite, "001.png");
}

#[test]
fn overflowing_id_only_breaks_its_own_link() {
    let huge = dex_shortlink::MAX_ENCODABLE + 1;
    let index = build_index(&[
        OwnedInstance::new(huge, "charmander", "normal"),
        OwnedInstance::new(7, "charmander", "albino"),
    ]);
    let view = build_view(&catalog(), &index, &FilterSettings::default());

    let charmander = view.find("charmander").expect("charmander visible");
    let normal = charmander.variants[0].owned.as_ref().unwrap();
    assert!(matches!(
        normal.url,
        Err(ShortLinkError::EncodingOverflow { .. })
    ));
    let albino = charmander.variants[2].owned.as_ref().unwrap();
    assert!(albino.url.is_ok());
    assert_eq!(view.visible_count(), 3);
}

#[test]
fn hide_unacquired_keeps_only_owned_forms_and_empty_regions() {
    let index = build_index(&[OwnedInstance::new(1, "charmander", "normal")]);
    let settings = reduce(
        FilterSettings::default(),
        SettingsAction::SetDisplayMode {
            variant: Variant::Normal,
            mode: DisplayMode::HideUnacquired,
        },
    );
    let view = build_view(&catalog(), &index, &settings);

    assert_eq!(visible_ids(&view), vec!["charmander"]);
    assert_eq!(view.regions.len(), 2);
    assert!(view.regions[1].forms.is_empty());
}

#[test]
fn unmatched_ownership_never_renders() {
    let index = build_index(&[OwnedInstance::new(3, "mew", "normal")]);
    let view = build_view(&catalog(), &index, &FilterSettings::default());
    assert!(!view.contains("mew"));
    assert!(view
        .regions
        .iter()
        .flat_map(|r| r.forms.iter())
        .all(|f| f.variants.iter().all(|slot| !slot.is_owned())));
}

#[test]
fn display_name_uses_cleaned_suffix() {
    let view = build_view(&catalog(), &build_index(&[]), &FilterSettings::default());
    assert_eq!(
        view.find("chikorita").map(|f| f.display_name.as_str()),
        Some("Chikorita [Grass]")
    );
}

#[test]
fn miscased_colour_does_not_count_as_owned() {
    let index = build_index(&[
        OwnedInstance::new(1, "bulbasaur", "Shiny"),
        OwnedInstance::new(2, "bulbasaur", " albino "),
    ]);
    let settings = reduce(
        FilterSettings::default(),
        SettingsAction::SetDisplayMode {
            variant: Variant::Shiny,
            mode: DisplayMode::ShowOnlyUnacquired,
        },
    );
    let view = build_view(&catalog(), &index, &settings);

    let bulbasaur = view.find("bulbasaur").expect("shiny still unacquired");
    assert!(bulbasaur.variants.iter().all(|slot| !slot.is_owned()));
}
