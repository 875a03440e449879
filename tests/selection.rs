// tests/selection.rs
//
// Selector behavior on normalized fixtures: subset property, empty
// results, invalid labels, memoization, and the end-to-end
// one-row-per-year case from the raw table down to the selected row.

use std::collections::HashMap;

use htec_map::domain::{Level, Observation, Selection, Sex, Unit};
use htec_map::error::PipelineError;
use htec_map::normalize::normalize;
use htec_map::select::{select, select_labeled, SelectionCache, SelectionView};
use htec_map::specs::dataset::parse_tsv;

fn obs(year: u16, sex: Sex, unit: Unit, value: Option<f64>, geo: &str, location: &str) -> Observation {
    Observation {
        year,
        sex,
        unit,
        value,
        geo: geo.to_string(),
        location: location.to_string(),
    }
}

fn fixture() -> Vec<Observation> {
    vec![
        obs(2021, Sex::Total, Unit::Percent, Some(5.4), "DE", "Germany"),
        obs(2021, Sex::Total, Unit::Percent, Some(4.1), "AT", "Austria"),
        obs(2020, Sex::Total, Unit::Percent, Some(5.2), "DE", "Germany"),
        obs(2021, Sex::Female, Unit::Percent, Some(3.2), "DE", "Germany"),
        obs(2021, Sex::Total, Unit::Thousand, Some(2100.0), "DE", "Germany"),
        obs(2021, Sex::Total, Unit::Percent, Some(6.2), "DE1", "Baden-Württemberg"),
        obs(2021, Sex::Total, Unit::Percent, None, "DE2", "Bayern"),
        obs(2021, Sex::Total, Unit::Percent, Some(7.2), "DE11", "Stuttgart"),
    ]
}

#[test]
fn select_filters_on_all_four_axes() {
    let observations = fixture();
    let sel = Selection {
        year: 2021,
        level: Level::Country,
        sex: Sex::Total,
        unit: Unit::Percent,
    };
    let ix = select(&observations, &sel);

    // subset property: every returned row satisfies the tuple
    assert!(!ix.is_empty());
    for &i in &ix {
        let o = &observations[i];
        assert_eq!(o.year, 2021);
        assert_eq!(o.geo.len(), 2);
        assert_eq!(o.sex, Sex::Total);
        assert_eq!(o.unit, Unit::Percent);
    }
    assert_eq!(ix.len(), 2); // DE + AT
}

#[test]
fn nuts1_selection_keeps_missing_values() {
    let observations = fixture();
    let sel = Selection {
        year: 2021,
        level: Level::Nuts1,
        sex: Sex::Total,
        unit: Unit::Percent,
    };
    let ix = select(&observations, &sel);
    // DE1 with a value and DE2 with no data — both are rows
    assert_eq!(ix.len(), 2);
    assert!(ix.iter().any(|&i| observations[i].value.is_none()));
}

#[test]
fn empty_result_is_not_an_error() {
    let observations = fixture();
    // no NUTS-2 rows for 2008 in the fixture; well-formed selection
    let ix = select_labeled(&observations, 2008, "nuts2", "Females", "rel").unwrap();
    assert!(ix.is_empty());

    // a year outside the observed range is also just empty
    let ix = select_labeled(&observations, 1999, "Countries", "Total", "rel").unwrap();
    assert!(ix.is_empty());
}

#[test]
fn invalid_labels_fail_fast() {
    let observations = fixture();

    match select_labeled(&observations, 2021, "NUTS-3", "Total", "rel") {
        Err(PipelineError::InvalidSelection { field, .. }) => assert_eq!(field, "level"),
        other => panic!("expected InvalidSelection, got {other:?}"),
    }
    assert!(select_labeled(&observations, 2021, "nuts1", "Everyone", "rel").is_err());
    assert!(select_labeled(&observations, 2021, "nuts1", "Total", "parsecs").is_err());

    // labels are lenient about case/punctuation, not about domain
    assert!(Level::from_label("NUTS 2").is_ok());
    assert!(Level::from_label("nuts-1").is_ok());
    assert!(Sex::from_label("f").is_ok());
    assert!(Unit::from_label("Rel.").is_ok());
}

#[test]
fn view_sorts_descending_with_missing_last() {
    let observations = fixture();
    let sel = Selection {
        year: 2021,
        level: Level::Nuts1,
        sex: Sex::Total,
        unit: Unit::Percent,
    };
    let mut view = SelectionView::from_observations(&observations, &sel);
    view.sort_by_value_desc();

    let values: Vec<Option<f64>> = view.iter().map(|o| o.value).collect();
    assert_eq!(values, vec![Some(6.2), None]);
}

#[test]
fn cache_returns_same_indices() {
    let observations = fixture();
    let sel = Selection {
        year: 2021,
        level: Level::Country,
        sex: Sex::Total,
        unit: Unit::Percent,
    };

    let direct = select(&observations, &sel);
    let mut cache = SelectionCache::new();
    assert_eq!(cache.get_or_select(&observations, sel), direct.as_slice());
    // second hit comes from the memo, same answer
    assert_eq!(cache.get_or_select(&observations, sel), direct.as_slice());
    assert_eq!(cache.len(), 1);

    cache.clear();
    assert!(cache.is_empty());
}

#[test]
fn one_row_per_year_end_to_end() {
    // Raw table with one row per year 2008–2021 for HTC / Total / DE / PC_EMP.
    let years: Vec<String> = (2008..=2021).map(|y| format!("{y} ")).collect();
    let text = format!(
        "freq,nace_r2,sex,unit,geo\\TIME_PERIOD\t{}\nA,HTC,T,PC_EMP,DE\t{}\n",
        years.join("\t"),
        (2008..=2021)
            .map(|y| format!("{}.0 ", y - 2000))
            .collect::<Vec<_>>()
            .join("\t"),
    );
    let raw = parse_tsv(&text).unwrap();

    let locations: HashMap<String, String> = [(
        "DE".to_string(),
        "Germany (until 1990 former territory of the FRG)".to_string(),
    )]
    .into_iter()
    .collect();

    let observations = normalize(&raw, &locations).unwrap();
    assert_eq!(observations.len(), 14);

    let ix = select_labeled(&observations, 2021, "Countries", "Total", "Rel.").unwrap();
    assert_eq!(ix.len(), 1);
    let o = &observations[ix[0]];
    assert_eq!(o.geo, "DE");
    assert_eq!(o.location, "Germany");
    assert_eq!(o.value, Some(21.0));
}
