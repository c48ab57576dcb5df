//! Functional tests for the full data path: the CSV files shipped in
//! `data/` through loading, about-info derivation, and the plot pipeline.
//!
//! Paths are relative to the crate root, which is where cargo runs tests.

use std::collections::HashSet;
use std::path::Path;

use lfcgm_rust::parsing::{load_dropdown_catalog, load_scorer_dataset};
use lfcgm_rust::services::plot::{build_plot_spec, EXEMPLAR_PLAYERS, EXEMPLAR_TITLE, PLOT_TITLE};
use lfcgm_rust::services::smoothing::DEFAULT_SPAN;
use lfcgm_rust::services::derive_about_info;

const SCORERS_CSV: &str = "data/lfc_scorers_tl_pos_age.csv";
const DROPDOWN_CSV: &str = "data/lfcgm_app_dropdown.csv";

fn no_selection() -> Vec<Option<String>> {
    vec![None; 8]
}

#[test]
fn test_shipped_data_files_load() {
    let dataset = load_scorer_dataset(Path::new(SCORERS_CSV)).unwrap();
    let catalog = load_dropdown_catalog(Path::new(DROPDOWN_CSV)).unwrap();

    assert!(dataset.len() > 0);
    assert!(catalog.len() > 0);
}

#[test]
fn test_about_info_from_shipped_data() {
    let dataset = load_scorer_dataset(Path::new(SCORERS_CSV)).unwrap();
    let catalog = load_dropdown_catalog(Path::new(DROPDOWN_CSV)).unwrap();

    let info = derive_about_info(&dataset, &catalog);
    assert_eq!(info.latest_season, "2016-2017");
    assert_eq!(info.first_player, "Billy Liddell");
    assert_eq!(info.last_player, "Steven Gerrard");
    assert_eq!(info.player_count, catalog.len());
}

#[test]
fn test_every_dropdown_option_matches_a_record() {
    // Not enforced at load time, but the shipped files should agree.
    let dataset = load_scorer_dataset(Path::new(SCORERS_CSV)).unwrap();
    let catalog = load_dropdown_catalog(Path::new(DROPDOWN_CSV)).unwrap();

    let players: HashSet<&str> = dataset.records().iter().map(|r| r.player.as_str()).collect();
    for option in catalog.options() {
        assert!(
            players.contains(option.value.as_str()),
            "dropdown option '{}' has no scorer record",
            option.value
        );
    }
}

#[test]
fn test_no_selection_plots_the_exemplar_roster() {
    let dataset = load_scorer_dataset(Path::new(SCORERS_CSV)).unwrap();

    let spec = build_plot_spec(&dataset, &no_selection(), DEFAULT_SPAN);

    assert_eq!(spec.title, EXEMPLAR_TITLE);
    assert_eq!(spec.series.len(), EXEMPLAR_PLAYERS.len());
    for series in &spec.series {
        assert!(!series.points.is_empty());
    }

    let colors: HashSet<&str> = spec.series.iter().map(|s| s.color.as_str()).collect();
    assert_eq!(colors.len(), spec.series.len(), "colors must be distinct");
}

#[test]
fn test_single_player_selection() {
    let dataset = load_scorer_dataset(Path::new(SCORERS_CSV)).unwrap();

    let mut selection = no_selection();
    selection[0] = Some("Ian Rush".to_string());
    let spec = build_plot_spec(&dataset, &selection, DEFAULT_SPAN);

    assert_eq!(spec.title, PLOT_TITLE);
    assert_eq!(spec.series.len(), 1);

    let series = &spec.series[0];
    assert_eq!(series.player, "Ian Rush");
    assert_eq!(series.points.len(), 7);

    // Dataset row order is season order for a single player.
    let goals: Vec<u32> = series.points.iter().map(|p| p.goals).collect();
    assert_eq!(goals, vec![17, 24, 32, 14, 30, 18, 14]);
    assert_eq!(spec.y_axis_upper_bound, Some(33));

    let curve = series.trend_curve.as_ref().expect("seven points get a curve");
    assert_eq!(curve.len(), 7);
}

#[test]
fn test_unknown_player_keeps_regular_title() {
    let dataset = load_scorer_dataset(Path::new(SCORERS_CSV)).unwrap();

    let mut selection = no_selection();
    selection[0] = Some("Fernando Torres".to_string());
    let spec = build_plot_spec(&dataset, &selection, DEFAULT_SPAN);

    assert_eq!(spec.title, PLOT_TITLE);
    assert!(spec.series.is_empty());
    assert_eq!(spec.y_axis_upper_bound, None);
}

#[test]
fn test_plot_spec_json_is_reproducible() {
    let dataset = load_scorer_dataset(Path::new(SCORERS_CSV)).unwrap();
    let mut selection = no_selection();
    selection[0] = Some("Roger Hunt".to_string());
    selection[4] = Some("Kevin Keegan".to_string());

    let first =
        serde_json::to_string(&build_plot_spec(&dataset, &selection, DEFAULT_SPAN)).unwrap();
    let second =
        serde_json::to_string(&build_plot_spec(&dataset, &selection, DEFAULT_SPAN)).unwrap();
    assert_eq!(first, second);
}
