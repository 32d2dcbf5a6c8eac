//! Normalizer integration harness.
//!
//! # What this covers
//!
//! - **Fatal errors**: a table without a Name-bearing column fails with
//!   `MissingColumn`; a file name outside xlsx/xls/csv fails with
//!   `UnsupportedFormat`, before any decoding.
//! - **Index handling**: the serialized row index (`Unnamed: 0`), any other
//!   unrenamed column reading `0..N-1`, and the `No.` ordinal are dropped
//!   before renaming.
//! - **Renaming**: placeholders map to canonical fields per the v1 layout,
//!   including when only some placeholders are present.
//! - **Row filtering**: rows with a blank Name never reach the output.
//! - **Coercion and ordering**: experience is parsed out of free text, the
//!   table is sorted descending with missing values last, then the last row
//!   is rotated to the front.
//! - **Properties** (proptest): ordering, name filtering and column-structure
//!   idempotence hold for arbitrary inputs.
//! - **End to end**: CSV bytes through `roster-sources` and the normalizer,
//!   snapshot-tested with `insta`.
//!
//! # What this does NOT cover
//!
//! - Excel decoding details (unit tests in `roster-sources`)
//! - Rendering in the terminal viewer
//!
//! # Running
//!
//! ```sh
//! cargo test --test normalization_harness
//! # Update snapshots after intentional changes:
//! cargo insta review
//! ```

mod common;
use common::*;

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use roster_core::{
    normalize, CanonicalField, CanonicalTable, Cell, ColumnLayout, NormalizeError, Normalizer,
    RawTable,
};
use rstest::rstest;

fn scenario() -> RawTable {
    RawTableBuilder::new()
        .index(4)
        .ordinal(4)
        .placeholder(2, SCENARIO_NAMES)
        .placeholder(6, SCENARIO_EXPERIENCE)
        .build()
}

// ---------------------------------------------------------------------------
// Fatal errors
// ---------------------------------------------------------------------------

/// No column becomes Name → `MissingColumn("Name")`.
#[test]
fn missing_name_column_is_fatal() {
    let raw = RawTableBuilder::new()
        .column("Employee", ["A"])
        .placeholder(6, ["3"])
        .build();
    assert_eq!(
        normalize("roster.csv", raw).unwrap_err(),
        NormalizeError::MissingColumn("Name".to_string())
    );
}

#[rstest]
#[case::pdf("roster.pdf", "pdf")]
#[case::docx("employees.docx", "docx")]
#[case::no_extension("roster", "roster")]
#[case::tsv("roster.tsv", "tsv")]
fn unsupported_formats_are_fatal(#[case] file_name: &str, #[case] extension: &str) {
    let err = normalize(file_name, scenario()).unwrap_err();
    assert_eq!(
        err,
        NormalizeError::UnsupportedFormat {
            file_name: file_name.to_string(),
            extension: extension.to_string(),
        }
    );
}

#[rstest]
#[case::xlsx("roster.xlsx")]
#[case::xls("roster.xls")]
#[case::csv("roster.csv")]
#[case::upper("ROSTER.XLSX")]
fn supported_formats_are_accepted(#[case] file_name: &str) {
    assert!(normalize(file_name, scenario()).is_ok());
}

// ---------------------------------------------------------------------------
// Scenario and ordering
// ---------------------------------------------------------------------------

/// `["5 yrs","2","","10.5"]` for A..D → C (missing), D, A, B.
#[test]
fn four_person_scenario() {
    let table = normalize("roster.xlsx", scenario()).unwrap();
    assert_columns!(table, ["Name", "Years Experience"]);
    assert_names!(table, ["C", "D", "A", "B"]);
    assert_eq!(table.experience(), vec![None, Some(10.5), Some(5.0), Some(2.0)]);
}

#[rstest]
#[case::empty(&[], &[])]
#[case::single(&[("A", "3")], &["A"])]
#[case::all_missing(&[("A", ""), ("B", "x"), ("C", "")], &["C", "A", "B"])]
#[case::ties_keep_input_order(&[("A", "4"), ("B", "4"), ("C", "9")], &["B", "C", "A"])]
#[case::units_and_noise(&[("A", "3 years"), ("B", "~7"), ("C", "1.5y")], &["C", "B", "A"])]
fn ordering_cases(#[case] people: &[(&str, &str)], #[case] expected: &[&str]) {
    let raw = RawTableBuilder::new()
        .placeholder(2, people.iter().map(|p| p.0))
        .placeholder(6, people.iter().map(|p| p.1))
        .build();
    let table = normalize("roster.csv", raw).unwrap();
    let names: Vec<String> = table
        .field_values(CanonicalField::Name)
        .unwrap()
        .into_iter()
        .map(Cell::to_string)
        .collect();
    assert_eq!(names, expected);
    assert_rotated_descending!(table);
}

/// Without an experience column the rows keep their order, except for the
/// rotation.
#[test]
fn no_experience_column_only_rotates() {
    let raw = RawTableBuilder::new()
        .placeholder(2, ["A", "B", "C"])
        .build();
    let table = normalize("roster.csv", raw).unwrap();
    assert_names!(table, ["C", "A", "B"]);
}

// ---------------------------------------------------------------------------
// Columns
// ---------------------------------------------------------------------------

/// `Unnamed: 3` → Gender even when the other placeholders are absent.
#[test]
fn gender_placeholder_maps_alone() {
    let raw = RawTableBuilder::new()
        .placeholder(2, ["A", "B"])
        .placeholder(3, ["F", "M"])
        .build();
    let table = normalize("roster.xlsx", raw).unwrap();
    assert_columns!(table, ["Name", "Gender"]);
}

/// The index column goes first, so its values never show up under any
/// canonical name, and a non-sequential `Unnamed: 0` still goes.
#[test]
fn index_and_ordinal_columns_are_dropped() {
    let raw = RawTableBuilder::new()
        .column("Unnamed: 0", ["9", "4"])
        .column("No.", ["1", "2"])
        .placeholder(2, ["A", "B"])
        .build();
    let table = normalize("roster.csv", raw).unwrap();
    assert_columns!(table, ["Name"]);
}

/// Columns the layout does not rename are dropped when they read exactly
/// `0, 1, 2, …`, whatever their header position. A shuffled run is data.
#[rstest]
#[case::trailing_placeholder("Unnamed: 11")]
#[case::blank_header("")]
fn sequential_index_is_dropped_by_content(#[case] header: &str) {
    let raw = RawTableBuilder::new()
        .placeholder(2, ["A", "B", "C"])
        .column(header, ["0", "1", "2"])
        .placeholder(12, ["0", "2", "1"])
        .build();
    let table = normalize("roster.csv", raw).unwrap();
    assert_columns!(table, ["Name", "Unnamed: 12"]);
}

/// A sheet that already carries a `Name` header keeps it; the placeholder
/// the layout would have renamed stays as an extra column.
#[test]
fn existing_name_header_is_not_duplicated() {
    let raw = RawTableBuilder::new()
        .column("Name", ["A", "B"])
        .placeholder(2, ["x", "y"])
        .build();
    let table = normalize("roster.csv", raw).unwrap();
    assert_columns!(table, ["Name", "Unnamed: 2"]);
    assert_names!(table, ["B", "A"]);
}

#[test]
fn full_layout_renames_all_nine_fields() {
    let mut builder = RawTableBuilder::new().index(1).ordinal(1);
    for position in 2..=10 {
        builder = builder.placeholder(position, [format!("v{position}")]);
    }
    let table = normalize("roster.xlsx", builder.build()).unwrap();
    let expected: Vec<String> = CanonicalField::ALL
        .iter()
        .map(|f| f.column_name().to_string())
        .collect();
    assert_eq!(table.columns, expected);
}

#[test]
fn custom_layout_drives_the_renames() {
    let layout: ColumnLayout = serde_json::from_value(serde_json::json!({
        "name": "agency",
        "version": 2,
        "sequence_column": "#",
        "renames": [
            { "placeholder": "Candidate", "field": "Name" },
            { "placeholder": "Exp", "field": "Years Experience" }
        ]
    }))
    .unwrap();
    let raw = RawTableBuilder::new()
        .column("#", ["1", "2"])
        .column("Candidate", ["A", "B"])
        .column("Exp", ["1", "8"])
        .build();
    let table = Normalizer::new(layout).normalize("agency.csv", raw).unwrap();
    assert_columns!(table, ["Name", "Years Experience"]);
    assert_names!(table, ["A", "B"]);
}

// ---------------------------------------------------------------------------
// Rows
// ---------------------------------------------------------------------------

#[test]
fn blank_names_are_dropped() {
    let raw = RawTableBuilder::new()
        .placeholder(2, ["A", "", "   ", "D"])
        .placeholder(6, ["1", "2", "3", "4"])
        .build();
    let table = normalize("roster.csv", raw).unwrap();
    assert_eq!(table.len(), 2);
    assert_no_blank_names!(table);
}

// ---------------------------------------------------------------------------
// End to end through roster-sources
// ---------------------------------------------------------------------------

#[test]
fn csv_export_end_to_end() {
    let raw = roster_sources::load("roster.csv", ROSTER_CSV.as_bytes()).unwrap();
    let table = normalize("roster.csv", raw).unwrap();
    assert_eq!(table.columns.len(), 9);
    assert_names!(table, ["Chen Wu", "Dana Mori", "Aiko Tanaka", "Ben Ito"]);
    assert_no_blank_names!(table);

    let grid = roster_core::export::render_grid(table.columns.as_slice(), &table.rows, 12);
    insta::assert_snapshot!(grid, @r"
    Name         Gender  Age  Designation  Years Exper…  Language Ab…  Certificati…  Skill   Project Joi…
    -----------  ------  ---  -----------  ------------  ------------  ------------  ------  ------------
    Chen Wu      M       41   Architect                  Fluent        N1            ABAP    2022-01-15
    Dana Mori    F       38   Manager      10.5          Native        N1            SAP SD  2021-07-01
    Aiko Tanaka  F       29   Consultant   5             Business      N2            SAP MM  2024-04-01
    Ben Ito      M       35   Lead         2             Native        N1            SAP FI  2023-10-01
    ");
}

#[test]
fn text_listing_end_to_end() {
    let raw = roster_sources::text::extract(TEXT_LISTING);
    let table = Normalizer::default().normalize_table(raw).unwrap();
    assert_names!(table, ["Chen Wu", "Dana Mori", "Aiko Tanaka", "Ben Ito"]);
    assert_eq!(
        table.experience(),
        vec![None, Some(10.5), Some(5.0), Some(2.0)]
    );
}

#[test]
fn built_roster_csv_round_trips_through_sources() {
    let people = [
        Person::new("Ken", "4"),
        Person::new("", "20"),
        Person::new("Yui", "11 yrs"),
    ];
    let raw = roster_sources::load("built.csv", roster_csv(&people).as_bytes()).unwrap();
    let table = normalize("built.csv", raw).unwrap();
    assert_names!(table, ["Ken", "Yui"]);
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

fn experience_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        "[a-z ]{0,6}",
        (0u32..60).prop_map(|n| n.to_string()),
        (0u32..400).prop_map(|n| format!("{}.{} yrs", n / 10, n % 10)),
    ]
}

fn name_strategy() -> impl Strategy<Value = String> {
    prop_oneof![Just(String::new()), Just("  ".to_string()), "[A-Z][a-z]{1,8}"]
}

fn people_strategy() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::vec((name_strategy(), experience_strategy()), 0..40)
}

fn raw_from(people: &[(String, String)]) -> RawTable {
    RawTableBuilder::new()
        .index(people.len())
        .placeholder(2, people.iter().map(|p| p.0.clone()))
        .placeholder(6, people.iter().map(|p| p.1.clone()))
        .build()
}

proptest! {
    #[test]
    fn prop_sorted_then_rotated(people in people_strategy()) {
        let table = normalize("p.csv", raw_from(&people)).unwrap();
        assert_rotated_descending!(table);
    }

    #[test]
    fn prop_only_named_rows_survive(people in people_strategy()) {
        let named = people.iter().filter(|p| !p.0.trim().is_empty()).count();
        let table = normalize("p.csv", raw_from(&people)).unwrap();
        prop_assert_eq!(table.len(), named);
        assert_no_blank_names!(table);
    }

    #[test]
    fn prop_canonical_columns_are_stable(people in people_strategy()) {
        let first = normalize("p.csv", raw_from(&people)).unwrap();
        let again = normalize("p.csv", RawTable::from_rows(first.columns.clone(), first.rows.clone())).unwrap();
        prop_assert_eq!(&again.columns, &first.columns);
        prop_assert_eq!(again.len(), first.len());
    }
}

/// Direct check of the reference scenario as a `CanonicalTable` value.
#[test]
fn scenario_table_value() {
    let table = normalize("roster.csv", scenario()).unwrap();
    assert_eq!(
        table,
        CanonicalTable {
            columns: vec!["Name".to_string(), "Years Experience".to_string()],
            rows: vec![
                vec![Cell::text("C"), Cell::Empty],
                vec![Cell::text("D"), Cell::Number(10.5)],
                vec![Cell::text("A"), Cell::Number(5.0)],
                vec![Cell::text("B"), Cell::Number(2.0)],
            ],
        }
    );
}
