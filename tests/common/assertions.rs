//! Domain-specific assertion macros for roster harnesses.
//!
//! These wrap `pretty_assertions` and add context-rich failure messages that
//! make it clear *which* normalization guarantee was violated.

// ---------------------------------------------------------------------------
// Column assertions
// ---------------------------------------------------------------------------

/// Assert the exact column names of a `CanonicalTable`, in order.
///
/// ```rust
/// assert_columns!(table, ["Name", "Gender"]);
/// ```
#[macro_export]
macro_rules! assert_columns {
    ($table:expr, [$($name:expr),* $(,)?]) => {{
        let table: &roster_core::CanonicalTable = &$table;
        let expected: Vec<&str> = vec![$($name),*];
        let actual: Vec<&str> = table.columns.iter().map(String::as_str).collect();
        pretty_assertions::assert_eq!(actual, expected, "assert_columns! failed");
    }};
}

/// Assert the Name column reads exactly `names`, top to bottom.
#[macro_export]
macro_rules! assert_names {
    ($table:expr, [$($name:expr),* $(,)?]) => {{
        let table: &roster_core::CanonicalTable = &$table;
        let expected: Vec<String> = vec![$($name.to_string()),*];
        let actual: Vec<String> = table
            .field_values(roster_core::CanonicalField::Name)
            .expect("assert_names! failed: table has no Name column")
            .into_iter()
            .map(|c| c.to_string())
            .collect();
        pretty_assertions::assert_eq!(actual, expected, "assert_names! failed");
    }};
}

// ---------------------------------------------------------------------------
// Row invariants
// ---------------------------------------------------------------------------

/// Assert that no row has a blank Name.
#[macro_export]
macro_rules! assert_no_blank_names {
    ($table:expr) => {{
        let table: &roster_core::CanonicalTable = &$table;
        let names = table
            .field_values(roster_core::CanonicalField::Name)
            .expect("assert_no_blank_names! failed: table has no Name column");
        if let Some(pos) = names.iter().position(|c| c.is_blank()) {
            panic!(
                "assert_no_blank_names! failed: row {} has a blank Name.\n  row: {:?}",
                pos, table.rows[pos]
            );
        }
    }};
}

/// Assert the sorted-then-rotated order: rows 1.. are non-increasing by
/// Years Experience (missing last), and row 0 holds what sorted last.
#[macro_export]
macro_rules! assert_rotated_descending {
    ($table:expr) => {{
        let table: &roster_core::CanonicalTable = &$table;
        let exp = table.experience();
        let rank = |v: Option<f64>| v.unwrap_or(f64::NEG_INFINITY);
        for i in 1..exp.len().saturating_sub(1) {
            if rank(exp[i]) < rank(exp[i + 1]) {
                panic!(
                    "assert_rotated_descending! failed: rows {} and {} out of order.\n  experience: {:?}",
                    i,
                    i + 1,
                    exp
                );
            }
        }
        if let Some(first) = exp.first() {
            if exp.iter().skip(1).any(|v| rank(*v) < rank(*first)) {
                panic!(
                    "assert_rotated_descending! failed: row 0 is not the global minimum.\n  experience: {:?}",
                    exp
                );
            }
        }
    }};
}
