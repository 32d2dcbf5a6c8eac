//! Test builders: ergonomic constructors for raw tables and roster files.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use roster_core::{Cell, Column, RawTable};

// ---------------------------------------------------------------------------
// RawTableBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`RawTable`] fixtures.
///
/// # Example
///
/// ```rust
/// let raw = RawTableBuilder::new()
///     .index(3)
///     .placeholder(2, ["A", "B", "C"])
///     .placeholder(6, ["5 yrs", "2", ""])
///     .build();
/// ```
#[derive(Default)]
pub struct RawTableBuilder {
    table: RawTable,
}

impl RawTableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// A column with an explicit header; blank strings become missing cells.
    pub fn column<I, S>(mut self, name: &str, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let cells = values.into_iter().map(|v| Cell::text(v.into())).collect();
        self.table.push_column(Column::new(name, cells));
        self
    }

    /// A column headed `Unnamed: {position}`.
    pub fn placeholder<I, S>(self, position: usize, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.column(&format!("Unnamed: {position}"), values)
    }

    /// The serialized row index pandas writes as `Unnamed: 0`.
    pub fn index(mut self, rows: usize) -> Self {
        let cells = (0..rows).map(|i| Cell::Number(i as f64)).collect();
        self.table.push_column(Column::new("Unnamed: 0", cells));
        self
    }

    /// The 1-based `No.` ordinal column.
    pub fn ordinal(mut self, rows: usize) -> Self {
        let cells = (1..=rows).map(|i| Cell::Number(i as f64)).collect();
        self.table.push_column(Column::new("No.", cells));
        self
    }

    pub fn build(self) -> RawTable {
        self.table
    }
}

// ---------------------------------------------------------------------------
// Roster files
// ---------------------------------------------------------------------------

/// One person, in v1 column order.
#[derive(Debug, Clone)]
pub struct Person {
    pub name: &'static str,
    pub gender: &'static str,
    pub age: &'static str,
    pub designation: &'static str,
    pub experience: &'static str,
    pub japanese: &'static str,
    pub jlpt: &'static str,
    pub skill: &'static str,
    pub joined: &'static str,
}

impl Person {
    /// A person with only a name and experience; other fields are filler.
    pub fn new(name: &'static str, experience: &'static str) -> Self {
        Self {
            name,
            gender: "F",
            age: "30",
            designation: "Consultant",
            experience,
            japanese: "Business",
            jlpt: "N2",
            skill: "SAP MM",
            joined: "2024-04-01",
        }
    }

    fn fields(&self) -> [&'static str; 9] {
        [
            self.name,
            self.gender,
            self.age,
            self.designation,
            self.experience,
            self.japanese,
            self.jlpt,
            self.skill,
            self.joined,
        ]
    }
}

/// A CSV the way the roster spreadsheet exports: blank header cells except
/// `No.`, a 0-based index in the first column, then the nine fields.
pub fn roster_csv(people: &[Person]) -> String {
    let mut out = String::from(",No.,,,,,,,,,\n");
    for (i, person) in people.iter().enumerate() {
        let mut record = vec![i.to_string(), (i + 1).to_string()];
        record.extend(person.fields().iter().map(|f| csv_field(f)));
        out.push_str(&record.join(","));
        out.push('\n');
    }
    out
}

/// Tab-separated text listing with a header line.
pub fn roster_listing(people: &[Person]) -> String {
    let mut out = String::from(
        "Name\tGender\tAge\tDesignation\tYears Experience\tLanguage Ability\tCertification Level\tSkill\tProject Join Date\n",
    );
    for person in people {
        out.push_str(&person.fields().join("\t"));
        out.push('\n');
    }
    out
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
