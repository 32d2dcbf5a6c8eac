//! Header row clean-up shared by the CSV and spreadsheet decoders.

use roster_core::layout::placeholder_name;
use std::collections::HashMap;

/// Turn decoded header cells into unique column names.
///
/// Blank cells become `Unnamed: N`, where N is `first_position` plus the
/// cell's offset in the row. Repeated names get `.1`, `.2`, … suffixes in
/// order of appearance, skipping any suffix that is already taken.
pub fn column_names<I, S>(cells: I, first_position: usize) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let raw: Vec<String> = cells
        .into_iter()
        .enumerate()
        .map(|(offset, cell)| {
            let name = cell.as_ref().trim();
            if name.is_empty() {
                placeholder_name(first_position + offset)
            } else {
                name.to_string()
            }
        })
        .collect();
    dedupe(raw)
}

fn dedupe(names: Vec<String>) -> Vec<String> {
    let mut taken: std::collections::HashSet<String> = names.iter().cloned().collect();
    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut out = Vec::with_capacity(names.len());

    for name in names {
        let count = seen.entry(name.clone()).or_insert(0);
        if *count == 0 {
            *count = 1;
            out.push(name);
            continue;
        }
        let mut suffix = *count;
        let mut candidate = format!("{name}.{suffix}");
        while taken.contains(&candidate) {
            suffix += 1;
            candidate = format!("{name}.{suffix}");
        }
        *count = suffix + 1;
        taken.insert(candidate.clone());
        out.push(candidate);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn blank_headers_get_positional_placeholders() {
        let names = column_names(["", "No.", "", " "], 0);
        assert_eq!(names, vec!["Unnamed: 0", "No.", "Unnamed: 2", "Unnamed: 3"]);
    }

    #[test]
    fn placeholders_use_absolute_position() {
        let names = column_names(["", "Name"], 2);
        assert_eq!(names, vec!["Unnamed: 2", "Name"]);
    }

    #[test]
    fn duplicates_are_suffixed() {
        let names = column_names(["Skill", "Skill", "Skill"], 0);
        assert_eq!(names, vec!["Skill", "Skill.1", "Skill.2"]);
    }

    #[test]
    fn suffix_skips_existing_names() {
        let names = column_names(["A", "A.1", "A"], 0);
        assert_eq!(names, vec!["A", "A.1", "A.2"]);
    }
}
