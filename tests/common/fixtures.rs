//! Static roster corpora and temp-file helpers used across harnesses.

use std::path::PathBuf;
use tempfile::TempDir;

/// The four-person scenario: after normalization the order is C, D, A, B.
pub const SCENARIO_NAMES: [&str; 4] = ["A", "B", "C", "D"];
pub const SCENARIO_EXPERIENCE: [&str; 4] = ["5 yrs", "2", "", "10.5"];

/// A pandas-style export: index column, `No.`, blank headers, one row with
/// no name, and assorted experience spellings.
pub const ROSTER_CSV: &str = "\
,No.,,,,,,,,,
0,1,Aiko Tanaka,F,29,Consultant,5 yrs,Business,N2,SAP MM,2024-04-01
1,2,Ben Ito,M,35,Lead,2,Native,N1,SAP FI,2023-10-01
2,3,,M,41,Architect,12,Fluent,N1,ABAP,2022-01-15
3,4,Chen Wu,M,41,Architect,,Fluent,N1,ABAP,2022-01-15
4,5,Dana Mori,F,38,Manager,10.5 years,Native,N1,SAP SD,2021-07-01
";

/// A CSV whose Name column cannot be found by the default layout.
pub const NO_NAME_CSV: &str = "\
Employee,Experience
Aiko,5
";

/// A text listing mixing tabs, runs of spaces, and pipes.
pub const TEXT_LISTING: &str = "\
Name\tGender\tAge\tDesignation\tExperience\tJapanese\tJLPT\tSkill\tDOJ
--------------------------------------------------------------------
Aiko Tanaka\tF\t29\tConsultant\t5 yrs\tBusiness\tN2\tSAP MM\t2024-04-01
Ben Ito  M  35  Lead  2  Native  N1  SAP FI  2023-10-01
| Chen Wu | M | 41 | Architect | n/a | Fluent | N1 | ABAP | 2022-01-15 |
Dana Mori\tF\t38\tManager\t10.5\tNative\tN1\tSAP SD\t2021-07-01
not enough fields here
";

/// Write `contents` to `name` inside a fresh temp dir. Keep the `TempDir`
/// alive for as long as the path is used.
pub fn temp_file(name: &str, contents: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join(name);
    std::fs::write(&path, contents).expect("write temp file");
    (dir, path)
}
