use std::fmt::Write;

use crate::content::ContentRecord;

/// Plain-text view of one problem for the terminal.
pub fn render_record(record: &ContentRecord) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", record.title);
    let _ = writeln!(out, "{}", "=".repeat(record.title.chars().count()));
    let _ = writeln!(
        out,
        "id: {}  difficulty: {}  category: {}",
        record.id, record.difficulty, record.category
    );

    push_section(&mut out, "Description", &record.description);
    push_section(&mut out, "Solution", &record.solution);

    if !record.test_cases.is_empty() {
        let _ = writeln!(out, "\nTest cases\n----------");
        for (index, case) in record.test_cases.iter().enumerate() {
            let _ = writeln!(out, "{}. input:  {}", index + 1, case.input);
            let _ = writeln!(out, "   output: {}", case.output);
        }
    }

    push_section(&mut out, "Explanation", &record.explanation);
    out
}

fn push_section(out: &mut String, heading: &str, body: &str) {
    let _ = writeln!(out, "\n{}\n{}", heading, "-".repeat(heading.len()));
    let _ = writeln!(out, "{}", body.trim_end());
}

/// One line per problem: `id  [difficulty]  title`.
pub fn render_summary(records: &[&ContentRecord]) -> String {
    let width = records.iter().map(|r| r.id.len()).max().unwrap_or(0);

    records
        .iter()
        .map(|r| format!("{:<width$}  [{:<6}]  {}\n", r.id, r.difficulty.as_str(), r.title))
        .collect()
}
