use salary_analyzer::AggregateReport;

const HEADER: [&str; 4] = [
    "Language",
    "Vacancies found",
    "Vacancies processed",
    "Average salary (RUB)",
];

/// Render a report as an ascii table headed by `title`.
pub fn render(title: &str, report: &AggregateReport) -> String {
    let mut rows = vec![HEADER.map(String::from)];
    for (language, stats) in report.iter() {
        rows.push([
            language.to_owned(),
            stats.vacancies_found.to_string(),
            stats.vacancies_processed.to_string(),
            stats.average_salary.to_string(),
        ]);
    }
    // widths in chars, byte length would break alignment for cyrillic names
    let mut widths = [0usize; 4];
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }
    let border = widths
        .iter()
        .map(|width| "-".repeat(width + 2))
        .collect::<Vec<_>>()
        .join("+");
    let border = format!("+{}+", border);

    let mut lines = vec![title.to_owned(), border.clone()];
    for (index, row) in rows.iter().enumerate() {
        let cells = row
            .iter()
            .zip(widths)
            .map(|(cell, width)| {
                let padding = width - cell.chars().count();
                format!(" {}{} ", cell, " ".repeat(padding))
            })
            .collect::<Vec<_>>()
            .join("|");
        lines.push(format!("|{}|", cells));
        if index == 0 {
            lines.push(border.clone());
        }
    }
    lines.push(border);
    lines.join("\n")
}
