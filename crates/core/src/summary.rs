use stripe_seed_types::{IterationResult, format_minor_units};

const HEADERS: [&str; 8] = [
    "#",
    "Customer",
    "Name",
    "Email",
    "Payment Intent",
    "Amount",
    "Currency",
    "Status",
];

/// Render the end-of-run report as lines of a fixed-width table
pub fn render_summary(results: &[IterationResult]) -> Vec<String> {
    let rows: Vec<[String; 8]> = results
        .iter()
        .enumerate()
        .map(|(index, result)| {
            let customer = &result.customer;
            let intent = &result.payment_intent;
            [
                (index + 1).to_string(),
                customer.id.clone(),
                customer.name.clone().unwrap_or_else(|| "-".to_string()),
                customer.email.clone().unwrap_or_else(|| "-".to_string()),
                intent.id.clone(),
                format_minor_units(intent.amount, &intent.currency),
                intent.currency.clone(),
                intent.status.to_string(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut lines = vec![
        String::new(),
        format!(
            "Summary: {} iteration{} completed",
            results.len(),
            if results.len() == 1 { "" } else { "s" }
        ),
    ];
    if rows.is_empty() {
        return lines;
    }

    lines.push(format_row(&HEADERS.map(String::from), &widths));
    lines.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("  "),
    );
    lines.extend(rows.iter().map(|row| format_row(row, &widths)));
    lines
}

fn format_row(cells: &[String; 8], widths: &[usize; 8]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| {
            let pad = width.saturating_sub(cell.chars().count());
            format!("{}{}", cell, " ".repeat(pad))
        })
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}
