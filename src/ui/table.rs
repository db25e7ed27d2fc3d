use crate::types::{Column, DisplayRow, ResourceKind};

/// Render rows as a fixed-width table followed by a total line.
///
/// Column widths are minimums; longer values push the rest of the line
/// to the right instead of being cut.
pub fn render(kind: ResourceKind, rows: &[DisplayRow]) -> String {
    let columns = kind.columns();
    let mut out = String::from("\n");

    push_line(&mut out, columns, columns.iter().map(|c| c.header));
    for row in rows {
        debug_assert_eq!(row.len(), columns.len(), "row arity for {}", kind);
        push_line(&mut out, columns, row.iter().map(String::as_str));
    }

    out.push_str(&format!("\nTotal {}: {}\n", kind.plural(), rows.len()));
    out
}

fn push_line<'a>(out: &mut String, columns: &[Column], fields: impl Iterator<Item = &'a str>) {
    let line = columns
        .iter()
        .zip(fields)
        .map(|(column, field)| format!("{:<width$}", field, width = column.width))
        .collect::<Vec<_>>()
        .join(" ");
    out.push_str(&line);
    out.push('\n');
}
