//! Plain aligned tables for `--format table`.

#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

const MIN_COLUMN: usize = 6;
const SEPARATOR: &str = "  ";

/// Render aligned rows under a header line and a dashed divider.
#[must_use]
pub fn render_table(headers: &[&str], rows: &[Vec<String>], options: TableOptions) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .chain([header.chars().count(), MIN_COLUMN])
                .max()
                .unwrap_or(MIN_COLUMN)
        })
        .collect();
    shrink_to_fit(&mut widths, options.max_width);

    let header_line = join_cells(headers.iter().copied().map(String::from), &widths, false);
    let divider = "-".repeat(header_line.chars().count());

    let mut lines = vec![header_line, divider];
    lines.extend(rows.iter().map(|row| {
        let cells = (0..widths.len()).map(|index| {
            row.get(index).cloned().unwrap_or_else(|| "-".to_string())
        });
        join_cells(cells, &widths, options.color)
    }));
    lines.join("\n")
}

fn join_cells(cells: impl Iterator<Item = String>, widths: &[usize], color: bool) -> String {
    cells
        .zip(widths)
        .map(|(cell, width)| {
            let text = truncate(&cell, *width);
            let pad = " ".repeat(width.saturating_sub(text.chars().count()));
            let numeric = looks_numeric(&text);
            let text = if color { colorize(&text) } else { text };
            if numeric {
                format!("{pad}{text}")
            } else {
                format!("{text}{pad}")
            }
        })
        .collect::<Vec<_>>()
        .join(SEPARATOR)
        .trim_end()
        .to_string()
}

/// Narrow the widest columns one character at a time until the table fits.
fn shrink_to_fit(widths: &mut [usize], max_width: Option<usize>) {
    let Some(max_width) = max_width else {
        return;
    };
    let separators = widths.len().saturating_sub(1) * SEPARATOR.len();
    while widths.iter().sum::<usize>() + separators > max_width {
        let Some(widest) = widths
            .iter_mut()
            .filter(|width| **width > MIN_COLUMN)
            .max_by_key(|width| **width)
        else {
            break;
        };
        *widest -= 1;
    }
}

fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    let mut out: String = value.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}

fn looks_numeric(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty()
        && trimmed
            .chars()
            .all(|ch| ch.is_ascii_digit() || matches!(ch, '-' | '+' | '.'))
}

fn colorize(value: &str) -> String {
    let code = match value.to_ascii_lowercase().as_str() {
        "completed" | "accepted" | "true" | "ok" => "32",
        "pending" | "constrained" | "warning" => "33",
        "rejected" | "false" | "error" => "31",
        _ => return value.to_string(),
    };
    format!("\u{1b}[{code}m{value}\u{1b}[0m")
}
