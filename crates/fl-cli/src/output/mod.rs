use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_table(value),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

fn table_options() -> table::TableOptions {
    let prefs = ui::prefs();
    table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

fn render_table<T: Serialize>(value: &T) -> anyhow::Result<String> {
    let options = table_options();
    match serde_json::to_value(value)? {
        Value::Array(items) => Ok(render_array_table(&items, options)),
        Value::Object(map) => {
            let rows = map
                .into_iter()
                .map(|(key, value)| vec![key, value_to_cell(&value)])
                .collect::<Vec<_>>();
            Ok(table::render_table(&["key", "value"], &rows, options))
        }
        scalar => Ok(table::render_table(
            &["value"],
            &[vec![value_to_cell(&scalar)]],
            options,
        )),
    }
}

/// Arrays of objects become one row per object, columns in first-seen order.
fn render_array_table(items: &[Value], options: table::TableOptions) -> String {
    if items.is_empty() {
        return String::from("(no rows)");
    }

    if !items.iter().all(Value::is_object) {
        let rows = items
            .iter()
            .map(|item| vec![value_to_cell(item)])
            .collect::<Vec<_>>();
        return table::render_table(&["value"], &rows, options);
    }

    let mut headers = Vec::<String>::new();
    for key in items.iter().filter_map(Value::as_object).flat_map(|map| map.keys()) {
        if !headers.contains(key) {
            headers.push(key.clone());
        }
    }

    let header_refs = headers.iter().map(String::as_str).collect::<Vec<_>>();
    let rows = items
        .iter()
        .filter_map(Value::as_object)
        .map(|map| {
            headers
                .iter()
                .map(|header| map.get(header).map_or_else(|| String::from("-"), value_to_cell))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    table::render_table(&header_refs, &rows, options)
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}

#[cfg(test)]
mod tests {
    use serde::Serialize;

    use super::render;
    use crate::cli::OutputFormat;

    #[derive(Serialize)]
    struct Row {
        id: &'static str,
        entries: u32,
    }

    #[test]
    fn json_render_is_valid_json() {
        let out = render(&Row { id: "m1", entries: 2 }, OutputFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["id"], "m1");
        assert_eq!(parsed["entries"], 2);
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let out = render(&Row { id: "m1", entries: 2 }, OutputFormat::Raw).unwrap();
        assert!(!out.contains('\n'));
    }

    #[test]
    fn array_of_objects_renders_one_row_each() {
        let rows = [Row { id: "m1", entries: 2 }, Row { id: "m2", entries: 0 }];
        let out = render(&rows, OutputFormat::Table).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("id"), "columns follow field order: {out}");
        assert!(lines[0].trim_end().ends_with("entries"));
        assert!(lines[3].starts_with("m2"));
    }

    #[test]
    fn object_renders_key_rows_in_field_order() {
        let out = render(&Row { id: "m1", entries: 2 }, OutputFormat::Table).unwrap();
        let keys: Vec<&str> = out
            .lines()
            .skip(2)
            .filter_map(|line| line.split_whitespace().next())
            .collect();
        assert_eq!(keys, ["id", "entries"]);
    }

    #[test]
    fn empty_array_has_placeholder() {
        let rows: [Row; 0] = [];
        assert_eq!(render(&rows, OutputFormat::Table).unwrap(), "(no rows)");
    }
}
