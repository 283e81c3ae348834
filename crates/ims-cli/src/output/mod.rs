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
    let value = serde_json::to_value(value)?;
    let rendered = match value {
        Value::Null => String::from("(no data)"),
        Value::Array(items) => render_array_table(&items),
        Value::Object(map) => {
            let rows = map
                .into_iter()
                .map(|(key, value)| vec![key, value_to_cell(&value)])
                .collect::<Vec<_>>();
            table::render_table(&["key", "value"], &rows, table_options())
        }
        scalar => table::render_table(&["value"], &[vec![value_to_cell(&scalar)]], table_options()),
    };
    Ok(rendered)
}

/// IMS answers with one object per member and resource; columns keep the
/// order in which the API first reports them.
fn render_array_table(items: &[Value]) -> String {
    if items.is_empty() {
        return String::from("(no rows)");
    }

    if !items.iter().all(Value::is_object) {
        let rows = items
            .iter()
            .map(|item| vec![value_to_cell(item)])
            .collect::<Vec<_>>();
        return table::render_table(&["value"], &rows, table_options());
    }

    let mut headers = Vec::<&str>::new();
    for map in items.iter().filter_map(Value::as_object) {
        for key in map.keys() {
            if !headers.contains(&key.as_str()) {
                headers.push(key);
            }
        }
    }

    if headers.is_empty() {
        return String::from("(no columns)");
    }

    let rows = items
        .iter()
        .filter_map(Value::as_object)
        .map(|map| {
            headers
                .iter()
                .map(|header| {
                    map.get(*header)
                        .map_or_else(|| String::from("-"), value_to_cell)
                })
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    table::render_table(&headers, &rows, table_options())
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::render;
    use crate::cli::OutputFormat;

    #[test]
    fn json_render_is_pretty() {
        let data = json!([{"mbr": "IMS1", "pgm": "PGM1"}]);
        let out = render(&data, OutputFormat::Json).expect("json render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed, data);
        assert!(out.contains('\n'));
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let data = json!([{"mbr": "IMS1", "pgm": "PGM1"}]);
        let out = render(&data, OutputFormat::Raw).expect("raw render should work");
        assert_eq!(out, r#"[{"mbr":"IMS1","pgm":"PGM1"}]"#);
    }

    #[test]
    fn table_keeps_first_seen_column_order() {
        let data = json!([
            {"mbr": "IMS1", "pgm": "PGM1", "cc": "0"},
            {"mbr": "IMS2", "pgm": "PGM1", "cc": "0", "ccText": "OK"}
        ]);
        let out = render(&data, OutputFormat::Table).expect("table render should work");
        let header = out.lines().next().expect("header line");
        let columns = header.split_whitespace().collect::<Vec<_>>();
        assert_eq!(columns, vec!["mbr", "pgm", "cc", "ccText"]);
        assert_eq!(out.lines().count(), 4);
    }

    #[test]
    fn table_for_object_is_key_value() {
        let out = render(&json!({"status": "ok"}), OutputFormat::Table)
            .expect("table render should work");
        assert!(out.lines().next().is_some_and(|line| line.contains("key")));
        assert!(out.contains("status"));
    }

    #[test]
    fn table_for_null_data_says_so() {
        let out = render(&serde_json::Value::Null, OutputFormat::Table)
            .expect("table render should work");
        assert_eq!(out, "(no data)");
    }
}
