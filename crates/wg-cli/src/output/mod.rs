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
    match value {
        Value::Array(items) => Ok(render_array_table(&items)),
        Value::Object(map) => {
            // One list of records becomes the body; other fields head it as
            // key/value pairs.
            let (lists, scalars): (Vec<_>, Vec<_>) = map.into_iter().partition(|(_, value)| is_record_list(value));
            let [(_, Value::Array(items))] = lists.as_slice() else {
                return Ok(render_key_values(scalars.into_iter().chain(lists)));
            };
            let body = render_array_table(items);
            if scalars.is_empty() {
                return Ok(body);
            }
            Ok(format!("{}\n\n{body}", render_key_values(scalars)))
        }
        scalar => {
            let headers = ["value"];
            let rows = vec![vec![value_to_cell(&scalar)]];
            Ok(table::render_entity_table(&headers, &rows, table_options()))
        }
    }
}

fn is_record_list(value: &Value) -> bool {
    value
        .as_array()
        .is_some_and(|items| items.iter().all(Value::is_object))
}

fn render_key_values(entries: impl IntoIterator<Item = (String, Value)>) -> String {
    let headers = ["key", "value"];
    let rows = entries
        .into_iter()
        .map(|(key, value)| vec![key, value_to_cell(&value)])
        .collect::<Vec<_>>();
    table::render_entity_table(&headers, &rows, table_options())
}

fn render_array_table(items: &[Value]) -> String {
    if items.is_empty() {
        return String::from("(no rows)");
    }

    if !items.iter().all(Value::is_object) {
        let headers = ["value"];
        let rows = items
            .iter()
            .map(|item| vec![value_to_cell(item)])
            .collect::<Vec<_>>();
        return table::render_entity_table(&headers, &rows, table_options());
    }

    let mut headers = Vec::<String>::new();
    for map in items.iter().filter_map(Value::as_object) {
        for key in map.keys() {
            if !headers.contains(key) {
                headers.push(key.clone());
            }
        }
    }

    if headers.is_empty() {
        return String::from("(no columns)");
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

    table::render_entity_table(&header_refs, &rows, table_options())
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        Value::Array(items) if items.iter().all(Value::is_string) => items
            .iter()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .join(" | "),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}

#[cfg(test)]
mod tests {
    use serde::Serialize;

    use super::render;
    use crate::cli::OutputFormat;

    #[derive(Serialize)]
    struct Summary {
        title: &'static str,
        quality: Option<f64>,
    }

    #[derive(Serialize)]
    struct Listing {
        puzzles: Vec<Summary>,
    }

    #[derive(Serialize)]
    struct Report {
        title: &'static str,
        quality: f64,
        grades: Vec<Summary>,
    }

    #[test]
    fn json_render_is_valid_json() {
        let value = Summary {
            title: "Dawn",
            quality: Some(70.0),
        };
        let out = render(&value, OutputFormat::Json).expect("json render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["title"], "Dawn");
        assert_eq!(parsed["quality"], 70.0);
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let value = Summary {
            title: "Dawn",
            quality: None,
        };
        let out = render(&value, OutputFormat::Raw).expect("raw render should work");
        assert!(!out.contains('\n'));
    }

    #[test]
    fn single_list_field_renders_as_rows() {
        let value = Listing {
            puzzles: vec![
                Summary {
                    title: "Dawn",
                    quality: Some(70.0),
                },
                Summary {
                    title: "Dusk",
                    quality: None,
                },
            ],
        };
        let out = render(&value, OutputFormat::Table).expect("table render should work");
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[0].contains("title"));
        assert!(lines[0].contains("quality"));
        assert_eq!(lines.len(), 4);
        assert!(lines[3].contains("Dusk"));
    }

    #[test]
    fn scalar_fields_head_the_record_list() {
        let value = Report {
            title: "Dawn",
            quality: 70.0,
            grades: vec![Summary {
                title: "The cat sleeps.",
                quality: Some(70.0),
            }],
        };
        let out = render(&value, OutputFormat::Table).expect("table render should work");
        let (head, body) = out.split_once("\n\n").expect("two sections");
        assert!(head.starts_with("key"));
        assert!(head.contains("Dawn"));
        assert!(body.lines().next().is_some_and(|line| line.contains("title")));
        assert!(body.contains("The cat sleeps."));
    }

    #[test]
    fn object_renders_key_value_pairs() {
        let value = Summary {
            title: "Dawn",
            quality: Some(70.0),
        };
        let out = render(&value, OutputFormat::Table).expect("table render should work");
        assert!(out.lines().next().is_some_and(|line| line.contains("key")));
        assert!(out.contains("Dawn"));
    }
}
