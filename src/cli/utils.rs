use serde_json::{json, Value};

use crate::cli::OutputFormat;

/// Output a success message in the appropriate format.
///
/// JSON mode merges `data` into the top-level object next to `message`.
pub fn output_success(
    output_format: &OutputFormat,
    message: &str,
    data: Option<Value>,
) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => {
            let mut response = json!({
                "success": true,
                "message": message
            });

            if let (Some(Value::Object(extra)), Some(target)) = (data, response.as_object_mut()) {
                target.extend(extra);
            }

            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        OutputFormat::Text => {
            println!("✓ {}", message);
        }
    }
    Ok(())
}

/// Output a list of rows: JSON array under `key`, or one line per row.
pub fn output_rows(
    output_format: &OutputFormat,
    key: &str,
    rows: Value,
    lines: &[String],
) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&json!({ key: rows }))?);
        }
        OutputFormat::Text => {
            if lines.is_empty() {
                println!("(none)");
            }
            for line in lines {
                println!("{}", line);
            }
        }
    }
    Ok(())
}
