use anyhow::Result;
use chrono::Utc;

use crate::app::App;
use crate::OutputFormat;

pub fn run(app: &App, format: &OutputFormat) -> Result<()> {
    let drills = app.storage.list_drills(app.practitioner.id)?;
    let now = Utc::now();

    match format {
        OutputFormat::Json => {
            let mut output = Vec::new();
            for drill in &drills {
                let state = app.storage.get_item(app.practitioner.id, drill.id)?;
                output.push(serde_json::json!({
                    "id": drill.id.to_string(),
                    "name": drill.name,
                    "kind": format!("{:?}", drill.kind).to_lowercase(),
                    "tags": drill.tags,
                    "dueAt": state.due_at.to_rfc3339(),
                    "intervalDays": state.interval_days,
                    "easeFactor": state.ease_factor,
                    "repetitions": state.repetitions,
                }));
            }
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            if drills.is_empty() {
                println!("No drills yet. Add one with `woodshed-cli add`.");
                return Ok(());
            }

            let name_width = name_column_width(&drills);

            println!(
                "{:<name_w$} {:<10} {:>5} {:>6} {}",
                "NAME",
                "KIND",
                "REPS",
                "EASE",
                "DUE",
                name_w = name_width
            );
            for drill in &drills {
                let state = app.storage.get_item(app.practitioner.id, drill.id)?;
                let due = if state.last_reviewed_at.is_none() {
                    "new".to_string()
                } else if state.is_due(now) {
                    "due".to_string()
                } else {
                    state.due_at.format("%Y-%m-%d").to_string()
                };
                println!(
                    "{:<name_w$} {:<10} {:>5} {:>6.2} {}",
                    drill.name,
                    format!("{:?}", drill.kind).to_lowercase(),
                    state.repetitions,
                    state.ease_factor,
                    due,
                    name_w = name_width
                );
            }
        }
    }

    Ok(())
}

/// Width of the NAME column in characters, matching the padding unit
/// used by `format!` (counting chars, not bytes)
fn name_column_width(drills: &[woodshed::storage::Drill]) -> usize {
    drills
        .iter()
        .map(|d| d.name.chars().count())
        .max()
        .unwrap_or(5)
        .clamp(5, 40)
}

#[cfg(test)]
mod tests {
    use super::*;
    use woodshed::storage::Drill;

    #[test]
    fn test_name_column_width_counts_chars_not_bytes() {
        // 14 chars, 16 bytes in UTF-8
        let drill = Drill::new("Bölero à trois".to_string());
        assert_eq!(drill.name.chars().count(), 14);
        assert!(drill.name.len() > 14);

        assert_eq!(name_column_width(&[drill]), 14);
    }

    #[test]
    fn test_name_column_width_bounds() {
        assert_eq!(name_column_width(&[]), 5);

        let long = Drill::new("x".repeat(60));
        assert_eq!(name_column_width(&[long]), 40);
    }
}
