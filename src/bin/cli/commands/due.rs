use anyhow::Result;
use chrono::Utc;

use woodshed::storage::DrillWithState;

use crate::app::App;
use crate::OutputFormat;

pub fn run(app: &App, format: &OutputFormat) -> Result<()> {
    let sheet = app.storage.practice_sheet(app.practitioner.id, Utc::now())?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&sheet)?);
        }
        OutputFormat::Plain => {
            if sheet.overdue.is_empty() && sheet.due_today.is_empty() {
                println!("Nothing due. Next up:");
                for entry in sheet.upcoming.iter().take(3) {
                    println!(
                        "  {} ({})",
                        entry.drill.name,
                        entry.state.due_at.format("%Y-%m-%d")
                    );
                }
                return Ok(());
            }

            print_bucket("Overdue", &sheet.overdue);
            print_bucket("Due today", &sheet.due_today);
        }
    }

    Ok(())
}

fn print_bucket(label: &str, entries: &[DrillWithState]) {
    if entries.is_empty() {
        return;
    }

    println!("{}:", label);
    for entry in entries {
        let detail = if entry.state.last_reviewed_at.is_none() {
            "never practiced".to_string()
        } else {
            format!("due {}", entry.state.due_at.format("%Y-%m-%d"))
        };
        match entry.drill.target_tempo {
            Some(bpm) => println!("  {} @ {} bpm ({})", entry.drill.name, bpm, detail),
            None => println!("  {} ({})", entry.drill.name, detail),
        }
    }
}
