use anyhow::Result;

use crate::app::App;
use crate::OutputFormat;

pub fn run(app: &App, drill_name: &str, grade: i32, format: &OutputFormat) -> Result<()> {
    let drill = app.find_drill(drill_name)?;

    let state = app
        .storage
        .submit_review(app.practitioner.id, drill.id, grade)?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&state)?);
        }
        OutputFormat::Plain => {
            let days = state.interval_days;
            println!(
                "'{}' graded {}. Next review in {} day{} ({}).",
                drill.name,
                grade,
                days,
                if days == 1 { "" } else { "s" },
                state.due_at.format("%Y-%m-%d")
            );
        }
    }

    Ok(())
}
