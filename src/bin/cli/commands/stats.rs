use anyhow::Result;
use chrono::Utc;

use crate::app::App;
use crate::OutputFormat;

pub fn run(app: &App, format: &OutputFormat) -> Result<()> {
    let stats = app.storage.stats(app.practitioner.id, Utc::now())?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
        OutputFormat::Plain => {
            println!("Drills:        {}", stats.total_drills);
            println!("  new:         {}", stats.new_drills);
            println!("  due:         {}", stats.due_drills);
            println!("Reviews today: {}", stats.reviews_today);
            println!("  passed:      {}", stats.passes_today);
            println!("Streak:        {} day(s)", stats.streak_days);
        }
    }

    Ok(())
}
