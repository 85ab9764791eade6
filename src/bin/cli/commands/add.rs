use anyhow::{bail, Result};

use woodshed::storage::DrillKind;

use crate::app::App;
use crate::OutputFormat;

pub fn run(
    app: &App,
    name: &str,
    kind: Option<&str>,
    description: Option<String>,
    tags: Option<&str>,
    tempo: Option<i32>,
    format: &OutputFormat,
) -> Result<()> {
    let kind = match kind {
        None => None,
        Some("rudiment") => Some(DrillKind::Rudiment),
        Some("groove") => Some(DrillKind::Groove),
        Some("fill") => Some(DrillKind::Fill),
        Some("song") => Some(DrillKind::Song),
        Some(other) => bail!("Unknown drill kind '{}' (rudiment, groove, fill, song)", other),
    };

    let tags = tags.map(|t| {
        t.split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect::<Vec<String>>()
    });

    let drill = app.storage.create_drill(
        app.practitioner.id,
        name.to_string(),
        kind,
        description,
        tags,
        tempo,
    )?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&drill)?);
        }
        OutputFormat::Plain => {
            println!("Added '{}' ({:?})", drill.name, drill.kind);
        }
    }

    Ok(())
}
