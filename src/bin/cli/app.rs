use anyhow::{bail, Context, Result};

use woodshed::storage::{Drill, Practitioner};
use woodshed::PracticeStorage;

/// Shared application state for CLI commands
pub struct App {
    pub storage: PracticeStorage,
    pub practitioner: Practitioner,
}

impl App {
    /// Initialize from default data directory
    pub fn new(practitioner_name: Option<&str>) -> Result<Self> {
        let data_dir =
            PracticeStorage::default_data_dir().context("Failed to get data directory")?;
        let storage = PracticeStorage::new(data_dir);

        let practitioner = storage
            .get_or_create_practitioner(practitioner_name.unwrap_or("default"))
            .context("Failed to initialize practitioner")?;

        Ok(Self {
            storage,
            practitioner,
        })
    }

    /// Find a drill by name (case-insensitive prefix match)
    pub fn find_drill(&self, name: &str) -> Result<Drill> {
        let drills = self
            .storage
            .list_drills(self.practitioner.id)
            .context("Failed to list drills")?;

        let name_lower = name.to_lowercase();
        let mut matches: Vec<Drill> = drills
            .into_iter()
            .filter(|d| d.name.to_lowercase().starts_with(&name_lower))
            .collect();

        match matches.len() {
            0 => bail!("Drill '{}' not found", name),
            1 => Ok(matches.remove(0)),
            _ => {
                // Prefer an exact match before complaining
                if let Some(pos) = matches
                    .iter()
                    .position(|d| d.name.to_lowercase() == name_lower)
                {
                    Ok(matches.remove(pos))
                } else {
                    let names: Vec<String> = matches.into_iter().map(|d| d.name).collect();
                    bail!("Drill '{}' is ambiguous: {}", name, names.join(", "))
                }
            }
        }
    }
}
