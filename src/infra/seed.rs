use std::{collections::HashSet, path::Path};

use tracing::{info, warn};

use super::InfraError;
use crate::domain::entities::activity::{ActivityCatalog, default_catalog};

/// Loads the activity catalogue from `path`, or the built-in one when no path is given.
pub fn load_catalog(path: Option<&Path>) -> Result<ActivityCatalog, InfraError> {
    let Some(path) = path else {
        let catalog = default_catalog();
        info!(activities = catalog.len(), "Using built-in activity catalogue");
        return Ok(catalog);
    };

    let raw = std::fs::read_to_string(path).map_err(|source| InfraError::SeedRead {
        path: path.to_path_buf(),
        source,
    })?;
    let catalog: ActivityCatalog =
        serde_json::from_str(&raw).map_err(|source| InfraError::SeedParse {
            path: path.to_path_buf(),
            source,
        })?;
    validate_catalog(&catalog)?;

    info!(
        activities = catalog.len(),
        path = %path.display(),
        "Loaded activity catalogue from seed file"
    );
    Ok(catalog)
}

fn validate_catalog(catalog: &ActivityCatalog) -> Result<(), InfraError> {
    if catalog.is_empty() {
        return Err(InfraError::InvalidSeed("no activities defined".into()));
    }

    for (name, activity) in catalog {
        if name.trim().is_empty() {
            return Err(InfraError::InvalidSeed("activity name is blank".into()));
        }

        let mut seen = HashSet::new();
        if let Some(dup) = activity.participants.iter().find(|p| !seen.insert(p.as_str())) {
            return Err(InfraError::InvalidSeed(format!(
                "{dup} is listed twice in {name}"
            )));
        }

        // Capacity is only advisory unless enforcement is enabled.
        if activity.participants.len() > activity.max_participants as usize {
            warn!(
                activity = %name,
                participants = activity.participants.len(),
                max_participants = activity.max_participants,
                "Seeded activity is over capacity"
            );
        }
    }

    Ok(())
}
