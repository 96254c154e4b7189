//! Manifest reading and validation
//!
//! Reads `manifest.json` from an extension source directory and checks the
//! fields the tool needs. Every problem found is aggregated into a single
//! `InvalidManifest` error.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::errors::InvalidManifest;
use crate::logging::create_logger;

/// Parsed view of `manifest.json`
///
/// Fields are optional so validation can report everything that is missing
/// instead of stopping at the first absent field. Keys the tool does not
/// care about are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ManifestData {
    name: Option<String>,
    version: Option<String>,
    applications: Option<Applications>,
}

#[derive(Debug, Clone, Deserialize)]
struct Applications {
    gecko: Option<Gecko>,
}

#[derive(Debug, Clone, Deserialize)]
struct Gecko {
    id: Option<String>,
}

impl ManifestData {
    /// Extension name, empty if the manifest omitted it
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    /// Extension version, empty if the manifest omitted it
    pub fn version(&self) -> &str {
        self.version.as_deref().unwrap_or("")
    }

    /// The `applications.gecko.id` value, if the whole chain is present
    pub fn application_id(&self) -> Option<&str> {
        self.applications.as_ref()?.gecko.as_ref()?.id.as_deref()
    }
}

/// Read and validate `manifest.json` under `source_dir`
///
/// This is basic validation of what the tool itself needs, not everything a
/// browser will require to run the extension. Returns the parsed manifest, or
/// a single `InvalidManifest` error aggregating every detected problem.
pub fn get_validated_manifest(source_dir: &Path) -> Result<ManifestData, InvalidManifest> {
    let manifest_file = source_dir.join("manifest.json");
    let log = create_logger(file!());
    log.debug(format!("Validating manifest at {}", manifest_file.display()));

    let contents = fs::read_to_string(&manifest_file).map_err(|error| {
        InvalidManifest(format!(
            "Could not read manifest.json file at {}: {}",
            manifest_file.display(),
            error
        ))
    })?;

    let data: ManifestData = serde_json::from_str(&contents).map_err(|error| {
        InvalidManifest(format!(
            "Error parsing manifest.json at {}: {}",
            manifest_file.display(),
            error
        ))
    })?;

    let mut errors: Vec<String> = Vec::new();
    if data.name().is_empty() {
        errors.push("missing \"name\" property".to_string());
    }
    if data.version().is_empty() {
        errors.push("missing \"version\" property".to_string());
    }

    // Report only the first missing link of the applications.gecko.id chain
    match &data.applications {
        None => errors.push("missing \"applications\" property".to_string()),
        Some(applications) => match &applications.gecko {
            None => errors.push("missing \"applications.gecko\" property".to_string()),
            Some(gecko) => {
                if gecko.id.as_deref().unwrap_or("").is_empty() {
                    errors.push("missing \"applications.gecko.id\" property".to_string());
                }
            }
        },
    }

    if !errors.is_empty() {
        return Err(InvalidManifest(format!(
            "Manifest at {} is invalid: {}",
            manifest_file.display(),
            errors.join("; ")
        )));
    }

    Ok(data)
}
