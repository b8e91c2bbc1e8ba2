use std::path::{Path, PathBuf};

use logger::Logger;
use map_engine::types::load_collection;
use serde::Deserialize;

mod map;
mod plugins;
mod state;
pub mod status_source;
mod widgets;
mod windows;

pub use map::{MapApp, SelectionCallback};

/// Runtime configuration of the map application.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    /// GeoJSON world boundary dataset.
    pub dataset_path: PathBuf,
    /// Endpoint serving the country status records as JSON.
    pub status_endpoint: String,
    pub log_dir: PathBuf,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from("assets/countries.geojson"),
            status_endpoint: "http://127.0.0.1:8000/api/country-status".to_string(),
            log_dir: PathBuf::from("logs"),
        }
    }
}

impl MapConfig {
    /// Loads a configuration file; absent keys keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }
}

/// Loads the boundary dataset and starts the map window.
///
/// A missing or malformed dataset is not fatal: the map opens with bare
/// tiles (and every island marker), and the problem is logged.
pub fn run(config: MapConfig) -> Result<(), Box<dyn std::error::Error>> {
    let logger = Logger::new(&config.log_dir, "country-map")?;

    let features = match std::fs::read_to_string(&config.dataset_path) {
        Ok(geojson) => match load_collection(&geojson) {
            Ok(features) => features,
            Err(e) => {
                logger.error(&format!("Boundary dataset unusable: {e}"), true)?;
                Vec::new()
            }
        },
        Err(e) => {
            logger.error(
                &format!(
                    "Could not read {}: {e}",
                    config.dataset_path.display()
                ),
                true,
            )?;
            Vec::new()
        }
    };

    eframe::run_native(
        "Pola i Leon — World Map",
        Default::default(),
        Box::new(move |cc| {
            Ok(Box::new(MapApp::new(
                cc.egui_ctx.clone(),
                features,
                config.status_endpoint,
                logger,
            )))
        }),
    )?;
    Ok(())
}
