use std::path::Path;

use graphical_interface::{run, MapConfig};

const CONFIG_PATH: &str = "map-config.json";

fn main() {
    let config_path = Path::new(CONFIG_PATH);
    let config = if config_path.exists() {
        match MapConfig::from_file(config_path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Bad {CONFIG_PATH}: {e}");
                std::process::exit(1);
            }
        }
    } else {
        MapConfig::default()
    };

    if let Err(e) = run(config) {
        eprintln!("Map failed to start: {e}");
        std::process::exit(1);
    }
}
