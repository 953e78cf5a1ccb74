//! naksha-view - occupancy map waypoint viewer
//!
//! Loads a PGM+YAML occupancy map, imports the waypoint set if one exists
//! next to it, and writes an SVG snapshot of the current frame. The same
//! session type backs interactive shells; this binary drives it headless.

use log::{info, warn};
use naksha_view::{MapSession, Result, ViewerConfig};
use std::env;
use std::path::Path;

/// Parse command line arguments.
///
/// Supports:
/// - `naksha-view <config>` (positional)
/// - `naksha-view --config <config>` / `-c <config>`
/// - `--out <path>` for the SVG snapshot (default `map.svg`)
fn parse_args() -> (String, String) {
    let args: Vec<String> = env::args().collect();

    let mut config_path = "naksha.toml".to_string();
    let mut out_path = "map.svg".to_string();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" if i + 1 < args.len() => {
                config_path = args[i + 1].clone();
                i += 2;
            }
            "--out" | "-o" if i + 1 < args.len() => {
                out_path = args[i + 1].clone();
                i += 2;
            }
            arg if !arg.starts_with('-') => {
                config_path = arg.to_string();
                i += 1;
            }
            _ => i += 1,
        }
    }

    (config_path, out_path)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let (config_path, out_path) = parse_args();

    let config = if Path::new(&config_path).exists() {
        info!("Using config: {config_path}");
        ViewerConfig::from_file(&config_path)?
    } else {
        info!("Config {config_path} not found, using defaults");
        ViewerConfig::default()
    };

    let description_path = config.map.description_path.clone();
    let waypoints_path = config.map.waypoints_path.clone();

    let mut session = MapSession::new(config);
    session.load_map(&description_path)?;

    if Path::new(&waypoints_path).exists() {
        if let Err(e) = session.import_waypoints(&waypoints_path) {
            warn!("waypoint import failed, starting empty: {e}");
        }
    }

    let svg = session.render_svg()?;
    std::fs::write(&out_path, svg)?;
    info!(
        "wrote {out_path} ({} waypoints)",
        session.store().len()
    );

    Ok(())
}
