use serde::Deserialize;
use std::error::Error;
use std::fs;
use std::path::Path;

use warren_chunk::StreamerParams;

#[derive(Clone, Debug, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub grid: GridSection,
    #[serde(default)]
    pub stream: StreamSection,
    #[serde(default)]
    pub walker: WalkerSection,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            grid: GridSection::default(),
            stream: StreamSection::default(),
            walker: WalkerSection::default(),
        }
    }
}

impl AppConfig {
    pub fn streamer_params(&self) -> StreamerParams {
        StreamerParams {
            cell_size: self.stream.cell_size,
            chunk_size: self.stream.chunk_size,
            view_distance: self.stream.view_distance,
        }
    }

    /// Blocking radius for the probe; unset means half a cell.
    pub fn collision_threshold(&self) -> f32 {
        self.walker
            .threshold
            .unwrap_or(self.stream.cell_size * 0.5)
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct GridSection {
    #[serde(default = "default_width")]
    pub width: usize,
    #[serde(default = "default_height")]
    pub height: usize,
    #[serde(default = "default_depth")]
    pub depth: usize,
    #[serde(default = "default_seed")]
    pub seed: u64,
}

impl Default for GridSection {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            depth: default_depth(),
            seed: default_seed(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct StreamSection {
    #[serde(default = "default_cell_size")]
    pub cell_size: f32,
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,
    #[serde(default = "default_view_distance")]
    pub view_distance: i32,
}

impl Default for StreamSection {
    fn default() -> Self {
        Self {
            cell_size: default_cell_size(),
            chunk_size: default_chunk_size(),
            view_distance: default_view_distance(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct WalkerSection {
    #[serde(default = "default_speed")]
    pub speed: f32,
    /// Collision radius override in world units.
    #[serde(default)]
    pub threshold: Option<f32>,
    #[serde(default = "default_sensitivity")]
    pub mouse_sensitivity: f32,
}

impl Default for WalkerSection {
    fn default() -> Self {
        Self {
            speed: default_speed(),
            threshold: None,
            mouse_sensitivity: default_sensitivity(),
        }
    }
}

fn default_width() -> usize {
    20
}
fn default_height() -> usize {
    5
}
fn default_depth() -> usize {
    20
}
fn default_seed() -> u64 {
    1337
}
fn default_cell_size() -> f32 {
    10.0
}
fn default_chunk_size() -> usize {
    2
}
fn default_view_distance() -> i32 {
    3
}
fn default_speed() -> f32 {
    20.0
}
fn default_sensitivity() -> f32 {
    0.1
}

pub fn load_config_from_path(path: &Path) -> Result<AppConfig, Box<dyn Error>> {
    let s = fs::read_to_string(path)?;
    let cfg: AppConfig = toml::from_str(&s)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_yields_defaults() {
        let cfg: AppConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.grid.width, 20);
        assert_eq!(cfg.grid.height, 5);
        assert_eq!(cfg.grid.depth, 20);
        assert_eq!(cfg.stream.chunk_size, 2);
        assert_eq!(cfg.stream.view_distance, 3);
        assert!((cfg.collision_threshold() - 5.0).abs() < 1e-6);
    }

    #[test]
    fn sections_override_independently() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [grid]
            width = 8
            seed = 99

            [walker]
            threshold = 2.5
            "#,
        )
        .unwrap();
        assert_eq!(cfg.grid.width, 8);
        assert_eq!(cfg.grid.seed, 99);
        // Untouched sections keep their defaults.
        assert_eq!(cfg.grid.height, 5);
        assert!((cfg.stream.cell_size - 10.0).abs() < 1e-6);
        assert!((cfg.collision_threshold() - 2.5).abs() < 1e-6);
    }
}
