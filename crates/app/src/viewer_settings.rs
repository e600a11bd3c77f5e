//! Persistent viewer settings. Only parameters are stored, never generated maps.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use cavegen::GenerationParameters;

use crate::APP_NAME;
use crate::params::{clamp_density, clamp_iterations};

pub const SETTINGS_FORMAT_VERSION: u32 = 1;
pub const DEFAULT_TILE_SIZE: f32 = 16.0;
const MIN_TILE_SIZE: f32 = 2.0;
const MAX_TILE_SIZE: f32 = 64.0;
const MAX_MAP_SIDE: usize = 512;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ViewerSettings {
    pub format_version: u32,
    pub map_width: usize,
    pub map_height: usize,
    pub tile_size: f32,
    pub density: f64,
    pub iterations: u32,
}

impl Default for ViewerSettings {
    fn default() -> Self {
        let params = GenerationParameters::default();
        Self {
            format_version: SETTINGS_FORMAT_VERSION,
            map_width: params.width,
            map_height: params.height,
            tile_size: DEFAULT_TILE_SIZE,
            density: params.density,
            iterations: params.iterations,
        }
    }
}

impl ViewerSettings {
    pub fn get_default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", APP_NAME).map(|proj_dirs| {
            let mut path = proj_dirs.data_dir().to_path_buf();
            path.push("viewer_settings.json");
            path
        })
    }

    pub fn write_atomic(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let tmp_path = path.with_extension("json.tmp");
        let json = serde_json::to_string_pretty(self).map_err(io::Error::other)?;
        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, path)?;
        Ok(())
    }

    pub fn load(path: &Path) -> io::Result<Self> {
        let content = fs::read_to_string(path)?;
        let settings: Self = serde_json::from_str(&content)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        Ok(settings)
    }

    /// Loads settings, falling back to defaults when the file is missing,
    /// unreadable or from another format version.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(settings) if settings.format_version == SETTINGS_FORMAT_VERSION => {
                settings.sanitized()
            }
            Ok(settings) => {
                tracing::warn!(
                    found = settings.format_version,
                    expected = SETTINGS_FORMAT_VERSION,
                    "ignoring viewer settings with unknown format version"
                );
                Self::default()
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => Self::default(),
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "failed to load viewer settings");
                Self::default()
            }
        }
    }

    /// Brings every field into the range the viewer accepts.
    pub fn sanitized(&self) -> Self {
        let tile_size = if self.tile_size.is_finite() {
            self.tile_size.clamp(MIN_TILE_SIZE, MAX_TILE_SIZE)
        } else {
            DEFAULT_TILE_SIZE
        };
        Self {
            format_version: SETTINGS_FORMAT_VERSION,
            map_width: self.map_width.clamp(1, MAX_MAP_SIDE),
            map_height: self.map_height.clamp(1, MAX_MAP_SIDE),
            tile_size,
            density: clamp_density(self.density),
            iterations: clamp_iterations(i64::from(self.iterations)),
        }
    }

    pub fn generation_parameters(&self) -> GenerationParameters {
        GenerationParameters {
            width: self.map_width,
            height: self.map_height,
            density: self.density,
            iterations: self.iterations,
        }
    }
}
