//! File-backed generation presets, one JSON document per name.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use arena_core::{GenerationConfig, PresetStore};

use crate::APP_NAME;

const PRESET_FORMAT_VERSION: u32 = 1;
const PRESET_EXTENSION: &str = "json";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PresetFile {
    pub format_version: u32,
    pub config: GenerationConfig,
}

impl PresetFile {
    pub fn new(config: GenerationConfig) -> Self {
        Self { format_version: PRESET_FORMAT_VERSION, config }
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
        let preset: Self = serde_json::from_str(&content)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        if preset.format_version != PRESET_FORMAT_VERSION {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("unsupported preset format version {}", preset.format_version),
            ));
        }
        Ok(preset)
    }
}

/// Directory of `<name>.json` presets.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PresetDirectory {
    root: PathBuf,
}

impl PresetDirectory {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn get_default_root() -> Option<PathBuf> {
        ProjectDirs::from("", "", APP_NAME).map(|proj_dirs| {
            let mut path = proj_dirs.data_dir().to_path_buf();
            path.push("presets");
            path
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, name: &str) -> io::Result<PathBuf> {
        validate_preset_name(name)?;
        Ok(self.root.join(format!("{name}.{PRESET_EXTENSION}")))
    }
}

fn validate_preset_name(name: &str) -> io::Result<()> {
    let valid = !name.is_empty()
        && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(io::Error::new(io::ErrorKind::InvalidInput, format!("invalid preset name '{name}'")))
    }
}

impl PresetStore for PresetDirectory {
    type Error = io::Error;

    fn load_preset(&self, name: &str) -> io::Result<Option<GenerationConfig>> {
        let path = self.path_for(name)?;
        match PresetFile::load(&path) {
            Ok(preset) => Ok(Some(preset.config)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err),
        }
    }

    fn save_preset(&mut self, name: &str, config: &GenerationConfig) -> io::Result<()> {
        let path = self.path_for(name)?;
        PresetFile::new(config.clone()).write_atomic(&path)
    }

    fn preset_names(&self) -> io::Result<Vec<String>> {
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err),
        };

        let mut names = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(PRESET_EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str())
                && validate_preset_name(stem).is_ok()
            {
                names.push(stem.to_string());
            }
        }
        names.sort();
        Ok(names)
    }
}
