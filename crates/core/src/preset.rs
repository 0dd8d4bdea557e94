//! Named generation presets behind a key-value persistence interface.

use std::collections::BTreeMap;
use std::convert::Infallible;

use crate::levelgen::GenerationConfig;

pub trait PresetStore {
    type Error;

    fn load_preset(&self, name: &str) -> Result<Option<GenerationConfig>, Self::Error>;
    fn save_preset(&mut self, name: &str, config: &GenerationConfig) -> Result<(), Self::Error>;
    /// Stored names in ascending order.
    fn preset_names(&self) -> Result<Vec<String>, Self::Error>;
}

#[derive(Clone, Debug, Default)]
pub struct MemoryPresetStore {
    presets: BTreeMap<String, GenerationConfig>,
}

impl MemoryPresetStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PresetStore for MemoryPresetStore {
    type Error = Infallible;

    fn load_preset(&self, name: &str) -> Result<Option<GenerationConfig>, Self::Error> {
        Ok(self.presets.get(name).cloned())
    }

    fn save_preset(&mut self, name: &str, config: &GenerationConfig) -> Result<(), Self::Error> {
        self.presets.insert(name.to_string(), config.clone());
        Ok(())
    }

    fn preset_names(&self) -> Result<Vec<String>, Self::Error> {
        Ok(self.presets.keys().cloned().collect())
    }
}
