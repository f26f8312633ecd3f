//! Profile storage backends

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::error::StoreError;
use crate::profile::Profile;

/// Somewhere a [`Profile`] can be kept between sessions
pub trait ProfileStore {
    /// `Ok(None)` when nothing has been saved yet
    fn load(&self) -> Result<Option<Profile>, StoreError>;
    fn save(&mut self, profile: &Profile) -> Result<(), StoreError>;
    /// Forget the stored profile
    fn clear(&mut self) -> Result<(), StoreError>;
}

/// Profile kept as pretty-printed JSON in one file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub const FILE_NAME: &'static str = "blockfall.json";

    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `blockfall.json` in the platform config directory, or the working
    /// directory when there is none
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(Self::FILE_NAME)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl ProfileStore for JsonFileStore {
    fn load(&self) -> Result<Option<Profile>, StoreError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(Some(serde_json::from_str(&text)?))
    }

    /// Writes a sibling temp file, then renames it over the target so a
    /// crash never leaves a half-written profile
    fn save(&mut self, profile: &Profile) -> Result<(), StoreError> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        let json = serde_json::to_string_pretty(profile)?;
        let tmp = self.temp_path();
        {
            let mut file = fs::File::create(&tmp)?;
            file.write_all(json.as_bytes())?;
            file.sync_all()?;
        }
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        match fs::remove_file(&self.path) {
            Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e.into()),
            _ => Ok(()),
        }
    }
}

/// In-memory store, for tests and `BLOCKFALL_NO_SAVE`
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    profile: Option<Profile>,
    saves: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_profile(profile: Profile) -> Self {
        Self {
            profile: Some(profile),
            saves: 0,
        }
    }

    pub fn profile(&self) -> Option<&Profile> {
        self.profile.as_ref()
    }

    /// Number of successful `save` calls
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl ProfileStore for MemoryStore {
    fn load(&self) -> Result<Option<Profile>, StoreError> {
        Ok(self.profile.clone())
    }

    fn save(&mut self, profile: &Profile) -> Result<(), StoreError> {
        self.profile = Some(profile.clone());
        self.saves += 1;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        self.profile = None;
        Ok(())
    }
}
