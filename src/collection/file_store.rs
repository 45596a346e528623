//! File-backed FunkoStore.
//!
//! Every record lives in its own JSON file at `<root>/<user>/<id>.json`.
//! Writes go through a temporary file in the same directory that is then
//! moved in place, so a record file is either the old or the new content and
//! never a truncated mix of both.

use super::models::Funko;
use super::trait_def::FunkoStore;
use anyhow::{Context, Result};
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, warn};

pub struct FileFunkoStore {
    root_dir: PathBuf,
}

impl FileFunkoStore {
    /// Opens a store rooted at `root_dir`, creating the directory if needed.
    pub fn new<P: AsRef<Path>>(root_dir: P) -> Result<FileFunkoStore> {
        let root_dir = root_dir.as_ref().to_path_buf();
        fs::create_dir_all(&root_dir)
            .with_context(|| format!("Failed to create data directory {:?}", root_dir))?;
        Ok(FileFunkoStore { root_dir })
    }

    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    pub fn user_dir(&self, user: &str) -> PathBuf {
        self.root_dir.join(user)
    }

    fn record_path(&self, user: &str, id: u32) -> PathBuf {
        self.user_dir(user).join(format!("{}.json", id))
    }

    fn ensure_user_dir(&self, user: &str) -> Result<PathBuf> {
        let dir = self.user_dir(user);
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create user directory {:?}", dir))?;
        Ok(dir)
    }

    /// Serializes `funko` into a temporary file inside `dir`.
    fn write_temp(dir: &Path, funko: &Funko) -> Result<NamedTempFile> {
        let mut temp = NamedTempFile::new_in(dir)
            .with_context(|| format!("Failed to create temporary file in {:?}", dir))?;
        let json = serde_json::to_string_pretty(funko)?;
        temp.write_all(json.as_bytes())?;
        temp.as_file().sync_all()?;
        Ok(temp)
    }

    fn read_record_file(path: &Path) -> Result<Funko> {
        let content =
            fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?;
        serde_json::from_str(&content).with_context(|| format!("Failed to parse {:?}", path))
    }
}

impl FunkoStore for FileFunkoStore {
    fn create(&self, user: &str, funko: &Funko) -> Result<bool> {
        let dir = self.ensure_user_dir(user)?;
        let path = self.record_path(user, funko.id);
        let temp = Self::write_temp(&dir, funko)?;

        match temp.persist_noclobber(&path) {
            Ok(_) => {
                debug!("Created {:?}", path);
                Ok(true)
            }
            Err(e) if e.error.kind() == ErrorKind::AlreadyExists => Ok(false),
            Err(e) => Err(e.error).with_context(|| format!("Failed to write {:?}", path)),
        }
    }

    fn read(&self, user: &str, id: u32) -> Result<Option<Funko>> {
        let path = self.record_path(user, id);
        if !path.is_file() {
            return Ok(None);
        }
        Self::read_record_file(&path).map(Some)
    }

    fn update(&self, user: &str, funko: &Funko) -> Result<bool> {
        let path = self.record_path(user, funko.id);
        if !path.is_file() {
            return Ok(false);
        }

        let temp = Self::write_temp(&self.user_dir(user), funko)?;
        temp.persist(&path)
            .map_err(|e| e.error)
            .with_context(|| format!("Failed to replace {:?}", path))?;
        debug!("Updated {:?}", path);
        Ok(true)
    }

    fn delete(&self, user: &str, id: u32) -> Result<bool> {
        let path = self.record_path(user, id);
        match fs::remove_file(&path) {
            Ok(()) => {
                debug!("Deleted {:?}", path);
                Ok(true)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e).with_context(|| format!("Failed to delete {:?}", path)),
        }
    }

    fn list(&self, user: &str) -> Result<Vec<Funko>> {
        let dir = self.user_dir(user);
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e).with_context(|| format!("Failed to list {:?}", dir)),
        };

        let mut funkos = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }
            let is_record = path
                .file_stem()
                .and_then(|stem| stem.to_str())
                .is_some_and(|stem| stem.parse::<u32>().is_ok());
            if !is_record {
                warn!("Skipping unexpected file {:?}", path);
                continue;
            }
            funkos.push(Self::read_record_file(&path)?);
        }

        funkos.sort_by_key(|funko| funko.id);
        Ok(funkos)
    }
}
