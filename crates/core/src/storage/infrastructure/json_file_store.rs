use std::fs;
use std::path::{Path, PathBuf};

use crate::analysis::domain::record::AnalysisRecord;
use crate::storage::domain::analysis_store::{AnalysisStore, StoreError};

/// File-backed analysis store: one JSON document per record.
///
/// File names are derived from the record key: path separators and other
/// non-filename characters are replaced with `_`, and a hash of the raw key
/// is appended so that distinct keys never share a file.
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    pub fn open(dir: &Path) -> Result<Self, StoreError> {
        fs::create_dir_all(dir).map_err(|e| StoreError::CreateDir {
            path: dir.to_path_buf(),
            source: e,
        })?;
        Ok(Self {
            dir: dir.to_path_buf(),
        })
    }

    /// Open the store at the platform default location.
    ///
    /// - macOS: `~/Library/Application Support/Speechmeter/results/`
    /// - Linux: `~/.local/share/Speechmeter/results/`
    /// - Windows: `%APPDATA%/Speechmeter/results/`
    pub fn open_default() -> Result<Self, StoreError> {
        let dir = dirs::data_dir()
            .map(|d| d.join("Speechmeter").join("results"))
            .ok_or(StoreError::NoResultsDir)?;
        Self::open(&dir)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn record_path(&self, key: &str) -> PathBuf {
        let sanitized: String = key
            .chars()
            .map(|c| if c.is_alphanumeric() || c == '.' || c == '-' { c } else { '_' })
            .collect();
        // Sanitization is lossy ("a/b" and "a_b" both yield "a_b"), so the
        // raw key's hash disambiguates the file name.
        self.dir
            .join(format!("{sanitized}-{:016x}.json", fnv1a(key)))
    }

    fn read_record(path: &Path) -> Result<AnalysisRecord, StoreError> {
        let contents = fs::read_to_string(path).map_err(|e| StoreError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        serde_json::from_str(&contents).map_err(|e| StoreError::Corrupt {
            path: path.to_path_buf(),
            source: e,
        })
    }

    fn scan(&self, key: &str) -> Result<Option<(PathBuf, AnalysisRecord)>, StoreError> {
        let entries = fs::read_dir(&self.dir).map_err(|e| StoreError::Read {
            path: self.dir.clone(),
            source: e,
        })?;
        for entry in entries {
            let entry = entry.map_err(|e| StoreError::Read {
                path: self.dir.clone(),
                source: e,
            })?;
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let record = Self::read_record(&path)?;
            if record.file_key == key {
                return Ok(Some((path, record)));
            }
        }
        Ok(None)
    }
}

/// FNV-1a, 64-bit. Stable across runs and toolchains, unlike the std
/// `DefaultHasher`, so stored file names stay valid between releases.
fn fnv1a(key: &str) -> u64 {
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    for byte in key.bytes() {
        hash ^= u64::from(byte);
        hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
    }
    hash
}

impl AnalysisStore for JsonFileStore {
    fn find(&self, key: &str) -> Result<Option<AnalysisRecord>, StoreError> {
        let path = self.record_path(key);
        if path.exists() {
            let record = Self::read_record(&path)?;
            if record.file_key == key {
                return Ok(Some(record));
            }
        }
        // Legacy or hand-renamed file
        Ok(self.scan(key)?.map(|(_, record)| record))
    }

    fn upsert(&mut self, record: &AnalysisRecord) -> Result<(), StoreError> {
        let path = self.record_path(&record.file_key);
        let json = serde_json::to_string_pretty(record).map_err(|e| StoreError::Serialize {
            key: record.file_key.clone(),
            source: e,
        })?;

        // Write to a temp file first, then rename for atomicity
        let temp_path = path.with_extension("part");
        fs::write(&temp_path, json).map_err(|e| StoreError::Write {
            path: temp_path.clone(),
            source: e,
        })?;
        fs::rename(&temp_path, &path).map_err(|e| StoreError::Write {
            path: path.clone(),
            source: e,
        })?;

        log::debug!("Stored analysis for {} at {}", record.file_key, path.display());
        Ok(())
    }

    fn list(&self) -> Result<Vec<AnalysisRecord>, StoreError> {
        let entries = fs::read_dir(&self.dir).map_err(|e| StoreError::Read {
            path: self.dir.clone(),
            source: e,
        })?;
        let mut records = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| StoreError::Read {
                path: self.dir.clone(),
                source: e,
            })?;
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) == Some("json") {
                records.push(Self::read_record(&path)?);
            }
        }
        records.sort_by(|a, b| a.file_key.cmp(&b.file_key));
        Ok(records)
    }

    fn delete(&mut self, key: &str) -> Result<bool, StoreError> {
        let path = self.record_path(key);
        let target = if path.exists() && Self::read_record(&path)?.file_key == key {
            Some(path)
        } else {
            self.scan(key)?.map(|(p, _)| p)
        };

        match target {
            Some(path) => {
                fs::remove_file(&path).map_err(|e| StoreError::Write {
                    path: path.clone(),
                    source: e,
                })?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
