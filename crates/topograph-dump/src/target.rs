// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Output file resolution and scoped writing.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use topograph_config::{DumpConfig, TopographConfig};

use crate::{DumpError, Result};

/// Where dump files go
#[derive(Debug, Clone, Default)]
pub struct DumpTarget {
    config: DumpConfig,
}

impl DumpTarget {
    pub fn new(config: DumpConfig) -> Self {
        Self { config }
    }

    pub fn from_config(config: &TopographConfig) -> Self {
        Self::new(config.dump.clone())
    }

    /// Full path for `file_name` under the configured data path
    pub fn resolve(&self, file_name: impl AsRef<Path>) -> PathBuf {
        self.config.resolve(file_name)
    }

    /// Create/truncate `path`, run `body` on a buffered writer, then flush
    ///
    /// The file is closed on every exit path. After an error the file may be
    /// partially written.
    pub(crate) fn write_with<F>(&self, path: &Path, body: F) -> Result<usize>
    where
        F: FnOnce(&mut BufWriter<File>) -> Result<usize>,
    {
        if !self.config.overwrite_files && path.exists() {
            return Err(DumpError::FileExists(path.to_path_buf()));
        }

        let file = File::create(path).map_err(|source| DumpError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut writer = BufWriter::new(file);

        let lines = body(&mut writer).map_err(|e| e.at_path(path))?;
        writer.flush().map_err(|source| DumpError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(lines)
    }
}
