//! JSON Lines fixture files

use crate::reload::{LineSource, SourceError};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

/// A `.jsonl` fixture file, read lazily one line at a time.
///
/// Every line is a candidate record, blank lines included; the reloader
/// decides what to do with lines that don't decode.
#[derive(Debug)]
pub struct FixtureFile {
    path: PathBuf,
}

impl FixtureFile {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LineSource for FixtureFile {
    type Lines = io::Lines<BufReader<File>>;

    fn label(&self) -> String {
        self.path.display().to_string()
    }

    fn open(&self) -> Result<Self::Lines, SourceError> {
        match File::open(&self.path) {
            Ok(file) => Ok(BufReader::new(file).lines()),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Err(SourceError::NotFound {
                path: self.path.display().to_string(),
            }),
            Err(error) => Err(SourceError::Io(error)),
        }
    }
}
