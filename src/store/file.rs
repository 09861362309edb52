//! NDJSON-file-backed collections
//!
//! A collection's durable form is an NDJSON data file, one record per line.
//! A transaction stages all changes in memory and commits by writing a
//! temporary file and renaming it over the data file, so an abort or crash
//! never exposes partial state.

use super::{Collection, Record, Schema, StoreError, Transaction};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct FileCollection {
    label: String,
    schema: Schema,
    path: PathBuf,
}

impl FileCollection {
    pub fn new(label: impl Into<String>, schema: Schema, path: impl AsRef<Path>) -> Self {
        Self {
            label: label.into(),
            schema,
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Number of records currently durable in the data file.
    pub fn count(&self) -> Result<usize, StoreError> {
        Ok(self.read_rows()?.len())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_rows(&self) -> Result<Vec<Record>, StoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            // No data file yet means an empty collection
            Err(error) if error.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(error) => return Err(error.into()),
        };

        content
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| {
                serde_json::from_str(line).map_err(|source| StoreError::Corrupt {
                    path: self.path.display().to_string(),
                    source,
                })
            })
            .collect()
    }
}

impl Collection for FileCollection {
    type Txn<'a> = FileTransaction<'a>;

    fn label(&self) -> &str {
        &self.label
    }

    fn begin(&mut self) -> Result<FileTransaction<'_>, StoreError> {
        let rows = self.read_rows()?;
        log::debug!(
            "Began transaction on {} with {} record(s)",
            self.label,
            rows.len()
        );
        Ok(FileTransaction {
            collection: self,
            rows,
        })
    }
}

/// Staged view of a [`FileCollection`]; nothing touches the data file until
/// [`commit`](Transaction::commit).
#[derive(Debug)]
pub struct FileTransaction<'a> {
    collection: &'a mut FileCollection,
    rows: Vec<Record>,
}

impl Transaction for FileTransaction<'_> {
    fn count(&self) -> usize {
        self.rows.len()
    }

    fn delete_all(&mut self) {
        self.rows.clear();
    }

    fn insert(&mut self, record: Record) -> Result<(), StoreError> {
        self.collection
            .schema
            .check(&record)
            .map_err(|reason| StoreError::Rejected { reason })?;
        self.rows.push(record);
        Ok(())
    }

    fn commit(self) -> Result<(), StoreError> {
        let path = &self.collection.path;
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let ndjson = self
            .rows
            .iter()
            .map(serde_json::to_string)
            .collect::<Result<Vec<_>, _>>()?
            .join("\n");

        // Add trailing newline
        let content = if ndjson.is_empty() {
            String::new()
        } else {
            format!("{}\n", ndjson)
        };

        // Staged alongside the data file so the rename stays on one
        // filesystem; the full file name keeps the suffix, so sibling
        // collections can never share a staging path.
        let mut staging = path.clone().into_os_string();
        staging.push(".tmp");
        let staging = PathBuf::from(staging);

        fs::write(&staging, content)?;
        if let Err(error) = fs::rename(&staging, path) {
            let _ = fs::remove_file(&staging);
            return Err(error.into());
        }

        log::debug!(
            "Committed {} record(s) to {}",
            self.rows.len(),
            path.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;

    fn schema() -> Schema {
        serde_json::from_value(json!({"name": "string"})).unwrap()
    }

    fn record(name: &str) -> Record {
        serde_json::from_value(json!({"name": name})).unwrap()
    }

    #[test]
    fn test_commit_persists_rows() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("data").join("loves.ndjson");
        let mut collection = FileCollection::new("fruits.Love", schema(), &path);

        let mut txn = collection.begin().unwrap();
        assert_eq!(txn.count(), 0);
        txn.insert(record("fig")).unwrap();
        txn.insert(record("date")).unwrap();
        txn.commit().unwrap();

        assert_eq!(collection.count().unwrap(), 2);
        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "{\"name\":\"fig\"}\n{\"name\":\"date\"}\n");
    }

    #[test]
    fn test_drop_without_commit_rolls_back() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("loves.ndjson");
        let mut collection = FileCollection::new("fruits.Love", schema(), &path);

        let mut txn = collection.begin().unwrap();
        txn.insert(record("fig")).unwrap();
        txn.commit().unwrap();

        let mut txn = collection.begin().unwrap();
        txn.delete_all();
        txn.insert(record("date")).unwrap();
        drop(txn);

        assert_eq!(collection.count().unwrap(), 1);
        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "{\"name\":\"fig\"}\n");
    }

    #[test]
    fn test_missing_data_file_is_empty() {
        let temp = TempDir::new().unwrap();
        let collection =
            FileCollection::new("fruits.Love", schema(), temp.path().join("loves.ndjson"));
        assert_eq!(collection.count().unwrap(), 0);
    }

    #[test]
    fn test_corrupt_data_file_fails_begin() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("loves.ndjson");
        fs::write(&path, "{\"name\":\"fig\"}\nnot ndjson\n").unwrap();
        let mut collection = FileCollection::new("fruits.Love", schema(), &path);

        let error = collection.begin().unwrap_err();
        assert!(matches!(error, StoreError::Corrupt { .. }));
    }

    #[test]
    fn test_insert_rejects_off_schema_record() {
        let temp = TempDir::new().unwrap();
        let mut collection =
            FileCollection::new("fruits.Love", schema(), temp.path().join("loves.ndjson"));

        let mut txn = collection.begin().unwrap();
        let rejected: Record = serde_json::from_value(json!({"color": "green"})).unwrap();
        let error = txn.insert(rejected).unwrap_err();
        assert!(matches!(error, StoreError::Rejected { .. }));

        txn.insert(record("fig")).unwrap();
        txn.commit().unwrap();
        assert_eq!(collection.count().unwrap(), 1);
    }

    #[test]
    fn test_failed_rename_removes_staging_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("loves.ndjson");
        let mut collection = FileCollection::new("fruits.Love", schema(), &path);

        let mut txn = collection.begin().unwrap();
        txn.insert(record("fig")).unwrap();
        // A directory at the data path makes the rename fail
        fs::create_dir(&path).unwrap();
        let error = txn.commit().unwrap_err();

        assert!(matches!(error, StoreError::Io(_)));
        assert!(!temp.path().join("loves.ndjson.tmp").exists());
    }

    #[test]
    fn test_staging_file_never_collides_with_siblings() {
        let temp = TempDir::new().unwrap();
        let sibling = temp.path().join("loves.tmp");
        fs::write(&sibling, "keep me").unwrap();
        let mut collection =
            FileCollection::new("fruits.Love", schema(), temp.path().join("loves.ndjson"));

        let mut txn = collection.begin().unwrap();
        txn.insert(record("fig")).unwrap();
        txn.commit().unwrap();

        assert_eq!(fs::read_to_string(&sibling).unwrap(), "keep me");
        assert!(!temp.path().join("loves.ndjson.tmp").exists());
        assert_eq!(collection.count().unwrap(), 1);
    }

    #[test]
    fn test_empty_commit_writes_empty_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("loves.ndjson");
        let mut collection = FileCollection::new("fruits.Love", schema(), &path);

        let mut txn = collection.begin().unwrap();
        txn.insert(record("fig")).unwrap();
        txn.commit().unwrap();

        let mut txn = collection.begin().unwrap();
        txn.delete_all();
        txn.commit().unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "");
        assert_eq!(collection.count().unwrap(), 0);
    }
}
