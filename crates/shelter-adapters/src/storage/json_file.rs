//! JSON file record store using std::fs.

use std::{
    collections::BTreeMap,
    fs,
    io,
    marker::PhantomData,
    path::{Path, PathBuf},
    sync::Mutex,
};

use tracing::debug;

use shelter_core::{
    application::ApplicationError,
    error::{RegistryError, RegistryResult},
};

use crate::storage::{Record, RecordStore, assign_id};

/// One table stored as `<data_dir>/<table>.json`, a JSON array of records.
///
/// Every operation reads the whole file and every write replaces it through
/// a temporary file and a rename. A missing file is an empty table.
#[derive(Debug)]
pub struct JsonFileStore<R> {
    path: PathBuf,
    lock: Mutex<()>,
    _record: PhantomData<fn() -> R>,
}

impl<R: Record> JsonFileStore<R> {
    /// Open the table for `R` under `data_dir`, creating the directory.
    pub fn open(data_dir: impl AsRef<Path>) -> RegistryResult<Self> {
        let data_dir = data_dir.as_ref();
        fs::create_dir_all(data_dir).map_err(|e| storage_error::<R>("create data directory", e))?;
        Ok(Self {
            path: data_dir.join(format!("{}.json", R::TABLE)),
            lock: Mutex::new(()),
            _record: PhantomData,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> RegistryResult<BTreeMap<String, R>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(storage_error::<R>("read table", e)),
        };
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        let records: Vec<R> =
            serde_json::from_str(&content).map_err(|e| storage_error::<R>("parse table", e))?;
        Ok(records
            .into_iter()
            .map(|record| (record.id().to_string(), record))
            .collect())
    }

    fn store(&self, records: &BTreeMap<String, R>) -> RegistryResult<()> {
        let rows: Vec<&R> = records.values().collect();
        let content =
            serde_json::to_string_pretty(&rows).map_err(|e| storage_error::<R>("encode table", e))?;

        let staging = self.path.with_extension("json.tmp");
        fs::write(&staging, content).map_err(|e| storage_error::<R>("write table", e))?;
        fs::rename(&staging, &self.path).map_err(|e| storage_error::<R>("replace table", e))
    }

    fn guard(&self) -> RegistryResult<std::sync::MutexGuard<'_, ()>> {
        self.lock
            .lock()
            .map_err(|_| ApplicationError::StoreLockError { table: R::TABLE }.into())
    }
}

fn storage_error<R: Record>(
    operation: &str,
    e: impl std::error::Error + Send + Sync + 'static,
) -> RegistryError {
    ApplicationError::storage(R::TABLE, format!("Failed to {operation}"), e).into()
}

impl<R: Record> RecordStore<R> for JsonFileStore<R> {
    fn save(&self, record: R) -> RegistryResult<R> {
        let record = assign_id(record);
        let _guard = self.guard()?;
        let mut records = self.load()?;
        records.insert(record.id().to_string(), record.clone());
        self.store(&records)?;
        debug!(table = R::TABLE, id = record.id(), path = %self.path.display(), "Record saved");
        Ok(record)
    }

    fn find_by_id(&self, id: &str) -> RegistryResult<Option<R>> {
        let _guard = self.guard()?;
        Ok(self.load()?.remove(id))
    }

    fn find_all(&self) -> RegistryResult<Vec<R>> {
        let _guard = self.guard()?;
        Ok(self.load()?.into_values().collect())
    }

    fn delete(&self, record: &R) -> RegistryResult<()> {
        let _guard = self.guard()?;
        let mut records = self.load()?;
        if records.remove(record.id()).is_some() {
            self.store(&records)?;
            debug!(table = R::TABLE, id = record.id(), "Record deleted");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{AddressRecord, ShelterRecord, UserRecord};
    use shelter_core::error::ErrorCategory;
    use tempfile::TempDir;

    fn address(id: &str) -> AddressRecord {
        AddressRecord {
            id: id.into(),
            street: "Main St".into(),
            zip: "00000".into(),
            ..AddressRecord::default()
        }
    }

    #[test]
    fn records_survive_reopening() {
        let dir = TempDir::new().unwrap();
        {
            let store = JsonFileStore::<AddressRecord>::open(dir.path()).unwrap();
            store.save(address("a")).unwrap();
            store.save(address("b")).unwrap();
        }

        let reopened = JsonFileStore::<AddressRecord>::open(dir.path()).unwrap();
        assert_eq!(reopened.find_all().unwrap().len(), 2);
        assert_eq!(reopened.find_by_id("a").unwrap(), Some(address("a")));
        assert!(dir.path().join("address.json").exists());
    }

    #[test]
    fn missing_file_is_an_empty_table() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::<UserRecord>::open(dir.path().join("nested")).unwrap();
        assert!(store.find_all().unwrap().is_empty());
        assert!(store.find_by_id("anything").unwrap().is_none());
    }

    #[test]
    fn delete_rewrites_the_table() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::<AddressRecord>::open(dir.path()).unwrap();
        store.save(address("a")).unwrap();
        store.delete(&address("a")).unwrap();
        store.delete(&address("a")).unwrap();
        assert!(store.find_all().unwrap().is_empty());
    }

    #[test]
    fn corrupt_table_is_a_storage_error() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("shelters.json"), "{ not json").unwrap();
        let store = JsonFileStore::<ShelterRecord>::open(dir.path()).unwrap();

        let err = store.find_all().unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Storage);
        assert!(err.to_string().contains("shelters"));
        match &err {
            RegistryError::Application(ApplicationError::Storage {
                cause: Some(cause), ..
            }) => assert!(cause.is::<serde_json::Error>()),
            other => panic!("unexpected {other:?}"),
        }
    }
}
