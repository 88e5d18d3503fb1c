use gloo_storage::errors::StorageError;
use gloo_storage::{LocalStorage, Storage};
use shared::registro::Registro;

/// Local-storage key holding the registry as JSON.
const STORAGE_KEY: &str = "registros";

/// Loads the stored registry. A missing key is a fresh install; anything
/// else unreadable is logged and treated as empty.
pub fn load_registros() -> Vec<Registro> {
    match LocalStorage::get(STORAGE_KEY) {
        Ok(registros) => registros,
        Err(StorageError::KeyNotFound(_)) => Vec::new(),
        Err(e) => {
            log::warn!("Could not read stored records: {}", e);
            Vec::new()
        }
    }
}

pub fn save_registros(registros: &[Registro]) -> Result<(), StorageError> {
    LocalStorage::set(STORAGE_KEY, registros)
}
