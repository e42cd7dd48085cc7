//! Local persistence for the visitor's language preference.
//!
//! Web builds use `window.localStorage`. Native builds keep an in-memory map
//! per thread, which is all the test suite and SSR previews need.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("local storage is unavailable")]
    Unavailable,
    #[error("local storage rejected the write: {0}")]
    Rejected(String),
}

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(StorageError::Unavailable)
}

#[cfg(target_arch = "wasm32")]
pub fn load_value(key: &str) -> Result<Option<String>, StorageError> {
    local_storage()?
        .get_item(key)
        .map_err(|_| StorageError::Unavailable)
}

#[cfg(target_arch = "wasm32")]
pub fn save_value(key: &str, value: &str) -> Result<(), StorageError> {
    local_storage()?
        .set_item(key, value)
        .map_err(|err| StorageError::Rejected(format!("{err:?}")))
}

#[cfg(not(target_arch = "wasm32"))]
thread_local! {
    static MEMORY: std::cell::RefCell<std::collections::HashMap<String, String>> =
        std::cell::RefCell::new(std::collections::HashMap::new());
}

#[cfg(not(target_arch = "wasm32"))]
pub fn load_value(key: &str) -> Result<Option<String>, StorageError> {
    Ok(MEMORY.with(|map| map.borrow().get(key).cloned()))
}

#[cfg(not(target_arch = "wasm32"))]
pub fn save_value(key: &str, value: &str) -> Result<(), StorageError> {
    MEMORY.with(|map| {
        map.borrow_mut().insert(key.to_string(), value.to_string());
    });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_reads_as_none() {
        assert_eq!(load_value("storage-test-missing").unwrap(), None);
    }

    #[test]
    fn saved_value_is_read_back() {
        save_value("storage-test-lang", "en").unwrap();
        assert_eq!(
            load_value("storage-test-lang").unwrap().as_deref(),
            Some("en")
        );
        save_value("storage-test-lang", "id").unwrap();
        assert_eq!(
            load_value("storage-test-lang").unwrap().as_deref(),
            Some("id")
        );
    }
}
