//! Key-value backends the store persists its collections into.
//!
//! The contract mirrors the browser `localStorage` API: string keys, string
//! values, synchronous calls.

use std::collections::HashMap;

use parking_lot::Mutex;

use crate::error::StorageError;

/// String-to-string store shaped like `window.localStorage`.
pub trait KeyValueStorage {
    /// Stored value, or `None` when the key was never set.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replaces the whole value under `key`.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removing an absent key is not an error.
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

impl<S: KeyValueStorage + ?Sized> KeyValueStorage for &S {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove_item(key)
    }
}

/// Process-local storage; contents vanish with the value.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    /// Empty storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.items.lock().len()
    }

    /// True when no key is stored.
    pub fn is_empty(&self) -> bool {
        self.items.lock().is_empty()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.lock().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.items.lock().remove(key);
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStorage;

#[cfg(not(target_arch = "wasm32"))]
mod file {
    use std::{
        fs::{self, File, OpenOptions},
        io::{ErrorKind, Write},
        path::{Path, PathBuf},
    };

    use fs2::FileExt;

    use super::KeyValueStorage;
    use crate::error::StorageError;

    const LOCK_FILE_NAME: &str = ".lock";

    /// One `<key>.json` file per key under `root`.
    #[derive(Debug, Clone)]
    pub struct FileStorage {
        root: PathBuf,
    }

    impl FileStorage {
        /// Creates `root` if needed.
        pub fn open(root: impl Into<PathBuf>) -> Result<Self, StorageError> {
            let root = root.into();
            fs::create_dir_all(&root).map_err(|source| StorageError::Io {
                key: root.display().to_string(),
                source,
            })?;
            Ok(Self {
                root,
            })
        }

        /// Directory holding the per-key files.
        pub fn root(&self) -> &Path {
            &self.root
        }

        fn path_for(&self, key: &str) -> PathBuf {
            let file_name: String = key
                .chars()
                .map(|ch| if ch.is_ascii_alphanumeric() || ch == '_' || ch == '-' { ch } else { '_' })
                .collect();
            self.root.join(format!("{file_name}.json"))
        }

        /// Exclusive advisory lock over the directory, released on drop.
        fn lock(&self, key: &str) -> Result<File, StorageError> {
            let io_err = |source| StorageError::Io {
                key: key.to_string(),
                source,
            };
            let lock = OpenOptions::new()
                .create(true)
                .truncate(false)
                .write(true)
                .open(self.root.join(LOCK_FILE_NAME))
                .map_err(io_err)?;
            lock.lock_exclusive().map_err(io_err)?;
            Ok(lock)
        }
    }

    impl KeyValueStorage for FileStorage {
        fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
            match fs::read_to_string(self.path_for(key)) {
                Ok(value) => Ok(Some(value)),
                Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
                Err(source) => Err(StorageError::Io {
                    key: key.to_string(),
                    source,
                }),
            }
        }

        fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
            let io_err = |source| StorageError::Io {
                key: key.to_string(),
                source,
            };
            let _lock = self.lock(key)?;
            let target = self.path_for(key);
            let tmp = target.with_extension("json.tmp");
            {
                let mut file = File::create(&tmp).map_err(io_err)?;
                file.write_all(value.as_bytes()).map_err(io_err)?;
                file.sync_all().map_err(io_err)?;
            }
            fs::rename(&tmp, &target).map_err(io_err)?;
            tracing::debug!("wrote {} bytes to {}", value.len(), target.display());
            Ok(())
        }

        fn remove_item(&self, key: &str) -> Result<(), StorageError> {
            let _lock = self.lock(key)?;
            match fs::remove_file(self.path_for(key)) {
                Ok(()) => Ok(()),
                Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
                Err(source) => Err(StorageError::Io {
                    key: key.to_string(),
                    source,
                }),
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserStorage;

#[cfg(target_arch = "wasm32")]
mod browser {
    use wasm_bindgen::JsValue;

    use super::KeyValueStorage;
    use crate::error::StorageError;

    /// `window.localStorage`.
    pub struct BrowserStorage {
        inner: web_sys::Storage,
    }

    impl BrowserStorage {
        /// Fails when the page has no window or storage is disabled.
        pub fn local() -> Result<Self, StorageError> {
            let window = web_sys::window()
                .ok_or_else(|| StorageError::Unavailable("no window".to_string()))?;
            let inner = window
                .local_storage()
                .map_err(|err| StorageError::Unavailable(describe(&err)))?
                .ok_or_else(|| StorageError::Unavailable("localStorage is null".to_string()))?;
            Ok(Self {
                inner,
            })
        }
    }

    fn describe(value: &JsValue) -> String {
        value.as_string().unwrap_or_else(|| format!("{value:?}"))
    }

    impl KeyValueStorage for BrowserStorage {
        fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.inner
                .get_item(key)
                .map_err(|err| StorageError::Unavailable(describe(&err)))
        }

        fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
            self.inner
                .set_item(key, value)
                .map_err(|err| StorageError::Rejected {
                    key: key.to_string(),
                    reason: describe(&err),
                })
        }

        fn remove_item(&self, key: &str) -> Result<(), StorageError> {
            self.inner
                .remove_item(key)
                .map_err(|err| StorageError::Rejected {
                    key: key.to_string(),
                    reason: describe(&err),
                })
        }
    }
}
