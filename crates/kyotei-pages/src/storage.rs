use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use thiserror::Error;

pub const INDEX_FILENAME: &str = "index.html";

pub const POSTS_DIR: &str = "posts";

/// Where rendered posts and the index page live. Implementations decide the
/// medium; callers only speak in post filenames and index text.
///
/// `load_index` returns `Ok(None)` when the index doesn't exist, so the
/// caller can distinguish the fatal missing-index precondition from I/O
/// failures.
pub trait Store {
    type Error: std::error::Error;

    fn post_exists(&self, post_name: &str) -> Result<bool, Self::Error>;

    fn store_post(&self, post_name: &str, rendered_html: String) -> Result<(), Self::Error>;

    fn load_index(&self) -> Result<Option<String>, Self::Error>;

    fn store_index(&self, html: String) -> Result<(), Self::Error>;
}

pub struct DiskStorage {
    root_path: PathBuf,
}

impl DiskStorage {
    pub fn new(root_path: PathBuf) -> Self {
        Self { root_path }
    }

    fn post_path(&self, post_name: &str) -> PathBuf {
        self.root_path.join(POSTS_DIR).join(post_name)
    }
}

impl Store for DiskStorage {
    type Error = io::Error;

    fn post_exists(&self, post_name: &str) -> Result<bool, Self::Error> {
        Ok(self.post_path(post_name).exists())
    }

    fn store_post(&self, post_name: &str, rendered_html: String) -> Result<(), Self::Error> {
        let posts_dir = self.root_path.join(POSTS_DIR);
        fs::create_dir_all(&posts_dir)?;

        let mut output_file = File::create(posts_dir.join(post_name))?;
        output_file.write_all(rendered_html.as_bytes())?;

        Ok(())
    }

    fn load_index(&self) -> Result<Option<String>, Self::Error> {
        match fs::read_to_string(self.root_path.join(INDEX_FILENAME)) {
            Ok(text) => Ok(Some(text)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err),
        }
    }

    // Direct overwrite, no atomic replace. Concurrent runs are unsupported.
    fn store_index(&self, html: String) -> Result<(), Self::Error> {
        let mut output_file = File::create(self.root_path.join(INDEX_FILENAME))?;
        output_file.write_all(html.as_bytes())?;

        Ok(())
    }
}

pub struct InMemoryStorage {
    storage: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryStorage {
    pub fn new(storage: Arc<RwLock<HashMap<String, String>>>) -> Self {
        Self { storage }
    }

    fn post_key(post_name: &str) -> String {
        format!("{POSTS_DIR}/{post_name}")
    }
}

#[derive(Error, Debug)]
pub enum InMemoryStorageError {
    #[error("poisoned")]
    Poisoned,
}

impl Store for InMemoryStorage {
    type Error = InMemoryStorageError;

    fn post_exists(&self, post_name: &str) -> Result<bool, Self::Error> {
        Ok(self
            .storage
            .read()
            .map_err(|_| InMemoryStorageError::Poisoned)?
            .contains_key(&Self::post_key(post_name)))
    }

    fn store_post(&self, post_name: &str, rendered_html: String) -> Result<(), Self::Error> {
        self.storage
            .write()
            .map_err(|_| InMemoryStorageError::Poisoned)?
            .insert(Self::post_key(post_name), rendered_html);

        Ok(())
    }

    fn load_index(&self) -> Result<Option<String>, Self::Error> {
        Ok(self
            .storage
            .read()
            .map_err(|_| InMemoryStorageError::Poisoned)?
            .get(INDEX_FILENAME)
            .cloned())
    }

    fn store_index(&self, html: String) -> Result<(), Self::Error> {
        self.storage
            .write()
            .map_err(|_| InMemoryStorageError::Poisoned)?
            .insert(INDEX_FILENAME.to_string(), html);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_in_memory_storage_posts() {
        let contents = Arc::new(RwLock::new(HashMap::new()));
        let storage = InMemoryStorage::new(contents.clone());

        assert!(!storage.post_exists("2024-01-01.html").unwrap());

        storage
            .store_post("2024-01-01.html", "<p>hi</p>".to_string())
            .unwrap();

        assert!(storage.post_exists("2024-01-01.html").unwrap());
        assert_eq!(
            contents.read().unwrap().get("posts/2024-01-01.html"),
            Some(&"<p>hi</p>".to_string())
        );
    }

    #[test]
    fn test_in_memory_storage_index() {
        let storage = InMemoryStorage::new(Arc::new(RwLock::new(HashMap::new())));

        assert_eq!(storage.load_index().unwrap(), None);

        storage.store_index("<html></html>".to_string()).unwrap();

        assert_eq!(
            storage.load_index().unwrap(),
            Some("<html></html>".to_string())
        );
    }
}
