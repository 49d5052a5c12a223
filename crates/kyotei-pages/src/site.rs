use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;

use crate::content::{ContentProvider, PlaceholderContent};
use crate::date::{Clock, DateKey, SystemClock};
use crate::index::IndexDocument;
use crate::post::render_post;
use crate::storage::{DiskStorage, Store, POSTS_DIR};

#[derive(Error, Debug)]
pub enum GenerateError {
    /// The index page must be provisioned out-of-band before the first run.
    #[error("index.html not found (it must be created before running the generator)")]
    IndexMissing,

    #[error("render error: {0}")]
    Render(#[from] std::fmt::Error),

    #[error("storage error: {0}")]
    Storage(String),
}

/// What a single run did.
#[derive(Debug, PartialEq, Eq)]
pub struct GenerateSummary {
    pub date_key: DateKey,
    /// Post path relative to the site root, e.g. `posts/2024-01-01.html`.
    pub post_path: String,
    /// `false` when the day's post already existed.
    pub wrote_post: bool,
    /// `false` when the index already linked to the post.
    pub linked: bool,
}

pub struct Site {
    root_path: PathBuf,
    base_url: String,
    clock: Arc<dyn Clock>,
    content: Arc<dyn ContentProvider>,
}

impl Site {
    pub fn builder() -> SiteBuilder<()> {
        SiteBuilder::new()
    }

    /// Runs one generation pass against on-disk storage rooted at the
    /// configured root path.
    pub fn generate(&self) -> Result<GenerateSummary, GenerateError> {
        self.generate_to(&DiskStorage::new(self.root_path.clone()))
    }

    /// Runs one generation pass: render today's post unless it already
    /// exists, then link it from the index unless it is already linked.
    /// Reentrant within a day; both steps degrade to no-ops.
    pub fn generate_to(&self, store: &impl Store) -> Result<GenerateSummary, GenerateError> {
        let date_key = DateKey::from_datetime(&self.clock.now());
        let post_name = format!("{date_key}.html");
        let post_path = format!("{POSTS_DIR}/{post_name}");

        let wrote_post = if store
            .post_exists(&post_name)
            .map_err(|err| GenerateError::Storage(err.to_string()))?
        {
            false
        } else {
            let rendered = render_post(&date_key, &self.base_url, self.content.as_ref())?;
            store
                .store_post(&post_name, rendered)
                .map_err(|err| GenerateError::Storage(err.to_string()))?;
            true
        };

        let text = store
            .load_index()
            .map_err(|err| GenerateError::Storage(err.to_string()))?
            .ok_or(GenerateError::IndexMissing)?;

        let mut index = IndexDocument::parse(text);
        index.ensure_entry_list();

        let linked = if index.contains_link(&post_path) {
            false
        } else {
            index.insert_entry(&post_path, &format!("{date_key} の記事"));
            true
        };

        store
            .store_index(index.to_html())
            .map_err(|err| GenerateError::Storage(err.to_string()))?;

        Ok(GenerateSummary {
            date_key,
            post_path,
            wrote_post,
            linked,
        })
    }
}

pub struct SiteBuilder<T> {
    state: T,
}

impl SiteBuilder<()> {
    pub fn new() -> Self {
        Self { state: () }
    }

    pub fn root(self, root_path: impl AsRef<Path>) -> SiteBuilder<WithRootPath> {
        SiteBuilder {
            state: WithRootPath {
                root_path: root_path.as_ref().to_owned(),
                base_url: "./".to_string(),
                clock: Arc::new(SystemClock),
                content: Arc::new(PlaceholderContent),
            },
        }
    }
}

impl Default for SiteBuilder<()> {
    fn default() -> Self {
        Self::new()
    }
}

pub struct WithRootPath {
    root_path: PathBuf,
    base_url: String,
    clock: Arc<dyn Clock>,
    content: Arc<dyn ContentProvider>,
}

impl SiteBuilder<WithRootPath> {
    /// Base the post's "back to index" link resolves against. Defaults to
    /// the current directory.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.state.base_url = base_url.into();
        self
    }

    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.state.clock = Arc::new(clock);
        self
    }

    pub fn content(mut self, content: impl ContentProvider + 'static) -> Self {
        self.state.content = Arc::new(content);
        self
    }

    pub fn build(self) -> Site {
        Site {
            root_path: self.state.root_path,
            base_url: self.state.base_url,
            clock: self.state.clock,
            content: self.state.content,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::{Arc, RwLock};

    use chrono::TimeZone;
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    use crate::date::{FixedClock, JST};
    use crate::index::MARKER;
    use crate::storage::InMemoryStorage;

    use super::*;

    const SEED_INDEX: &str = indoc! {r#"
        <!doctype html>
        <html lang="ja">
        <body>
          <h1>競艇予想まとめ（自動更新）</h1>
        </body>
        </html>
    "#};

    fn test_site() -> Site {
        Site::builder()
            .root(".")
            .clock(FixedClock(JST.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap()))
            .build()
    }

    fn seeded_storage() -> (Arc<RwLock<HashMap<String, String>>>, InMemoryStorage) {
        let contents = Arc::new(RwLock::new(HashMap::new()));
        contents
            .write()
            .unwrap()
            .insert("index.html".to_string(), SEED_INDEX.to_string());
        (contents.clone(), InMemoryStorage::new(contents))
    }

    #[test]
    fn test_first_run_writes_post_and_links_it() {
        let (contents, storage) = seeded_storage();

        let summary = test_site().generate_to(&storage).unwrap();

        assert_eq!(summary.date_key.as_str(), "2024-01-01");
        assert_eq!(summary.post_path, "posts/2024-01-01.html");
        assert!(summary.wrote_post);
        assert!(summary.linked);

        let contents = contents.read().unwrap();
        let post = contents.get("posts/2024-01-01.html").unwrap();
        assert!(post.contains("2024-01-01｜競艇テンプレ（自動更新テスト）"));

        let index = contents.get("index.html").unwrap();
        assert_eq!(index.matches(MARKER).count(), 1);
        assert_eq!(index.matches("posts/2024-01-01.html").count(), 1);
    }

    #[test]
    fn test_second_run_is_a_no_op() {
        let (contents, storage) = seeded_storage();
        let site = test_site();

        site.generate_to(&storage).unwrap();

        // Overwrite the stored post so a rewrite would be detectable.
        contents
            .write()
            .unwrap()
            .insert("posts/2024-01-01.html".to_string(), "sentinel".to_string());
        let index_before = contents.read().unwrap().get("index.html").cloned().unwrap();

        let summary = site.generate_to(&storage).unwrap();
        assert!(!summary.wrote_post);
        assert!(!summary.linked);

        let contents = contents.read().unwrap();
        assert_eq!(contents.get("posts/2024-01-01.html").unwrap(), "sentinel");
        assert_eq!(contents.get("index.html").unwrap(), &index_before);
    }

    #[test]
    fn test_consecutive_days_append_in_order() {
        let (contents, storage) = seeded_storage();

        for day in 1..=2 {
            Site::builder()
                .root(".")
                .clock(FixedClock(
                    JST.with_ymd_and_hms(2024, 1, day, 9, 0, 0).unwrap(),
                ))
                .build()
                .generate_to(&storage)
                .unwrap();
        }

        let contents = contents.read().unwrap();
        let index = contents.get("index.html").unwrap();
        assert_eq!(index.matches(MARKER).count(), 1);
        assert!(
            index.find("posts/2024-01-01.html").unwrap()
                < index.find("posts/2024-01-02.html").unwrap()
        );
    }

    #[test]
    fn test_missing_index_is_fatal() {
        let storage = InMemoryStorage::new(Arc::new(RwLock::new(HashMap::new())));

        let result = test_site().generate_to(&storage);
        assert!(matches!(result, Err(GenerateError::IndexMissing)));
    }

    #[test]
    fn test_post_is_written_even_when_index_is_missing() {
        let contents = Arc::new(RwLock::new(HashMap::new()));
        let storage = InMemoryStorage::new(contents.clone());

        let result = test_site().generate_to(&storage);
        assert!(result.is_err());

        // The post write happens before the index precondition check.
        assert!(contents.read().unwrap().contains_key("posts/2024-01-01.html"));
    }
}
