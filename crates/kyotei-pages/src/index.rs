//! The index page, modeled as a structured document: the text before the
//! insertion marker, and the text after it. New entries are appended at the
//! marker, so repeated runs grow the list in chronological order.

use once_cell::sync::Lazy;
use regex::Regex;

/// Sentinel token marking where the next entry is inserted.
pub const MARKER: &str = "<!-- AUTO_POSTS -->";

/// Trailing-anchored match for the closing tags, used to splice in the entry
/// list when the index doesn't have one yet. Not a full HTML parse.
static CLOSING_TAGS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)</body>\s*</html>\s*$").unwrap());

/// An index page split at the first occurrence of [`MARKER`]. The marker
/// itself is not stored; serialization re-emits it between the two halves.
/// A marker-less document has no insertion point and round-trips unchanged.
#[derive(Debug, PartialEq, Eq)]
pub struct IndexDocument {
    before_marker: String,
    after_marker: Option<String>,
}

impl IndexDocument {
    pub fn parse(text: impl Into<String>) -> Self {
        let text = text.into();
        match text.find(MARKER) {
            Some(at) => Self {
                after_marker: Some(text[at + MARKER.len()..].to_string()),
                before_marker: {
                    let mut before = text;
                    before.truncate(at);
                    before
                },
            },
            None => Self {
                before_marker: text,
                after_marker: None,
            },
        }
    }

    pub fn has_marker(&self) -> bool {
        self.after_marker.is_some()
    }

    /// Splices an empty "latest articles" card (including the marker) in
    /// front of the document's closing tags. Does nothing if the document
    /// already has a marker, or if the closing tags can't be found.
    pub fn ensure_entry_list(&mut self) {
        if self.has_marker() {
            return;
        }

        let Some(closing) = CLOSING_TAGS
            .find(&self.before_marker)
            .map(|found| found.range())
        else {
            return;
        };

        let card = format!(
            r#"
  <div class="card">
    <h2 style="margin:0 0 8px;font-size:18px;">最新記事</h2>
    <ul>
      {MARKER}
    </ul>
    <div class="muted">※ここは自動更新で追記されます</div>
  </div>
</body>
</html>"#
        );

        self.before_marker.replace_range(closing, &card);
        *self = Self::parse(std::mem::take(&mut self.before_marker));
    }

    /// Substring-based link check, matching anywhere in the raw text. Paths
    /// are date-unique, so one path can't be a proper substring of another;
    /// a structural check would be needed if that ever stops holding.
    pub fn contains_link(&self, post_path: &str) -> bool {
        self.before_marker.contains(post_path)
            || self
                .after_marker
                .as_deref()
                .is_some_and(|after| after.contains(post_path))
    }

    /// Inserts a new list item immediately before the marker. Does nothing
    /// if the document has no marker.
    pub fn insert_entry(&mut self, post_path: &str, label: &str) {
        if !self.has_marker() {
            return;
        }

        self.before_marker
            .push_str(&format!("<li><a href=\"{post_path}\">{label}</a></li>\n      "));
    }

    pub fn to_html(&self) -> String {
        match &self.after_marker {
            Some(after) => format!("{}{}{}", self.before_marker, MARKER, after),
            None => self.before_marker.clone(),
        }
    }
}
