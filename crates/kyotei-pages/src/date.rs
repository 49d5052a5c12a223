use chrono::{DateTime, Utc};
use chrono_tz::Tz;

/// The site's wall clock. Fixed offset of +9:00, no DST.
pub const JST: Tz = Tz::Asia__Tokyo;

/// A calendar date in `YYYY-MM-DD` form, used both as a post's filename stem
/// and as its display label.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone)]
pub struct DateKey(String);

impl DateKey {
    pub fn from_datetime(datetime: &DateTime<Tz>) -> Self {
        Self(datetime.format("%Y-%m-%d").to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Source of "now" for date key derivation.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Tz>;
}

/// The real wall clock, shifted to [`JST`].
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Tz> {
        Utc::now().with_timezone(&JST)
    }
}

/// A clock pinned to a single instant.
pub struct FixedClock(pub DateTime<Tz>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Tz> {
        self.0
    }
}
