use chrono::{DateTime, Datelike, Utc};

/// Timestamp recorded by the build script.
pub const BUILD_TIME: &str = env!("BUILD_TIME");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildInfo {
    pub built_at: DateTime<Utc>,
}

impl BuildInfo {
    pub fn parse(raw: &str) -> Option<Self> {
        DateTime::parse_from_rfc3339(raw)
            .map(|dt| Self {
                built_at: dt.with_timezone(&Utc),
            })
            .ok()
    }

    pub fn current() -> Option<Self> {
        Self::parse(BUILD_TIME)
    }

    pub fn year(&self) -> i32 {
        self.built_at.year()
    }

    pub fn date_label(&self) -> String {
        self.built_at.format("%b %-d, %Y").to_string()
    }
}

/// Year shown in the copyright line. Falls back to the current year.
pub fn copyright_year() -> i32 {
    BuildInfo::current()
        .map(|b| b.year())
        .unwrap_or_else(|| Utc::now().year())
}
