use chrono::NaiveDate;

use crate::error::{LottoError, Result};
use crate::types::DrawRecord;

/// Reference draw data, one entry per draw date, most recent first.
const BUILTIN_DRAWS: &str = include_str!("../data/draws.json");

/// Read-only collection of published draws, most recent first. Loaded once
/// at startup and never mutated afterwards.
#[derive(Debug)]
pub struct DrawRepository {
    draws: Vec<DrawRecord>,
}

impl DrawRepository {
    /// Parses a JSON array of draw records. Fails on malformed JSON or an
    /// empty array; a repository always holds at least one draw.
    pub fn from_json(raw_json: &str) -> Result<Self> {
        let draws: Vec<DrawRecord> = serde_json::from_str(raw_json)?;
        if draws.is_empty() {
            return Err(LottoError::EmptyRepository);
        }
        tracing::debug!(count = draws.len(), "loaded draw records");
        Ok(Self { draws })
    }

    /// Loads the bundled reference draws.
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_DRAWS)
    }

    /// The most recent draw. The repository is non-empty by construction,
    /// so this never fails.
    pub fn current(&self) -> &DrawRecord {
        &self.draws[0]
    }

    /// Exact-date lookup. `None` is expected for dates with no draw;
    /// callers fall back to [`current`](Self::current).
    pub fn by_date(&self, date: NaiveDate) -> Option<&DrawRecord> {
        self.draws.iter().find(|draw| draw.date == date)
    }

    /// Every known draw, most recent first.
    pub fn all(&self) -> &[DrawRecord] {
        &self.draws
    }
}
