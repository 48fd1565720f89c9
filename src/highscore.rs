use anyhow::{Context, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::config::HIGH_SCORE_SLOTS;

/// The best scores seen so far, descending, always exactly ten slots.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HighScoreTable {
    scores: Vec<i64>,
}

impl Default for HighScoreTable {
    fn default() -> Self {
        Self { scores: vec![0; HIGH_SCORE_SLOTS] }
    }
}

impl HighScoreTable {
    pub fn from_scores(mut scores: Vec<i64>) -> Self {
        scores.sort_unstable_by(|a, b| b.cmp(a));
        scores.resize(HIGH_SCORE_SLOTS, 0);
        Self { scores }
    }

    pub fn scores(&self) -> &[i64] {
        &self.scores
    }

    pub fn best(&self) -> i64 {
        self.scores[0]
    }

    /// Inserts `score`, keeping only the largest ten.
    pub fn record(&mut self, score: i64) {
        self.scores.push(score);
        self.scores.sort_unstable_by(|a, b| b.cmp(a));
        self.scores.truncate(HIGH_SCORE_SLOTS);
    }

    /// Reads a JSON array of integers. Any failure yields the all-zero table.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == ErrorKind::NotFound => return Self::default(),
            Err(err) => {
                log::warn!("cannot read {}: {err}", path.display());
                return Self::default();
            }
        };
        match serde_json::from_str::<Vec<i64>>(&text) {
            Ok(scores) => Self::from_scores(scores),
            Err(err) => {
                log::warn!("ignoring malformed {}: {err}", path.display());
                Self::default()
            }
        }
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let text = serde_json::to_string(&self.scores)?;
        fs::write(path, text).with_context(|| format!("writing {}", path.display()))
    }
}
