//! Contestants and their running scores.

use super::Marker;
use serde::Serialize;
use tracing::{info, instrument};

/// A named contestant with a fixed marker and a score that only goes up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Contestant {
    name: String,
    marker: Marker,
    score: u32,
}

impl Contestant {
    /// Creates a contestant with a score of zero.
    #[instrument(skip(name), fields(name = %name.as_ref()))]
    pub fn new(name: impl AsRef<str>, marker: Marker) -> Self {
        Self {
            name: name.as_ref().to_string(),
            marker,
            score: 0,
        }
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Renames the contestant.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Marker assigned at creation.
    pub fn marker(&self) -> Marker {
        self.marker
    }

    /// Games won so far.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Records one more win.
    #[instrument(skip(self), fields(name = %self.name, marker = %self.marker))]
    pub fn increase_score(&mut self) {
        self.score += 1;
        info!(score = self.score, "Score increased");
    }
}
