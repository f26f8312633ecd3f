//! Profile module - settings, leaderboard and the saved game

use serde::{Deserialize, Serialize};

use crate::core::{Snapshot, Stats};

fn default_ghost() -> bool {
    true
}

/// Everything kept between sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(default = "default_ghost")]
    pub ghost: bool,
    #[serde(default)]
    pub leaderboard: Leaderboard,
    /// Game in progress when the player last quit
    #[serde(default)]
    pub saved_game: Option<Snapshot>,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            ghost: true,
            leaderboard: Leaderboard::default(),
            saved_game: None,
        }
    }
}

/// One leaderboard row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub name: String,
    pub score: u32,
    /// Whole seconds of play
    pub time: u32,
    pub lines: u32,
    pub level: u32,
}

impl Entry {
    pub fn from_stats(name: impl Into<String>, stats: &Stats) -> Self {
        Self {
            name: name.into(),
            score: stats.score,
            time: stats.time,
            lines: stats.lines_cleared,
            level: stats.level,
        }
    }

    /// `MM:SS`
    pub fn formatted_time(&self) -> String {
        format!("{:02}:{:02}", self.time / 60, self.time % 60)
    }
}

/// Result of [`Leaderboard::log`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogOutcome {
    Added,
    /// An entry with this name already exists at the index; nothing changed
    NameTaken(usize),
    /// Names must not be blank; nothing changed
    EmptyName,
}

/// Named scores in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Leaderboard {
    entries: Vec<Entry>,
}

impl Leaderboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.name == name)
    }

    /// Append an entry unless its name is blank or already taken
    pub fn log(&mut self, entry: Entry) -> LogOutcome {
        if entry.name.trim().is_empty() {
            return LogOutcome::EmptyName;
        }
        if let Some(i) = self.position(&entry.name) {
            return LogOutcome::NameTaken(i);
        }
        self.entries.push(entry);
        LogOutcome::Added
    }

    /// Replace the entry at `index`; false when out of range
    pub fn overwrite(&mut self, index: usize, entry: Entry) -> bool {
        match self.entries.get_mut(index) {
            Some(slot) => {
                *slot = entry;
                true
            }
            None => false,
        }
    }

    /// Log, replacing any entry with the same name
    pub fn log_or_overwrite(&mut self, entry: Entry) -> LogOutcome {
        match self.log(entry.clone()) {
            LogOutcome::NameTaken(i) => {
                self.overwrite(i, entry);
                LogOutcome::NameTaken(i)
            }
            outcome => outcome,
        }
    }

    /// Delete the entry with this name, returning it
    pub fn remove(&mut self, name: &str) -> Option<Entry> {
        let i = self.position(name)?;
        Some(self.entries.remove(i))
    }

    /// Highest score first; equal scores rank the faster game first
    pub fn ranked(&self) -> Vec<&Entry> {
        let mut ranked: Vec<&Entry> = self.entries.iter().collect();
        ranked.sort_by(|a, b| b.score.cmp(&a.score).then(a.time.cmp(&b.time)));
        ranked
    }
}
