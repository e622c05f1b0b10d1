//! Calculation history: the 50 most recent calculations, newest first.

use std::rc::Rc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use super::{persist, read_persisted, Storage, Writable, HISTORY_KEY};

/// Entries kept after every insertion
pub const MAX_HISTORY: usize = 50;

/// Default length of [`HistoryStore::recent`]
pub const DEFAULT_RECENT: usize = 10;

/// One recorded calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub id: String,
    pub calculator_id: String,
    /// Display name at the time of the calculation
    pub calculator_name: String,
    pub inputs: Map<String, Value>,
    pub results: Map<String, Value>,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub favorited: bool,
}

/// Per-calculator usage derived from the history
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageStat {
    pub id: String,
    pub name: String,
    pub count: usize,
    pub last_used: DateTime<Utc>,
}

pub struct HistoryStore {
    entries: Writable<Vec<HistoryEntry>>,
    storage: Rc<dyn Storage>,
}

impl HistoryStore {
    pub fn new(storage: Rc<dyn Storage>) -> Self {
        HistoryStore {
            entries: Writable::new(Vec::new()),
            storage,
        }
    }

    /// Observable list of entries
    pub fn state(&self) -> &Writable<Vec<HistoryEntry>> {
        &self.entries
    }

    pub fn entries(&self) -> Vec<HistoryEntry> {
        self.entries.get()
    }

    pub fn len(&self) -> usize {
        self.entries.with(Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Record a calculation and return its new id.
    ///
    /// The in-memory history is updated even if persisting fails.
    pub fn add_calculation(
        &self,
        calculator_id: &str,
        calculator_name: &str,
        inputs: Map<String, Value>,
        results: Map<String, Value>,
    ) -> String {
        self.add_calculation_at(calculator_id, calculator_name, inputs, results, Utc::now())
    }

    /// [`add_calculation`](Self::add_calculation) with an explicit timestamp
    pub fn add_calculation_at(
        &self,
        calculator_id: &str,
        calculator_name: &str,
        inputs: Map<String, Value>,
        results: Map<String, Value>,
        timestamp: DateTime<Utc>,
    ) -> String {
        let entry = HistoryEntry {
            id: format!("calc-{}", Uuid::now_v7()),
            calculator_id: calculator_id.to_string(),
            calculator_name: calculator_name.to_string(),
            inputs,
            results,
            timestamp,
            favorited: false,
        };
        let id = entry.id.clone();

        self.entries.update(|history| {
            history.insert(0, entry);
            history.truncate(MAX_HISTORY);
        });
        tracing::debug!(id = %id, calculator_id, "recorded calculation");
        self.save();
        id
    }

    /// Remove an entry. Unknown ids leave the history unchanged.
    pub fn remove_calculation(&self, id: &str) {
        self.entries.update(|history| history.retain(|e| e.id != id));
        self.save();
    }

    /// Flip the favourite flag of one entry. Unknown ids are a no-op.
    pub fn toggle_favorite(&self, id: &str) {
        self.entries.update(|history| {
            if let Some(entry) = history.iter_mut().find(|e| e.id == id) {
                entry.favorited = !entry.favorited;
            }
        });
        self.save();
    }

    pub fn clear_history(&self) {
        if let Err(e) = self.storage.remove_item(HISTORY_KEY) {
            tracing::warn!(error = %e, "failed to clear persisted history");
        }
        self.entries.set(Vec::new());
    }

    /// Replace the in-memory history with the persisted one.
    ///
    /// Absent data leaves the history untouched. Unreadable data is logged
    /// and ignored.
    pub fn load_history(&self) {
        if let Some(mut history) = read_persisted::<Vec<HistoryEntry>>(self.storage.as_ref(), HISTORY_KEY) {
            history.truncate(MAX_HISTORY);
            tracing::debug!(entries = history.len(), "rehydrated history");
            self.entries.set(history);
        }
    }

    /// Newest `n` entries
    pub fn recent(&self, n: usize) -> Vec<HistoryEntry> {
        self.entries.with(|h| h.iter().take(n).cloned().collect())
    }

    pub fn favorites(&self) -> Vec<HistoryEntry> {
        self.entries
            .with(|h| h.iter().filter(|e| e.favorited).cloned().collect())
    }

    /// Usage per calculator, most used first. Ties keep the order in which
    /// calculators first appear in the history (newest first).
    pub fn usage_stats(&self) -> Vec<UsageStat> {
        let mut stats: Vec<UsageStat> = Vec::new();
        self.entries.with(|history| {
            for entry in history {
                match stats.iter_mut().find(|s| s.id == entry.calculator_id) {
                    Some(stat) => {
                        stat.count += 1;
                        if entry.timestamp > stat.last_used {
                            stat.last_used = entry.timestamp;
                        }
                    }
                    None => stats.push(UsageStat {
                        id: entry.calculator_id.clone(),
                        name: entry.calculator_name.clone(),
                        count: 1,
                        last_used: entry.timestamp,
                    }),
                }
            }
        });
        stats.sort_by(|a, b| b.count.cmp(&a.count));
        stats
    }

    fn save(&self) {
        self.entries
            .with(|history| persist(self.storage.as_ref(), HISTORY_KEY, history));
    }
}
