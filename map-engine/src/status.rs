//! The per-country status table and its refresh bookkeeping.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::errors::EngineError;
use crate::types::{CountryCode, CountryStatus};

/// One row of the external status source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusRecord {
    pub country_code: String,
    #[serde(default)]
    pub country_name: String,
    pub status: CountryStatus,
}

/// A trait that defines the required methods for a source of country status
/// data. Implemented by any structure that talks to the backing store; the
/// map only reads, `update` exists for the admin path.
pub trait StatusSource {
    fn fetch_all(&mut self) -> Result<Vec<StatusRecord>, EngineError>;

    fn update(&mut self, code: &CountryCode, status: CountryStatus) -> Result<(), EngineError>;
}

/// In-memory map from country code to status.
///
/// Codes absent from the table read as `CountryStatus::None`, so an empty
/// table is a valid degraded state (every country renders neutral).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatusTable {
    entries: HashMap<CountryCode, CountryStatus>,
}

impl StatusTable {
    /// Builds a table from fetched records.
    ///
    /// Records whose code does not validate are skipped; on duplicate codes
    /// the last record wins.
    pub fn from_records(records: &[StatusRecord]) -> Self {
        let mut entries = HashMap::new();
        for record in records {
            if let Some(code) = CountryCode::parse(&record.country_code) {
                entries.insert(code, record.status);
            }
        }
        Self { entries }
    }

    pub fn get(&self, code: &CountryCode) -> CountryStatus {
        self.entries.get(code).copied().unwrap_or_default()
    }

    /// All codes currently carrying the given status, sorted for stable
    /// iteration.
    pub fn list_by_status(&self, status: CountryStatus) -> Vec<CountryCode> {
        let mut codes: Vec<CountryCode> = self
            .entries
            .iter()
            .filter(|(_, s)| **s == status)
            .map(|(code, _)| code.clone())
            .collect();
        codes.sort();
        codes
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Token identifying one outstanding refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshToken(u64);

/// Owns the current [`StatusTable`] and enforces the refresh rules:
/// at most one fetch in flight, all-or-nothing replacement on success, the
/// previous table kept on failure, and late responses (token mismatch after
/// an `abort` or a newer refresh) discarded.
#[derive(Debug, Default)]
pub struct StatusRefresher {
    table: StatusTable,
    next_token: u64,
    in_flight: Option<u64>,
}

impl StatusRefresher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn table(&self) -> &StatusTable {
        &self.table
    }

    pub fn get(&self, code: &CountryCode) -> CountryStatus {
        self.table.get(code)
    }

    pub fn is_refreshing(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Starts a refresh, unless one is already outstanding.
    ///
    /// # Returns
    /// * `Option<RefreshToken>` - the token the eventual completion must
    ///   present, or `None` while a fetch is still in flight.
    pub fn begin_refresh(&mut self) -> Option<RefreshToken> {
        if self.in_flight.is_some() {
            return None;
        }
        self.next_token += 1;
        self.in_flight = Some(self.next_token);
        Some(RefreshToken(self.next_token))
    }

    /// Applies a successful fetch, atomically replacing the table.
    ///
    /// # Returns
    /// * `bool` - `false` when the token is stale; the result is discarded
    ///   and the current table is left untouched.
    pub fn apply(&mut self, token: RefreshToken, records: &[StatusRecord]) -> bool {
        if self.in_flight != Some(token.0) {
            return false;
        }
        self.table = StatusTable::from_records(records);
        self.in_flight = None;
        true
    }

    /// Records a failed fetch: the previous table stays in place.
    pub fn fail(&mut self, token: RefreshToken) {
        if self.in_flight == Some(token.0) {
            self.in_flight = None;
        }
    }

    /// Invalidates any outstanding refresh so its late result is discarded,
    /// e.g. when the owning view goes away mid-fetch.
    pub fn abort(&mut self) {
        self.in_flight = None;
    }
}
