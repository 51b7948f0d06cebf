use crate::error::StoreError;
use std::collections::HashMap;

/// Key the spin counter is stored under.
pub const SPIN_COUNT_KEY: &str = "spinCount";

/// Minimal load/save interface for the persisted spin counter.
pub trait CounterStore {
    /// `Ok(None)` when nothing has been stored yet.
    fn load(&self) -> Result<Option<u64>, StoreError>;
    fn save(&mut self, value: u64) -> Result<(), StoreError>;
}

/// Parses a raw stored string the way every store encodes the counter.
pub fn parse_counter(key: &str, raw: &str) -> Result<u64, StoreError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    trimmed.parse::<u64>().map_err(|_| StoreError::Corrupt {
        key: key.to_string(),
        value: raw.to_string(),
    })
}

/// Reads the counter, treating a missing or unreadable value as zero.
pub fn load_spin_count<S: CounterStore + ?Sized>(store: &S) -> u64 {
    match store.load() {
        Ok(Some(count)) => count,
        Ok(None) => 0,
        Err(e) => {
            log::warn!("Starting spin count from 0: {}", e);
            0
        }
    }
}

/// String-valued in-memory store mirroring browser storage semantics.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a raw value, e.g. to simulate a corrupted entry.
    pub fn with_raw(key: &str, value: &str) -> Self {
        let mut values = HashMap::new();
        values.insert(key.to_string(), value.to_string());
        Self { values }
    }

    pub fn raw(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

impl CounterStore for MemoryStore {
    fn load(&self) -> Result<Option<u64>, StoreError> {
        self.values
            .get(SPIN_COUNT_KEY)
            .map(|raw| parse_counter(SPIN_COUNT_KEY, raw))
            .transpose()
    }

    fn save(&mut self, value: u64) -> Result<(), StoreError> {
        self.values.insert(SPIN_COUNT_KEY.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_value_defaults_to_zero() {
        let store = MemoryStore::new();
        assert_eq!(store.load(), Ok(None));
        assert_eq!(load_spin_count(&store), 0);
    }

    #[test]
    fn test_round_trip_through_raw_string() {
        let mut store = MemoryStore::new();
        store.save(21).unwrap();
        assert_eq!(store.raw(SPIN_COUNT_KEY), Some("21"));
        assert_eq!(load_spin_count(&store), 21);
    }

    #[test]
    fn test_corrupt_value_is_reported_and_defaulted() {
        let store = MemoryStore::with_raw(SPIN_COUNT_KEY, "lots");
        assert!(matches!(store.load(), Err(StoreError::Corrupt { .. })));
        assert_eq!(load_spin_count(&store), 0);
    }

    #[test]
    fn test_blank_value_is_zero() {
        assert_eq!(parse_counter(SPIN_COUNT_KEY, "  "), Ok(0));
        assert_eq!(parse_counter(SPIN_COUNT_KEY, " 7 "), Ok(7));
    }
}
