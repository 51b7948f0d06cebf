use web_sys::{window, Storage};
use wheel_shared::store::parse_counter;
use wheel_shared::{CounterStore, StoreError, SPIN_COUNT_KEY};

/// Spin counter kept in `localStorage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Result<Storage, StoreError> {
        let window = window().ok_or_else(|| StoreError::Unavailable("no window".to_string()))?;
        window
            .local_storage()
            .map_err(|e| StoreError::Unavailable(format!("{:?}", e)))?
            .ok_or_else(|| StoreError::Unavailable("localStorage disabled".to_string()))
    }
}

impl CounterStore for LocalStorageStore {
    fn load(&self) -> Result<Option<u64>, StoreError> {
        let raw = Self::storage()?
            .get_item(SPIN_COUNT_KEY)
            .map_err(|e| StoreError::Unavailable(format!("{:?}", e)))?;
        raw.map(|value| parse_counter(SPIN_COUNT_KEY, &value)).transpose()
    }

    fn save(&mut self, value: u64) -> Result<(), StoreError> {
        Self::storage()?
            .set_item(SPIN_COUNT_KEY, &value.to_string())
            .map_err(|e| StoreError::Write(format!("{:?}", e)))
    }
}
