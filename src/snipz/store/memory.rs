use super::KeyValueStore;
use crate::error::{Result, SnipzError};
use std::cell::RefCell;
use std::collections::HashMap;

/// In-memory key-value store for testing.
///
/// Uses `RefCell` for interior mutability since snipz is single-threaded,
/// which lets `KeyValueStore` take `&self` everywhere.
#[derive(Default)]
pub struct MemoryKv {
    values: RefCell<HashMap<String, String>>,
    simulate_write_error: RefCell<bool>,
}

impl MemoryKv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Put a raw value in place, bypassing serialization (e.g. corrupt data).
    pub fn seed(&self, key: &str, value: &str) {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }
}

impl KeyValueStore for MemoryKv {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(SnipzError::Store("Simulated write error".to_string()));
        }
        self.seed(key, value);
        Ok(())
    }
}
