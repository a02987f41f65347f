use tessera_value::DynamicValue;

use crate::error::StateError;

/// Read capability over a state map.
///
/// Decode pulls one raw value per wire key through this trait and never
/// iterates the store, so implementations may be lazy or virtual.
pub trait StateAccessor {
    /// Fetch the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<DynamicValue>;

    /// Fetch the value together with a raw presence flag.
    ///
    /// For plain map stores this adds nothing over [`get`](Self::get);
    /// stores that materialize defaults in `get` override it so callers
    /// can distinguish a stored zero value from an absent key.
    fn get_or_absent(&self, key: &str) -> (Option<DynamicValue>, bool) {
        let value = self.get(key);
        let present = value.is_some();
        (value, present)
    }
}

/// Write capability over a state map.
///
/// Encode's caller invokes `set` once per top-level key. Writes are not
/// transactional: when a call fails mid-sequence, earlier writes remain
/// visible. That partial-write window is an accepted limitation of this
/// layer, not something implementations are expected to remediate.
pub trait StateWriter {
    fn set(&mut self, key: &str, value: DynamicValue) -> Result<(), StateError>;
}
