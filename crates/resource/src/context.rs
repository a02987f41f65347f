//! The per-operation context handed to resource run functions.

use tessera_marshal::{Decoder, Diagnostics, Encoder, MarshalError, Record};
use tessera_state::AttributeStore;
use tessera_value::DynamicValue;

/// Bundles everything an operation body needs: the mutable attribute
/// store, the diagnostic sink, and marshaling conveniences.
///
/// Operation bodies decode their model from current state, run their
/// business logic, and encode the model back, touching the store's raw
/// map only through the escape hatch.
pub struct OperationContext<'a> {
    state: &'a mut AttributeStore,
    diagnostics: &'a dyn Diagnostics,
}

impl<'a> OperationContext<'a> {
    pub fn new(state: &'a mut AttributeStore, diagnostics: &'a dyn Diagnostics) -> Self {
        OperationContext { state, diagnostics }
    }

    /// Populate `target` from the current state, permissively.
    pub fn decode<R: Record>(&self, target: &mut R) -> Result<(), MarshalError> {
        let decoder = Decoder::new().with_diagnostics(self.diagnostics);
        decoder.decode(target, &*self.state)
    }

    /// Encode `model` and publish every declared wire key to the state.
    pub fn encode<R: Record>(&mut self, model: &R) -> Result<(), MarshalError> {
        let encoder = Encoder::new().with_diagnostics(self.diagnostics);
        encoder.encode_into(model, &mut *self.state)
    }

    /// Read one raw attribute value.
    pub fn get(&self, key: &str) -> Option<DynamicValue> {
        use tessera_state::StateAccessor;
        self.state.get(key)
    }

    /// Stamp the resource identifier.
    pub fn set_id(&mut self, id: impl Into<String>) {
        self.state.set_id(id);
    }

    /// The current resource identifier, if stamped.
    pub fn id(&self) -> Option<&str> {
        self.state.id()
    }

    pub fn diagnostics(&self) -> &dyn Diagnostics {
        self.diagnostics
    }

    /// Escape hatch to the underlying store.
    pub fn state(&mut self) -> &mut AttributeStore {
        self.state
    }
}
