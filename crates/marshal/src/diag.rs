//! Optional diagnostic sink for the conversion engine.
//!
//! Serialization debugging is a cross-cutting concern, not core logic:
//! the engine reports what it visits and what it skips through a sink
//! the caller passes in, never through a process-wide logger. The
//! default sink is [`NullDiagnostics`], so production decodes are
//! silent.

/// Receives per-field diagnostic messages from Decode and Encode.
pub trait Diagnostics {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
}

/// Writes every message to stderr. Intended for debugging a conversion
/// interactively, not for production use.
pub struct ConsoleDiagnostics;

impl Diagnostics for ConsoleDiagnostics {
    fn info(&self, message: &str) {
        eprintln!("{message}");
    }

    fn warn(&self, message: &str) {
        eprintln!("WARN: {message}");
    }
}

/// Discards every message.
pub struct NullDiagnostics;

impl Diagnostics for NullDiagnostics {
    fn info(&self, _message: &str) {}

    fn warn(&self, _message: &str) {}
}
