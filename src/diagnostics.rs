// 📋 Diagnostics - where load failures get recorded
//
// The catalog never logs through global state. It is handed a sink and
// reports each failure to it exactly once, before returning the error.

use crate::error::LoadError;
use std::sync::{Arc, Mutex};

/// Collaborator that records a load diagnostic
pub trait Diagnostics: Send + Sync {
    fn record(&self, error: &LoadError);
}

// ============================================================================
// TRACING SINK
// ============================================================================

/// Emits diagnostics as `tracing` error events (the default sink)
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn record(&self, error: &LoadError) {
        match error {
            LoadError::Io { path, source } => {
                tracing::error!(path = %path.display(), error = %source, "{}", error);
            }
            LoadError::FieldCount { line_number, count, .. } => {
                tracing::error!(line_number, field_count = count, "{}", error);
            }
            LoadError::InvalidAge { line_number, value, .. } => {
                tracing::error!(line_number, value = %value, "{}", error);
            }
        }
    }
}

// ============================================================================
// IN-MEMORY SINK
// ============================================================================

/// Keeps rendered diagnostics; clones share the same buffer
#[derive(Debug, Clone, Default)]
pub struct MemoryDiagnostics {
    entries: Arc<Mutex<Vec<String>>>,
}

impl MemoryDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far
    pub fn entries(&self) -> Vec<String> {
        match self.entries.lock() {
            Ok(entries) => entries.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }
}

impl Diagnostics for MemoryDiagnostics {
    fn record(&self, error: &LoadError) {
        let rendered = error.to_string();
        match self.entries.lock() {
            Ok(mut entries) => entries.push(rendered),
            Err(poisoned) => poisoned.into_inner().push(rendered),
        }
    }
}
