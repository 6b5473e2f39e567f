//! Document-unique element ids.

use std::collections::HashMap;

use tracing::trace;

/// Hands out ids `name-0`, `name-1`, ... per base name.
///
/// One generator lives in each render context, so ids are unique within a
/// document and every document starts counting from zero.
#[derive(Debug, Default)]
pub struct IdGenerator {
    next: HashMap<String, usize>,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn generate(&mut self, name: &str) -> String {
        let counter = self.next.entry(name.to_string()).or_insert(0);
        let id = format!("{name}-{counter}");
        *counter += 1;
        trace!(%id, "Generated element id");
        id
    }
}
