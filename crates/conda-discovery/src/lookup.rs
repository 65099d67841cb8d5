//! Secondary interpreter lookup

use async_trait::async_trait;

use crate::interpreter::InterpreterInfo;

/// A source of already-known interpreters (registry scan, `PATH` scan,
/// user configuration). The locator mines it for a Conda installation.
#[async_trait]
pub trait InterpreterLookup: Send + Sync {
    async fn list_interpreters(&self) -> Vec<InterpreterInfo>;
}

/// Lookup over a fixed list, typically the `[[interpreters]]` tables of the
/// configuration file.
#[derive(Debug, Clone, Default)]
pub struct StaticLookup {
    interpreters: Vec<InterpreterInfo>,
}

impl StaticLookup {
    pub fn new(interpreters: Vec<InterpreterInfo>) -> Self {
        Self { interpreters }
    }

    pub fn is_empty(&self) -> bool {
        self.interpreters.is_empty()
    }
}

#[async_trait]
impl InterpreterLookup for StaticLookup {
    async fn list_interpreters(&self) -> Vec<InterpreterInfo> {
        self.interpreters.clone()
    }
}
