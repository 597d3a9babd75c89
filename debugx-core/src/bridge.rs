//! Host-facing bridge
//!
//! The debugger host holds a bridge and asks it for the properties of
//! objects from a live session.

use thiserror::Error;
use tracing::debug;

use crate::inspector::inspect;
use crate::reflect::Reflect;

#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("Failed to serialize inspection result: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Entry point exposed to the debugger host
pub trait Bridge {
    /// JSON document describing every declared property of `object`
    fn object_properties(
        &self,
        object: Option<&dyn Reflect>,
    ) -> Result<serde_json::Value, BridgeError>;
}

/// Bridge bound to a host context (e.g. the debug session that owns it)
pub struct DebugxBridge<C> {
    context: C,
}

impl<C> DebugxBridge<C> {
    pub fn new(context: C) -> Self {
        Self { context }
    }

    pub fn context(&self) -> &C {
        &self.context
    }
}

impl<C> Bridge for DebugxBridge<C> {
    fn object_properties(
        &self,
        object: Option<&dyn Reflect>,
    ) -> Result<serde_json::Value, BridgeError> {
        let result = inspect(object);
        debug!("Bridge answering with status {:?}", result.status());
        Ok(result.to_json()?)
    }
}
