use super::processors::StandardProcessor;
use crate::domain::ports::{PaymentProcessorRef, ProcessorCatalog};
use crate::domain::processor::ProcessorDescriptor;
use crate::error::ConfigError;
use std::collections::HashMap;
use std::sync::Arc;

/// An in-memory catalog of processor descriptors and their handles.
///
/// Descriptors keep insertion order, which is the order the router scans
/// them in. The catalog is filled once at startup and only read afterwards.
#[derive(Default, Clone)]
pub struct InMemoryCatalog {
    processors: Vec<ProcessorDescriptor>,
    handles: HashMap<String, PaymentProcessorRef>,
}

impl InMemoryCatalog {
    /// Creates a new, empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog where every descriptor is handled by a `StandardProcessor`.
    pub fn from_descriptors(
        descriptors: impl IntoIterator<Item = ProcessorDescriptor>,
    ) -> Result<Self, ConfigError> {
        let mut catalog = Self::new();
        for descriptor in descriptors {
            let handle = Arc::new(StandardProcessor::new(descriptor.clone()));
            catalog.insert(descriptor, handle)?;
        }
        Ok(catalog)
    }

    /// Appends a processor. Names must be unique.
    pub fn insert(
        &mut self,
        descriptor: ProcessorDescriptor,
        handle: PaymentProcessorRef,
    ) -> Result<(), ConfigError> {
        if self.handles.contains_key(descriptor.name()) {
            return Err(ConfigError::DuplicateProcessor(descriptor.name().to_string()));
        }
        self.handles.insert(descriptor.name().to_string(), handle);
        self.processors.push(descriptor);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.processors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.processors.is_empty()
    }
}

impl ProcessorCatalog for InMemoryCatalog {
    fn list_processors(&self) -> &[ProcessorDescriptor] {
        &self.processors
    }

    fn handle(&self, name: &str) -> Option<PaymentProcessorRef> {
        self.handles.get(name).cloned()
    }
}
