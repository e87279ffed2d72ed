use super::in_memory::InMemoryCatalog;
use super::processors::StandardProcessor;
use crate::config::RouterConfig;
use crate::domain::ports::{PaymentProcessorRef, ProcessorFactory};
use crate::domain::processor::ProcessorDescriptor;
use crate::error::ConfigError;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

pub const STANDARD_KIND: &str = "standard";

/// Maps processor kinds to the factories that build their handles.
///
/// Configuration names a kind per processor; the registry resolves every
/// entry once at startup into an `InMemoryCatalog`.
pub struct ProcessorRegistry {
    factories: HashMap<String, ProcessorFactory>,
}

impl Default for ProcessorRegistry {
    fn default() -> Self {
        Self::with_builtin()
    }
}

impl ProcessorRegistry {
    /// A registry with no kinds at all.
    pub fn empty() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// A registry with the built-in `standard` kind.
    pub fn with_builtin() -> Self {
        let mut registry = Self::empty();
        registry.register(
            STANDARD_KIND,
            Box::new(|descriptor: ProcessorDescriptor| {
                Arc::new(StandardProcessor::new(descriptor)) as PaymentProcessorRef
            }),
        );
        registry
    }

    /// Registers `factory` under `kind`, replacing any previous factory.
    pub fn register(&mut self, kind: impl Into<String>, factory: ProcessorFactory) {
        self.factories.insert(kind.into(), factory);
    }

    pub fn contains(&self, kind: &str) -> bool {
        self.factories.contains_key(kind)
    }

    pub fn build_catalog(&self, config: &RouterConfig) -> Result<InMemoryCatalog, ConfigError> {
        let mut catalog = InMemoryCatalog::new();
        for settings in &config.processors {
            let factory = self.factories.get(&settings.kind).ok_or_else(|| {
                ConfigError::UnknownProcessorKind {
                    processor: settings.name.clone(),
                    kind: settings.kind.clone(),
                }
            })?;

            let descriptor = settings.to_descriptor()?;
            debug!(processor = %settings.name, kind = %settings.kind, "Registering processor");
            catalog.insert(descriptor.clone(), factory(descriptor))?;
        }
        Ok(catalog)
    }
}
