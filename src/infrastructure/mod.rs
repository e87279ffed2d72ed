pub mod in_memory;
pub mod processors;
pub mod registry;
