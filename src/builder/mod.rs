//! Prebuilt binary matrix construction.
//!
//! This module selects the variants a component applies to and creates one
//! binary per kind for each of them.

pub mod errors;
pub mod events;
pub mod factory;
pub mod instantiator;
pub mod selector;

pub use errors::BuildError;
pub use events::{MessageFormat, VariantEvent};
pub use factory::PrebuiltBinaryFactory;
pub use instantiator::{BinaryArgs, DefaultInstantiator, InstantiationError, Instantiator};
pub use selector::VariantSelection;
