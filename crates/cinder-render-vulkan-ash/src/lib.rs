//! Vulkan instance lifecycle through a dynamically supplied loader.
//!
//! Every call resolves `vkGetInstanceProcAddr` and the target entry point
//! afresh, so a loader that shows up later is picked up on the next call.

#![deny(unsafe_op_in_unsafe_fn)]

mod error;
mod instance;
mod loader;
mod shim;

pub use error::{LoaderError, LoaderResult};
pub use instance::{create_instance_with_config, InstanceSurface};
pub use loader::{ProcAddrSource, RawProcAddr};
pub use shim::{create_instance, destroy_instance, destroy_surface};

#[cfg(test)]
pub(crate) mod fake;
