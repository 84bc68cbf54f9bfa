//! Collaborators the widget core talks to.
//!
//! All three are synchronous: a render cycle runs start to finish without
//! suspending.

mod registry;
mod renderer;
mod snapshot;

pub use registry::*;
pub use renderer::*;
pub use snapshot::*;
