//! Opportunity detection and its collaborator seams

pub mod route;
pub mod caps;
pub mod opportunity;

pub use route::*;
pub use caps::*;
pub use opportunity::*;
