//! Link entity and its creation/patch value objects.

pub mod model;

pub use model::{CreateLink, Link, LinkPatch};
