//! Scene-descriptor strategy seam.
//!
//! Responsibilities:
//! - define the contract the configuration registry consumes from pluggable
//!   scene variants (preferred output size, scene materialization)
//! - keep the asset-loading collaborator and the built scene opaque to this
//!   crate; both are forwarded unchanged

mod descriptor;

pub use descriptor::{BoxedSceneDescriptor, SceneDescriptor};
