//! # lsystem-skeleton
//!
//! A sovereign interpretation crate that grows deterministic L-System
//! grammars into engine-agnostic 3D wireframe skeletons.
//!
//! It decouples the *grammar* (an axiom plus rewrite rules) from the *host*
//! (a modelling add-on, a game engine, an exporter). Expansion and turtle
//! interpretation happen here, in plain data: the result is a
//! [`SkeletonBlueprint`] of vertices, edges, and reference-mesh placements
//! that any host can materialize through the [`HostAdapter`] contract and
//! optionally thicken into solid geometry.
//!
//! Runs are bit-reproducible: the same [`SkeletonConfig`], including its
//! seed, always yields the same blueprint.
//!
//! ```
//! use lsystem_skeleton::{interpret, SkeletonConfig};
//!
//! let blueprint = interpret(SkeletonConfig {
//!     axiom: "F".to_owned(),
//!     num_iters: 0,
//!     ..SkeletonConfig::default()
//! })?;
//!
//! assert_eq!(blueprint.vertices.len(), 2);
//! assert_eq!(blueprint.edges.len(), 1);
//! # Ok::<(), lsystem_skeleton::SkeletonError>(())
//! ```

pub mod error;
pub mod grammar;
pub mod interpreter;
pub mod lexer;
pub mod skeleton;
pub mod turtle;

pub use error::*;
pub use grammar::*;
pub use interpreter::*;
pub use lexer::*;
pub use skeleton::*;
pub use turtle::*;
