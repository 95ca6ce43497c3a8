//! Error types surfaced by validation, expansion, and interpretation.

use thiserror::Error;

/// A reason a [`SkeletonConfig`](crate::SkeletonConfig) was rejected before
/// any expansion work began.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ConfigError {
    /// The axiom seeds generation 0 and may not be empty.
    #[error("axiom must not be empty")]
    EmptyAxiom,

    /// The default stroke distance must be a positive number.
    #[error("step_length must be positive, got {0}")]
    NonPositiveStep(f32),

    /// `(`, `)`, and digits spell parameter groups inside generation strings
    /// and cannot double as rewritable symbols.
    #[error("rule key {0:?} is reserved by the parameter syntax")]
    ReservedRuleKey(char),
}

/// Everything that can abort a skeleton run.
///
/// Variants are cheap to clone; a failed [`SkeletonInterpreter`] keeps its
/// error and hands out copies on every later call.
///
/// [`SkeletonInterpreter`]: crate::SkeletonInterpreter
#[derive(Clone, Debug, PartialEq, Error)]
pub enum SkeletonError {
    /// The configuration failed validation; nothing was expanded or drawn.
    #[error("invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),

    /// A `]` was read with no saved pose left to restore.
    #[error("']' at byte {offset} of generation {generation} has no matching '['")]
    UnbalancedBracket {
        /// Index of the generation being walked when the pop failed.
        generation: usize,
        /// Byte offset of the offending `]` within that generation string.
        offset: usize,
    },

    /// The cumulative length of all generations crossed the configured
    /// ceiling before expansion finished.
    #[error("expansion crossed the {limit}-character ceiling at generation {generation}")]
    ExpansionOverflow {
        /// Index of the generation whose length broke the ceiling.
        generation: usize,
        /// The ceiling that was in effect.
        limit: usize,
    },
}
