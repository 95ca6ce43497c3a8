//! Interpreter that expands a grammar and walks it into a [`SkeletonBlueprint`].
//!
//! The entry point is [`SkeletonInterpreter`]: build one from a
//! [`SkeletonConfig`], call [`execute`](SkeletonInterpreter::execute), then
//! read or take the blueprint. [`interpret`] wraps those steps for callers
//! that do not need generation strings or failure diagnostics.
//!
//! Two behaviors deserve calling out because they differ from textbook
//! L-System renderers:
//!
//! * Every generation is walked, in order, by one continuous turtle. The
//!   pose, the pose stack, and the rotation stream all carry across
//!   generation boundaries, so generation `n + 1` starts wherever
//!   generation `n` left the turtle. The grown shapes interleave trunk
//!   geometry from every age of the grammar. Set
//!   [`SkeletonConfig::only_final`] to walk just the last generation.
//! * Rotations act on the heading about fixed world axes. There is no
//!   turtle-local frame, and a rotation about the axis the heading already
//!   points along leaves the heading where it is.

use std::collections::HashMap;
use std::f32::consts::{PI, TAU};

use glam::Vec3;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, SkeletonError};
use crate::grammar::{self, RuleTable};
use crate::lexer::InstructionLexer;
use crate::skeleton::{MeshHandle, MeshInstance, SkeletonBlueprint, SkeletonWarning};
use crate::turtle::{TurtleOp, TurtlePose};

/// Everything a skeleton run needs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SkeletonConfig {
    /// How many rewrite passes to run.
    pub num_iters: usize,
    /// Generation 0. Must not be empty.
    pub axiom: String,
    /// Symbol productions; symbols without an entry rewrite to themselves.
    pub rules: RuleTable,
    /// Distance an unparameterized `F` or `f` travels. Must be positive.
    pub step_length: f32,
    /// Magnitude of an unparameterized rotation, in degrees.
    pub default_angle: f32,
    /// Symbols that place a reference mesh instead of steering the turtle.
    pub mesh_dict: HashMap<char, MeshHandle>,
    /// Seed for the instance-rotation stream.
    pub seed: u64,
    /// Walk only the final generation instead of every generation.
    pub only_final: bool,
    /// Ceiling on the cumulative character count of all generations.
    pub max_expanded_chars: usize,
}

impl Default for SkeletonConfig {
    fn default() -> Self {
        Self {
            num_iters: 20,
            axiom: "&SYS".to_owned(),
            rules: RuleTable::new(),
            step_length: 1.0,
            default_angle: 80.0,
            mesh_dict: HashMap::new(),
            seed: 0,
            only_final: false,
            max_expanded_chars: 10_000_000,
        }
    }
}

impl SkeletonConfig {
    /// Checks the constraints interpretation relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.axiom.is_empty() {
            return Err(ConfigError::EmptyAxiom);
        }
        if self.step_length.is_nan() || self.step_length <= 0.0 {
            return Err(ConfigError::NonPositiveStep(self.step_length));
        }
        if let Some(&key) = self
            .rules
            .keys()
            .find(|key| grammar::is_reserved_rule_key(**key))
        {
            return Err(ConfigError::ReservedRuleKey(key));
        }
        Ok(())
    }
}

/// Lifecycle of a [`SkeletonInterpreter`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunState {
    /// Config validated, nothing run yet.
    Ready,
    /// Inside [`SkeletonInterpreter::execute`].
    Running,
    /// Ran to completion; the blueprint is final.
    Done,
    /// Aborted; the blueprint holds whatever was emitted before the error.
    Failed,
}

/// Internal lifecycle, holding the error of a failed run.
#[derive(Clone, Debug)]
enum Progress {
    Ready,
    Running,
    Done,
    Failed(SkeletonError),
}

/// Expands an L-System grammar and walks the generations into a wireframe
/// skeleton.
///
/// An interpreter runs at most once. After [`execute`] has returned, every
/// later call replays the recorded outcome: `Ok` again after success, a
/// clone of the same error after failure. Build a fresh interpreter to run
/// again.
///
/// [`execute`]: SkeletonInterpreter::execute
pub struct SkeletonInterpreter {
    config: SkeletonConfig,
    generations: Vec<String>,
    blueprint: SkeletonBlueprint,
    progress: Progress,
}

impl SkeletonInterpreter {
    /// Validates `config` and readies a run.
    pub fn new(config: SkeletonConfig) -> Result<Self, SkeletonError> {
        config.validate()?;
        Ok(Self {
            config,
            generations: Vec::new(),
            blueprint: SkeletonBlueprint::new(),
            progress: Progress::Ready,
        })
    }

    /// Expands the grammar and interprets it to completion.
    ///
    /// On [`SkeletonError::ExpansionOverflow`] the blueprint stays empty; on
    /// [`SkeletonError::UnbalancedBracket`] it keeps everything emitted
    /// before the offending `]`, which is often useful when debugging a
    /// grammar.
    pub fn execute(&mut self) -> Result<(), SkeletonError> {
        match &self.progress {
            Progress::Done => return Ok(()),
            Progress::Failed(error) => return Err(error.clone()),
            Progress::Ready | Progress::Running => {}
        }

        self.progress = Progress::Running;
        match self.run() {
            Ok(()) => {
                self.progress = Progress::Done;
                Ok(())
            }
            Err(error) => {
                self.progress = Progress::Failed(error.clone());
                Err(error)
            }
        }
    }

    fn run(&mut self) -> Result<(), SkeletonError> {
        self.generations = grammar::expand(
            &self.config.axiom,
            &self.config.rules,
            self.config.num_iters,
            self.config.max_expanded_chars,
        )?;

        let mut rng = SmallRng::seed_from_u64(self.config.seed);
        let mut pose = TurtlePose::default();
        let mut stack: Vec<TurtlePose> = Vec::new();

        let first = if self.config.only_final {
            self.generations.len() - 1
        } else {
            0
        };

        for (generation, text) in self.generations.iter().enumerate().skip(first) {
            let mut lexer = InstructionLexer::new(text);
            loop {
                let offset = lexer.offset();
                let Some(instruction) = lexer.next() else {
                    break;
                };

                // The mesh dictionary shadows every other meaning of a
                // symbol, and placing an instance leaves the turtle put.
                if let Some(&mesh) = self.config.mesh_dict.get(&instruction.symbol) {
                    self.blueprint.add_instance(MeshInstance {
                        symbol: instruction.symbol,
                        mesh,
                        position: pose.position,
                        rotation: random_euler(&mut rng),
                    });
                    continue;
                }

                let step = instruction.value.unwrap_or(self.config.step_length);
                let angle = instruction
                    .value
                    .unwrap_or(self.config.default_angle)
                    .to_radians();

                match TurtleOp::from_symbol(instruction.symbol) {
                    TurtleOp::Draw => {
                        let start = pose.position;
                        pose.advance(step);
                        self.blueprint.add_stroke(start, pose.position);
                    }
                    TurtleOp::Move => pose.advance(step),
                    TurtleOp::Yaw(sign) => pose.rotate_z(sign * angle),
                    TurtleOp::Pitch(sign) => pose.rotate_x(sign * angle),
                    TurtleOp::Roll(sign) => pose.rotate_y(sign * angle),
                    TurtleOp::TurnAround => pose.rotate_z(PI),
                    TurtleOp::Push => stack.push(pose),
                    TurtleOp::Pop => match stack.pop() {
                        Some(saved) => pose = saved,
                        None => {
                            return Err(SkeletonError::UnbalancedBracket { generation, offset });
                        }
                    },
                    TurtleOp::Ignore => {}
                }
            }
        }

        if !stack.is_empty() {
            self.blueprint
                .warnings
                .push(SkeletonWarning::UnclosedBranches { depth: stack.len() });
        }
        Ok(())
    }

    /// Current lifecycle state.
    pub fn state(&self) -> RunState {
        match self.progress {
            Progress::Ready => RunState::Ready,
            Progress::Running => RunState::Running,
            Progress::Done => RunState::Done,
            Progress::Failed(_) => RunState::Failed,
        }
    }

    /// The error that failed the run, if it failed.
    pub fn error(&self) -> Option<&SkeletonError> {
        match &self.progress {
            Progress::Failed(error) => Some(error),
            _ => None,
        }
    }

    /// Every generation string, axiom first. Empty before [`execute`] has
    /// expanded the grammar.
    ///
    /// [`execute`]: SkeletonInterpreter::execute
    pub fn generations(&self) -> &[String] {
        &self.generations
    }

    /// The blueprint as built so far. Partial after a bracket failure, final
    /// after success.
    pub fn blueprint(&self) -> &SkeletonBlueprint {
        &self.blueprint
    }

    /// Consumes the interpreter and hands the blueprint to the caller.
    pub fn into_blueprint(self) -> SkeletonBlueprint {
        self.blueprint
    }
}

/// Draws one instance rotation: XYZ Euler components, each uniform in
/// `[0, 2π)`, sampled x then y then z.
fn random_euler(rng: &mut SmallRng) -> Vec3 {
    Vec3::new(
        rng.gen_range(0.0..TAU),
        rng.gen_range(0.0..TAU),
        rng.gen_range(0.0..TAU),
    )
}

/// Expands and interprets `config` in one call.
///
/// Partial blueprints of failed runs are discarded; drive a
/// [`SkeletonInterpreter`] directly to keep them for diagnostics.
pub fn interpret(config: SkeletonConfig) -> Result<SkeletonBlueprint, SkeletonError> {
    let mut interpreter = SkeletonInterpreter::new(config)?;
    interpreter.execute()?;
    Ok(interpreter.into_blueprint())
}
