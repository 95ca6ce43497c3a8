//! Wireframe skeleton produced by interpretation, and the host contract.
//!
//! A [`SkeletonBlueprint`] is plain data: vertex positions, index-pair edges,
//! and reference-mesh placements, all in emission order. It holds no scene
//! handles and no host state, so it can be serialized, diffed, or shipped
//! across a process boundary as-is. Hosts turn it into real geometry through
//! the [`HostAdapter`] trait.

use glam::{EulerRot, Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Opaque identifier for a host-side reference mesh.
///
/// The core never dereferences these; it only copies them from the mesh
/// dictionary onto the instances it emits.
pub type MeshHandle = u64;

/// An undirected stroke between two vertices of the wireframe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    /// Index into [`SkeletonBlueprint::vertices`].
    pub a: u32,
    /// Index into [`SkeletonBlueprint::vertices`], distinct from `a`.
    pub b: u32,
}

/// A placement of one host reference mesh on the skeleton.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MeshInstance {
    /// The grammar symbol that emitted this placement.
    pub symbol: char,
    /// Which reference mesh to place, per the mesh dictionary.
    pub mesh: MeshHandle,
    /// World-space position: the turtle's position at emission time.
    pub position: Vec3,
    /// Euler XYZ rotation in radians, each component uniform in `[0, 2π)`.
    pub rotation: Vec3,
}

impl MeshInstance {
    /// The rotation as a quaternion.
    ///
    /// Matches an XYZ Euler triple applied about the fixed world axes,
    /// X first, then Y, then Z.
    pub fn rotation_quat(&self) -> Quat {
        Quat::from_euler(
            EulerRot::ZYX,
            self.rotation.z,
            self.rotation.y,
            self.rotation.x,
        )
    }
}

/// A non-fatal condition noticed while interpreting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkeletonWarning {
    /// The run finished with `[` saves that no `]` ever restored.
    UnclosedBranches {
        /// How many saved poses were still on the stack at the end.
        depth: usize,
    },
}

/// The complete engine-agnostic skeleton of one run.
///
/// All four arrays are append-only during interpretation and frozen
/// afterwards. Vertices and edges describe a faceless wireframe; instances
/// are placements of host meshes named by opaque handles.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SkeletonBlueprint {
    /// Stroke endpoints, in emission order.
    pub vertices: Vec<Vec3>,
    /// Strokes, as index pairs into `vertices`.
    pub edges: Vec<Edge>,
    /// Reference-mesh placements, in emission order.
    pub instances: Vec<MeshInstance>,
    /// Non-fatal conditions collected during the run.
    pub warnings: Vec<SkeletonWarning>,
}

impl SkeletonBlueprint {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when the run emitted neither geometry nor instances.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() && self.edges.is_empty() && self.instances.is_empty()
    }

    /// Appends one stroke from `start` to `end`.
    ///
    /// When `start` is bit-identical to the most recently appended vertex,
    /// the stroke reuses that vertex and extends the current polyline chain.
    /// Any other start (after a jump, a pose restore, or the first stroke of
    /// a run) begins a new chain. Exactly one edge is appended either way,
    /// and `end` always becomes a fresh vertex.
    pub fn add_stroke(&mut self, start: Vec3, end: Vec3) {
        let a = match self.vertices.last() {
            Some(last) if *last == start => self.vertices.len() as u32 - 1,
            _ => {
                self.vertices.push(start);
                self.vertices.len() as u32 - 1
            }
        };
        self.vertices.push(end);
        let b = self.vertices.len() as u32 - 1;
        self.edges.push(Edge { a, b });
    }

    /// Appends one reference-mesh placement.
    pub fn add_instance(&mut self, instance: MeshInstance) {
        self.instances.push(instance);
    }
}

/// Contract a host implements to turn a finished blueprint into scene
/// content.
///
/// The split keeps the core portable: interpretation never touches a scene
/// graph, and a host (a modelling add-on, an engine bridge, an exporter)
/// implements these two calls against its own API. Thickening the wireframe
/// into a solid is host business too; [`ThickeningHint`] carries the
/// conventional parameters for hosts that want a starting point.
pub trait HostAdapter {
    /// Host-side failure type.
    type Error;

    /// Builds one host mesh from the vertex and edge arrays. The wireframe
    /// carries no faces.
    fn build_wireframe(&mut self, blueprint: &SkeletonBlueprint) -> Result<(), Self::Error>;

    /// Places one copy of the reference mesh named by `instance.mesh` at the
    /// instance's position and rotation.
    fn place_instance(&mut self, instance: &MeshInstance) -> Result<(), Self::Error>;

    /// Materializes the whole blueprint: the wireframe first, then every
    /// instance in emission order.
    fn materialize(&mut self, blueprint: &SkeletonBlueprint) -> Result<(), Self::Error> {
        self.build_wireframe(blueprint)?;
        for instance in &blueprint.instances {
            self.place_instance(instance)?;
        }
        Ok(())
    }
}

/// Conventional parameters for host-side thickening of the wireframe.
///
/// Hosts that inflate the skeleton into a solid typically weld coincident
/// vertices, subdivide, and apply a per-vertex skin radius. The core never
/// runs these passes itself.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ThickeningHint {
    /// Distance below which the host may weld vertices into one.
    pub weld_tolerance: f32,
    /// Subdivision-surface levels to apply after skinning.
    pub subdivision_levels: u32,
    /// Radius of the skin around each vertex.
    pub skin_radius: f32,
}

impl Default for ThickeningHint {
    fn default() -> Self {
        Self {
            weld_tolerance: 1e-4,
            subdivision_levels: 3,
            skin_radius: 0.02,
        }
    }
}
