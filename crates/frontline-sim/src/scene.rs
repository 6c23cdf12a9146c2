//! Scene graph boundary.
//!
//! The engine never renders anything itself. It allocates [`NodeId`]s,
//! tells a [`RenderSink`] what each node is and where it sits, and asks it
//! to draw once per frame. [`SceneGraph`] tracks which nodes are live so
//! every entity's visual can be checked against the sink's view.

use std::collections::HashSet;

use glam::Vec3;

use frontline_core::enums::VisualKind;
use frontline_core::types::{Camera, NodeId};

/// The 3D scene owned by the host.
pub trait RenderSink: Send {
    fn add_node(&mut self, node: NodeId, kind: VisualKind, position: Vec3);
    fn remove_node(&mut self, node: NodeId);
    fn set_transform(&mut self, node: NodeId, position: Vec3, yaw: f32);
    /// `opacity` is in `[0, 1]`.
    fn set_opacity(&mut self, node: NodeId, opacity: f32);
    /// Drop every node.
    fn clear(&mut self);
    fn render(&mut self, camera: &Camera);
}

/// Renderer that draws nothing.
#[derive(Debug, Default)]
pub struct NullRenderer;

impl RenderSink for NullRenderer {
    fn add_node(&mut self, _node: NodeId, _kind: VisualKind, _position: Vec3) {}
    fn remove_node(&mut self, _node: NodeId) {}
    fn set_transform(&mut self, _node: NodeId, _position: Vec3, _yaw: f32) {}
    fn set_opacity(&mut self, _node: NodeId, _opacity: f32) {}
    fn clear(&mut self) {}
    fn render(&mut self, _camera: &Camera) {}
}

/// Engine-side view of the scene: node allocation and liveness.
pub struct SceneGraph {
    sink: Box<dyn RenderSink>,
    next_node: u32,
    live: HashSet<NodeId>,
}

impl SceneGraph {
    pub fn new(sink: Box<dyn RenderSink>) -> Self {
        Self {
            sink,
            next_node: 1,
            live: HashSet::new(),
        }
    }

    /// Create a node and add it to the scene.
    pub fn attach(&mut self, kind: VisualKind, position: Vec3) -> NodeId {
        let node = NodeId(self.next_node);
        self.next_node += 1;
        self.live.insert(node);
        self.sink.add_node(node, kind, position);
        node
    }

    /// Remove a node from the scene. Unknown nodes are ignored.
    pub fn detach(&mut self, node: NodeId) {
        if self.live.remove(&node) {
            self.sink.remove_node(node);
        }
    }

    pub fn set_transform(&mut self, node: NodeId, position: Vec3, yaw: f32) {
        if self.live.contains(&node) {
            self.sink.set_transform(node, position, yaw);
        }
    }

    pub fn set_opacity(&mut self, node: NodeId, opacity: f32) {
        if self.live.contains(&node) {
            self.sink.set_opacity(node, opacity.clamp(0.0, 1.0));
        }
    }

    /// Remove every node. Node ids are not reused afterwards.
    pub fn clear(&mut self) {
        self.live.clear();
        self.sink.clear();
    }

    pub fn render(&mut self, camera: &Camera) {
        self.sink.render(camera);
    }

    pub fn is_live(&self, node: NodeId) -> bool {
        self.live.contains(&node)
    }

    pub fn live_count(&self) -> usize {
        self.live.len()
    }
}
