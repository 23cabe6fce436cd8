use alloc::vec;
use alloc::vec::Vec;

use crate::network::{EdgeId, VertexId};

/// Orientation of a residual edge relative to the base edge it derives from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Same orientation as the origin edge; augmenting increases its flow.
    Forward,
    /// Reverse orientation; augmenting cancels flow on the origin edge.
    Backward,
}

/// An edge of the residual graph, tagged with its origin [`EdgeId`] so that
/// flow updates never have to rediscover the base edge by endpoint match.
/// This keeps parallel edges between the same ordered vertex pair
/// distinguishable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResidualEdge<F> {
    from: VertexId,
    to: VertexId,
    capacity: F,
    origin: EdgeId,
    direction: Direction,
}

impl<F> ResidualEdge<F>
where
    F: Copy,
{
    pub fn from(&self) -> VertexId {
        self.from
    }

    pub fn to(&self) -> VertexId {
        self.to
    }

    /// Residual capacity; positive for every edge actually present.
    pub fn capacity(&self) -> F {
        self.capacity
    }

    pub fn origin(&self) -> EdgeId {
        self.origin
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }
}

/// The residual graph of a [`FlowNetwork`](crate::FlowNetwork) at one flow
/// state. Ephemeral: rebuilt from the base network after every augmentation.
#[derive(Clone, Debug)]
pub struct ResidualGraph<F> {
    num_vertices: usize,
    adjacency: Vec<Vec<ResidualEdge<F>>>,
}

impl<F> ResidualGraph<F>
where
    F: Copy,
{
    pub(crate) fn new(num_vertices: usize) -> Self {
        Self {
            num_vertices,
            adjacency: vec![Vec::new(); num_vertices],
        }
    }

    pub(crate) fn add_forward(
        &mut self,
        origin: EdgeId,
        from: VertexId,
        to: VertexId,
        capacity: F,
    ) {
        self.adjacency[from].push(ResidualEdge {
            from,
            to,
            capacity,
            origin,
            direction: Direction::Forward,
        });
    }

    pub(crate) fn add_backward(
        &mut self,
        origin: EdgeId,
        from: VertexId,
        to: VertexId,
        capacity: F,
    ) {
        self.adjacency[from].push(ResidualEdge {
            from,
            to,
            capacity,
            origin,
            direction: Direction::Backward,
        });
    }

    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.num_vertices
    }

    /// Residual edges leaving `vertex`, ordered by origin edge insertion.
    /// This ordering fixes BFS tie-breaking among equal-length paths.
    pub fn adjacency(&self, vertex: VertexId) -> impl Iterator<Item = &ResidualEdge<F>> + '_ {
        self.adjacency[vertex].iter()
    }
}
