use alloc::vec::Vec;
use core::fmt::Debug;

use crate::network::{FlowNetwork, VertexId};
use crate::path::PathRecord;

pub mod bfs;
pub mod edmonds_karp;

/// Outcome of a completed solve.
#[derive(Clone, Debug)]
pub struct Solution<F> {
    /// The maximum flow pushed from source to sink.
    pub max_flow: F,
    /// Number of augmenting iterations performed.
    pub iterations: u64,
    /// Per-iteration diagnostics, in augmentation order; empty when
    /// retention was suppressed for a large network.
    pub paths: Vec<PathRecord<F>>,
}

/// A maximum-flow solver over a [`FlowNetwork`].
///
/// The network is exclusively borrowed for the duration of the solve; on
/// success its edges carry the final flow assignment.
pub trait MaxFlow {
    type Flow: crate::flow::Flow;
    type Error: Debug;

    fn max_flow(
        &mut self,
        network: &mut FlowNetwork<Self::Flow>,
        source: VertexId,
        sink: VertexId,
    ) -> Result<Solution<Self::Flow>, Self::Error>;
}
