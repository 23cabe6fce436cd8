use alloc::vec::Vec;
use core::fmt;

use itertools::Itertools;

use crate::flow::Flow;
use crate::residual::ResidualEdge;

/// An ordered sequence of residual edges from source to sink, each with
/// positive residual capacity. Exists only transiently, for one iteration of
/// the solve loop.
#[derive(Clone, Debug)]
pub struct AugmentingPath<F> {
    edges: Vec<ResidualEdge<F>>,
}

impl<F> AugmentingPath<F>
where
    F: Flow,
{
    pub(crate) fn new(edges: Vec<ResidualEdge<F>>) -> Self {
        Self { edges }
    }

    pub fn edges(&self) -> &[ResidualEdge<F>] {
        &self.edges
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Minimum residual capacity along the path: the amount the next
    /// augmentation will push.
    pub fn bottleneck(&self) -> F {
        self.edges
            .iter()
            .map(ResidualEdge::capacity)
            .min()
            .unwrap_or_else(F::zero)
    }
}

impl<F> fmt::Display for AugmentingPath<F>
where
    F: Flow,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.edges
                .iter()
                .format_with(", ", |e, f| f(&format_args!("{}->{}", e.from(), e.to())))
        )
    }
}

/// Diagnostic snapshot of one augmentation: the path taken, its bottleneck,
/// and the cumulative flow after applying it. Retained for the life of a
/// solve, and only on networks small enough to afford it.
#[derive(Clone, Debug)]
pub struct PathRecord<F> {
    path: AugmentingPath<F>,
    bottleneck: F,
    total_flow: F,
}

impl<F> PathRecord<F>
where
    F: Flow,
{
    pub(crate) fn new(path: AugmentingPath<F>, bottleneck: F, total_flow: F) -> Self {
        Self {
            path,
            bottleneck,
            total_flow,
        }
    }

    pub fn path(&self) -> &AugmentingPath<F> {
        &self.path
    }

    pub fn bottleneck(&self) -> F {
        self.bottleneck
    }

    /// Running cumulative flow after this augmentation.
    pub fn total_flow(&self) -> F {
        self.total_flow
    }
}

impl<F> fmt::Display for PathRecord<F>
where
    F: Flow,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(flow = {}, bottleneck = {}): {}",
            self.total_flow, self.bottleneck, self.path
        )
    }
}

#[cfg(test)]
mod tests {
    use alloc::format;
    use alloc::vec::Vec;

    use super::AugmentingPath;
    use crate::network::FlowNetwork;

    fn chain() -> AugmentingPath<i64> {
        let mut network = FlowNetwork::new(3);
        network.add_edge(0, 1, 4i64);
        network.add_edge(1, 2, 7);
        let residual = network.residual_graph();
        let edges: Vec<_> = (0..2).flat_map(|v| residual.adjacency(v).copied()).collect();
        AugmentingPath::new(edges)
    }

    #[test]
    fn bottleneck_is_minimum_capacity() {
        assert_eq!(chain().bottleneck(), 4);
    }

    #[test]
    fn display_lists_hops_in_order() {
        assert_eq!(format!("{}", chain()), "0->1, 1->2");
    }
}
