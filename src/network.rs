use alloc::collections::VecDeque;
use alloc::format;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::edge::Edge;
use crate::error::Error;
use crate::flow::Flow;
use crate::residual::ResidualGraph;

/// Index of a vertex, in `0..num_vertices`.
pub type VertexId = usize;

/// Stable index of an edge in the network's edge arena.
pub type EdgeId = usize;

/// A directed capacitated network with a fixed vertex count.
///
/// Edges live in an arena addressed by stable [`EdgeId`]; per-vertex
/// adjacency lists hold edge ids in insertion order. The arena is mutated in
/// place by flow updates during a solve, which holds the network exclusively,
/// and is read-only afterwards for reporting.
#[derive(Clone, Debug, Default)]
pub struct FlowNetwork<F> {
    num_vertices: usize,
    edges: Vec<Edge<F>>,
    adjacency: Vec<Vec<EdgeId>>,
}

impl<F> FlowNetwork<F>
where
    F: Flow,
{
    pub fn new(num_vertices: usize) -> Self {
        Self {
            num_vertices,
            edges: Vec::new(),
            adjacency: vec![Vec::new(); num_vertices],
        }
    }

    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.num_vertices
    }

    #[inline]
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Appends a directed edge and returns its id. O(1) amortized.
    ///
    /// Endpoints and capacity are not checked here; [`validate`] performs
    /// the full pass once the network is assembled. An out-of-range source
    /// vertex is tolerated in the arena and caught by that pass.
    ///
    /// [`validate`]: FlowNetwork::validate
    pub fn add_edge(&mut self, from: VertexId, to: VertexId, capacity: F) -> EdgeId {
        let id = self.edges.len();
        self.edges.push(Edge::new(from, to, capacity));
        if from < self.num_vertices {
            self.adjacency[from].push(id);
        }
        id
    }

    pub fn edge(&self, id: EdgeId) -> Option<&Edge<F>> {
        self.edges.get(id)
    }

    pub(crate) fn edge_mut(&mut self, id: EdgeId) -> &mut Edge<F> {
        &mut self.edges[id]
    }

    /// All edges in insertion order.
    pub fn edges(&self) -> &[Edge<F>] {
        &self.edges
    }

    /// Edges leaving `vertex` with their ids, in insertion order.
    pub fn adjacency(&self, vertex: VertexId) -> impl Iterator<Item = (EdgeId, &Edge<F>)> + '_ {
        self.adjacency[vertex]
            .iter()
            .map(move |&id| (id, &self.edges[id]))
    }

    /// The one-time validation pass: at least two vertices, endpoints in
    /// range, no negative capacity.
    pub fn validate(&self) -> Result<(), Error> {
        if self.num_vertices < 2 {
            return Err(Error::TooFewVertices(self.num_vertices));
        }
        for (id, edge) in self.edges.iter().enumerate() {
            for vertex in [edge.from(), edge.to()] {
                if vertex >= self.num_vertices {
                    return Err(Error::VertexOutOfRange {
                        edge: id,
                        vertex,
                        vertices: self.num_vertices,
                    });
                }
            }
            if edge.capacity() < F::zero() {
                return Err(Error::NegativeCapacity {
                    from: edge.from(),
                    to: edge.to(),
                    capacity: format!("{}", edge.capacity()),
                });
            }
        }
        Ok(())
    }

    /// Builds the residual graph for the current flow state. Pure: does not
    /// mutate `self`.
    ///
    /// Every base edge contributes a forward residual edge wherever its
    /// residual capacity is positive and a backward residual edge wherever
    /// its flow is positive; the two capacities sum back to the base
    /// capacity, so the base state is reconstructable from the residual one.
    pub fn residual_graph(&self) -> ResidualGraph<F> {
        let mut residual = ResidualGraph::new(self.num_vertices);
        for (id, edge) in self.edges.iter().enumerate() {
            if edge.residual_capacity() > F::zero() {
                residual.add_forward(id, edge.from(), edge.to(), edge.residual_capacity());
            }
            if edge.flow() > F::zero() {
                residual.add_backward(id, edge.to(), edge.from(), edge.flow());
            }
        }
        residual
    }

    /// Net flow leaving `vertex`: outflow minus inflow. Zero at every
    /// interior vertex under flow conservation; at the source it equals the
    /// total pushed flow.
    pub fn net_flow(&self, vertex: VertexId) -> F {
        self.edges.iter().fold(F::zero(), |mut acc, edge| {
            if edge.from() == vertex {
                acc += edge.flow();
            }
            if edge.to() == vertex {
                acc -= edge.flow();
            }
            acc
        })
    }

    /// Vertices on the source side of a cut: everything reachable from
    /// `source` in the current residual graph. Once no augmenting path
    /// remains this is the minimum cut, whose crossing capacity equals the
    /// maximum flow.
    pub fn min_cut(&self, source: VertexId) -> Vec<VertexId> {
        let residual = self.residual_graph();
        let mut visited = vec![false; self.num_vertices];
        let mut cut = Vec::new();
        let mut queue = VecDeque::from([source]);
        visited[source] = true;

        while let Some(u) = queue.pop_front() {
            cut.push(u);
            for edge in residual.adjacency(u) {
                if !visited[edge.to()] {
                    visited[edge.to()] = true;
                    queue.push_back(edge.to());
                }
            }
        }

        cut
    }
}

impl<F> fmt::Display for FlowNetwork<F>
where
    F: Flow,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Flow network with {} vertices:", self.num_vertices)?;
        for vertex in 0..self.num_vertices {
            if self.adjacency[vertex].is_empty() {
                continue;
            }
            writeln!(f, "Vertex {vertex}:")?;
            for &id in &self.adjacency[vertex] {
                writeln!(f, "  {}", self.edges[id])?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use super::FlowNetwork;
    use crate::error::Error;
    use crate::residual::Direction;

    #[test]
    fn validate_rejects_too_few_vertices() {
        let network = FlowNetwork::<i64>::new(1);
        assert_eq!(network.validate(), Err(Error::TooFewVertices(1)));
    }

    #[test]
    fn validate_rejects_out_of_range_endpoint() {
        let mut network = FlowNetwork::new(3);
        network.add_edge(0, 1, 4i64);
        network.add_edge(1, 7, 2);
        assert_eq!(
            network.validate(),
            Err(Error::VertexOutOfRange {
                edge: 1,
                vertex: 7,
                vertices: 3
            })
        );
    }

    #[test]
    fn validate_rejects_negative_capacity() {
        let mut network = FlowNetwork::new(2);
        network.add_edge(0, 1, -1i64);
        assert!(matches!(
            network.validate(),
            Err(Error::NegativeCapacity { from: 0, to: 1, .. })
        ));
    }

    #[test]
    fn adjacency_preserves_insertion_order() {
        let mut network = FlowNetwork::new(4);
        let a = network.add_edge(0, 3, 1i64);
        let b = network.add_edge(0, 1, 1);
        let c = network.add_edge(0, 2, 1);
        let ids: Vec<_> = network.adjacency(0).map(|(id, _)| id).collect();
        assert_eq!(ids, vec![a, b, c]);
    }

    #[test]
    fn residual_graph_splits_forward_and_backward() {
        let mut network = FlowNetwork::new(2);
        let id = network.add_edge(0, 1, 5i64);
        network.edge_mut(id).add_flow(3);

        let residual = network.residual_graph();
        let forward: Vec<_> = residual.adjacency(0).collect();
        let backward: Vec<_> = residual.adjacency(1).collect();

        assert_eq!(forward.len(), 1);
        assert_eq!(forward[0].capacity(), 2);
        assert_eq!(forward[0].origin(), id);
        assert_eq!(forward[0].direction(), Direction::Forward);

        assert_eq!(backward.len(), 1);
        assert_eq!(backward[0].capacity(), 3);
        assert_eq!(backward[0].origin(), id);
        assert_eq!(backward[0].direction(), Direction::Backward);

        // the two residual capacities reconstruct the base edge
        assert_eq!(
            forward[0].capacity() + backward[0].capacity(),
            network.edge(id).unwrap().capacity()
        );
    }

    #[test]
    fn saturated_edge_has_no_forward_residual() {
        let mut network = FlowNetwork::new(2);
        let id = network.add_edge(0, 1, 5i64);
        network.edge_mut(id).add_flow(5);

        let residual = network.residual_graph();
        assert_eq!(residual.adjacency(0).count(), 0);
        assert_eq!(residual.adjacency(1).count(), 1);
    }

    #[test]
    fn net_flow_balances_in_and_out() {
        let mut network = FlowNetwork::new(3);
        let a = network.add_edge(0, 1, 4i64);
        let b = network.add_edge(1, 2, 4);
        network.edge_mut(a).add_flow(3);
        network.edge_mut(b).add_flow(3);

        assert_eq!(network.net_flow(0), 3);
        assert_eq!(network.net_flow(1), 0);
        assert_eq!(network.net_flow(2), -3);
    }
}
