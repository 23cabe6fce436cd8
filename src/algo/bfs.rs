use alloc::collections::VecDeque;
use alloc::vec;
use alloc::vec::Vec;

use crate::flow::Flow;
use crate::network::VertexId;
use crate::path::AugmentingPath;
use crate::residual::{ResidualEdge, ResidualGraph};

/// Finds a shortest (fewest-edges) augmenting path from `source` to `sink`
/// in `residual`, or `None` when the sink is unreachable.
///
/// Standard breadth-first search: each newly visited vertex records the edge
/// used to reach it, the scan stops as soon as the sink is marked, and the
/// path is rebuilt by walking the recorded edges back from the sink. Ties
/// among equal-length paths fall to adjacency order, i.e. edge insertion
/// order. The caller guarantees the terminals are in range and distinct.
pub fn shortest_augmenting_path<F>(
    residual: &ResidualGraph<F>,
    source: VertexId,
    sink: VertexId,
) -> Option<AugmentingPath<F>>
where
    F: Flow,
{
    let mut visited = vec![false; residual.num_vertices()];
    let mut predecessor: Vec<Option<ResidualEdge<F>>> = vec![None; residual.num_vertices()];
    let mut queue = VecDeque::from([source]);
    visited[source] = true;

    'bfs: while let Some(u) = queue.pop_front() {
        for edge in residual.adjacency(u) {
            if visited[edge.to()] || edge.capacity() <= F::zero() {
                continue;
            }
            visited[edge.to()] = true;
            predecessor[edge.to()] = Some(*edge);
            if edge.to() == sink {
                break 'bfs;
            }
            queue.push_back(edge.to());
        }
    }

    if !visited[sink] {
        return None;
    }

    // walk back from the sink, then restore source-to-sink order
    let mut edges = Vec::new();
    let mut v = sink;
    while v != source {
        let edge = predecessor[v]?;
        edges.push(edge);
        v = edge.from();
    }
    edges.reverse();

    Some(AugmentingPath::new(edges))
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::shortest_augmenting_path;
    use crate::network::FlowNetwork;

    fn hops(path: &crate::path::AugmentingPath<i64>) -> Vec<(usize, usize)> {
        path.edges().iter().map(|e| (e.from(), e.to())).collect()
    }

    #[test]
    fn finds_minimum_edge_count_path() {
        // 0 -> 1 -> 2 -> 4 versus the shorter 0 -> 3 -> 4
        let mut network = FlowNetwork::new(5);
        network.add_edge(0, 1, 1i64);
        network.add_edge(1, 2, 1);
        network.add_edge(2, 4, 1);
        network.add_edge(0, 3, 1);
        network.add_edge(3, 4, 1);

        let residual = network.residual_graph();
        let path = shortest_augmenting_path(&residual, 0, 4).unwrap();
        assert_eq!(hops(&path), [(0, 3), (3, 4)]);
    }

    #[test]
    fn breaks_ties_by_insertion_order() {
        // two length-2 paths; the one over the earlier-inserted edge wins
        let mut network = FlowNetwork::new(4);
        network.add_edge(0, 2, 1i64);
        network.add_edge(0, 1, 1);
        network.add_edge(1, 3, 1);
        network.add_edge(2, 3, 1);

        let residual = network.residual_graph();
        let path = shortest_augmenting_path(&residual, 0, 3).unwrap();
        assert_eq!(hops(&path), [(0, 2), (2, 3)]);
    }

    #[test]
    fn reports_no_path_when_sink_unreachable() {
        let mut network = FlowNetwork::new(4);
        network.add_edge(0, 1, 3i64);
        network.add_edge(1, 2, 2);

        let residual = network.residual_graph();
        assert!(shortest_augmenting_path(&residual, 0, 3).is_none());
    }

    #[test]
    fn ignores_saturated_edges() {
        let mut network = FlowNetwork::new(3);
        let id = network.add_edge(0, 1, 2i64);
        network.add_edge(1, 2, 2);
        network.edge_mut(id).add_flow(2);

        let residual = network.residual_graph();
        assert!(shortest_augmenting_path(&residual, 0, 2).is_none());
    }
}
