use alloc::format;
use alloc::vec::Vec;
use core::marker::PhantomData;

use crate::algo::bfs::shortest_augmenting_path;
use crate::algo::{MaxFlow, Solution};
use crate::error::Error;
use crate::flow::Flow;
use crate::network::{FlowNetwork, VertexId};
use crate::path::PathRecord;
use crate::residual::Direction;

/// Engine policy, as one explicit options struct rather than per-constructor
/// logging flags.
#[derive(Clone, Copy, Debug)]
pub struct SolveOptions {
    /// Retain the full [`PathRecord`] history only for networks with fewer
    /// vertices than this; larger solves keep memory bounded.
    pub path_history_limit: usize,
    /// On large networks, emit a debug progress marker every this many
    /// iterations instead of retaining paths.
    pub progress_interval: u64,
    /// External safety valve: abort with [`Error::IterationLimit`] after
    /// this many augmenting iterations. The algorithm always terminates on
    /// its own, so `None` is the normal setting.
    pub max_iterations: Option<u64>,
}

impl Default for SolveOptions {
    fn default() -> Self {
        Self {
            path_history_limit: 1000,
            progress_interval: 1000,
            max_iterations: None,
        }
    }
}

/// Maximum flow via BFS-selected augmenting paths (the Edmonds-Karp
/// refinement of Ford-Fulkerson), O(V·E²).
#[derive(Clone, Debug)]
pub struct EdmondsKarp<F> {
    options: SolveOptions,
    _phantom: PhantomData<F>,
}

impl<F> EdmondsKarp<F> {
    pub fn new(options: SolveOptions) -> Self {
        Self {
            options,
            _phantom: PhantomData,
        }
    }
}

impl<F> Default for EdmondsKarp<F> {
    fn default() -> Self {
        Self::new(SolveOptions::default())
    }
}

impl<F> EdmondsKarp<F>
where
    F: Flow,
{
    /// Runs the solve loop: rebuild the residual graph, search a shortest
    /// augmenting path, push its bottleneck through the origin edges, repeat
    /// until no path remains. The final residual graph then has no
    /// augmenting path, so re-solving a solved network adds zero flow.
    ///
    /// The network and terminals are validated up front; no error can occur
    /// mid-algorithm other than the configured iteration limit and overflow
    /// of the cumulative flow.
    pub fn solve(
        &self,
        network: &mut FlowNetwork<F>,
        source: VertexId,
        sink: VertexId,
    ) -> Result<Solution<F>, Error> {
        network.validate()?;
        for terminal in [source, sink] {
            if terminal >= network.num_vertices() {
                return Err(Error::TerminalOutOfRange(terminal, network.num_vertices()));
            }
        }
        if source == sink {
            return Err(Error::IdenticalTerminals(source));
        }

        let retain_history = network.num_vertices() < self.options.path_history_limit;
        let mut total = F::zero();
        let mut iterations = 0u64;
        let mut paths = Vec::new();

        loop {
            let residual = network.residual_graph();
            let path = match shortest_augmenting_path(&residual, source, sink) {
                Some(path) => path,
                None => break,
            };

            if let Some(limit) = self.options.max_iterations {
                if iterations >= limit {
                    return Err(Error::IterationLimit {
                        limit,
                        partial_flow: format!("{total}"),
                    });
                }
            }

            let bottleneck = path.bottleneck();
            total = total
                .checked_add(&bottleneck)
                .ok_or(Error::ArithmeticOverflow)?;
            iterations += 1;

            log::trace!("path {iterations}: {path} (bottleneck = {bottleneck})");

            // forward residual edges add flow on their origin edge, backward
            // ones cancel flow on it
            for edge in path.edges() {
                match edge.direction() {
                    Direction::Forward => network.edge_mut(edge.origin()).add_flow(bottleneck),
                    Direction::Backward => network.edge_mut(edge.origin()).sub_flow(bottleneck),
                }
            }

            if retain_history {
                paths.push(PathRecord::new(path, bottleneck, total));
            } else if iterations % self.options.progress_interval == 0 {
                log::debug!("completed {iterations} iterations, flow so far = {total}");
            }
        }

        log::info!("----------------------------------");
        log::info!("augmenting paths = {iterations}");
        log::info!("    maximum flow = {total}");

        Ok(Solution {
            max_flow: total,
            iterations,
            paths,
        })
    }
}

impl<F> MaxFlow for EdmondsKarp<F>
where
    F: Flow,
{
    type Flow = F;
    type Error = Error;

    fn max_flow(
        &mut self,
        network: &mut FlowNetwork<F>,
        source: VertexId,
        sink: VertexId,
    ) -> Result<Solution<F>, Error> {
        self.solve(network, source, sink)
    }
}
