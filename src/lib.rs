#![no_std]
#![deny(
    warnings,
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications,
    rust_2018_idioms
)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod algo;
mod edge;
mod error;
mod flow;
mod network;
mod path;
mod residual;

pub use algo::bfs::shortest_augmenting_path;
pub use algo::edmonds_karp::{EdmondsKarp, SolveOptions};
pub use algo::{MaxFlow, Solution};
pub use edge::{Edge, RawEdge};
pub use error::Error;
pub use flow::Flow;
pub use network::{EdgeId, FlowNetwork, VertexId};
pub use path::{AugmentingPath, PathRecord};
pub use residual::{Direction, ResidualEdge, ResidualGraph};
