use alloc::string::String;

use displaydoc::Display;

/// Errors surfaced by network validation and the solver.
///
/// Validation errors are raised before any solving begins; the solve loop
/// itself has no partial-failure or rollback semantics.
#[derive(Clone, Debug, Display, PartialEq, Eq)]
pub enum Error {
    /// network must have at least 2 vertices, got {0}
    TooFewVertices(usize),
    /// edge {edge} references vertex {vertex}, outside of 0..{vertices}
    VertexOutOfRange {
        edge: usize,
        vertex: usize,
        vertices: usize,
    },
    /// negative capacity {capacity} on edge {from} -> {to}
    NegativeCapacity {
        from: usize,
        to: usize,
        capacity: String,
    },
    /// terminal vertex {0} is outside of 0..{1}
    TerminalOutOfRange(usize, usize),
    /// source and sink must be distinct, both are {0}
    IdenticalTerminals(usize),
    /// cumulative flow overflowed the flow type
    ArithmeticOverflow,
    /// iteration limit {limit} exceeded, partial flow {partial_flow}
    IterationLimit { limit: u64, partial_flow: String },
}
