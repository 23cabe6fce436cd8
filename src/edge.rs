use alloc::format;
use core::fmt::{self, Display};
use core::ops::{AddAssign, Sub, SubAssign};

use num_traits::Zero;
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::network::VertexId;

/// A directed edge of the base network: an immutable `(from, to, capacity)`
/// triple with a mutable flow value.
///
/// Flow mutation is crate-internal; once a solve completes, the network is
/// read-only to callers.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(
    try_from = "RawEdge<F>",
    bound(deserialize = "F: Zero + PartialOrd + Display + Deserialize<'de>")
)]
pub struct Edge<F> {
    from: VertexId,
    to: VertexId,
    capacity: F,
    flow: F,
}

impl<F> Edge<F>
where
    F: Zero,
{
    pub fn new(from: VertexId, to: VertexId, capacity: F) -> Self {
        Self {
            from,
            to,
            capacity,
            flow: F::zero(),
        }
    }
}

impl<F> Edge<F>
where
    F: Copy,
{
    pub fn from(&self) -> VertexId {
        self.from
    }

    pub fn to(&self) -> VertexId {
        self.to
    }

    pub fn capacity(&self) -> F {
        self.capacity
    }

    pub fn flow(&self) -> F {
        self.flow
    }
}

impl<F> Edge<F>
where
    F: Sub<Output = F> + Copy,
{
    /// Remaining capacity in the forward direction.
    pub fn residual_capacity(&self) -> F {
        self.capacity - self.flow
    }
}

impl<F> Edge<F>
where
    F: AddAssign + SubAssign,
{
    pub(crate) fn add_flow(&mut self, delta: F) {
        self.flow += delta;
    }

    pub(crate) fn sub_flow(&mut self, delta: F) {
        self.flow -= delta;
    }
}

impl<F> Display for Edge<F>
where
    F: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {} ({}/{})",
            self.from, self.to, self.flow, self.capacity
        )
    }
}

/// The raw wire form of an edge, before capacity validation.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct RawEdge<F> {
    pub from: VertexId,
    pub to: VertexId,
    pub capacity: F,
}

impl<F> TryFrom<RawEdge<F>> for Edge<F>
where
    F: Zero + PartialOrd + Display,
{
    type Error = Error;

    fn try_from(e: RawEdge<F>) -> Result<Self, Self::Error> {
        if e.capacity < F::zero() {
            Err(Error::NegativeCapacity {
                from: e.from,
                to: e.to,
                capacity: format!("{}", e.capacity),
            })
        } else {
            Ok(Self::new(e.from, e.to, e.capacity))
        }
    }
}

impl<F> From<Edge<F>> for RawEdge<F> {
    fn from(e: Edge<F>) -> Self {
        Self {
            from: e.from,
            to: e.to,
            capacity: e.capacity,
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::format;

    use super::{Edge, RawEdge};
    use crate::error::Error;

    #[test]
    fn try_from_rejects_negative_capacity() {
        let raw = RawEdge {
            from: 0,
            to: 1,
            capacity: -1i64,
        };
        let err = Edge::try_from(raw).unwrap_err();
        assert!(matches!(err, Error::NegativeCapacity { from: 0, to: 1, .. }));
    }

    #[test]
    fn try_from_accepts_zero_capacity() {
        let raw = RawEdge {
            from: 3,
            to: 4,
            capacity: 0i64,
        };
        let edge = Edge::try_from(raw).unwrap();
        assert_eq!(edge.capacity(), 0);
        assert_eq!(edge.flow(), 0);
    }

    #[test]
    fn display_shows_flow_over_capacity() {
        let edge = Edge::new(0, 1, 5i64);
        assert_eq!(format!("{edge}"), "0 -> 1 (0/5)");
    }
}
