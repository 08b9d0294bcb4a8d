use serde::{Deserialize, Serialize};

/// Edge direction of a boolean sample sequence.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Edge {
    Rising,
    Falling,
}

/// Get the edge between two consecutive samples, if any.
pub fn get_edge(x: bool, y: bool) -> Option<Edge> {
    match (x, y) {
        (false, true) => Some(Edge::Rising),
        (true, false) => Some(Edge::Falling),
        _ => None,
    }
}

/// Registered edge detector.
///
/// Holds the previous sample and reports the edge, if any, between it and
/// the new sample.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct EdgeDetector {
    // last input
    x: bool,
}

impl EdgeDetector {
    /// Feed a new sample and update the detector state.
    ///
    /// Returns:
    /// The edge from the previous to the new sample.
    pub fn update(&mut self, x: bool) -> Option<Edge> {
        let edge = get_edge(self.x, x);
        self.x = x;
        edge
    }

    /// Rising edge strobe.
    pub fn rising(&mut self, x: bool) -> bool {
        self.update(x) == Some(Edge::Rising)
    }

    /// Falling edge strobe.
    pub fn falling(&mut self, x: bool) -> bool {
        self.update(x) == Some(Edge::Falling)
    }
}
