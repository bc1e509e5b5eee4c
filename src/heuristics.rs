use crate::grid::Position;

/// Distance estimators for the informed strategies. Both are admissible on a
/// uniform 4-connected grid; Manhattan is exact when no walls intervene and
/// is the recommended default for A*. Euclidean never overestimates either,
/// but is less informative and expands more nodes in practice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heuristic {
    Manhattan,
    Euclidean,
}

impl Heuristic {
    pub fn from_name(name: &str) -> Option<Heuristic> {
        match name {
            "manhattan" => Some(Heuristic::Manhattan),
            "euclidean" => Some(Heuristic::Euclidean),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Heuristic::Manhattan => "manhattan",
            Heuristic::Euclidean => "euclidean",
        }
    }

    /// Estimated remaining cost from `a` to `b`. Stateless and symmetric.
    pub fn estimate(&self, a: Position, b: Position) -> f64 {
        let dr = (a.row as f64 - b.row as f64).abs();
        let dc = (a.col as f64 - b.col as f64).abs();
        match self {
            Heuristic::Manhattan => dr + dc,
            Heuristic::Euclidean => (dr * dr + dc * dc).sqrt(),
        }
    }
}
