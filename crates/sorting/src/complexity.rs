//! Static complexity metadata shown alongside each algorithm.

use serde::Serialize;

use crate::sort::Algorithm;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Complexity {
    pub best: &'static str,
    pub average: &'static str,
    pub worst: &'static str,
    pub space: &'static str,
}

impl Complexity {
    pub const fn of(algorithm: Algorithm) -> Self {
        match algorithm {
            Algorithm::Bubble | Algorithm::Insertion => Self {
                best: "O(n)",
                average: "O(n²)",
                worst: "O(n²)",
                space: "O(1)",
            },
            Algorithm::Selection => Self {
                best: "O(n²)",
                average: "O(n²)",
                worst: "O(n²)",
                space: "O(1)",
            },
            Algorithm::Merge => Self {
                best: "O(n log n)",
                average: "O(n log n)",
                worst: "O(n log n)",
                space: "O(n)",
            },
            Algorithm::Quick => Self {
                best: "O(n log n)",
                average: "O(n log n)",
                worst: "O(n²)",
                space: "O(log n)",
            },
        }
    }
}
