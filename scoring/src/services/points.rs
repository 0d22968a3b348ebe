use serde::{Deserialize, Serialize};

/// Standard per-place points: 100 for first, dropping 4 per place down to 4
/// at place 25. Places beyond the table score 0.
pub const STANDARD_POINTS: [u32; 25] = [
    100, 96, 92, 88, 84, 80, 76, 72, 68, 64, 60, 56, 52, 48, 44, 40, 36, 32, 28, 24, 20, 16, 12,
    8, 4,
];

/// Points awarded per finishing place.
///
/// The snapshot may carry a custom table; the standard one applies otherwise.
/// Tied athletes all receive the points of their shared place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PointsTable {
    values: Vec<u32>,
}

impl PointsTable {
    pub fn new(values: Vec<u32>) -> Self {
        Self { values }
    }

    pub fn standard() -> Self {
        Self {
            values: STANDARD_POINTS.to_vec(),
        }
    }

    /// Points for a 1-based place. Place 0 and places past the end of the
    /// table score 0.
    pub fn points_for(&self, place: u32) -> u32 {
        match place.checked_sub(1) {
            Some(idx) => self.values.get(idx as usize).copied().unwrap_or(0),
            None => 0,
        }
    }

    pub fn places(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn is_descending(&self) -> bool {
        self.values.windows(2).all(|pair| pair[0] >= pair[1])
    }
}

impl Default for PointsTable {
    fn default() -> Self {
        Self::standard()
    }
}
