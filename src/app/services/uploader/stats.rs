//! Statistics for upload operations

/// Counts of what was sent to a sink
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UploadStats {
    /// Quantities created
    pub quantities: usize,

    /// Layer records created
    pub layers: usize,

    /// Points appended
    pub points: usize,

    /// `append_points` calls made
    pub batches: usize,
}

impl UploadStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the counts of another upload
    pub fn merge(&mut self, other: &UploadStats) {
        self.quantities += other.quantities;
        self.layers += other.layers;
        self.points += other.points;
        self.batches += other.batches;
    }

    /// Average points per batch
    pub fn average_batch_size(&self) -> f64 {
        if self.batches == 0 {
            0.0
        } else {
            self.points as f64 / self.batches as f64
        }
    }
}
