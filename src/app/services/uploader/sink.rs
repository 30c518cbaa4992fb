//! Sink trait and upload driver

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::progress::UploadProgress;
use super::stats::UploadStats;
use crate::app::models::{AggregationLevel, DataPoint, Quantity, Series, TemporalResolution, Unit};
use crate::constants::{MAX_BATCH_SIZE, MIN_BATCH_SIZE};
use crate::{Error, Result};

/// Quantity-level record sent before any layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuantityRecord {
    /// Key the layers of this quantity are filed under
    pub id: String,
    pub name: String,
    pub description: String,
    pub level: AggregationLevel,
    pub resolution: TemporalResolution,
}

impl From<&Quantity> for QuantityRecord {
    fn from(quantity: &Quantity) -> Self {
        Self {
            id: quantity.identifier().to_string(),
            name: quantity.name.clone(),
            description: quantity.description.clone(),
            level: quantity.level,
            resolution: quantity.resolution,
        }
    }
}

/// Layer record sent before the points of one series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerRecord {
    pub name: String,
    pub unit: Unit,

    /// Number of points that will follow
    pub points: usize,
}

impl From<&Series> for LayerRecord {
    fn from(series: &Series) -> Self {
        Self {
            name: series.name.clone(),
            unit: series.unit.clone(),
            points: series.len(),
        }
    }
}

/// Destination for parsed quantities
///
/// Calls arrive in order: `create_quantity` once, then per layer
/// `create_layer` followed by zero or more `append_points`. Layer calls
/// name the quantity by its record `id`.
#[allow(async_fn_in_trait)]
pub trait QuantitySink {
    async fn create_quantity(&mut self, quantity: &QuantityRecord) -> Result<()>;

    async fn create_layer(&mut self, quantity: &str, layer: &LayerRecord) -> Result<()>;

    async fn append_points(&mut self, quantity: &str, layer: &str, batch: &[DataPoint])
    -> Result<()>;
}

/// Upload a quantity in batches of at most `batch_size` points
pub async fn upload_quantity<S: QuantitySink>(
    sink: &mut S,
    quantity: &Quantity,
    batch_size: usize,
) -> Result<UploadStats> {
    upload_quantity_with_progress(sink, quantity, batch_size, &UploadProgress::hidden()).await
}

/// Upload a quantity, reporting appended points to `progress`
pub async fn upload_quantity_with_progress<S: QuantitySink>(
    sink: &mut S,
    quantity: &Quantity,
    batch_size: usize,
    progress: &UploadProgress,
) -> Result<UploadStats> {
    if !(MIN_BATCH_SIZE..=MAX_BATCH_SIZE).contains(&batch_size) {
        return Err(Error::configuration(format!(
            "Batch size {} must be between {} and {}",
            batch_size, MIN_BATCH_SIZE, MAX_BATCH_SIZE
        )));
    }

    info!(
        "Uploading {} ({} series, {} points)",
        quantity.name,
        quantity.series_count(),
        quantity.point_count()
    );

    let record = QuantityRecord::from(quantity);
    let mut stats = UploadStats::new();
    sink.create_quantity(&record).await?;
    stats.quantities += 1;

    for series in quantity.all_series() {
        sink.create_layer(&record.id, &LayerRecord::from(series))
            .await?;
        stats.layers += 1;
        progress.set_message(format!("{}: {}", quantity.name, series.name));

        for batch in series.batches(batch_size) {
            sink.append_points(&record.id, &series.name, batch)
                .await?;
            stats.batches += 1;
            stats.points += batch.len();
            progress.increment(batch.len());
        }

        debug!(
            "Uploaded layer {} of {} ({} points)",
            series.name,
            quantity.name,
            series.len()
        );
    }

    Ok(stats)
}
