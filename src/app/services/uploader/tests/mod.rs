//! Unit tests for the uploader module
//!
//! Provides an in-memory sink recording every call and helpers for
//! building quantities of known shape.


use chrono::{Days, TimeZone, Utc};

use super::sink::{LayerRecord, QuantityRecord, QuantitySink};
use crate::app::models::{AggregationLevel, DataPoint, Quantity, Series, TemporalResolution, Unit};
use crate::{Error, Result};

/// One recorded sink call
#[derive(Debug, Clone, PartialEq)]
pub enum SinkCall {
    Quantity(String),
    Layer(String, String),
    Points(String, String, Vec<f64>),
}

/// Sink keeping every call in memory
#[derive(Debug, Default)]
pub struct MemorySink {
    pub calls: Vec<SinkCall>,

    /// Fail the append call with this index
    pub fail_on_batch: Option<usize>,
    batches_seen: usize,
}

impl QuantitySink for MemorySink {
    async fn create_quantity(&mut self, quantity: &QuantityRecord) -> Result<()> {
        self.calls.push(SinkCall::Quantity(quantity.name.clone()));
        Ok(())
    }

    async fn create_layer(&mut self, quantity: &str, layer: &LayerRecord) -> Result<()> {
        self.calls
            .push(SinkCall::Layer(quantity.to_string(), layer.name.clone()));
        Ok(())
    }

    async fn append_points(
        &mut self,
        quantity: &str,
        layer: &str,
        batch: &[DataPoint],
    ) -> Result<()> {
        if self.fail_on_batch == Some(self.batches_seen) {
            return Err(Error::processing_interrupted("sink unavailable"));
        }
        self.batches_seen += 1;
        self.calls.push(SinkCall::Points(
            quantity.to_string(),
            layer.to_string(),
            batch.iter().map(|p| p.value).collect(),
        ));
        Ok(())
    }
}

/// Series of `count` daily points with values 0, 1, 2, ...
pub fn create_series(name: &str, count: usize) -> Series {
    let start = Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap();
    let mut series = Series::new(name, Unit::new("kgC/m2"));
    for i in 0..count {
        series.push(DataPoint::new(
            151.25,
            -33.75,
            start + Days::new(i as u64),
            i as f64,
        ));
    }
    series
}

/// Quantity holding one series per (name, point count)
pub fn create_quantity(layers: &[(&str, usize)]) -> Quantity {
    let mut quantity = Quantity::new(
        "Carbon mass",
        "Vegetation carbon",
        AggregationLevel::Gridcell,
        TemporalResolution::Daily,
    );
    for (name, count) in layers {
        quantity.add_series(create_series(name, *count));
    }
    quantity
}
