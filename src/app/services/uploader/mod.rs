//! Upload of parsed quantities to a storage sink
//!
//! A [`QuantitySink`] receives one quantity record, then for every series one
//! layer record followed by that series' points in consecutive batches. The
//! driver, [`upload_quantity`], never reorders points and never sends more
//! than `batch_size` points in one call.
//!
//! # Architecture
//!
//! - [`sink`] - The sink trait, its records and the upload driver
//! - [`json_sink`] - File-backed sink writing JSON documents per quantity
//! - [`progress`] - Progress reporting during upload
//! - [`stats`] - Upload statistics
//!
//! # Basic Usage
//!
//! ```rust
//! use guess_importer::app::services::uploader::{JsonDirectorySink, upload_quantity};
//! use guess_importer::Quantity;
//!
//! # async fn example(quantity: Quantity) -> guess_importer::Result<()> {
//! let mut sink = JsonDirectorySink::new("./output").await?;
//! let stats = upload_quantity(&mut sink, &quantity, 5_000).await?;
//!
//! println!("Uploaded {} points in {} batches", stats.points, stats.batches);
//! # Ok(())
//! # }
//! ```

pub mod json_sink;
pub mod progress;
pub mod sink;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for convenient access
pub use json_sink::JsonDirectorySink;
pub use progress::UploadProgress;
pub use sink::{
    LayerRecord, QuantityRecord, QuantitySink, upload_quantity, upload_quantity_with_progress,
};
pub use stats::UploadStats;
