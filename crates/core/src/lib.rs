//! Month-grid calendar core for eventcal.
//!
//! This crate provides:
//! - Date boundary math with a fixed Sunday week start (`datetime`)
//! - Month grid construction and multi-day event splitting (`calendar`)
//! - The `EventStore` seam the rendering layer fetches events through (`store`)
//!
//! Everything in `calendar` and `datetime` is a pure function over value
//! types: grids and occurrences are recomputed from the source event list on
//! every query, so there is no cached state to invalidate.

pub mod calendar;
pub mod datetime;
pub mod store;
