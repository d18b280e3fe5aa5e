//! Pure audit-result logic: lifecycle monitoring, metric aggregation, and
//! chart series construction. No I/O happens in this module tree.

pub mod charts;
pub mod monitor;
pub mod summary;
