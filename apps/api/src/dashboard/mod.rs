//! Dashboard Comparison Service — side-by-side crop comparison with an
//! associated environment record.

pub mod handlers;
pub mod service;
