//! Catalog Query Service — filtered compound listings joined with crop data.

pub mod handlers;
pub mod query;
pub mod seed;
