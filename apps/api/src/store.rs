use std::sync::{RwLock, RwLockReadGuard};

use crate::models::catalog::{Compound, Crop, EnvironmentData};

#[derive(Debug, Default)]
struct Records {
    crops: Vec<Crop>,
    compounds: Vec<Compound>,
    environment: Vec<EnvironmentData>,
}

/// In-memory record store for crops, compounds, and environment data.
///
/// Seeded once at startup with the reference dataset and read-only
/// afterwards; the only write path is `replace_all`, which deletes and
/// recreates the full record set.
pub struct Catalog {
    records: RwLock<Records>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreCounts {
    pub crops: usize,
    pub compounds: usize,
    pub environment: usize,
}

impl Catalog {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Records::default()),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Records> {
        self.records.read().expect("catalog lock poisoned")
    }

    /// Full delete-then-recreate of the record set. Compounds whose crop
    /// reference does not resolve are dropped, so every surviving compound
    /// points at exactly one existing crop.
    pub fn replace_all(
        &self,
        crops: Vec<Crop>,
        compounds: Vec<Compound>,
        environment: Vec<EnvironmentData>,
    ) {
        let compounds = compounds
            .into_iter()
            .filter(|c| crops.iter().any(|k| k.id == c.crop_id))
            .collect();
        let mut records = self.records.write().expect("catalog lock poisoned");
        *records = Records {
            crops,
            compounds,
            environment,
        };
    }

    pub fn crops(&self) -> Vec<Crop> {
        self.read().crops.clone()
    }

    pub fn compounds(&self) -> Vec<Compound> {
        self.read().compounds.clone()
    }

    pub fn environment(&self) -> Vec<EnvironmentData> {
        self.read().environment.clone()
    }

    pub fn counts(&self) -> StoreCounts {
        let records = self.read();
        StoreCounts {
            crops: records.crops.len(),
            compounds: records.compounds.len(),
            environment: records.environment.len(),
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}
