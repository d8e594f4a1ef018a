//! Filtering and joining logic behind the research catalog.

use serde::Serialize;

use crate::models::catalog::{AnnotationLevel, Compound, Crop, DataSource, QcStatus};
use crate::store::Catalog;

/// Optional exact-match filters. Absent fields impose no constraint.
#[derive(Debug, Default, Clone)]
pub struct CatalogFilter {
    pub crop: Option<String>,
    pub part: Option<String>,
    pub origin: Option<String>,
    pub year: Option<i32>,
    pub qc: Option<QcStatus>,
}

/// A compound joined with its parent crop's attributes.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogEntry {
    pub id: u32,
    pub name: String,
    pub crop_name: String,
    pub crop_name_en: String,
    pub crop_name_scientific: String,
    pub plant_part: String,
    pub origin: String,
    pub year: i32,
    pub annotation_level: AnnotationLevel,
    pub source: DataSource,
    pub score: i32,
    pub similarity: f64,
    pub qc_status: QcStatus,
    pub compound_class: String,
    pub molecular_weight: Option<f64>,
    pub retention_time: Option<f64>,
}

/// Full catalog payload: filtered rows plus the distinct-value lists that
/// populate the filter controls, and the unfiltered total.
#[derive(Debug, Serialize)]
pub struct CatalogPage {
    pub compounds: Vec<CatalogEntry>,
    pub crops: Vec<String>,
    pub parts: Vec<String>,
    pub origins: Vec<String>,
    pub years: Vec<i32>,
    pub total_count: usize,
}

fn join_entry(compound: &Compound, crop: &Crop) -> CatalogEntry {
    CatalogEntry {
        id: compound.id,
        name: compound.name.clone(),
        crop_name: crop.name_ko.clone(),
        crop_name_en: crop.name_en.clone(),
        crop_name_scientific: crop.name_scientific.clone(),
        plant_part: crop.plant_part.clone(),
        origin: crop.origin.clone(),
        year: crop.year,
        annotation_level: compound.annotation_level,
        source: compound.source,
        score: compound.score,
        similarity: compound.similarity,
        qc_status: compound.qc_status,
        compound_class: compound.compound_class.clone(),
        molecular_weight: compound.molecular_weight,
        retention_time: compound.retention_time,
    }
}

fn push_distinct<T: PartialEq>(values: &mut Vec<T>, value: T) {
    if !values.contains(&value) {
        values.push(value);
    }
}

/// Runs the catalog query: join, filter conjunction, default ordering
/// (compounds descending by score, crops ascending by name).
pub fn query(catalog: &Catalog, filter: &CatalogFilter) -> CatalogPage {
    let crops = catalog.crops();
    let compounds = catalog.compounds();
    let total_count = compounds.len();

    let mut entries: Vec<CatalogEntry> = compounds
        .iter()
        .filter_map(|compound| {
            let crop = crops.iter().find(|c| c.id == compound.crop_id)?;
            Some(join_entry(compound, crop))
        })
        .collect();

    entries.retain(|entry| {
        filter.crop.as_deref().map_or(true, |v| entry.crop_name == v)
            && filter.part.as_deref().map_or(true, |v| entry.plant_part == v)
            && filter.origin.as_deref().map_or(true, |v| entry.origin == v)
            && filter.year.map_or(true, |v| entry.year == v)
            && filter.qc.map_or(true, |v| entry.qc_status == v)
    });

    entries.sort_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then_with(|| a.crop_name.cmp(&b.crop_name))
    });

    let mut sorted_crops = crops;
    sorted_crops.sort_by(|a, b| a.name_ko.cmp(&b.name_ko));

    let mut crop_names = Vec::new();
    let mut parts = Vec::new();
    let mut origins = Vec::new();
    let mut years = Vec::new();
    for crop in &sorted_crops {
        push_distinct(&mut crop_names, crop.name_ko.clone());
        push_distinct(&mut parts, crop.plant_part.clone());
        push_distinct(&mut origins, crop.origin.clone());
        push_distinct(&mut years, crop.year);
    }
    years.sort_unstable();

    CatalogPage {
        compounds: entries,
        crops: crop_names,
        parts,
        origins,
        years,
        total_count,
    }
}

/// Looks up one compound by id, joined with its crop. Unknown ids yield
/// `None`, not an error.
pub fn find_entry(catalog: &Catalog, id: u32) -> Option<CatalogEntry> {
    let crops = catalog.crops();
    let compound = catalog.compounds().into_iter().find(|c| c.id == id)?;
    let crop = crops.iter().find(|c| c.id == compound.crop_id)?;
    Some(join_entry(&compound, crop))
}
