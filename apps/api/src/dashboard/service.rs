use serde::{Deserialize, Serialize};

use crate::models::catalog::{Crop, EnvironmentData};
use crate::store::Catalog;

/// Comparison defaults when the caller names no crops.
pub const DEFAULT_CROP_A: &str = "인삼";
pub const DEFAULT_CROP_B: &str = "황기";

/// Compound projection shown on the comparison dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompoundBrief {
    pub name: String,
    pub score: i32,
    pub compound_class: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub crop_a: Option<Crop>,
    pub crop_b: Option<Crop>,
    pub compounds_a: Vec<CompoundBrief>,
    pub compounds_b: Vec<CompoundBrief>,
    pub env_data: Option<EnvironmentData>,
    pub crops: Vec<String>,
}

/// Builds the comparison payload for two crop names.
///
/// Lookups fail silently: an unknown name yields an absent crop and an empty
/// compound list, never an error. Environment resolution matches crop A's
/// origin as a substring of a region name; with no match it still returns
/// the first stored record rather than nothing.
///
/// TODO: confirm the fallback-to-first behavior with the data team — it can
/// surface an unrelated region's indicators for an unmatched origin.
pub fn compare(catalog: &Catalog, crop_a_name: &str, crop_b_name: &str) -> DashboardView {
    let crops = catalog.crops();
    let compounds = catalog.compounds();
    let environment = catalog.environment();

    let crop_a = crops.iter().find(|c| c.name_ko == crop_a_name).cloned();
    let crop_b = crops.iter().find(|c| c.name_ko == crop_b_name).cloned();

    let briefs = |crop: &Option<Crop>| -> Vec<CompoundBrief> {
        match crop {
            Some(c) => compounds
                .iter()
                .filter(|m| m.crop_id == c.id)
                .map(|m| CompoundBrief {
                    name: m.name.clone(),
                    score: m.score,
                    compound_class: m.compound_class.clone(),
                })
                .collect(),
            None => Vec::new(),
        }
    };
    let compounds_a = briefs(&crop_a);
    let compounds_b = briefs(&crop_b);

    let env_data = crop_a
        .as_ref()
        .and_then(|c| {
            environment
                .iter()
                .find(|e| e.region.contains(&c.origin))
                .cloned()
        })
        .or_else(|| environment.first().cloned());

    let mut crop_names: Vec<String> = crops.iter().map(|c| c.name_ko.clone()).collect();
    crop_names.sort();
    crop_names.dedup();

    DashboardView {
        crop_a,
        crop_b,
        compounds_a,
        compounds_b,
        env_data,
        crops: crop_names,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::seed::seed_reference_data;
    use crate::models::catalog::SoilGrade;

    fn seeded() -> Catalog {
        let catalog = Catalog::new();
        seed_reference_data(&catalog);
        catalog
    }

    #[test]
    fn test_default_comparison_resolves_both_sides() {
        let view = compare(&seeded(), DEFAULT_CROP_A, DEFAULT_CROP_B);
        assert_eq!(view.crop_a.as_ref().unwrap().name_ko, "인삼");
        assert_eq!(view.crop_b.as_ref().unwrap().name_ko, "황기");
        assert_eq!(view.compounds_a.len(), 4); // first 인삼 record (금산)
        assert_eq!(view.compounds_b.len(), 2);
    }

    #[test]
    fn test_unknown_names_yield_absent_crops_and_empty_lists() {
        let view = compare(&seeded(), "없는작물", "가짜작물");
        assert!(view.crop_a.is_none());
        assert!(view.crop_b.is_none());
        assert!(view.compounds_a.is_empty());
        assert!(view.compounds_b.is_empty());
        // Fallback still hands back an environment record
        assert!(view.env_data.is_some());
    }

    #[test]
    fn test_environment_resolved_by_origin_substring() {
        // 인삼's first record has origin 금산, contained in "충남 금산군"
        let view = compare(&seeded(), "인삼", "황기");
        assert_eq!(view.env_data.unwrap().region, "충남 금산군");
    }

    #[test]
    fn test_environment_falls_back_to_first_record_on_no_match() {
        let catalog = seeded();
        // 풍기 is nobody's region substring, so the first stored record wins
        let mut crops = catalog.crops();
        crops.retain(|c| c.origin == "풍기");
        let compounds = catalog.compounds();
        let environment = catalog.environment();
        catalog.replace_all(crops, compounds, environment);

        let view = compare(&catalog, "인삼", "황기");
        assert_eq!(view.crop_a.as_ref().unwrap().origin, "풍기");
        assert_eq!(view.env_data.unwrap().region, "강원도 평창군");
    }

    #[test]
    fn test_empty_environment_store_yields_none() {
        let catalog = seeded();
        catalog.replace_all(catalog.crops(), catalog.compounds(), Vec::new());
        let view = compare(&catalog, "인삼", "황기");
        assert!(view.env_data.is_none());
    }

    #[test]
    fn test_crop_name_list_is_distinct() {
        let view = compare(&seeded(), "인삼", "황기");
        assert_eq!(view.crops.len(), 7);
        assert!(view.crops.contains(&"인삼".to_string()));
    }

    #[test]
    fn test_environment_data_shape_survives_round_trip() {
        let env = EnvironmentData {
            id: 1,
            region: "충남 금산군".to_string(),
            avg_temperature: 12.8,
            avg_rainfall: 1150.0,
            soil_grade: SoilGrade::A,
        };
        let value = serde_json::to_value(&env).unwrap();
        assert_eq!(value["soil_grade"], "A");
        assert_eq!(value["region"], "충남 금산군");
    }
}
