//! Reference dataset: the crops, compounds, and environment records the
//! service runs on. Seeding is a full delete-then-recreate and is the only
//! write the store ever sees.

use crate::models::catalog::{
    AnnotationLevel, Compound, Crop, DataSource, EnvironmentData, QcStatus, SoilGrade,
};
use crate::store::Catalog;

/// Replaces the store contents with the reference dataset.
/// Safe to call repeatedly; the record set is identical after each run.
pub fn seed_reference_data(catalog: &Catalog) {
    catalog.replace_all(reference_crops(), reference_compounds(), reference_environment());
}

fn crop(
    id: u32,
    name_ko: &str,
    name_en: &str,
    name_scientific: &str,
    plant_part: &str,
    origin: &str,
) -> Crop {
    Crop {
        id,
        name_ko: name_ko.to_string(),
        name_en: name_en.to_string(),
        name_scientific: name_scientific.to_string(),
        plant_part: plant_part.to_string(),
        origin: origin.to_string(),
        year: 2025,
    }
}

fn reference_crops() -> Vec<Crop> {
    vec![
        crop(1, "인삼", "Ginseng", "Panax ginseng", "뿌리", "금산"),
        crop(2, "인삼", "Ginseng", "Panax ginseng", "뿌리", "풍기"),
        crop(3, "당귀", "Angelica", "Angelica gigas", "뿌리", "평창"),
        crop(4, "황기", "Astragalus", "Astragalus membranaceus", "뿌리", "정선"),
        crop(5, "결명자", "Cassia", "Senna obtusifolia", "종자", "진도"),
        crop(6, "단삼", "Salvia", "Salvia miltiorrhiza", "뿌리", "영주"),
        crop(7, "상황버섯", "Phellinus", "Phellinus linteus", "자실체", "영월"),
        crop(8, "동충하초", "Cordyceps", "Cordyceps militaris", "자실체", "횡성"),
    ]
}

#[allow(clippy::too_many_arguments)]
fn compound(
    id: u32,
    crop_id: u32,
    name: &str,
    annotation_level: AnnotationLevel,
    source: DataSource,
    score: i32,
    similarity: f64,
    qc_status: QcStatus,
    compound_class: &str,
    molecular_weight: Option<f64>,
    retention_time: Option<f64>,
) -> Compound {
    Compound {
        id,
        crop_id,
        name: name.to_string(),
        annotation_level,
        source,
        score,
        similarity,
        qc_status,
        compound_class: compound_class.to_string(),
        molecular_weight,
        retention_time,
    }
}

fn reference_compounds() -> Vec<Compound> {
    use AnnotationLevel::{L1, L2, L3};
    use DataSource::{InHouse, Public};
    use QcStatus::{Pass, Review};

    vec![
        // 인삼 (금산)
        compound(1, 1, "Ginsenoside Rg1", L1, InHouse, 96, 0.94, Pass, "Saponin", Some(801.01), Some(12.3)),
        compound(2, 1, "Ginsenoside Rb1", L1, InHouse, 93, 0.92, Pass, "Saponin", Some(1109.29), Some(15.7)),
        compound(3, 1, "Ginsenoside Re", L1, Public, 88, 0.89, Pass, "Saponin", Some(947.15), Some(11.2)),
        compound(4, 1, "Ginsenoside Rc", L2, Public, 79, 0.82, Pass, "Saponin", Some(1079.27), Some(14.8)),
        // 인삼 (풍기)
        compound(5, 2, "Ginsenoside Rg1", L1, InHouse, 91, 0.90, Pass, "Saponin", Some(801.01), Some(12.5)),
        compound(6, 2, "Ginsenoside Rb1", L1, InHouse, 89, 0.88, Pass, "Saponin", Some(1109.29), Some(15.9)),
        // 당귀
        compound(7, 3, "Decursin", L1, Public, 89, 0.91, Pass, "Coumarin", Some(328.36), Some(18.4)),
        compound(8, 3, "Decursinol angelate", L1, InHouse, 85, 0.87, Pass, "Coumarin", Some(328.36), Some(17.1)),
        compound(9, 3, "Nodakenin", L2, Public, 76, 0.80, Pass, "Coumarin", Some(408.40), Some(9.6)),
        // 황기
        compound(10, 4, "Astragaloside IV", L2, InHouse, 84, 0.88, Pass, "Saponin", Some(784.97), Some(20.1)),
        compound(11, 4, "Calycosin", L1, Public, 82, 0.85, Pass, "Flavonoid", Some(284.26), Some(13.8)),
        // 결명자
        compound(12, 5, "Chrysophanol", L1, Public, 87, 0.90, Pass, "Anthraquinone", Some(254.24), Some(22.3)),
        // 단삼
        compound(13, 6, "Tanshinone IIA", L1, InHouse, 90, 0.91, Pass, "Diterpene", Some(294.34), Some(25.6)),
        compound(14, 6, "Salvianolic acid B", L1, Public, 86, 0.88, Pass, "Phenolic acid", Some(718.61), Some(16.2)),
        // 상황버섯
        compound(15, 7, "Beta-glucan", L3, Public, 68, 0.76, Review, "Polysaccharide", None, None),
        // 동충하초
        compound(16, 8, "Cordycepin", L2, InHouse, 79, 0.82, Pass, "Nucleoside", Some(251.24), Some(5.8)),
    ]
}

fn region(id: u32, name: &str, avg_temperature: f64, avg_rainfall: f64, soil_grade: SoilGrade) -> EnvironmentData {
    EnvironmentData {
        id,
        region: name.to_string(),
        avg_temperature,
        avg_rainfall,
        soil_grade,
    }
}

fn reference_environment() -> Vec<EnvironmentData> {
    vec![
        region(1, "강원도 평창군", 13.2, 1240.0, SoilGrade::B),
        region(2, "충남 금산군", 12.8, 1150.0, SoilGrade::A),
        region(3, "경북 영주시", 11.5, 1080.0, SoilGrade::B),
        region(4, "전남 진도군", 14.1, 1320.0, SoilGrade::A),
        region(5, "강원도 정선군", 10.8, 1180.0, SoilGrade::B),
        region(6, "강원도 영월군", 11.2, 1200.0, SoilGrade::C),
        region(7, "강원도 횡성군", 11.0, 1160.0, SoilGrade::B),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_record_counts() {
        let catalog = Catalog::new();
        seed_reference_data(&catalog);
        let counts = catalog.counts();
        assert_eq!(counts.crops, 8);
        assert_eq!(counts.compounds, 16);
        assert_eq!(counts.environment, 7);
    }

    #[test]
    fn test_seeding_twice_is_idempotent() {
        let catalog = Catalog::new();
        seed_reference_data(&catalog);
        let first = catalog.counts();
        seed_reference_data(&catalog);
        assert_eq!(catalog.counts(), first);
    }

    #[test]
    fn test_every_compound_references_an_existing_crop() {
        let catalog = Catalog::new();
        seed_reference_data(&catalog);
        let crops = catalog.crops();
        for compound in catalog.compounds() {
            assert!(
                crops.iter().any(|c| c.id == compound.crop_id),
                "compound {} has dangling crop_id {}",
                compound.name,
                compound.crop_id
            );
        }
    }
}
