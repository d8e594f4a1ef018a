use serde::{Deserialize, Serialize};

/// MSI identification-confidence tier for a compound annotation. L1 is the
/// highest confidence (authentic standard match).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnnotationLevel {
    L1,
    L2,
    L3,
}

/// Provenance of the spectral reference used for an annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataSource {
    #[serde(rename = "IN-HOUSE")]
    InHouse,
    #[serde(rename = "PUBLIC")]
    Public,
}

/// Quality-control outcome for a compound measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum QcStatus {
    Pass,
    Review,
}

impl QcStatus {
    /// Parses the wire token used in query strings (`PASS`, `REVIEW`).
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "PASS" => Some(QcStatus::Pass),
            "REVIEW" => Some(QcStatus::Review),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            QcStatus::Pass => "PASS",
            QcStatus::Review => "REVIEW",
        }
    }
}

/// Soil-quality grade for a growing region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SoilGrade {
    A,
    B,
    C,
}

/// A specialty-crop sample. One record per (crop, origin) pairing; the same
/// crop grown in two localities is two records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Crop {
    pub id: u32,
    pub name_ko: String,
    pub name_en: String,
    pub name_scientific: String,
    pub plant_part: String,
    pub origin: String,
    pub year: i32,
}

/// A metabolite annotation belonging to exactly one crop.
///
/// `score` is informational (expected 0-100) and `similarity` is expected in
/// 0.0-1.0; neither range is enforced at ingest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Compound {
    pub id: u32,
    pub crop_id: u32,
    pub name: String,
    pub annotation_level: AnnotationLevel,
    pub source: DataSource,
    pub score: i32,
    pub similarity: f64,
    pub qc_status: QcStatus,
    pub compound_class: String,
    pub molecular_weight: Option<f64>,
    pub retention_time: Option<f64>,
}

/// Regional growing-environment indicators. Not keyed to any crop; associated
/// at runtime by substring containment of a crop's origin in `region`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentData {
    pub id: u32,
    pub region: String,
    pub avg_temperature: f64,
    pub avg_rainfall: f64,
    pub soil_grade: SoilGrade,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_source_wire_form() {
        let json = serde_json::to_string(&DataSource::InHouse).unwrap();
        assert_eq!(json, "\"IN-HOUSE\"");
        let back: DataSource = serde_json::from_str("\"PUBLIC\"").unwrap();
        assert_eq!(back, DataSource::Public);
    }

    #[test]
    fn test_qc_status_parse_tokens() {
        assert_eq!(QcStatus::parse("PASS"), Some(QcStatus::Pass));
        assert_eq!(QcStatus::parse("REVIEW"), Some(QcStatus::Review));
        assert_eq!(QcStatus::parse("pass"), None);
        assert_eq!(QcStatus::parse(""), None);
    }

    #[test]
    fn test_qc_status_round_trip() {
        for qc in [QcStatus::Pass, QcStatus::Review] {
            assert_eq!(QcStatus::parse(qc.as_str()), Some(qc));
        }
    }
}
