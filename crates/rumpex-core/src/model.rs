//! Analysis result domain model.
//!
//! The structured rump-angle assessment parsed from the vision model's
//! reply. Wire names are the Spanish camelCase fields the mobile client
//! consumes. The entity is created fresh per request and never persisted.

use serde::{Deserialize, Serialize};

/// Fixed explanation returned when the model reply cannot be parsed.
pub const PARSE_FALLBACK_REASON: &str =
    "Error al procesar la respuesta del análisis. Por favor, intenta con otra imagen.";

/// Score bucket for the rump angle linear trait.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreCategory {
    Alto,
    Nivelado,
    #[serde(rename = "Ligera caída")]
    LigeraCaida,
    Intermedio,
    Pronunciada,
}

impl ScoreCategory {
    /// Wire label, as emitted by the model.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Alto => "Alto",
            Self::Nivelado => "Nivelado",
            Self::LigeraCaida => "Ligera caída",
            Self::Intermedio => "Intermedio",
            Self::Pronunciada => "Pronunciada",
        }
    }
}

impl std::fmt::Display for ScoreCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Structured assessment of one analyzed cow.
///
/// When `valido` is false only `razon_invalidez` (and optionally
/// `numero_vacas_detectadas`) is meaningful; the measurement fields are
/// null. Absent fields serialize as explicit `null` so the fallback body
/// carries every field, like the original relay's did.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub valido: bool,
    #[serde(default)]
    pub razon_invalidez: Option<String>,
    #[serde(default)]
    pub numero_vacas_detectadas: Option<u32>,
    #[serde(default)]
    pub vaca_analizada: Option<u32>,
    /// Rump angle in degrees. The wire name says "Cm" for historical
    /// reasons; no unit conversion applies.
    #[serde(default)]
    pub angulo_cm: Option<f64>,
    /// Linear conformation score, 1-9.
    #[serde(default)]
    pub puntaje_lineal: Option<u8>,
    #[serde(default)]
    pub categoria: Option<ScoreCategory>,
    #[serde(default)]
    pub recomendacion: Option<String>,
}

impl AnalysisResult {
    /// Canonical result returned when the model reply yields no parseable
    /// JSON object. The client renders it like any model-reported invalid
    /// image.
    pub fn parse_fallback() -> Self {
        Self {
            valido: false,
            razon_invalidez: Some(PARSE_FALLBACK_REASON.to_string()),
            numero_vacas_detectadas: Some(0),
            vaca_analizada: None,
            angulo_cm: None,
            puntaje_lineal: None,
            categoria: None,
            recomendacion: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names() {
        let result = AnalysisResult {
            valido: true,
            razon_invalidez: None,
            numero_vacas_detectadas: Some(2),
            vaca_analizada: Some(1),
            angulo_cm: Some(4.5),
            puntaje_lineal: Some(7),
            categoria: Some(ScoreCategory::Intermedio),
            recomendacion: Some("Monitorear en la próxima lactancia".to_string()),
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["valido"], true);
        assert_eq!(json["numeroVacasDetectadas"], 2);
        assert_eq!(json["vacaAnalizada"], 1);
        assert_eq!(json["anguloCm"], 4.5);
        assert_eq!(json["puntajeLineal"], 7);
        assert_eq!(json["categoria"], "Intermedio");
    }

    #[test]
    fn test_fallback_serializes_every_field() {
        let json = serde_json::to_value(AnalysisResult::parse_fallback()).unwrap();
        assert_eq!(json["valido"], false);
        assert_eq!(json["razonInvalidez"], PARSE_FALLBACK_REASON);
        assert_eq!(json["numeroVacasDetectadas"], 0);
        // Explicit nulls, not omitted keys.
        let obj = json.as_object().unwrap();
        for key in ["vacaAnalizada", "anguloCm", "puntajeLineal", "categoria", "recomendacion"] {
            assert!(obj.contains_key(key), "missing {key}");
            assert!(obj[key].is_null(), "{key} should be null");
        }
    }

    #[test]
    fn test_deserializes_partial_reply() {
        let result: AnalysisResult = serde_json::from_str(
            r#"{"valido": false, "razonInvalidez": "No se detecta ninguna vaca"}"#,
        )
        .unwrap();
        assert!(!result.valido);
        assert_eq!(result.razon_invalidez.as_deref(), Some("No se detecta ninguna vaca"));
        assert_eq!(result.angulo_cm, None);
    }

    #[test]
    fn test_accented_category_label() {
        let result: AnalysisResult = serde_json::from_str(
            r#"{"valido": true, "puntajeLineal": 4, "categoria": "Ligera caída"}"#,
        )
        .unwrap();
        assert_eq!(result.categoria, Some(ScoreCategory::LigeraCaida));
    }

    #[test]
    fn test_labels_match_wire_names() {
        for category in [
            ScoreCategory::Alto,
            ScoreCategory::Nivelado,
            ScoreCategory::LigeraCaida,
            ScoreCategory::Intermedio,
            ScoreCategory::Pronunciada,
        ] {
            let wire = serde_json::to_value(category).unwrap();
            assert_eq!(wire, category.label());
        }
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        let parsed = serde_json::from_str::<AnalysisResult>(
            r#"{"valido": true, "categoria": "Bajo"}"#,
        );
        assert!(parsed.is_err());
    }
}
