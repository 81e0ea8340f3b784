//! Digimon row model and request DTOs.

use digidex_core::digimon::LevelInput;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `digimons` table.
///
/// Serializes to the exact wire record: `id`, `nombre`, `tipo`, `nivel`,
/// `version`, `imagen`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Digimon {
    pub id: String,
    pub nombre: String,
    pub tipo: String,
    pub nivel: f64,
    pub version: i32,
    pub imagen: Option<String>,
}

/// DTO for creating a Digimon.
///
/// Every field is `Option` so the handler reports missing fields with the
/// domain validation message instead of a deserialization rejection.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateDigimon {
    pub nombre: Option<String>,
    pub tipo: Option<String>,
    pub nivel: Option<LevelInput>,
}

/// DTO for updating a Digimon. Any subset of fields may be supplied.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateDigimon {
    pub nombre: Option<String>,
    pub tipo: Option<String>,
    pub nivel: Option<LevelInput>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn digimon_serializes_to_wire_record() {
        let record = Digimon {
            id: "abc-123".to_string(),
            nombre: "Agumon".to_string(),
            tipo: "Rookie".to_string(),
            nivel: 10.0,
            version: 1,
            imagen: None,
        };

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["id"], "abc-123");
        assert_eq!(value["nombre"], "Agumon");
        assert_eq!(value["tipo"], "Rookie");
        assert_eq!(value["nivel"].as_f64(), Some(10.0));
        assert_eq!(value["version"], 1);
        assert!(value["imagen"].is_null());
    }

    #[test]
    fn create_dto_accepts_partial_bodies() {
        let input: CreateDigimon = serde_json::from_value(json!({"nombre": "Agumon"})).unwrap();
        assert_eq!(input.nombre.as_deref(), Some("Agumon"));
        assert!(input.tipo.is_none());
        assert!(input.nivel.is_none());
    }

    #[test]
    fn update_dto_treats_null_nivel_as_absent() {
        let input: UpdateDigimon = serde_json::from_value(json!({"nivel": null})).unwrap();
        assert!(input.nivel.is_none());
    }
}
