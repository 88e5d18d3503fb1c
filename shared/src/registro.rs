//! Plate registry records plus the pure operations the frontend runs on
//! them before and after storage.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Column order of the exported CSV, matching the stored record fields.
pub const CSV_HEADER: [&str; 7] = [
    "id",
    "fecha_hora",
    "matricula",
    "propietario",
    "tipo_vehiculo",
    "observacion",
    "imagen",
];

/// Normalized plates are capped at this many characters.
pub const MATRICULA_MAX: usize = 10;

/// Placeholder plate stored when normalization leaves nothing usable.
pub const NO_DETECTADA: &str = "NO_DETECTADA";

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
pub enum TipoVehiculo {
    #[default]
    #[strum(serialize = "Automóvil")]
    Automovil,
    #[strum(serialize = "Motocicleta")]
    Motocicleta,
    #[strum(serialize = "Camioneta")]
    Camioneta,
    #[strum(serialize = "Camión")]
    Camion,
    #[strum(serialize = "Otro")]
    Otro,
}

impl TipoVehiculo {
    /// All variants in declaration order, for populating the type select.
    pub fn all() -> impl Iterator<Item = TipoVehiculo> {
        use strum::IntoEnumIterator;
        Self::iter()
    }
}

/// One stored registry entry. `imagen` holds the preview data-URI so the
/// record stays self-contained in local storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Registro {
    pub id: u64,
    pub fecha_hora: String,
    pub matricula: String,
    pub propietario: String,
    pub tipo_vehiculo: TipoVehiculo,
    pub observacion: String,
    pub imagen: String,
}

/// Next free id. Ids keep growing after deletions, so a removed record's
/// id is never handed out again.
pub fn next_id(registros: &[Registro]) -> u64 {
    registros.iter().map(|r| r.id).max().map_or(1, |max| max + 1)
}

/// Uppercases the plate and keeps only alphanumerics and dashes, capped
/// at [`MATRICULA_MAX`] characters.
pub fn normalize_matricula(raw: &str) -> String {
    raw.trim()
        .chars()
        .flat_map(char::to_uppercase)
        .filter(|c| c.is_alphanumeric() || *c == '-')
        .take(MATRICULA_MAX)
        .collect()
}

/// Renders the registry as CSV: header row first, then one row per record
/// in slice order. Fields containing separators or quotes are quoted with
/// embedded quotes doubled; rows end in CRLF.
pub fn export_csv(registros: &[Registro]) -> String {
    let mut csv = CSV_HEADER.join(",");
    csv.push_str("\r\n");
    for registro in registros {
        let tipo = registro.tipo_vehiculo.to_string();
        let fields = [
            registro.id.to_string(),
            registro.fecha_hora.clone(),
            registro.matricula.clone(),
            registro.propietario.clone(),
            tipo,
            registro.observacion.clone(),
            registro.imagen.clone(),
        ];
        let row: Vec<String> = fields.iter().map(|f| csv_field(f)).collect();
        csv.push_str(&row.join(","));
        csv.push_str("\r\n");
    }
    csv
}

fn csv_field(value: &str) -> String {
    if value.contains(|c: char| matches!(c, ',' | '"' | '\n' | '\r')) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_owned()
    }
}
