use crate::domain::form::Form;
use crate::domain::ids::DocId;
use crate::errors::CoreError;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// Venta registrada.
///
/// Las referencias a cliente y artista son opcionales y débiles: pueden
/// faltar o apuntar a documentos ya eliminados.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Venta {
  pub id: DocId,
  pub cliente_id: Option<DocId>,
  pub artista_id: Option<DocId>,
  pub album: String,
  pub fecha_venta: NaiveDateTime,
  pub cantidad: i32,
  pub precio_unitario: i32,
}

impl Venta {
  pub fn from_form(form: &Form, custom_id: Option<&str>) -> Result<Self, CoreError> {
    let cantidad = form.int("cantidad")?;
    if cantidad < 1 {
      return Err(CoreError::Validation("la cantidad debe ser positiva".to_string()));
    }

    let precio_unitario = form.int("precio_unitario")?;
    if precio_unitario < 0 {
      return Err(CoreError::Validation("el precio unitario no puede ser negativo".to_string()));
    }

    Ok(Venta {
      id: super::assigned_id(custom_id)?,
      cliente_id: id_opcional(form, "cliente_id")?,
      artista_id: id_opcional(form, "artista_id")?,
      album: form.text("album"),
      fecha_venta: parse_fecha(&form.required_text("fecha_venta")?)?,
      cantidad,
      precio_unitario,
    })
  }

  pub fn with_id(mut self, id: DocId) -> Self {
    self.id = id;
    self
  }

  /// Total del renglón: cantidad × precio unitario.
  pub fn total_venta(&self) -> i64 {
    self.cantidad as i64 * self.precio_unitario as i64
  }
}

fn id_opcional(form: &Form, key: &str) -> Result<Option<DocId>, CoreError> {
  let raw = form.text(key);
  if raw.is_empty() {
    return Ok(None);
  }
  raw
    .parse::<DocId>()
    .map(Some)
    .map_err(|_| CoreError::Validation(format!("el campo '{key}' no es un id válido")))
}

/// Acepta `YYYY-MM-DD` o fecha-hora ISO; tolera una `Z` final.
fn parse_fecha(raw: &str) -> Result<NaiveDateTime, CoreError> {
  let s = raw.trim().trim_end_matches('Z');
  if let Ok(dt) = s.parse::<NaiveDateTime>() {
    return Ok(dt);
  }
  if let Ok(d) = s.parse::<NaiveDate>() {
    return Ok(d.and_time(NaiveTime::MIN));
  }
  Err(CoreError::Validation("fecha inválida, usa formato ISO (YYYY-MM-DD)".to_string()))
}
