use crate::domain::form::Form;
use crate::domain::ids::DocId;
use crate::errors::CoreError;
use serde::{Deserialize, Serialize};

/// Producto del inventario: un álbum en stock.
///
/// `artista_id` es una referencia débil: el artista puede haber sido
/// eliminado y los caminos de lectura lo toleran con un rótulo fijo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Producto {
  pub id: DocId,
  pub artista_id: DocId,
  pub album: String,
  pub anio: i32,
  pub genero: String,
  pub stock: i32,
  pub precio_unitario: i32,
}

impl Producto {
  pub fn from_form(form: &Form, custom_id: Option<&str>) -> Result<Self, CoreError> {
    let artista_id = form
      .required_text("artista_id")?
      .parse::<DocId>()
      .map_err(|_| CoreError::Validation("artista_id inválido".to_string()))?;

    let stock = form.int("stock")?;
    if stock < 0 {
      return Err(CoreError::Validation("el stock no puede ser negativo".to_string()));
    }

    let precio_unitario = form.int("precio_unitario")?;
    if precio_unitario < 0 {
      return Err(CoreError::Validation("el precio unitario no puede ser negativo".to_string()));
    }

    Ok(Producto {
      id: super::assigned_id(custom_id)?,
      artista_id,
      album: form.required_text("album")?,
      anio: form.int("anio")?,
      genero: form.text("genero"),
      stock,
      precio_unitario,
    })
  }

  pub fn with_id(mut self, id: DocId) -> Self {
    self.id = id;
    self
  }

  /// Valoración del renglón: stock × precio unitario.
  pub fn valor_total(&self) -> i64 {
    self.stock as i64 * self.precio_unitario as i64
  }
}
