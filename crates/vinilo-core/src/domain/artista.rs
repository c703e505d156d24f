use crate::domain::form::Form;
use crate::domain::ids::DocId;
use crate::errors::CoreError;
use serde::{Deserialize, Serialize};

/// Artista del catálogo de la tienda.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artista {
  pub id: DocId,
  pub nombre: String,
  pub pais: String,
  pub genero: String,
  pub activo: bool,
}

impl Artista {
  /// Normaliza y valida los campos del formulario.
  ///
  /// `custom_id` permite elegir el id del documento; con `None` se genera
  /// uno nuevo.
  pub fn from_form(form: &Form, custom_id: Option<&str>) -> Result<Self, CoreError> {
    Ok(Artista {
      id: super::assigned_id(custom_id)?,
      nombre: form.required_text("nombre")?,
      pais: form.text("pais"),
      genero: form.text("genero"),
      activo: form.flag("activo"),
    })
  }

  pub fn with_id(mut self, id: DocId) -> Self {
    self.id = id;
    self
  }
}
