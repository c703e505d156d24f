use crate::domain::form::Form;
use crate::domain::ids::DocId;
use crate::errors::CoreError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static EMAIL_RE: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("email regex"));

/// Cliente de la tienda.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cliente {
  pub id: DocId,
  pub nombre: String,
  pub correo: String,
  pub telefono: String,
}

impl Cliente {
  pub fn from_form(form: &Form, custom_id: Option<&str>) -> Result<Self, CoreError> {
    let correo = form.required_text("correo")?;
    if !EMAIL_RE.is_match(&correo) {
      return Err(CoreError::Validation(format!("correo inválido: {correo}")));
    }
    Ok(Cliente {
      id: super::assigned_id(custom_id)?,
      nombre: form.required_text("nombre")?,
      correo,
      telefono: form.text("telefono"),
    })
  }

  pub fn with_id(mut self, id: DocId) -> Self {
    self.id = id;
    self
  }
}
