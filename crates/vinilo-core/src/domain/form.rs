use crate::errors::CoreError;
use std::collections::BTreeMap;

/// Campos de formulario ya decodificados (nombre → valor), tal como los
/// entrega la capa web externa a este crate.
///
/// Aquí se normaliza y valida; la entrada malformada se rechaza con
/// [`CoreError::Validation`], nunca se corrige en silencio.
#[derive(Debug, Default, Clone)]
pub struct Form(BTreeMap<String, String>);

impl Form {
  pub fn new() -> Self {
    Form(BTreeMap::new())
  }

  pub fn set(mut self, key: &str, value: &str) -> Self {
    self.0.insert(key.to_string(), value.to_string());
    self
  }

  pub fn raw(&self, key: &str) -> Option<&str> {
    self.0.get(key).map(String::as_str)
  }

  /// Texto saneado: trim y sin los caracteres `<>&"'`.
  pub fn text(&self, key: &str) -> String {
    self.raw(key).map(sanitize).unwrap_or_default()
  }

  /// Texto obligatorio no vacío.
  pub fn required_text(&self, key: &str) -> Result<String, CoreError> {
    let value = self.text(key);
    if value.is_empty() {
      return Err(CoreError::Validation(format!("el campo '{key}' es obligatorio")));
    }
    Ok(value)
  }

  /// Entero obligatorio.
  pub fn int(&self, key: &str) -> Result<i32, CoreError> {
    let raw = self.text(key);
    if raw.is_empty() {
      return Err(CoreError::Validation(format!("el campo '{key}' es obligatorio")));
    }
    raw
      .parse::<i32>()
      .map_err(|_| CoreError::Validation(format!("el campo '{key}' debe ser un número entero")))
  }

  /// Bandera booleana: acepta true/1/on/yes/si (sin distinguir mayúsculas).
  pub fn flag(&self, key: &str) -> bool {
    self.raw(key).is_some_and(parse_bool)
  }
}

impl FromIterator<(String, String)> for Form {
  fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
    Form(iter.into_iter().collect())
  }
}

fn sanitize(value: &str) -> String {
  value.trim().chars().filter(|c| !matches!(c, '<' | '>' | '&' | '"' | '\'')).collect()
}

fn parse_bool(value: &str) -> bool {
  matches!(value.trim().to_ascii_lowercase().as_str(), "true" | "1" | "on" | "yes" | "si")
}
