use thiserror::Error;

/// Falla de autorización.
///
/// Deliberadamente sin detalle: el llamador no recibe información sobre
/// roles ni sobre qué capacidad faltó.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
  #[error("forbidden")]
  Forbidden,
}
