use crate::ports::RepoError;
use thiserror::Error;
use vinilo_auth::AuthError;

/// Error genérico del núcleo de la tienda.
///
/// Las capas superiores (web, CLI, etc.) deberían mapear este error
/// a mensajes de usuario o logs.
#[derive(Debug, Error)]
pub enum CoreError {
  /// Campo obligatorio ausente o malformado; no se persistió nada.
  #[error("validation error: {0}")]
  Validation(String),

  #[error("not found")]
  NotFound,

  /// Uniforme a propósito: no revela qué rol o capacidad faltó.
  #[error("forbidden")]
  Forbidden,

  /// Falla de lectura/escritura subyacente. Nunca se reintenta sola.
  #[error("storage error: {0}")]
  Storage(String),
}

impl From<AuthError> for CoreError {
  fn from(_: AuthError) -> Self {
    CoreError::Forbidden
  }
}

impl From<RepoError> for CoreError {
  fn from(e: RepoError) -> Self {
    match e {
      RepoError::NotFound => CoreError::NotFound,
      RepoError::Storage(msg) => CoreError::Storage(msg),
    }
  }
}
