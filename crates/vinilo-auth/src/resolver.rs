use crate::capability::Capability;
use crate::error::AuthError;
use crate::tables::{AuthTables, hash_password};
use tracing::debug;

/// Identidad resuelta tras un login correcto.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrincipalInfo {
  pub usuario: String,
  pub nombre: String,
  pub rol: String,
}

/// Resuelve principal → rol → capacidades sobre tablas inyectadas.
pub struct Autorizador {
  tables: AuthTables,
}

impl Autorizador {
  pub fn new(tables: AuthTables) -> Self {
    Self { tables }
  }

  /// Valida credenciales contra el digest almacenado.
  ///
  /// `None` cubre por igual usuario desconocido y contraseña incorrecta,
  /// para no permitir enumerar usuarios.
  pub fn authenticate(&self, usuario: &str, password: &str) -> Option<PrincipalInfo> {
    if !login_bien_formado(usuario, password) {
      return None;
    }
    let entry = self.tables.usuarios.get(usuario)?;
    if entry.password_hash != hash_password(password) {
      return None;
    }
    Some(PrincipalInfo {
      usuario: usuario.to_string(),
      nombre: entry.nombre.clone(),
      rol: entry.rol.clone(),
    })
  }

  /// ¿Tiene el principal la capacidad pedida? Principal o rol desconocido → `false`.
  pub fn authorize(&self, usuario: &str, capability: Capability) -> bool {
    let Some(entry) = self.tables.usuarios.get(usuario) else {
      return false;
    };
    let Some(rol) = self.tables.roles.get(&entry.rol) else {
      return false;
    };
    rol.permisos.contains(&capability)
  }

  pub fn require(&self, usuario: &str, capability: Capability) -> Result<(), AuthError> {
    if self.authorize(usuario, capability) {
      Ok(())
    } else {
      debug!(usuario, %capability, "acceso denegado");
      Err(AuthError::Forbidden)
    }
  }
}

/// Reglas de forma del login: longitudes y charset del usuario.
fn login_bien_formado(usuario: &str, password: &str) -> bool {
  if usuario.len() < 3 || usuario.len() > 50 {
    return false;
  }
  if password.len() < 6 || password.len() > 100 {
    return false;
  }
  usuario.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}
