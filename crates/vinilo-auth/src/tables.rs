use crate::capability::Capability;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Rol: conjunto de capacidades más una descripción para la UI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rol {
  pub permisos: BTreeSet<Capability>,
  pub descripcion: String,
}

/// Entrada de la tabla de usuarios.
///
/// La contraseña nunca se guarda en claro: `password_hash` es el digest
/// BLAKE3 en hex de la contraseña.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Usuario {
  pub password_hash: String,
  pub rol: String,
  pub nombre: String,
}

impl Usuario {
  pub fn with_password(password: &str, rol: &str, nombre: &str) -> Self {
    Usuario {
      password_hash: hash_password(password),
      rol: rol.to_string(),
      nombre: nombre.to_string(),
    }
  }
}

pub(crate) fn hash_password(password: &str) -> String {
  blake3::hash(password.as_bytes()).to_hex().to_string()
}

/// Tablas de autenticación/autorización.
///
/// Se construyen una vez al arranque (por defecto o desde la sección
/// `[auth]` de la configuración) y se inyectan en el [`crate::Autorizador`];
/// no hay estado global.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthTables {
  pub usuarios: BTreeMap<String, Usuario>,
  pub roles: BTreeMap<String, Rol>,
}

impl Default for AuthTables {
  fn default() -> Self {
    let mut roles = BTreeMap::new();
    roles.insert(
      "administrador".to_string(),
      Rol {
        permisos: BTreeSet::from(Capability::ALL),
        descripcion: "Acceso completo a CRUD - Consulta, crear, editar y eliminar".to_string(),
      },
    );
    roles.insert(
      "consulta".to_string(),
      Rol {
        permisos: BTreeSet::from([Capability::Read]),
        descripcion: "Solo lectura - Solo puede consultar datos".to_string(),
      },
    );
    roles.insert(
      "operativo".to_string(),
      Rol {
        permisos: BTreeSet::from([Capability::Read, Capability::Create]),
        descripcion: "Lectura e inserción - Puede consultar y crear datos".to_string(),
      },
    );

    let mut usuarios = BTreeMap::new();
    usuarios
      .insert("ldaza".to_string(), Usuario::with_password("admin123", "administrador", "Luis Daza"));
    usuarios.insert(
      "sbarbosa".to_string(),
      Usuario::with_password("consulta123", "consulta", "Sebastian Barbosa"),
    );
    usuarios.insert(
      "dandrade".to_string(),
      Usuario::with_password("operativo123", "operativo", "Daniel Andrade"),
    );

    AuthTables { usuarios, roles }
  }
}
