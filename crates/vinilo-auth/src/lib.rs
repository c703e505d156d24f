mod capability;
mod error;
mod resolver;
mod tables;

pub use capability::Capability;
pub use error::AuthError;
pub use resolver::{Autorizador, PrincipalInfo};
pub use tables::{AuthTables, Rol, Usuario};
