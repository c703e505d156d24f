pub mod tienda_repository;

pub use tienda_repository::{RepoError, TiendaRepository};
