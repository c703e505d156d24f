pub mod tienda_service;

pub use tienda_service::TiendaService;
