pub mod reportes;
pub mod service;
pub mod stages;

pub use reportes::{
  ClienteActivoRow, Estadisticas, GeneroRow, InventarioBajoRow, STOCK_MINIMO, VentaDetallada,
  VentasArtistaRow, clientes_activos, estadisticas, generos_populares, inventario_bajo,
  ventas_detalladas, ventas_por_artista,
};
pub use service::ReportService;
pub use stages::DESCONOCIDO;
