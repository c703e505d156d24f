use crate::stages::{agrupar_por, indice_nombres, nombre_o_desconocido, round2};
use chrono::NaiveDateTime;
use serde::Serialize;
use vinilo_core::domain::ids::DocId;
use vinilo_core::domain::{Artista, Cliente, Producto, Venta};

/// Umbral del reporte de stock bajo: estricto, `stock < STOCK_MINIMO`.
pub const STOCK_MINIMO: i32 = 5;

/// Conteos generales más ingresos y stock totales.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Estadisticas {
  pub total_artistas: usize,
  pub total_clientes: usize,
  pub total_productos: usize,
  pub total_ventas: usize,
  pub ingresos_totales: f64,
  pub stock_total: i64,
}

pub fn estadisticas(
  artistas: &[Artista],
  clientes: &[Cliente],
  inventario: &[Producto],
  ventas: &[Venta],
) -> Estadisticas {
  let ingresos: i64 = ventas.iter().map(Venta::total_venta).sum();
  Estadisticas {
    total_artistas: artistas.len(),
    total_clientes: clientes.len(),
    total_productos: inventario.len(),
    total_ventas: ventas.len(),
    ingresos_totales: round2(ingresos as f64),
    stock_total: inventario.iter().map(|p| p.stock as i64).sum(),
  }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VentasArtistaRow {
  pub artista: String,
  pub unidades: i64,
  pub ingresos: f64,
  pub transacciones: usize,
}

/// Ventas agrupadas por artista (solo `cantidad > 0`), nombre resuelto con
/// join izquierdo, orden por ingresos descendente.
pub fn ventas_por_artista(ventas: &[Venta], artistas: &[Artista]) -> Vec<VentasArtistaRow> {
  let indice = indice_nombres(artistas, |a| (&a.id, a.nombre.as_str()));

  let grupos = agrupar_por(ventas.iter().filter(|v| v.cantidad > 0), |v| v.artista_id.clone());

  let mut rows: Vec<VentasArtistaRow> = grupos
    .into_iter()
    .map(|(artista_id, grupo)| {
      let ingresos: i64 = grupo.iter().map(|v| v.total_venta()).sum();
      VentasArtistaRow {
        artista: nombre_o_desconocido(&indice, artista_id.as_ref()),
        unidades: grupo.iter().map(|v| v.cantidad as i64).sum(),
        ingresos: round2(ingresos as f64),
        transacciones: grupo.len(),
      }
    })
    .collect();

  rows.sort_by(|a, b| b.ingresos.total_cmp(&a.ingresos).then_with(|| a.artista.cmp(&b.artista)));
  rows
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InventarioBajoRow {
  pub id: DocId,
  pub album: String,
  pub artista: String,
  pub stock: i32,
  pub precio_unitario: i32,
  pub valor_total: i64,
}

/// Productos bajo el umbral de stock, los más urgentes primero.
pub fn inventario_bajo(inventario: &[Producto], artistas: &[Artista]) -> Vec<InventarioBajoRow> {
  let indice = indice_nombres(artistas, |a| (&a.id, a.nombre.as_str()));

  let mut rows: Vec<InventarioBajoRow> = inventario
    .iter()
    .filter(|p| p.stock < STOCK_MINIMO)
    .map(|p| InventarioBajoRow {
      id: p.id.clone(),
      album: p.album.clone(),
      artista: nombre_o_desconocido(&indice, Some(&p.artista_id)),
      stock: p.stock,
      precio_unitario: p.precio_unitario,
      valor_total: p.valor_total(),
    })
    .collect();

  rows.sort_by(|a, b| a.stock.cmp(&b.stock).then_with(|| a.album.cmp(&b.album)));
  rows
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClienteActivoRow {
  pub cliente_id: Option<DocId>,
  pub cliente: String,
  pub compras: usize,
  pub cantidad_articulos: i64,
  pub gasto_total: f64,
}

/// Clientes por gasto total descendente (solo ventas con `cantidad > 0`).
pub fn clientes_activos(ventas: &[Venta], clientes: &[Cliente]) -> Vec<ClienteActivoRow> {
  let indice = indice_nombres(clientes, |c| (&c.id, c.nombre.as_str()));

  let grupos = agrupar_por(ventas.iter().filter(|v| v.cantidad > 0), |v| v.cliente_id.clone());

  let mut rows: Vec<ClienteActivoRow> = grupos
    .into_iter()
    .map(|(cliente_id, grupo)| {
      let gasto: i64 = grupo.iter().map(|v| v.total_venta()).sum();
      ClienteActivoRow {
        cliente: nombre_o_desconocido(&indice, cliente_id.as_ref()),
        cliente_id,
        compras: grupo.len(),
        cantidad_articulos: grupo.iter().map(|v| v.cantidad as i64).sum(),
        gasto_total: round2(gasto as f64),
      }
    })
    .collect();

  rows.sort_by(|a, b| b.gasto_total.total_cmp(&a.gasto_total).then_with(|| a.cliente.cmp(&b.cliente)));
  rows
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneroRow {
  pub genero: String,
  pub cantidad_productos: usize,
  pub stock_disponible: i64,
  pub valor_total: f64,
  pub valor_promedio: f64,
}

/// Inventario agrupado por género no vacío, por valoración descendente.
/// El promedio se calcula sobre la suma sin redondear y se redondea al
/// proyectar.
pub fn generos_populares(inventario: &[Producto]) -> Vec<GeneroRow> {
  let grupos = agrupar_por(inventario.iter().filter(|p| !p.genero.is_empty()), |p| p.genero.clone());

  let mut rows: Vec<GeneroRow> = grupos
    .into_iter()
    .map(|(genero, grupo)| {
      let valor: i64 = grupo.iter().map(|p| p.valor_total()).sum();
      GeneroRow {
        genero,
        cantidad_productos: grupo.len(),
        stock_disponible: grupo.iter().map(|p| p.stock as i64).sum(),
        valor_total: round2(valor as f64),
        valor_promedio: round2(valor as f64 / grupo.len() as f64),
      }
    })
    .collect();

  rows.sort_by(|a, b| b.valor_total.total_cmp(&a.valor_total).then_with(|| a.genero.cmp(&b.genero)));
  rows
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VentaDetallada {
  pub id: DocId,
  pub fecha_venta: NaiveDateTime,
  pub album: String,
  pub cantidad: i32,
  pub precio_unitario: i32,
  pub nombre_cliente: String,
  pub nombre_artista: String,
  pub total_venta: i64,
}

/// Listado de ventas con nombres resueltos, las más recientes primero.
pub fn ventas_detalladas(
  ventas: &[Venta],
  clientes: &[Cliente],
  artistas: &[Artista],
) -> Vec<VentaDetallada> {
  let idx_clientes = indice_nombres(clientes, |c| (&c.id, c.nombre.as_str()));
  let idx_artistas = indice_nombres(artistas, |a| (&a.id, a.nombre.as_str()));

  let mut rows: Vec<VentaDetallada> = ventas
    .iter()
    .map(|v| VentaDetallada {
      id: v.id.clone(),
      fecha_venta: v.fecha_venta,
      album: v.album.clone(),
      cantidad: v.cantidad,
      precio_unitario: v.precio_unitario,
      nombre_cliente: nombre_o_desconocido(&idx_clientes, v.cliente_id.as_ref()),
      nombre_artista: nombre_o_desconocido(&idx_artistas, v.artista_id.as_ref()),
      total_venta: v.total_venta(),
    })
    .collect();

  rows.sort_by(|a, b| b.fecha_venta.cmp(&a.fecha_venta).then_with(|| a.id.cmp(&b.id)));
  rows
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::stages::DESCONOCIDO;
  use chrono::{NaiveDate, NaiveTime};

  fn artista(id: &str, nombre: &str) -> Artista {
    Artista {
      id: id.parse().unwrap(),
      nombre: nombre.to_string(),
      pais: String::new(),
      genero: String::new(),
      activo: true,
    }
  }

  fn cliente(id: &str, nombre: &str) -> Cliente {
    Cliente {
      id: id.parse().unwrap(),
      nombre: nombre.to_string(),
      correo: format!("{id}@example.com"),
      telefono: String::new(),
    }
  }

  fn producto(id: &str, artista_id: &str, album: &str, genero: &str, stock: i32, precio: i32) -> Producto {
    Producto {
      id: id.parse().unwrap(),
      artista_id: artista_id.parse().unwrap(),
      album: album.to_string(),
      anio: 1970,
      genero: genero.to_string(),
      stock,
      precio_unitario: precio,
    }
  }

  fn venta(
    id: &str,
    cliente_id: Option<&str>,
    artista_id: Option<&str>,
    fecha: &str,
    cantidad: i32,
    precio: i32,
  ) -> Venta {
    Venta {
      id: id.parse().unwrap(),
      cliente_id: cliente_id.map(|c| c.parse().unwrap()),
      artista_id: artista_id.map(|a| a.parse().unwrap()),
      album: "Album".to_string(),
      fecha_venta: fecha.parse::<NaiveDate>().unwrap().and_time(NaiveTime::MIN),
      cantidad,
      precio_unitario: precio,
    }
  }

  #[test]
  fn estadisticas_counts_and_totals() {
    let artistas = vec![artista("A1", "Miles Davis")];
    let clientes = vec![cliente("C1", "Ana"), cliente("C2", "Benito")];
    let inventario = vec![
      producto("P1", "A1", "Kind of Blue", "Jazz", 3, 20),
      producto("P2", "A1", "Sketches of Spain", "Jazz", 7, 15),
    ];
    let ventas = vec![
      venta("V1", Some("C1"), Some("A1"), "2024-01-10", 2, 20),
      venta("V2", Some("C2"), Some("A1"), "2024-01-11", 1, 15),
    ];

    let stats = estadisticas(&artistas, &clientes, &inventario, &ventas);
    assert_eq!(stats.total_artistas, 1);
    assert_eq!(stats.total_clientes, 2);
    assert_eq!(stats.total_productos, 2);
    assert_eq!(stats.total_ventas, 2);
    assert_eq!(stats.ingresos_totales, 55.0);
    assert_eq!(stats.stock_total, 10);
  }

  #[test]
  fn ventas_por_artista_conserves_units_and_revenue() {
    let artistas = vec![artista("A1", "Miles Davis"), artista("A2", "Nina Simone")];
    let ventas = vec![
      venta("V1", None, Some("A1"), "2024-01-10", 2, 20),
      venta("V2", None, Some("A1"), "2024-01-11", 1, 30),
      venta("V3", None, Some("A2"), "2024-01-12", 4, 10),
      venta("V4", None, Some("A-borrado"), "2024-01-13", 1, 5),
    ];

    let reporte = ventas_por_artista(&ventas, &artistas);

    let unidades: i64 = reporte.iter().map(|r| r.unidades).sum();
    let esperadas: i64 =
      ventas.iter().filter(|v| v.cantidad > 0).map(|v| v.cantidad as i64).sum();
    assert_eq!(unidades, esperadas);

    let ingresos: f64 = reporte.iter().map(|r| r.ingresos).sum();
    let total: i64 = ventas.iter().map(|v| v.total_venta()).sum();
    assert_eq!(ingresos, total as f64);

    // orden por ingresos descendente
    assert_eq!(reporte[0].artista, "Miles Davis");
    assert_eq!(reporte[0].ingresos, 70.0);
    assert!(reporte.windows(2).all(|w| w[0].ingresos >= w[1].ingresos));

    // el artista borrado aparece con el rótulo fijo, no falla
    assert!(reporte.iter().any(|r| r.artista == DESCONOCIDO && r.ingresos == 5.0));
  }

  #[test]
  fn ventas_por_artista_omits_empty_groups() {
    let artistas = vec![artista("A1", "Miles Davis"), artista("A2", "Nina Simone")];
    let ventas = vec![venta("V1", None, Some("A1"), "2024-01-10", 1, 10)];

    let reporte = ventas_por_artista(&ventas, &artistas);
    assert_eq!(reporte.len(), 1);
    assert!(reporte.iter().all(|r| r.artista != "Nina Simone"));
  }

  #[test]
  fn inventario_bajo_scenario_miles_davis() {
    let artistas = vec![artista("A1", "Miles Davis")];
    let inventario = vec![producto("P1", "A1", "Kind of Blue", "Jazz", 3, 20)];

    let reporte = inventario_bajo(&inventario, &artistas);
    assert_eq!(reporte.len(), 1);
    assert_eq!(reporte[0].artista, "Miles Davis");
    assert_eq!(reporte[0].album, "Kind of Blue");
    assert_eq!(reporte[0].valor_total, 60);
  }

  #[test]
  fn inventario_bajo_respects_threshold_and_order() {
    let artistas = vec![artista("A1", "Miles Davis")];
    let inventario = vec![
      producto("P1", "A1", "Uno", "Jazz", 5, 10),
      producto("P2", "A1", "Dos", "Jazz", 0, 10),
      producto("P3", "A1", "Tres", "Jazz", 4, 10),
      producto("P4", "A-borrado", "Cuatro", "Jazz", 2, 10),
      producto("P5", "A1", "Cinco", "Jazz", 9, 10),
    ];

    let reporte = inventario_bajo(&inventario, &artistas);
    assert!(reporte.iter().all(|r| r.stock < STOCK_MINIMO));
    assert!(reporte.windows(2).all(|w| w[0].stock <= w[1].stock));
    let stocks: Vec<i32> = reporte.iter().map(|r| r.stock).collect();
    assert_eq!(stocks, [0, 2, 4]);
    assert_eq!(reporte[1].artista, DESCONOCIDO);
  }

  #[test]
  fn clientes_activos_tolerates_deleted_client() {
    let clientes = vec![cliente("C1", "Ana")];
    let ventas = vec![
      venta("V1", Some("C1"), None, "2024-01-10", 1, 50),
      venta("V2", Some("C-borrado"), None, "2024-01-11", 3, 40),
      venta("V3", Some("C-borrado"), None, "2024-01-12", 1, 10),
    ];

    let reporte = clientes_activos(&ventas, &clientes);
    assert_eq!(reporte.len(), 2);

    // el cliente borrado agrupa bajo el rótulo fijo y encabeza por gasto
    assert_eq!(reporte[0].cliente, DESCONOCIDO);
    assert_eq!(reporte[0].compras, 2);
    assert_eq!(reporte[0].cantidad_articulos, 4);
    assert_eq!(reporte[0].gasto_total, 130.0);

    assert_eq!(reporte[1].cliente, "Ana");
    assert_eq!(reporte[1].gasto_total, 50.0);
  }

  #[test]
  fn generos_populares_skips_blank_genre_and_averages() {
    let inventario = vec![
      producto("P1", "A1", "Uno", "Jazz", 2, 10),
      producto("P2", "A1", "Dos", "Jazz", 1, 15),
      producto("P3", "A1", "Tres", "Soul", 10, 8),
      producto("P4", "A1", "Cuatro", "", 99, 99),
    ];

    let reporte = generos_populares(&inventario);
    assert_eq!(reporte.len(), 2);

    assert_eq!(reporte[0].genero, "Soul");
    assert_eq!(reporte[0].valor_total, 80.0);
    assert_eq!(reporte[0].valor_promedio, 80.0);

    assert_eq!(reporte[1].genero, "Jazz");
    assert_eq!(reporte[1].cantidad_productos, 2);
    assert_eq!(reporte[1].stock_disponible, 3);
    assert_eq!(reporte[1].valor_total, 35.0);
    assert_eq!(reporte[1].valor_promedio, 17.5);
  }

  #[test]
  fn ventas_detalladas_joins_and_orders_recent_first() {
    let artistas = vec![artista("A1", "Miles Davis")];
    let clientes = vec![cliente("C1", "Ana")];
    let ventas = vec![
      venta("V1", Some("C1"), Some("A1"), "2024-01-10", 1, 10),
      venta("V2", Some("C-borrado"), Some("A1"), "2024-03-01", 2, 25),
    ];

    let reporte = ventas_detalladas(&ventas, &clientes, &artistas);
    assert_eq!(reporte.len(), 2);

    // la más reciente primero, con el cliente colgante rotulado
    assert_eq!(reporte[0].nombre_cliente, DESCONOCIDO);
    assert_eq!(reporte[0].nombre_artista, "Miles Davis");
    assert_eq!(reporte[0].total_venta, 50);
    assert_eq!(reporte[1].nombre_cliente, "Ana");
  }

  #[test]
  fn reports_are_idempotent_over_the_same_snapshot() {
    let artistas = vec![artista("A1", "Miles Davis"), artista("A2", "Nina Simone")];
    let ventas = vec![
      venta("V1", None, Some("A1"), "2024-01-10", 2, 20),
      venta("V2", None, Some("A2"), "2024-01-10", 2, 20),
    ];

    // empate de ingresos: el desempate por nombre mantiene la salida estable
    let primera = ventas_por_artista(&ventas, &artistas);
    let segunda = ventas_por_artista(&ventas, &artistas);
    assert_eq!(primera, segunda);
    assert_eq!(primera[0].artista, "Miles Davis");
  }
}
