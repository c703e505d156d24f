use vinilo_auth::{AuthTables, Autorizador};
use vinilo_config::CONFIG_BACKEND;
use vinilo_core::domain::Form;
use vinilo_core::services::TiendaService;
use vinilo_reports::ReportService;
use vinilo_storage::SqliteTienda;

fn main() {
  // Tablas de auth: las de la sección [auth] del vinilo.toml, o las
  // integradas si no hay nada configurado.
  let tablas: AuthTables = CONFIG_BACKEND
    .load_section_with_default("auth")
    .expect("failed to load auth tables");

  let store = SqliteTienda::new_in_memory().expect("failed to open db");
  let tienda = TiendaService::new(Autorizador::new(tablas.clone()), &store);
  let reportes = ReportService::new(Autorizador::new(tablas), &store);

  let info = tienda.login("ldaza", "admin123").expect("login");
  println!("Sesión: {} ({})", info.nombre, info.rol);

  // Datos de demo, mezclando ids generados y personalizados.
  let miles = tienda
    .create_artista(
      "ldaza",
      &Form::new().set("nombre", "Miles Davis").set("pais", "USA").set("genero", "Jazz").set("activo", "si"),
      Some("ART-MILES"),
    )
    .expect("crear artista");

  let nina = tienda
    .create_artista(
      "ldaza",
      &Form::new().set("nombre", "Nina Simone").set("pais", "USA").set("genero", "Soul").set("activo", "si"),
      None,
    )
    .expect("crear artista");

  let ana = tienda
    .create_cliente(
      "ldaza",
      &Form::new().set("nombre", "Ana Pérez").set("correo", "ana@example.com").set("telefono", "555-0101"),
      Some("CLI-ANA"),
    )
    .expect("crear cliente");

  tienda
    .create_producto(
      "ldaza",
      &Form::new()
        .set("artista_id", &miles.to_string())
        .set("album", "Kind of Blue")
        .set("anio", "1959")
        .set("genero", "Jazz")
        .set("stock", "3")
        .set("precio_unitario", "20"),
      None,
    )
    .expect("crear producto");

  tienda
    .create_producto(
      "ldaza",
      &Form::new()
        .set("artista_id", &nina.to_string())
        .set("album", "I Put a Spell on You")
        .set("anio", "1965")
        .set("genero", "Soul")
        .set("stock", "8")
        .set("precio_unitario", "18"),
      None,
    )
    .expect("crear producto");

  tienda
    .create_venta(
      "ldaza",
      &Form::new()
        .set("cliente_id", &ana.to_string())
        .set("artista_id", &miles.to_string())
        .set("album", "Kind of Blue")
        .set("fecha_venta", "2026-07-30")
        .set("cantidad", "2")
        .set("precio_unitario", "20"),
      None,
    )
    .expect("registrar venta");

  println!("\nEstadísticas: {:#?}", reportes.estadisticas("ldaza").expect("estadisticas"));
  println!("\nVentas por artista: {:#?}", reportes.ventas_por_artista("ldaza").expect("reporte"));
  println!("\nInventario bajo: {:#?}", reportes.inventario_bajo("ldaza").expect("reporte"));
  println!("\nClientes activos: {:#?}", reportes.clientes_activos("ldaza").expect("reporte"));
  println!("\nGéneros populares: {:#?}", reportes.generos_populares("ldaza").expect("reporte"));
  println!("\nVentas detalladas: {:#?}", reportes.ventas_detalladas("ldaza").expect("reporte"));
}
