//! Main application entry point (native).

#[cfg(feature = "native")]
fn main() {
    env_logger::init();
    log::info!("Starting Folio");

    let config = folio_app::AppConfig::from_env();
    if let Err(err) = pollster::block_on(folio_app::App::run(config)) {
        log::error!("{}", err);
        std::process::exit(1);
    }
}

#[cfg(not(feature = "native"))]
fn main() {
    panic!("Native feature not enabled. Use `cargo run --features native`");
}
