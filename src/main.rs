fn main() -> anyhow::Result<()> {
    env_logger::init();
    log::info!("starting {} {}", mapedit::statics::EN_APP_TITLE, env!("CARGO_PKG_VERSION"));
    mapedit::run_gui().map_err(|e| anyhow::anyhow!("GUI failed: {e}"))
}
