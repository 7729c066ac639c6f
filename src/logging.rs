use tracing_subscriber::EnvFilter;

/// Logging stays off unless `RUST_LOG` asks for it. Events go to stderr
/// without colors.
///
/// stderr shares the tty with the alternate screen, so setting `RUST_LOG`
/// needs a redirect (`RUST_LOG=debug wildflower 2>game.log`) or the log
/// lines get drawn over the UI.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .compact()
        .init();
}
