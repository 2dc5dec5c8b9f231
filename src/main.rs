use tracing_subscriber::EnvFilter;

fn main() {
    // Logs go to stderr; stdout carries the address book output.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = address_book::cli::run_demo(&mut out) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
