pub fn setup_logging(verbose_level: u8) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        // Use RUST_LOG if set
        tracing_subscriber::EnvFilter::from_default_env()
    } else {
        // Map verbosity count to filters
        let filter_str = match verbose_level {
            0 => "warn,onboard_scheduler=info",
            1 => "info,onboard_scheduler=debug",
            _ => "debug,onboard_scheduler=trace",
        };
        tracing_subscriber::EnvFilter::new(filter_str)
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(true)
        .with_line_number(true)
        .init();
}
