use std::process;

use subcmd::cli::{build_app, output, CliError};
use subcmd::config::{local_config_path, Settings};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

fn main() {
    let settings = Settings::load(local_config_path().as_deref()).unwrap_or_else(|e| fail(&e));

    setup_logging(settings.verbosity);

    let layout = settings.usage;
    let app = build_app(settings);
    if let Err(e) = subcmd::run(&app, std::env::args().skip(1)) {
        output::error(&e.render(&layout));
        process::exit(e.exit_code());
    }
}

fn fail(e: &CliError) -> ! {
    output::error(e);
    process::exit(e.exit_code());
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        3 => LevelFilter::TRACE,
        _ => {
            eprintln!("Don't be crazy, max verbosity is 3");
            LevelFilter::TRACE
        }
    };

    // Create a subscriber with formatted output directed to stderr
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false)
        .with_span_events(FmtSpan::CLOSE);

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(filter))
        .init();

    match filter {
        LevelFilter::INFO => tracing::info!("Debug mode: info"),
        LevelFilter::DEBUG => tracing::debug!("Debug mode: debug"),
        LevelFilter::TRACE => tracing::debug!("Debug mode: trace"),
        _ => {}
    }
}
