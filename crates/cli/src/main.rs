use clap::Parser;
use config::Config;
use podium::{app, cli::Cli};
use std::io;
use tracing::debug;
use tracing_log::AsTrace;

#[cfg(feature = "jemalloc")]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(cli.verbosity.log_level_filter().as_trace())
        .with_level(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    debug!(config = ?cli);

    let config = match cli.conffile {
        Some(ref path) => Config::load(path)?,
        _ => Config::new(),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    app::run(&cli.command, &config, &mut out)?;
    Ok(())
}
