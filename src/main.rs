use std::env;

mod app;
mod config;
mod runtime;
mod scroller;
mod track;
mod ui;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logger()?;
    runtime::run()
}

/// Route logs to a file when `OSTINATO_LOG_FILE` is set; stderr writes
/// would tear the alternate screen while the UI is live.
fn init_logger() -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = env::var_os("OSTINATO_LOG_FILE") {
        let file = std::fs::File::create(path)?;
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
            .format_timestamp_millis()
            .target(env_logger::Target::Pipe(Box::new(file)))
            .init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    Ok(())
}
