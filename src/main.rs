use std::{
    path::PathBuf,
    sync::atomic::{AtomicBool, Ordering},
    time::Duration,
};

use courier_config::CourierConfig;
use courier_packet::JsonPacketSerializer;
use courier_pipe::Pipe;
use futures_util::StreamExt;
use log::{error, info};
use signal_hook::consts::signal::{SIGINT, SIGTERM};
use signal_hook_tokio::Signals;
use tokio::io::BufReader;
use tokio_util::sync::CancellationToken;

mod courier_config;

const BANNER: &str = include_str!("asserts/banner.txt");
const TERMINATED_BY_CTRL_C: i32 = 130;
const DEFAULT_CONFIG_PATH: &str = "courier_config.json";

static RECEIVED_SIGNAL: AtomicBool = AtomicBool::new(false);

fn initialize_logger(config: &CourierConfig) -> Result<(), anyhow::Error> {
    if let Some(log_dir) = config.log_file.parent() {
        std::fs::create_dir_all(log_dir)?;
    }

    // Stdout carries the relayed documents, so records go to stderr.
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}-{} ({})|{}",
                chrono::Local::now().format("[%Y-%m-%d %H:%M:%S%.3f]"),
                record.target(),
                record.level(),
                message
            ))
        })
        .level(config.log_level)
        .chain(std::io::stderr())
        .chain(fern::log_file(&config.log_file)?)
        .apply()?;

    Ok(())
}

fn get_configuration() -> Result<CourierConfig, anyhow::Error> {
    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));

    CourierConfig::load(&path)
}

fn signal_handler(pipe_cancellation_token: &CancellationToken) {
    if RECEIVED_SIGNAL.fetch_or(true, Ordering::SeqCst) {
        // Got signal the second time.
        error!("Received a second signal. Exiting the program forcefully.");
        std::process::exit(TERMINATED_BY_CTRL_C);
    }

    info!("Received a signal. Cancelling the pipe...");
    pipe_cancellation_token.cancel();
}

async fn handle_signals(mut signals: Signals, pipe_cancellation_token: CancellationToken) {
    while signals.next().await.is_some() {
        signal_handler(&pipe_cancellation_token);
    }
}

async fn run(config: CourierConfig) -> Result<(), anyhow::Error> {
    let pipe = Pipe::new(config.pipe, JsonPacketSerializer::default());

    let signals = Signals::new([SIGINT, SIGTERM])?;
    let signals_handle = signals.handle();
    let signals_task = tokio::spawn(handle_signals(signals, pipe.get_cancellation_token()));

    let result = pipe
        .run(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
        .await;

    signals_handle.close();
    signals_task.await?;

    let report = result?;
    info!("Pipe has finished. {}", report);

    Ok(())
}

fn main() -> Result<(), anyhow::Error> {
    let config = get_configuration()?;

    initialize_logger(&config)?;

    info!("{}", BANNER);

    let runtime = tokio::runtime::Runtime::new()?;
    let result = runtime.block_on(run(config));

    // A cancelled pipe may leave a blocking stdin read behind, which must not keep the process alive.
    runtime.shutdown_timeout(Duration::from_millis(100));

    result
}
