mod backend;
mod cli;
mod producer;

use skymap_common::SkymapError;
use skymap_config::toml_loader::{create_default_config, default_config_path};
use skymap_config::ReloadManager;
use skymap_layers::{LayerManager, ManualModel, SimClock};
use skymap_renderer::RenderLoop;
use skymap_units::LatLong;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, reload, EnvFilter, Registry};

const DEFAULT_DIRECTIVE: &str = "skymap=info";

type FilterHandle = reload::Handle<EnvFilter, Registry>;

fn env_filter(directive: &str) -> EnvFilter {
    match directive
        .parse::<Directive>()
        .or_else(|_| DEFAULT_DIRECTIVE.parse())
    {
        Ok(directive) => EnvFilter::from_default_env().add_directive(directive),
        Err(_) => EnvFilter::from_default_env(),
    }
}

/// Formatter plus a filter that can be swapped once the config is read.
fn logging<W>(directive: &str, writer: W) -> (impl tracing::Subscriber + Send + Sync, FilterHandle)
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let (filter, handle) = reload::Layer::new(env_filter(directive));
    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(writer));
    (subscriber, handle)
}

fn init_logging(directive: &str) -> FilterHandle {
    let (subscriber, handle) = logging(directive, std::io::stderr);
    subscriber.init();
    handle
}

fn config_path(args: &cli::Args) -> Result<PathBuf, SkymapError> {
    if let Some(path) = &args.config {
        return Ok(PathBuf::from(path));
    }
    let path = default_config_path()?;
    create_default_config(&path)?;
    Ok(path)
}

fn run(args: cli::Args) -> Result<(), SkymapError> {
    // The config watcher lives on this runtime for the whole run.
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()?;

    // Installed before the first load so its warnings are seen.
    let filter = init_logging(args.log_level.as_deref().unwrap_or(DEFAULT_DIRECTIVE));

    let path = config_path(&args)?;
    let (config, reloads) = runtime.block_on(ReloadManager::start(path.clone()));
    if args.print_config {
        println!("{}", skymap_config::config_to_json(&config));
        return Ok(());
    }

    if args.log_level.is_none() {
        if let Err(e) = filter.reload(env_filter(config.logging.level.directive())) {
            tracing::warn!("keeping startup log level: {e}");
        }
    }

    tracing::info!("skymap v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!("using config {}", path.display());

    let location = LatLong::new(
        args.lat.unwrap_or(config.observer.latitude) as f32,
        args.lon.unwrap_or(config.observer.longitude) as f32,
    );
    let model = Arc::new(ManualModel::new(
        location,
        SimClock::running(config.observer.time_speed),
    ));
    tracing::info!(
        latitude = location.latitude,
        longitude = location.longitude,
        "observer placed"
    );

    let (controller, queue) = skymap_renderer::channel();
    let layers = LayerManager::from_config(model.clone(), &config.layers);
    let shutdown = Arc::new(AtomicBool::new(false));

    let render = {
        let shutdown = Arc::clone(&shutdown);
        let frame_rate = config.renderer.frame_rate;
        let max_sections = config.renderer.max_sections_per_frame as usize;
        std::thread::Builder::new()
            .name("render".into())
            .spawn(move || {
                let mut render_loop = RenderLoop::new(queue, max_sections);
                let mut backend = backend::HeadlessBackend::new();
                render_loop.run(&mut backend, frame_rate, &shutdown);
            })?
    };

    let producer = {
        let shutdown = Arc::clone(&shutdown);
        let producer = producer::Producer::new(layers, controller, model, config, reloads);
        std::thread::Builder::new()
            .name("producer".into())
            .spawn(move || producer.run(&shutdown))?
    };

    std::thread::sleep(Duration::from_secs(args.seconds));
    tracing::info!("shutting down");
    shutdown.store(true, Ordering::Release);

    for (name, handle) in [("producer", producer), ("render", render)] {
        if handle.join().is_err() {
            return Err(SkymapError::Other(format!("{name} thread panicked")));
        }
    }

    runtime.shutdown_timeout(Duration::from_millis(100));
    tracing::info!("shutdown complete");
    Ok(())
}

fn main() {
    let args = cli::parse();
    if let Err(e) = run(args) {
        tracing::error!("skymap failed: {e}");
        eprintln!("skymap: {e}");
        std::process::exit(1);
    }
}
