use anyhow::Result;
use photo_select::export::{sources_for_copy, ChannelSink, CopyEvent, CopyJob, CopyPipeline};
use photo_select::utils;
use photo_select::{CancelToken, ViewerSession};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    utils::logging::init_tracing();

    let config = utils::config::load_config()?;
    info!("Starting Photo Select v{}", env!("CARGO_PKG_VERSION"));
    info!("Zoom levels {}..={} (factor {})", config.zoom_min, config.zoom_max, config.zoom_factor);

    let mut session = ViewerSession::from_config(&config);
    match session.load_folder(&config.start_dir) {
        Ok(count) => info!("Browsing {:?}: {} images", config.start_dir, count),
        Err(e) => warn!("Could not open start folder: {}", e),
    }

    let (manifest, dest) = match (&config.export_manifest, &config.export_dest) {
        (Some(manifest), Some(dest)) => (manifest.clone(), dest.clone()),
        _ => {
            info!("Nothing to export; set PHOTOSEL_EXPORT_MANIFEST and PHOTOSEL_EXPORT_DEST");
            return Ok(());
        }
    };

    let sources = sources_for_copy(Vec::new(), Some(&manifest), &dest)?;
    let job = CopyJob::new(sources, dest);

    let (event_tx, event_rx) = crossbeam_channel::unbounded();
    let pipeline = CopyPipeline::current()?;
    let handle = pipeline.start(&job, ChannelSink::new(event_tx), CancelToken::new())?;

    // Drains until the worker drops its sender
    let reporter = tokio::task::spawn_blocking(move || {
        for event in event_rx.iter() {
            match event {
                CopyEvent::Progress(update) => {
                    info!("Copied {}/{} ({:.1}%)", update.completed, update.total, update.percent)
                }
                CopyEvent::Completed(summary) => {
                    info!("Files copied: {} attempted, {} failed", summary.completed, summary.failed)
                }
            }
        }
    });

    let cancel = handle.cancel_token();
    let watcher = tokio::spawn(async move {
        shutdown_signal().await;
        warn!("Cancelling copy; files already copied are kept");
        cancel.cancel();
    });

    let summary = handle.wait().await;
    watcher.abort();
    let _ = reporter.await;

    info!("Job {} finished: {:?}", summary.id, summary.status);
    Ok(())
}

async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
