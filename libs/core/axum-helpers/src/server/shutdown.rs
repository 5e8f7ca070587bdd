use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::signal;
use tokio::sync::broadcast;
use tracing::{error, info};

/// One-shot shutdown broadcast shared between the server and its cleanup task
///
/// The receiver returned by [`new`](Self::new) is notified once, when
/// [`until_signal`](Self::until_signal) sees a termination signal.
#[derive(Clone)]
pub struct ShutdownCoordinator {
    tx: broadcast::Sender<()>,
    triggered: Arc<AtomicBool>,
}

impl ShutdownCoordinator {
    pub fn new() -> (Self, broadcast::Receiver<()>) {
        let (tx, rx) = broadcast::channel(1);
        let coordinator = Self {
            tx,
            triggered: Arc::new(AtomicBool::new(false)),
        };
        (coordinator, rx)
    }

    fn trigger(&self) {
        if !self.triggered.swap(true, Ordering::AcqRel) {
            info!("Initiating graceful shutdown");
            let _ = self.tx.send(());
        }
    }

    /// Resolve on SIGINT or SIGTERM, after triggering shutdown
    ///
    /// Passed to `axum::serve(..).with_graceful_shutdown`.
    pub async fn until_signal(self) {
        termination_signal().await;
        self.trigger();
    }
}

/// A handler that fails to install never resolves, leaving the other one in charge
async fn termination_signal() {
    let interrupt = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install SIGINT handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = interrupt => info!("Received SIGINT"),
        _ = terminate => info!("Received SIGTERM"),
    }
}
