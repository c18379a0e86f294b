//! Shutdown signal handling

use colored::Colorize;

/// Signal that ended the server
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownSignal {
    /// SIGINT (Ctrl+C)
    Interrupt,
    /// SIGTERM
    Terminate,
}

impl ShutdownSignal {
    /// Conventional signal name
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Interrupt => "SIGINT",
            Self::Terminate => "SIGTERM",
        }
    }
}

/// Wait for SIGINT or SIGTERM
#[cfg(unix)]
pub async fn wait_for_shutdown() -> ShutdownSignal {
    use tokio::signal::unix::{signal, SignalKind};

    let (mut sigint, mut sigterm) = match (
        signal(SignalKind::interrupt()),
        signal(SignalKind::terminate()),
    ) {
        (Ok(sigint), Ok(sigterm)) => (sigint, sigterm),
        (Err(e), _) | (_, Err(e)) => {
            tracing::warn!(error = %e, "failed to install signal handlers, using Ctrl+C only");
            return ctrl_c().await;
        }
    };

    tokio::select! {
        _ = sigint.recv() => ShutdownSignal::Interrupt,
        _ = sigterm.recv() => ShutdownSignal::Terminate,
    }
}

/// Wait for Ctrl+C
#[cfg(not(unix))]
pub async fn wait_for_shutdown() -> ShutdownSignal {
    ctrl_c().await
}

async fn ctrl_c() -> ShutdownSignal {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for Ctrl+C");
        // Never resolve, the server keeps running until killed
        std::future::pending::<()>().await;
    }
    ShutdownSignal::Interrupt
}

/// Graceful shutdown future for the HTTP server
pub async fn shutdown_signal() {
    let signal = wait_for_shutdown().await;
    eprintln!("{} Received {} (shutdown)", "↓".cyan(), signal.name());
    tracing::info!(signal = signal.name(), "shutting down");
}
