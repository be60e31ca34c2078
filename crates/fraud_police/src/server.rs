// Rust guideline compliant 2026-10-19

//! Listener lifecycle with bounded graceful shutdown.

use std::time::Duration;

use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

/// Serve `router` on `listener` until `shutdown` resolves, then drain.
///
/// A `shutdown` that resolves to an error stops the server without draining
/// and the error is returned.
///
/// Once `shutdown` resolves the listener stops accepting connections and
/// in-flight requests get up to `grace` to complete. If the grace period runs
/// out this returns anyway; connections still open are dropped when the
/// runtime shuts down.
///
/// # Errors
///
/// Returns the I/O error that stopped the accept loop, or the error the
/// `shutdown` future resolved to.
pub async fn serve<S>(
    listener: TcpListener,
    router: Router,
    shutdown: S,
    grace: Duration,
) -> std::io::Result<()>
where
    S: Future<Output = std::io::Result<()>> + Send,
{
    let (stop_tx, stop_rx) = oneshot::channel::<()>();
    let server = axum::serve(listener, router).with_graceful_shutdown(async move {
        // A dropped sender also means stop.
        let _ = stop_rx.await;
    });
    let mut server = std::pin::pin!(server.into_future());

    tokio::select! {
        result = &mut server => return result,
        signal = shutdown => {
            if let Err(e) = signal {
                tracing::error!(error = %e, "server.shutdown: shutdown signal failed, stopping");
                return Err(e);
            }
        }
    }

    tracing::info!(grace_ms = grace.as_millis(), "server.shutdown: draining in-flight requests");
    if stop_tx.send(()).is_err() {
        tracing::debug!("server.shutdown: server already stopped");
    }

    match tokio::time::timeout(grace, server).await {
        Ok(result) => {
            tracing::info!("server.shutdown: drained");
            result
        }
        Err(_elapsed) => {
            tracing::warn!("server.shutdown: grace period elapsed, dropping open connections");
            Ok(())
        }
    }
}
