// Accept loop module
// Runs until the shutdown future resolves, then drains open connections

use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;

use super::connection::accept_connection;
use crate::config::AppState;
use crate::logger;

/// Accept connections on `listener` until `shutdown` resolves.
///
/// `shutdown` yields a short description of why the server stops, which
/// is logged. The listener is then closed and open connections get up to
/// the per-connection timeout to finish before this returns.
pub async fn serve<F>(listener: TcpListener, state: Arc<AppState>, shutdown: F)
where
    F: Future<Output = &'static str>,
{
    let active_connections = Arc::new(AtomicUsize::new(0));
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => {
                        accept_connection(stream, peer_addr, &state, &active_connections);
                    }
                    Err(e) => logger::log_error(&format!("Failed to accept connection: {e}")),
                }
            }

            reason = &mut shutdown => {
                logger::log_shutdown(reason);
                break;
            }
        }
    }

    drop(listener);

    let perf = &state.config.performance;
    let grace = Duration::from_secs(perf.read_timeout.max(perf.write_timeout));
    let remaining = wait_for_connections(&active_connections, grace).await;
    if remaining > 0 {
        logger::log_warning(&format!(
            "[Shutdown] {remaining} connection(s) still open after {}s, closing",
            grace.as_secs()
        ));
    }
}

/// Wait until `counter` reaches zero or `grace` elapses.
///
/// Returns the number of connections still open.
async fn wait_for_connections(counter: &AtomicUsize, grace: Duration) -> usize {
    const POLL_INTERVAL: Duration = Duration::from_millis(25);

    let deadline = tokio::time::Instant::now() + grace;
    loop {
        let open = counter.load(Ordering::SeqCst);
        if open == 0 || tokio::time::Instant::now() >= deadline {
            return open;
        }
        tokio::time::sleep(POLL_INTERVAL).await;
    }
}
