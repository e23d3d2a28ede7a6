use std::time::Duration;

/// Suspend for a simulated network round trip. Zero returns immediately.
pub async fn simulate(ms: u64) {
    if ms == 0 {
        return;
    }
    let delay = Duration::from_millis(ms);

    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(delay).await;

    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(delay).await;
}
