//! Async delays for UI timers. Native builds run on tokio; the web renderer
//! has no tokio time driver, so wasm waits on a browser timeout.

use std::time::Duration;

#[cfg(not(target_arch = "wasm32"))]
pub async fn delay(duration: Duration) {
    tokio::time::sleep(duration).await;
}

#[cfg(target_arch = "wasm32")]
pub async fn delay(duration: Duration) {
    let millis = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
    gloo_timers::future::TimeoutFuture::new(millis).await;
}
