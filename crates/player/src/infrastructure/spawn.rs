//! Delayed task spawning for the current target
//!
//! Native builds run on the tokio runtime; browser builds use the
//! JavaScript event loop.

use std::time::Duration;

/// Run `task` once `delay` has elapsed. Must be called inside a tokio
/// runtime on native targets.
#[cfg(not(target_arch = "wasm32"))]
pub fn spawn_delayed(delay: Duration, task: impl FnOnce() + Send + 'static) {
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        task();
    });
}

#[cfg(target_arch = "wasm32")]
pub fn spawn_delayed(delay: Duration, task: impl FnOnce() + Send + 'static) {
    wasm_bindgen_futures::spawn_local(async move {
        gloo_timers::future::sleep(delay).await;
        task();
    });
}
