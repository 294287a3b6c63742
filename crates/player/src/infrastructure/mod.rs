#[cfg(not(target_arch = "wasm32"))]
pub mod http_client;
pub mod platform;
pub mod spawn;

#[cfg(any(test, feature = "testing"))]
pub mod testing;
