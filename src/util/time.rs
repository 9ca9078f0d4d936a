/// Seconds since the UNIX epoch, used for timestamped file names and
/// snapshot metadata.
#[cfg(not(target_arch = "wasm32"))]
pub fn timestamp_secs() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

/// Seconds since the UNIX epoch. The browser only hands us a performance
/// clock, which is still monotonic enough for unique file names.
#[cfg(target_arch = "wasm32")]
pub fn timestamp_secs() -> u64 {
    web_sys::window()
        .and_then(|window| window.performance())
        .map(|perf| (perf.now() / 1000.0) as u64)
        .unwrap_or(0)
}
