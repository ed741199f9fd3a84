use std::sync::OnceLock;

fn parse_env_usize(name: &str, default: usize) -> usize {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(default)
}

static SEGMENT_TRACE: OnceLock<bool> = OnceLock::new();

/// Per-segment tracing, switched on by setting `QR_DEBUG`.
pub(crate) fn debug_enabled() -> bool {
    *SEGMENT_TRACE.get_or_init(|| std::env::var_os("QR_DEBUG").is_some())
}

static PARALLEL_MIN_BATCH: OnceLock<usize> = OnceLock::new();

/// Smallest batch that [`decode_payloads`](crate::decode_payloads) splits across threads.
pub fn parallel_min_batch() -> usize {
    *PARALLEL_MIN_BATCH.get_or_init(|| parse_env_usize("QR_PARALLEL_MIN_BATCH", 64).max(1))
}
