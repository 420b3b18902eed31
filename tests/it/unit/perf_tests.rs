//! Unit tests for perf module.

use empathyboard::perf::ScopedTimer;

#[test]
fn test_scoped_timer_creation() {
    // High threshold, so dropping it logs nothing
    let timer = ScopedTimer::new("test_operation", 1000.0);
    drop(timer);
}

#[test]
fn test_profiling_timer_drops_cleanly() {
    let timer = ScopedTimer::for_profiling("profiled");
    assert!(timer.elapsed_ms() >= 0.0);
}

#[test]
fn test_elapsed_is_monotonic() {
    let timer = ScopedTimer::new("elapsed", 1000.0);
    let first = timer.elapsed_ms();
    let second = timer.elapsed_ms();
    assert!(first >= 0.0);
    assert!(second >= first);
}
