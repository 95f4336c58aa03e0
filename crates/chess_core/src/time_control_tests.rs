use super::*;
use std::thread;

#[test]
fn test_search_limits_depth_only() {
    let limits = SearchLimits::depth(5);
    assert_eq!(limits.depth, 5);
    assert!(limits.move_time.is_none());
    let tc = limits.start();
    assert!(!tc.check_time());
    assert_eq!(tc.remaining(), None);
}

#[test]
fn test_search_limits_with_time() {
    let limits = SearchLimits::depth_and_time(4, Duration::from_millis(100));
    assert_eq!(limits.depth, 4);
    assert_eq!(limits.move_time, Some(Duration::from_millis(100)));
    assert_eq!(SearchLimits::time(Duration::from_secs(1)).depth, u8::MAX);
}

#[test]
fn test_time_control_expiry() {
    let tc = SearchLimits::depth_and_time(4, Duration::from_millis(10)).start();
    assert!(!tc.is_stopped());

    thread::sleep(Duration::from_millis(20));
    assert!(tc.check_time());
    assert!(tc.is_stopped());
    assert_eq!(tc.remaining(), Some(Duration::ZERO));
}

#[test]
fn test_stop_handle_from_outside() {
    let limits = SearchLimits::depth(6);
    let tc = limits.start();
    assert!(!tc.is_stopped());
    limits.stop.stop();
    assert!(tc.is_stopped());

    // A new search clears the flag
    let tc = limits.start();
    assert!(!tc.is_stopped());
}

#[test]
fn test_check_interval() {
    let tc = TimeControl::unlimited();
    assert_eq!(tc.check_interval(), 1024);
    assert!(!tc.check_time());
}
