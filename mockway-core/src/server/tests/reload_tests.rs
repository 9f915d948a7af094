use crate::server::{ReloadEvent, ReloadHandle, ReloadTrigger};
use pretty_assertions::assert_eq;

#[tokio::test]
async fn reload_requests_reach_subscribers_in_order() {
    // Arrange
    let handle = ReloadHandle::new();
    let mut rx = handle.subscribe();

    // Act
    handle.request_reload(ReloadTrigger::Hangup);
    rx.changed().await.unwrap();
    let first = *rx.borrow_and_update();

    handle.request_reload(ReloadTrigger::Manual);
    rx.changed().await.unwrap();
    let second = *rx.borrow_and_update();

    // Assert
    assert_eq!(
        first,
        ReloadEvent {
            epoch: 1,
            trigger: ReloadTrigger::Hangup
        }
    );
    assert_eq!(
        second,
        ReloadEvent {
            epoch: 2,
            trigger: ReloadTrigger::Manual
        }
    );
}

#[test]
fn separate_handles_count_independently() {
    // Arrange
    let a = ReloadHandle::new();
    let b = ReloadHandle::new();
    let a_clone = a.clone();

    // Act
    a.request_reload(ReloadTrigger::Manual);
    a_clone.request_reload(ReloadTrigger::Manual);
    let event = b.request_reload(ReloadTrigger::Hangup);

    // Assert
    assert_eq!(a.epoch(), 2);
    assert_eq!(b.epoch(), 1);
    assert_eq!(event.trigger, ReloadTrigger::Hangup);
}

#[test]
fn fresh_handle_starts_at_epoch_zero() {
    let handle = ReloadHandle::new();

    assert_eq!(handle.epoch(), 0);
    assert_eq!(handle.subscribe().borrow().trigger, ReloadTrigger::Startup);
}
