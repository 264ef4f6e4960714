use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use tag::{Phase, Tag, TagConfig, TagError, TagResult};
use tagdom::{Geometry, LayoutGeometry};

fn counter() -> (Arc<AtomicUsize>, impl Fn() + Send + Sync + 'static) {
    let count = Arc::new(AtomicUsize::new(0));
    let sink = count.clone();
    (count, move || {
        sink.fetch_add(1, Ordering::SeqCst);
    })
}

fn mounted(tag: &Tag) -> LayoutGeometry {
    LayoutGeometry::from_root(&tag.render())
}

// =============================================================================
// Close request
// =============================================================================

#[test]
fn test_request_close_pins_width_and_flags_closing() {
    let mut tag = Tag::new(TagConfig::new("news").closable());
    let mut geometry = mounted(&tag);
    let width = geometry.measure_width(tag.id()).unwrap();

    assert_eq!(tag.request_close(&mut geometry), Ok(TagResult::Closing));
    assert!(tag.is_closing());
    assert!(!tag.is_closed());
    assert_eq!(tag.pinned_width(), Some(width));
    assert_eq!(geometry.pinned_width(tag.id()), Some(width));
    assert_eq!(geometry.write_count(), 1);
}

#[test]
fn test_canceled_request_changes_nothing() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    let mut tag = Tag::new(TagConfig::new("news").closable().on_request_close(move |event| {
        sink.lock().unwrap().push(event.target().to_string());
        event.prevent_default();
    }));
    let mut geometry = mounted(&tag);

    assert_eq!(tag.request_close(&mut geometry), Ok(TagResult::Canceled));
    assert_eq!(tag.phase(), Phase::Idle);
    assert_eq!(geometry.write_count(), 0);
    assert_eq!(tag.pinned_width(), None);
    assert_eq!(*seen.lock().unwrap(), vec![tag.id().to_string()]);
}

#[test]
fn test_handler_without_prevent_default_closes() {
    let (calls, on_request) = counter();
    let mut tag = Tag::new(
        TagConfig::new("news")
            .closable()
            .on_request_close(move |_| on_request()),
    );
    let mut geometry = mounted(&tag);

    assert_eq!(tag.request_close(&mut geometry), Ok(TagResult::Closing));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_request_close_while_closing_is_ignored() {
    let (calls, on_request) = counter();
    let mut tag = Tag::new(
        TagConfig::new("news")
            .closable()
            .on_request_close(move |_| on_request()),
    );
    let mut geometry = mounted(&tag);

    tag.request_close(&mut geometry).unwrap();
    assert_eq!(tag.request_close(&mut geometry), Ok(TagResult::Ignored));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(geometry.write_count(), 1);
}

#[test]
fn test_request_close_unmounted_errors() {
    let (requests, on_request) = counter();
    let mut tag = Tag::new(
        TagConfig::new("news")
            .id("lonely")
            .closable()
            .on_request_close(move |_| on_request()),
    );
    let mut geometry = LayoutGeometry::default();

    for _ in 0..2 {
        assert_eq!(
            tag.request_close(&mut geometry),
            Err(TagError::NotMounted {
                id: "lonely".into()
            })
        );
    }
    assert_eq!(tag.phase(), Phase::Idle);
    // Nothing was announced for a close that never started
    assert_eq!(requests.load(Ordering::SeqCst), 0);
    assert_eq!(geometry.write_count(), 0);
}

#[test]
fn test_toggle_disabled_once_closing() {
    let (toggles, on_toggle) = counter();
    let mut tag = Tag::new(TagConfig::new("news").on_toggle(move |_| on_toggle()));
    let mut geometry = mounted(&tag);

    tag.request_close(&mut geometry).unwrap();
    assert_eq!(tag.toggle(), TagResult::Ignored);
    assert!(!tag.is_checked());
    assert_eq!(toggles.load(Ordering::SeqCst), 0);
}

// =============================================================================
// Transition settle
// =============================================================================

#[test]
fn test_exit_settle_closes_once() {
    let (closed, on_closed) = counter();
    let mut tag = Tag::new(TagConfig::new("news").closable().on_closed(on_closed));
    let mut geometry = mounted(&tag);
    let key = tag.id().to_string();

    tag.request_close(&mut geometry).unwrap();
    assert_eq!(tag.on_transition_settled(&key, false), TagResult::Closed);
    assert!(tag.is_closed());
    assert!(!tag.is_closing());
    assert_eq!(closed.load(Ordering::SeqCst), 1);

    assert_eq!(tag.on_transition_settled(&key, false), TagResult::Ignored);
    assert_eq!(tag.on_transition_settled(&key, true), TagResult::Ignored);
    assert_eq!(closed.load(Ordering::SeqCst), 1);
    assert!(tag.is_closed());
}

#[test]
fn test_enter_settle_never_changes_state() {
    let (closed, on_closed) = counter();
    let mut tag = Tag::new(TagConfig::new("news").on_closed(on_closed));
    let mut geometry = mounted(&tag);
    let key = tag.id().to_string();

    assert_eq!(tag.on_transition_settled(&key, true), TagResult::Ignored);
    assert_eq!(tag.phase(), Phase::Idle);

    tag.request_close(&mut geometry).unwrap();
    assert_eq!(tag.on_transition_settled(&key, true), TagResult::Ignored);
    assert_eq!(tag.phase(), Phase::Closing);

    tag.on_transition_settled(&key, false);
    assert_eq!(tag.on_transition_settled(&key, true), TagResult::Ignored);
    assert_eq!(tag.phase(), Phase::Closed);
    assert_eq!(closed.load(Ordering::SeqCst), 1);
}

#[test]
fn test_settle_key_is_not_matched() {
    // The driver's key is informational; the owner routes settles per tag
    let (closed, on_closed) = counter();
    let mut tag = Tag::new(TagConfig::new("news").on_closed(on_closed));
    let mut geometry = mounted(&tag);

    tag.request_close(&mut geometry).unwrap();
    assert_eq!(tag.on_transition_settled("other", false), TagResult::Closed);
    assert!(tag.state().closed());
    assert!(!tag.state().closing());
    assert_eq!(closed.load(Ordering::SeqCst), 1);
}

// =============================================================================
// Click routing
// =============================================================================

#[test]
fn test_close_click_does_not_toggle() {
    let (toggles, on_toggle) = counter();
    let mut tag = Tag::new(
        TagConfig::new("news")
            .closable()
            .on_toggle(move |_| on_toggle()),
    );
    let mut geometry = mounted(&tag);
    let close = tag.close_icon_id();

    assert_eq!(
        tag.handle_click(&close, &mut geometry),
        Ok(TagResult::Closing)
    );
    assert_eq!(toggles.load(Ordering::SeqCst), 0);
    assert!(!tag.is_checked());
}

#[test]
fn test_body_and_text_clicks_toggle() {
    let mut tag = Tag::new(TagConfig::new("news").closable());
    let mut geometry = mounted(&tag);

    let body = tag.id().to_string();
    assert_eq!(tag.handle_click(&body, &mut geometry), Ok(TagResult::Changed));
    assert!(tag.is_checked());

    let text = tag.text_id();
    assert_eq!(tag.handle_click(&text, &mut geometry), Ok(TagResult::Changed));
    assert!(!tag.is_checked());

    assert_eq!(
        tag.handle_click("elsewhere", &mut geometry),
        Ok(TagResult::Ignored)
    );
}
