use std::collections::HashSet;
use std::time::{Duration, Instant};

use tagdom::animation::{collect_element_ids, Phase};
use tagdom::{Easing, Element, Settled, TransitionConfig, TransitionDriver, ZoomTransition};

fn zoom() -> ZoomTransition {
    ZoomTransition::new(
        "tag-zoom",
        TransitionConfig::new(Duration::from_millis(200), Easing::Linear),
    )
}

fn settled(key: &str, present: bool) -> Settled {
    Settled {
        key: key.to_string(),
        present,
    }
}

// =============================================================================
// Easing Function Tests
// =============================================================================

#[test]
fn test_easing_boundaries() {
    // All easing functions should map 0->0 and 1->1
    for easing in [
        Easing::Linear,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
    ] {
        assert_eq!(easing.apply(0.0), 0.0, "{:?} at 0", easing);
        assert_eq!(easing.apply(1.0), 1.0, "{:?} at 1", easing);
    }
}

#[test]
fn test_easing_midpoints() {
    assert_eq!(Easing::Linear.apply(0.5), 0.5);
    assert_eq!(Easing::EaseIn.apply(0.5), 0.25);
    assert_eq!(Easing::EaseOut.apply(0.5), 0.75);
    assert_eq!(Easing::EaseInOut.apply(0.5), 0.5);
}

#[test]
fn test_transition_config_progress() {
    let config = TransitionConfig::new(Duration::from_millis(200), Easing::Linear);
    assert_eq!(config.progress(Duration::ZERO), 0.0);
    assert!((config.progress(Duration::from_millis(100)) - 0.5).abs() < 1e-6);
    assert_eq!(config.progress(Duration::from_millis(500)), 1.0);

    let instant = TransitionConfig::new(Duration::ZERO, Easing::Linear);
    assert_eq!(instant.progress(Duration::ZERO), 1.0);
}

// =============================================================================
// Enter / Leave
// =============================================================================

#[test]
fn test_shown_without_appear_is_static() {
    let mut zoom = zoom();
    let t0 = Instant::now();

    zoom.sync("a", true, t0);
    assert_eq!(zoom.phase("a"), Some(Phase::Shown));
    assert!(!zoom.is_animating());
    assert!(zoom.tick(t0 + Duration::from_secs(1)).is_empty());
}

#[test]
fn test_appear_settles_present_once() {
    let mut zoom = zoom().appear(true);
    let t0 = Instant::now();

    zoom.sync("a", true, t0);
    assert_eq!(zoom.phase("a"), Some(Phase::Entering));
    assert_eq!(
        zoom.classes("a"),
        vec!["tag-zoom-appear".to_string(), "tag-zoom-appear-active".to_string()]
    );

    assert!(zoom.tick(t0 + Duration::from_millis(100)).is_empty());
    assert_eq!(
        zoom.tick(t0 + Duration::from_millis(200)),
        vec![settled("a", true)]
    );
    assert!(zoom.tick(t0 + Duration::from_millis(400)).is_empty());
    assert_eq!(zoom.phase("a"), Some(Phase::Shown));
    assert!(zoom.classes("a").is_empty());
}

#[test]
fn test_leave_settles_absent_once() {
    let mut zoom = zoom();
    let t0 = Instant::now();

    zoom.sync("a", true, t0);
    zoom.sync("a", false, t0);
    assert_eq!(zoom.phase("a"), Some(Phase::Leaving));
    assert_eq!(
        zoom.classes("a"),
        vec!["tag-zoom-leave".to_string(), "tag-zoom-leave-active".to_string()]
    );

    // Repeated syncs with the same flag do not restart the transition
    zoom.sync("a", false, t0 + Duration::from_millis(150));

    let settled_now = zoom.tick(t0 + Duration::from_millis(200));
    assert_eq!(settled_now, vec![settled("a", false)]);
    assert!(zoom.tick(t0 + Duration::from_millis(300)).is_empty());
    assert_eq!(zoom.phase("a"), Some(Phase::Hidden));
}

#[test]
fn test_first_seen_hidden_settles_absent() {
    let mut zoom = zoom().appear(true);
    let t0 = Instant::now();

    zoom.sync("a", false, t0);
    assert_eq!(zoom.phase("a"), Some(Phase::Hidden));
    assert!(zoom.is_animating());

    assert_eq!(zoom.tick(t0), vec![settled("a", false)]);
    zoom.sync("a", false, t0 + Duration::from_millis(50));
    assert!(zoom.tick(t0 + Duration::from_millis(400)).is_empty());
}

#[test]
fn test_scale_interpolates() {
    let mut zoom = zoom();
    let t0 = Instant::now();

    zoom.sync("a", true, t0);
    assert_eq!(zoom.scale("a", t0), Some(1.0));

    zoom.sync("a", false, t0);
    let half = zoom.scale("a", t0 + Duration::from_millis(100)).unwrap();
    assert!((half - 0.5).abs() < 0.01, "got {half}");
    assert_eq!(zoom.scale("missing", t0), None);
}

#[test]
fn test_reversal_starts_from_current_value() {
    let mut zoom = zoom();
    let t0 = Instant::now();

    zoom.sync("a", true, t0);
    zoom.sync("a", false, t0);
    // Halfway out, show again
    let t1 = t0 + Duration::from_millis(100);
    zoom.sync("a", true, t1);
    assert_eq!(zoom.phase("a"), Some(Phase::Entering));
    let start = zoom.scale("a", t1).unwrap();
    assert!((start - 0.5).abs() < 0.01, "got {start}");

    // The interrupted leave never settles
    let events = zoom.tick(t1 + Duration::from_millis(200));
    assert_eq!(events, vec![settled("a", true)]);
}

#[test]
fn test_reduced_motion_settles_on_next_tick() {
    let mut zoom = zoom();
    zoom.set_reduced_motion(true);
    let t0 = Instant::now();

    zoom.sync("a", true, t0);
    zoom.sync("a", false, t0);
    assert_eq!(zoom.phase("a"), Some(Phase::Hidden));
    assert!(zoom.is_animating());

    assert_eq!(zoom.tick(t0), vec![settled("a", false)]);
    assert!(!zoom.is_animating());
}

#[test]
fn test_independent_keys() {
    let mut zoom = zoom();
    let t0 = Instant::now();

    zoom.sync("a", true, t0);
    zoom.sync("b", true, t0);
    zoom.sync("b", false, t0);

    assert_eq!(zoom.phase("a"), Some(Phase::Shown));
    assert_eq!(
        zoom.tick(t0 + Duration::from_millis(200)),
        vec![settled("b", false)]
    );
}

// =============================================================================
// Tree Sync
// =============================================================================

#[test]
fn test_sync_tree_reads_show_flag() {
    let mut zoom = zoom();
    let t0 = Instant::now();

    let tree = |show: bool| {
        Element::box_()
            .id("wrapper")
            .child(Element::text("x").id("tag").data("show", show.to_string()))
    };

    zoom.sync_tree(&tree(true), t0);
    assert_eq!(zoom.phase("tag"), Some(Phase::Shown));
    assert_eq!(zoom.phase("wrapper"), None);

    zoom.sync_tree(&tree(false), t0);
    assert_eq!(zoom.phase("tag"), Some(Phase::Leaving));
}

#[test]
fn test_cleanup_drops_missing_keys() {
    let mut zoom = zoom();
    let t0 = Instant::now();
    zoom.sync("a", true, t0);
    zoom.sync("b", true, t0);

    let root = Element::box_().id("a");
    let ids: HashSet<String> = collect_element_ids(&root);
    zoom.cleanup(&ids);

    assert!(zoom.phase("a").is_some());
    assert!(zoom.phase("b").is_none());
}
