use std::collections::{BTreeMap, HashSet};
use std::time::Instant;

use log::{debug, trace};

use crate::element::Element;
use crate::transitions::TransitionConfig;

/// Notification that a transition on `key` has finished.
///
/// `present` is true when an enter transition settled and the element is
/// still shown, false when a leave transition settled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settled {
    pub key: String,
    pub present: bool,
}

/// Drives enter/leave transitions from a per-render show flag.
pub trait TransitionDriver {
    /// Report the current show flag for `key`. Called once per render.
    ///
    /// A key first seen hidden settles as absent on the next tick.
    fn sync(&mut self, key: &str, show: bool, now: Instant);

    /// Advance to `now` and return every transition that completed since the
    /// previous tick. Each completed transition is reported exactly once.
    fn tick(&mut self, now: Instant) -> Vec<Settled>;
}

/// Phase of a single tracked element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Entering,
    Shown,
    Leaving,
    Hidden,
}

#[derive(Debug, Clone)]
struct Motion {
    phase: Phase,
    /// Enter transition that started on first sight of the key.
    appearing: bool,
    from: f32,
    to: f32,
    start: Instant,
}

/// Scale transition keyed by element id, named after a class prefix.
///
/// Class names follow the `<name>-enter`, `<name>-enter-active`,
/// `<name>-leave`, `<name>-leave-active` convention (`<name>-appear` for the
/// first enter when appear is enabled).
#[derive(Debug)]
pub struct ZoomTransition {
    name: String,
    config: TransitionConfig,
    appear: bool,
    /// Reduced motion flag - when true, transitions settle on the next tick.
    reduced_motion: bool,
    motions: BTreeMap<String, Motion>,
    pending: Vec<Settled>,
}

impl ZoomTransition {
    pub fn new(name: impl Into<String>, config: TransitionConfig) -> Self {
        Self {
            name: name.into(),
            config,
            appear: false,
            reduced_motion: false,
            motions: BTreeMap::new(),
            pending: Vec::new(),
        }
    }

    /// Run an enter transition for elements that are shown on first sight.
    pub fn appear(mut self, appear: bool) -> Self {
        self.appear = appear;
        self
    }

    /// Enable or disable reduced motion (accessibility).
    pub fn set_reduced_motion(&mut self, enabled: bool) {
        self.reduced_motion = enabled;
    }

    pub fn phase(&self, key: &str) -> Option<Phase> {
        self.motions.get(key).map(|m| m.phase)
    }

    /// Returns true if any transition is in flight or waiting to be reported.
    pub fn is_animating(&self) -> bool {
        !self.pending.is_empty()
            || self
                .motions
                .values()
                .any(|m| matches!(m.phase, Phase::Entering | Phase::Leaving))
    }

    /// Current scale of `key`: 0.0 fully hidden, 1.0 fully shown.
    pub fn scale(&self, key: &str, now: Instant) -> Option<f32> {
        let motion = self.motions.get(key)?;
        Some(self.value_at(motion, now))
    }

    /// Transition classes the renderer should add to `key` right now.
    pub fn classes(&self, key: &str) -> Vec<String> {
        let Some(motion) = self.motions.get(key) else {
            return Vec::new();
        };

        let stage = match motion.phase {
            Phase::Entering if motion.appearing => "appear",
            Phase::Entering => "enter",
            Phase::Leaving => "leave",
            Phase::Shown | Phase::Hidden => return Vec::new(),
        };
        vec![
            format!("{}-{stage}", self.name),
            format!("{}-{stage}-active", self.name),
        ]
    }

    /// Sync every element in the tree that carries a `data-show` flag.
    pub fn sync_tree(&mut self, root: &Element, now: Instant) {
        if let Some(show) = root.get_data("show") {
            self.sync(&root.id, show == "true", now);
        }
        for child in root.child_elements() {
            self.sync_tree(child, now);
        }
    }

    /// Forget keys that are no longer in the tree.
    pub fn cleanup(&mut self, current_ids: &HashSet<String>) {
        self.motions.retain(|id, _| current_ids.contains(id));
    }

    fn value_at(&self, motion: &Motion, now: Instant) -> f32 {
        match motion.phase {
            Phase::Shown => 1.0,
            Phase::Hidden => 0.0,
            Phase::Entering | Phase::Leaving => {
                let progress = self.config.progress(now.duration_since(motion.start));
                let eased = self.config.easing.apply(progress);
                motion.from + (motion.to - motion.from) * eased
            }
        }
    }

    fn start(&mut self, key: &str, phase: Phase, from: f32, appearing: bool, now: Instant) {
        let to = if phase == Phase::Entering { 1.0 } else { 0.0 };

        if self.reduced_motion {
            let settled = if phase == Phase::Entering {
                Phase::Shown
            } else {
                Phase::Hidden
            };
            self.motions.insert(
                key.to_string(),
                Motion {
                    phase: settled,
                    appearing: false,
                    from: to,
                    to,
                    start: now,
                },
            );
            self.pending.push(Settled {
                key: key.to_string(),
                present: settled == Phase::Shown,
            });
            return;
        }

        debug!("{} {key}: {phase:?} from {from}", self.name);
        self.motions.insert(
            key.to_string(),
            Motion {
                phase,
                appearing,
                from,
                to,
                start: now,
            },
        );
    }
}

impl TransitionDriver for ZoomTransition {
    fn sync(&mut self, key: &str, show: bool, now: Instant) {
        let Some(motion) = self.motions.get(key) else {
            if show && self.appear {
                self.start(key, Phase::Entering, 0.0, true, now);
            } else {
                let phase = if show { Phase::Shown } else { Phase::Hidden };
                let value = if show { 1.0 } else { 0.0 };
                self.motions.insert(
                    key.to_string(),
                    Motion {
                        phase,
                        appearing: false,
                        from: value,
                        to: value,
                        start: now,
                    },
                );
                // Hidden on first sight: the exit already happened, report it
                if !show {
                    trace!("{} {key}: first seen hidden", self.name);
                    self.pending.push(Settled {
                        key: key.to_string(),
                        present: false,
                    });
                }
            }
            return;
        };

        match (motion.phase, show) {
            (Phase::Entering | Phase::Shown, true) | (Phase::Leaving | Phase::Hidden, false) => {}
            (_, true) => {
                // Reverse from wherever the current transition got to
                let from = self.value_at(motion, now);
                self.start(key, Phase::Entering, from, false, now);
            }
            (_, false) => {
                let from = self.value_at(motion, now);
                self.start(key, Phase::Leaving, from, false, now);
            }
        }
    }

    fn tick(&mut self, now: Instant) -> Vec<Settled> {
        let mut settled = std::mem::take(&mut self.pending);
        let duration = self.config.duration;

        for (key, motion) in &mut self.motions {
            let done = match motion.phase {
                Phase::Entering | Phase::Leaving => now.duration_since(motion.start) >= duration,
                Phase::Shown | Phase::Hidden => false,
            };
            if !done {
                continue;
            }

            let present = motion.phase == Phase::Entering;
            motion.phase = if present { Phase::Shown } else { Phase::Hidden };
            motion.appearing = false;
            motion.from = motion.to;
            trace!("{} {key}: settled, present = {present}", self.name);
            settled.push(Settled {
                key: key.clone(),
                present,
            });
        }

        settled
    }
}

/// Collect all element IDs from the tree.
pub fn collect_element_ids(element: &Element) -> HashSet<String> {
    let mut ids = HashSet::new();
    collect_ids_recursive(element, &mut ids);
    ids
}

fn collect_ids_recursive(element: &Element, ids: &mut HashSet<String>) {
    ids.insert(element.id.clone());
    for child in element.child_elements() {
        collect_ids_recursive(child, ids);
    }
}
