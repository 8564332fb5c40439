use std::collections::{HashMap, HashSet};
use std::time::{Duration, Instant};

use crate::element::{walk, Element};
use crate::transitions::{Easing, TransitionConfig};

/// Which property is being animated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransitionProperty {
    Left,
    Top,
}

/// A single active transition.
#[derive(Debug, Clone)]
struct ActiveTransition {
    from: i16,
    to: i16,
    start: Instant,
    duration: Duration,
    easing: Easing,
}

impl ActiveTransition {
    fn value_at(&self, now: Instant) -> i16 {
        let elapsed = now.saturating_duration_since(self.start);
        let progress = if self.duration.is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
        };
        lerp_i16(self.from, self.to, self.easing.apply(progress))
    }

    fn finished_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.start) >= self.duration
    }
}

/// Fire-and-forget property animations, keyed by element.
///
/// Animations are purely presentational: the element keeps its end value and
/// the renderer asks for the interpolated value while a transition is active.
/// Nothing waits on an animation to finish.
#[derive(Debug, Default)]
pub struct AnimationState {
    /// Currently active transitions: (element_id, property) -> transition.
    active: HashMap<(String, TransitionProperty), ActiveTransition>,
    /// Reduced motion flag - when true, transitions complete instantly.
    reduced_motion: bool,
}

impl AnimationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable reduced motion.
    /// When enabled, no transition is started.
    pub fn set_reduced_motion(&mut self, enabled: bool) {
        self.reduced_motion = enabled;
    }

    /// Returns true if any transition is currently active.
    pub fn has_active_transitions(&self) -> bool {
        !self.active.is_empty()
    }

    /// Number of active transitions.
    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    pub fn is_animating(&self, element_id: &str, property: TransitionProperty) -> bool {
        self.active
            .contains_key(&(element_id.to_string(), property))
    }

    /// Animate `property` of an element from `from` to `to`, starting now.
    /// Supersedes any transition already running on the same property.
    pub fn start(
        &mut self,
        element_id: &str,
        property: TransitionProperty,
        from: i16,
        to: i16,
        config: TransitionConfig,
    ) {
        self.start_at(element_id, property, from, to, config, Instant::now());
    }

    pub fn start_at(
        &mut self,
        element_id: &str,
        property: TransitionProperty,
        from: i16,
        to: i16,
        config: TransitionConfig,
        now: Instant,
    ) {
        if self.reduced_motion || from == to {
            return;
        }

        log::trace!(
            "[animation] {element_id} {property:?}: {from} -> {to} over {:?}",
            config.duration
        );

        self.active.insert(
            (element_id.to_string(), property),
            ActiveTransition {
                from,
                to,
                start: now,
                duration: config.duration,
                easing: config.easing,
            },
        );
    }

    /// Start and end values of an active transition.
    pub fn endpoints(&self, element_id: &str, property: TransitionProperty) -> Option<(i16, i16)> {
        self.active
            .get(&(element_id.to_string(), property))
            .map(|t| (t.from, t.to))
    }

    /// Get interpolated value for a property.
    /// Returns None if no active transition for this property.
    pub fn get_interpolated(&self, element_id: &str, property: TransitionProperty) -> Option<i16> {
        self.get_interpolated_at(element_id, property, Instant::now())
    }

    pub fn get_interpolated_at(
        &self,
        element_id: &str,
        property: TransitionProperty,
        now: Instant,
    ) -> Option<i16> {
        self.active
            .get(&(element_id.to_string(), property))
            .map(|t| t.value_at(now))
    }

    /// Drop transitions that have run their full duration.
    pub fn prune(&mut self) {
        self.prune_at(Instant::now());
    }

    pub fn prune_at(&mut self, now: Instant) {
        self.active.retain(|_, transition| !transition.finished_at(now));
    }

    /// Stop every transition on an element, leaving it at its end value.
    pub fn cancel(&mut self, element_id: &str) {
        self.active.retain(|(id, _), _| id != element_id);
    }

    /// Remove transitions for elements no longer in tree.
    pub fn cleanup(&mut self, current_ids: &HashSet<String>) {
        self.active.retain(|(id, _), _| current_ids.contains(id));
    }
}

/// Linear interpolation for i16 values.
fn lerp_i16(from: i16, to: i16, t: f32) -> i16 {
    let from = f32::from(from);
    let to = f32::from(to);
    (from + (to - from) * t).round() as i16
}

/// Collect all element IDs from the tree.
pub fn collect_element_ids(element: &Element) -> HashSet<String> {
    let mut ids = HashSet::new();
    walk(element, &mut |el| {
        ids.insert(el.id.clone());
    });
    ids
}
