//! Motion scheduler
//!
//! Single-threaded frame interpolator. The host calls [`MotionScheduler::tick`]
//! once per frame with the elapsed time; every running animation advances and
//! the new visual state of each touched element is returned.
//!
//! Tweens follow their easing curve over a fixed duration. Springs run a
//! normalized 0 → 1 progress spring and interpolate the two states by it, so
//! overshoot carries through to every property.

use rustc_hash::FxHashMap;
use slotmap::{new_key_type, SlotMap};

use crate::driver::{MotionDriver, MotionTarget};
use crate::spring::Spring;
use crate::transition::Transition;
use crate::values::Interpolate;
use crate::visual::VisualState;

new_key_type! {
    /// Handle to a running animation
    pub struct AnimationId;
}

/// Progress springs work on a 0..1 range
const PROGRESS_REST_DELTA: f32 = 0.001;
const PROGRESS_REST_SPEED: f32 = 0.01;

#[derive(Clone, Debug)]
enum Progress {
    Tween,
    Spring(Spring),
}

#[derive(Clone, Debug)]
struct ActiveMotion {
    target: MotionTarget,
    from: VisualState,
    to: VisualState,
    transition: Transition,
    elapsed: f32,
    progress: Progress,
}

impl ActiveMotion {
    fn new(target: MotionTarget, from: VisualState, to: VisualState, transition: Transition) -> Self {
        let progress = match transition {
            Transition::Spring { config, .. } => {
                let mut spring = Spring::new(config, 0.0)
                    .with_rest_thresholds(PROGRESS_REST_DELTA, PROGRESS_REST_SPEED);
                spring.set_target(1.0);
                Progress::Spring(spring)
            }
            Transition::Tween { .. } => Progress::Tween,
        };

        Self {
            target,
            from,
            to,
            transition,
            elapsed: 0.0,
            progress,
        }
    }

    /// Advance by `dt`; returns the sampled state and whether the motion finished
    fn advance(&mut self, dt: f32) -> (VisualState, bool) {
        let delay = self.transition.delay();
        let before = self.elapsed;
        self.elapsed += dt;

        if self.elapsed < delay {
            return (self.from, false);
        }
        // Only the part of this frame past the delay moves the animation
        let active_dt = (self.elapsed - before.max(delay)).max(0.0);

        match (&mut self.progress, self.transition) {
            (Progress::Tween, Transition::Tween { duration, easing, .. }) => {
                let t = if duration <= 0.0 {
                    1.0
                } else {
                    (self.elapsed - delay) / duration
                };
                if t >= 1.0 {
                    (self.to, true)
                } else {
                    (self.from.lerp(&self.to, easing.apply(t)), false)
                }
            }
            (Progress::Spring(spring), _) => {
                spring.step(active_dt);
                if spring.is_settled() {
                    (self.to, true)
                } else {
                    (self.from.lerp(&self.to, spring.value()), false)
                }
            }
            // Progress kind always matches the transition kind
            (Progress::Tween, Transition::Spring { .. }) => (self.to, true),
        }
    }
}

/// In-process [`MotionDriver`]
///
/// A new animation for a target already in flight starts from the target's
/// current sampled state rather than the requested `from`, so hover
/// reversals never jump.
#[derive(Default)]
pub struct MotionScheduler {
    animations: SlotMap<AnimationId, ActiveMotion>,
    by_target: FxHashMap<MotionTarget, AnimationId>,
    current: FxHashMap<MotionTarget, VisualState>,
}

impl MotionScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current visual state of a target, if it has ever been set or animated
    pub fn value(&self, target: MotionTarget) -> Option<VisualState> {
        self.current.get(&target).copied()
    }

    pub fn is_animating(&self, target: MotionTarget) -> bool {
        self.by_target.contains_key(&target)
    }

    /// Check if any animations are still active
    pub fn has_active_animations(&self) -> bool {
        !self.animations.is_empty()
    }

    pub fn animation_count(&self) -> usize {
        self.animations.len()
    }

    /// Stop a target's animation, leaving it at its current state
    pub fn cancel(&mut self, target: MotionTarget) -> bool {
        match self.by_target.remove(&target) {
            Some(id) => self.animations.remove(id).is_some(),
            None => false,
        }
    }

    /// Forget a target entirely (element unmounted)
    pub fn remove(&mut self, target: MotionTarget) {
        self.cancel(target);
        self.current.remove(&target);
    }

    /// Advance all animations by `dt` seconds
    ///
    /// Returns the targets whose state changed this frame, in no
    /// particular order.
    pub fn tick(&mut self, dt: f32) -> Vec<(MotionTarget, VisualState)> {
        let mut updates = Vec::with_capacity(self.animations.len());
        let mut finished = Vec::new();

        for (id, motion) in self.animations.iter_mut() {
            let (state, done) = motion.advance(dt);
            self.current.insert(motion.target, state);
            updates.push((motion.target, state));
            if done {
                finished.push(id);
            }
        }

        for id in finished {
            if let Some(motion) = self.animations.remove(id) {
                self.by_target.remove(&motion.target);
                tracing::trace!(motion_target = ?motion.target, "animation finished");
            }
        }

        updates
    }
}

impl MotionDriver for MotionScheduler {
    fn animate(
        &mut self,
        target: MotionTarget,
        from: VisualState,
        to: VisualState,
        transition: Transition,
    ) {
        let start = self.current.get(&target).copied().unwrap_or(from);
        if let Some(previous) = self.by_target.remove(&target) {
            self.animations.remove(previous);
        }

        let id = self
            .animations
            .insert(ActiveMotion::new(target, start, to, transition));
        self.by_target.insert(target, id);
        self.current.insert(target, start);
        tracing::trace!(motion_target = ?target, ?transition, "animation started");
    }

    fn set(&mut self, target: MotionTarget, state: VisualState) {
        self.cancel(target);
        self.current.insert(target, state);
    }
}
