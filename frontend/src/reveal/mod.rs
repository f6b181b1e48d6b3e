//! Scroll-triggered reveal.
//!
//! A [`RevealSubscription`] starts hidden and flips to shown exactly once,
//! either when the element scrolls into view or when the fallback timer
//! runs out, whichever comes first. Anything that prevents observation
//! (no target, no `IntersectionObserver`, observer setup failure) reveals
//! right away so content is never stuck invisible.

pub mod hook;
pub mod margin;
pub mod web;

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use log::{debug, warn};
use thiserror::Error;

pub use hook::use_reveal_on_view;
pub use margin::RootMargin;

pub const DEFAULT_THRESHOLD: f64 = 0.18;
pub const DEFAULT_ROOT_MARGIN: &str = "0px 0px -10% 0px";
pub const DEFAULT_FALLBACK_DELAY_MS: u32 = 900;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum RevealError {
    #[error("IntersectionObserver is not available in this environment")]
    CapabilityUnavailable,
    #[error("reveal target is not attached")]
    TargetUnavailable,
    #[error("failed to set up intersection observer: {0}")]
    ObserverSetup(String),
    #[error("invalid root margin {0:?}")]
    InvalidRootMargin(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    Pending,
    Revealed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RevealConfig {
    /// Fraction of the element's area that has to be visible, in `[0, 1]`.
    pub threshold: f64,
    pub root_margin: RootMargin,
    pub fallback_delay_ms: u32,
}

impl RevealConfig {
    /// Builds a config from loose inputs. The threshold is clamped into
    /// `[0, 1]` and an unparsable margin falls back to the default one.
    pub fn new(threshold: f64, root_margin: &str, fallback_delay_ms: u32) -> Self {
        let root_margin = root_margin.parse().unwrap_or_else(|e: RevealError| {
            warn!("{}, using {:?}", e, DEFAULT_ROOT_MARGIN);
            RootMargin::default()
        });
        Self {
            threshold: clamp_threshold(threshold),
            root_margin,
            fallback_delay_ms,
        }
    }

    #[cfg(test)]
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = clamp_threshold(threshold);
        self
    }
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            root_margin: RootMargin::default(),
            fallback_delay_ms: DEFAULT_FALLBACK_DELAY_MS,
        }
    }
}

fn clamp_threshold(threshold: f64) -> f64 {
    if threshold.is_nan() {
        DEFAULT_THRESHOLD
    } else {
        threshold.clamp(0.0, 1.0)
    }
}

/// One intersection report for an observed element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionSample {
    pub is_intersecting: bool,
    pub ratio: f64,
}

/// A live observation registration.
pub trait Observation {
    /// Stops delivery of further samples. Must be safe to call more than once.
    fn disconnect(&self);
}

/// What the controller needs from the environment: capability detection,
/// a cancellable one-shot timer and viewport intersection observation.
///
/// Dropping a `Timer` cancels it. Dropping an `Observer` releases it.
pub trait RevealHost {
    type Target;
    type Timer: 'static;
    type Observer: Observation + 'static;

    fn intersection_supported(&self) -> bool;

    fn start_timer(&self, delay_ms: u32, on_elapsed: Box<dyn FnOnce()>) -> Self::Timer;

    fn observe(
        &self,
        target: &Self::Target,
        config: &RevealConfig,
        on_sample: Box<dyn Fn(IntersectionSample)>,
    ) -> Result<Self::Observer, RevealError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Trigger {
    Immediate,
    Intersection,
    Fallback,
}

struct Shared<H: RevealHost> {
    state: Cell<RevealState>,
    released: Cell<bool>,
    threshold: f64,
    timer: RefCell<Option<H::Timer>>,
    observer: RefCell<Option<H::Observer>>,
    on_reveal: RefCell<Option<Box<dyn FnOnce()>>>,
}

impl<H: RevealHost> Shared<H> {
    fn reveal(&self, trigger: Trigger) {
        if self.released.get() || self.state.get() == RevealState::Revealed {
            return;
        }
        self.state.set(RevealState::Revealed);
        debug!("reveal via {:?}", trigger);

        match trigger {
            Trigger::Intersection => {
                drop(self.timer.borrow_mut().take());
                // the observer callback is still on the stack; free it on release
                if let Some(observer) = self.observer.borrow().as_ref() {
                    observer.disconnect();
                }
            }
            Trigger::Fallback => {
                // the timer is spent and its callback is still on the stack
                if let Some(observer) = self.observer.borrow_mut().take() {
                    observer.disconnect();
                }
            }
            Trigger::Immediate => {
                drop(self.timer.borrow_mut().take());
                drop(self.observer.borrow_mut().take());
            }
        }

        let on_reveal = self.on_reveal.borrow_mut().take();
        if let Some(on_reveal) = on_reveal {
            on_reveal();
        }
    }

    fn on_sample(&self, sample: IntersectionSample) {
        if sample.is_intersecting && sample.ratio >= self.threshold {
            self.reveal(Trigger::Intersection);
        }
    }

    fn release(&self) {
        if self.released.replace(true) {
            return;
        }
        drop(self.timer.borrow_mut().take());
        if let Some(observer) = self.observer.borrow_mut().take() {
            observer.disconnect();
        }
        drop(self.on_reveal.borrow_mut().take());
    }
}

/// Per-element reveal registration. Releases its timer and observer on
/// [`unsubscribe`](Self::unsubscribe) or drop.
pub struct RevealSubscription<H: RevealHost> {
    shared: Rc<Shared<H>>,
}

impl<H: RevealHost> RevealSubscription<H> {
    pub fn state(&self) -> RevealState {
        self.shared.state.get()
    }

    #[cfg(test)]
    pub fn is_revealed(&self) -> bool {
        self.state() == RevealState::Revealed
    }

    /// Cancels any pending trigger without changing the state. Idempotent.
    pub fn unsubscribe(&self) {
        self.shared.release();
    }
}

impl<H: RevealHost> Drop for RevealSubscription<H> {
    fn drop(&mut self) {
        self.shared.release();
    }
}

pub struct RevealController<H: RevealHost> {
    host: H,
}

impl<H: RevealHost + 'static> RevealController<H> {
    pub fn new(host: H) -> Self {
        Self { host }
    }

    /// Starts watching `target`. `on_reveal` runs once, when the
    /// subscription turns [`RevealState::Revealed`]; it may run before this
    /// returns when observation is not possible.
    pub fn subscribe(
        &self,
        target: Option<&H::Target>,
        config: RevealConfig,
        on_reveal: impl FnOnce() + 'static,
    ) -> RevealSubscription<H> {
        let shared = Rc::new(Shared::<H> {
            state: Cell::new(RevealState::Pending),
            released: Cell::new(false),
            threshold: config.threshold,
            timer: RefCell::new(None),
            observer: RefCell::new(None),
            on_reveal: RefCell::new(Some(Box::new(on_reveal))),
        });
        let subscription = RevealSubscription {
            shared: Rc::clone(&shared),
        };

        let target = match target {
            Some(target) if self.host.intersection_supported() => target,
            Some(_) => {
                debug!("{}", RevealError::CapabilityUnavailable);
                shared.reveal(Trigger::Immediate);
                return subscription;
            }
            None => {
                debug!("{}", RevealError::TargetUnavailable);
                shared.reveal(Trigger::Immediate);
                return subscription;
            }
        };

        let weak: Weak<Shared<H>> = Rc::downgrade(&shared);
        let timer = self.host.start_timer(
            config.fallback_delay_ms,
            Box::new(move || {
                if let Some(shared) = weak.upgrade() {
                    shared.reveal(Trigger::Fallback);
                }
            }),
        );
        *shared.timer.borrow_mut() = Some(timer);

        let weak: Weak<Shared<H>> = Rc::downgrade(&shared);
        let observed = self.host.observe(
            target,
            &config,
            Box::new(move |sample| {
                if let Some(shared) = weak.upgrade() {
                    shared.on_sample(sample);
                }
            }),
        );
        match observed {
            // a synchronous first sample may already have revealed it
            Ok(observer) if shared.state.get() == RevealState::Revealed => observer.disconnect(),
            Ok(observer) => *shared.observer.borrow_mut() = Some(observer),
            Err(e) => {
                warn!("{}, revealing immediately", e);
                shared.reveal(Trigger::Immediate);
            }
        }

        subscription
    }

    pub fn current_state(&self, subscription: &RevealSubscription<H>) -> RevealState {
        subscription.state()
    }

    pub fn unsubscribe(&self, subscription: &RevealSubscription<H>) {
        subscription.unsubscribe();
    }
}

#[cfg(test)]
mod tests {
    use super::margin::Rect;
    use super::*;
    use std::collections::BTreeMap;

    const VIEWPORT_W: f64 = 1000.0;
    const VIEWPORT_H: f64 = 800.0;

    struct FakeObserverEntry {
        target: Rect,
        margin: RootMargin,
        connected: bool,
        on_sample: Rc<dyn Fn(IntersectionSample)>,
    }

    /// Manual clock plus registries of live timers and observers.
    #[derive(Default)]
    struct World {
        now: Cell<u64>,
        next_id: Cell<u64>,
        timers: RefCell<BTreeMap<u64, (u64, Box<dyn FnOnce()>)>>,
        observers: RefCell<BTreeMap<u64, FakeObserverEntry>>,
        fired_timers: Cell<u32>,
    }

    impl World {
        fn id(&self) -> u64 {
            let id = self.next_id.get();
            self.next_id.set(id + 1);
            id
        }

        fn advance_to(&self, t: u64) {
            loop {
                let due = self
                    .timers
                    .borrow()
                    .iter()
                    .filter(|(_, (due, _))| *due <= t)
                    .min_by_key(|(_, (due, _))| *due)
                    .map(|(id, (due, _))| (*id, *due));
                let Some((id, due)) = due else { break };
                let (_, callback) = self.timers.borrow_mut().remove(&id).unwrap();
                self.now.set(due);
                self.fired_timers.set(self.fired_timers.get() + 1);
                callback();
            }
            self.now.set(t);
        }

        /// Reports the geometric intersection of every connected observer
        /// with the page scrolled down by `scroll_y`.
        fn scroll_to(&self, scroll_y: f64) {
            let pending: Vec<(Rc<dyn Fn(IntersectionSample)>, IntersectionSample)> = self
                .observers
                .borrow()
                .values()
                .filter(|entry| entry.connected)
                .map(|entry| {
                    let root = entry.margin.inset_rect(VIEWPORT_W, VIEWPORT_H);
                    let target = entry.target.translated(0.0, -scroll_y);
                    let ratio = root.intersection_ratio(&target);
                    (
                        Rc::clone(&entry.on_sample),
                        IntersectionSample {
                            is_intersecting: root.intersects(&target),
                            ratio,
                        },
                    )
                })
                .collect();
            for (on_sample, sample) in pending {
                on_sample(sample);
            }
        }

        fn emit(&self, sample: IntersectionSample) {
            let callbacks: Vec<_> = self
                .observers
                .borrow()
                .values()
                .filter(|entry| entry.connected)
                .map(|entry| Rc::clone(&entry.on_sample))
                .collect();
            for on_sample in callbacks {
                on_sample(sample);
            }
        }

        fn live_timers(&self) -> usize {
            self.timers.borrow().len()
        }

        fn live_observers(&self) -> usize {
            self.observers.borrow().values().filter(|e| e.connected).count()
        }
    }

    struct FakeTimer {
        id: u64,
        world: Rc<World>,
    }

    impl Drop for FakeTimer {
        fn drop(&mut self) {
            self.world.timers.borrow_mut().remove(&self.id);
        }
    }

    struct FakeObserver {
        id: u64,
        world: Rc<World>,
    }

    impl Observation for FakeObserver {
        fn disconnect(&self) {
            if let Some(entry) = self.world.observers.borrow_mut().get_mut(&self.id) {
                entry.connected = false;
            }
        }
    }

    impl Drop for FakeObserver {
        fn drop(&mut self) {
            self.world.observers.borrow_mut().remove(&self.id);
        }
    }

    struct FakeHost {
        supported: bool,
        fail_observe: bool,
        world: Rc<World>,
    }

    impl FakeHost {
        fn new(world: &Rc<World>) -> Self {
            Self {
                supported: true,
                fail_observe: false,
                world: Rc::clone(world),
            }
        }
    }

    impl RevealHost for FakeHost {
        type Target = Rect;
        type Timer = FakeTimer;
        type Observer = FakeObserver;

        fn intersection_supported(&self) -> bool {
            self.supported
        }

        fn start_timer(&self, delay_ms: u32, on_elapsed: Box<dyn FnOnce()>) -> FakeTimer {
            let id = self.world.id();
            let due = self.world.now.get() + u64::from(delay_ms);
            self.world.timers.borrow_mut().insert(id, (due, on_elapsed));
            FakeTimer {
                id,
                world: Rc::clone(&self.world),
            }
        }

        fn observe(
            &self,
            target: &Rect,
            config: &RevealConfig,
            on_sample: Box<dyn Fn(IntersectionSample)>,
        ) -> Result<FakeObserver, RevealError> {
            if self.fail_observe {
                return Err(RevealError::ObserverSetup("SyntaxError".into()));
            }
            let id = self.world.id();
            self.world.observers.borrow_mut().insert(
                id,
                FakeObserverEntry {
                    target: *target,
                    margin: config.root_margin.clone(),
                    connected: true,
                    on_sample: Rc::from(on_sample),
                },
            );
            Ok(FakeObserver {
                id,
                world: Rc::clone(&self.world),
            })
        }
    }

    /// A 400px tall block starting well below the fold.
    fn below_fold() -> Rect {
        Rect::new(100.0, 2000.0, 900.0, 2400.0)
    }

    fn counter() -> (Rc<Cell<u32>>, impl FnOnce() + 'static) {
        let count = Rc::new(Cell::new(0));
        let inner = Rc::clone(&count);
        (count, move || inner.set(inner.get() + 1))
    }

    fn config_900() -> RevealConfig {
        RevealConfig::new(0.18, "0px 0px -10% 0px", 900)
    }

    #[test]
    fn missing_capability_reveals_synchronously() {
        let world = Rc::new(World::default());
        let mut host = FakeHost::new(&world);
        host.supported = false;
        let controller = RevealController::new(host);
        let (count, on_reveal) = counter();

        let sub = controller.subscribe(Some(&below_fold()), config_900(), on_reveal);

        assert_eq!(controller.current_state(&sub), RevealState::Revealed);
        assert_eq!(count.get(), 1);
        assert_eq!(world.live_timers(), 0);
        assert_eq!(world.live_observers(), 0);
    }

    #[test]
    fn missing_target_reveals_synchronously() {
        let world = Rc::new(World::default());
        let controller = RevealController::new(FakeHost::new(&world));
        let (count, on_reveal) = counter();

        let sub = controller.subscribe(None, config_900(), on_reveal);

        assert!(sub.is_revealed());
        assert_eq!(count.get(), 1);
        assert_eq!(world.live_timers(), 0);
    }

    #[test]
    fn observer_setup_failure_reveals_and_leaves_no_timer() {
        let world = Rc::new(World::default());
        let mut host = FakeHost::new(&world);
        host.fail_observe = true;
        let controller = RevealController::new(host);
        let (count, on_reveal) = counter();

        let sub = controller.subscribe(Some(&below_fold()), config_900(), on_reveal);

        assert!(sub.is_revealed());
        assert_eq!(world.live_timers(), 0);
        world.advance_to(5_000);
        assert_eq!(world.fired_timers.get(), 0);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn fallback_reveals_at_delay_and_not_before() {
        let world = Rc::new(World::default());
        let controller = RevealController::new(FakeHost::new(&world));
        let (count, on_reveal) = counter();

        let sub = controller.subscribe(Some(&below_fold()), config_900(), on_reveal);
        world.scroll_to(0.0);
        world.advance_to(899);
        assert_eq!(sub.state(), RevealState::Pending);

        world.advance_to(900);
        assert_eq!(sub.state(), RevealState::Revealed);
        assert_eq!(count.get(), 1);
        assert_eq!(world.live_observers(), 0);
    }

    #[test]
    fn never_intersecting_then_unsubscribed_at_2000ms() {
        let world = Rc::new(World::default());
        let controller = RevealController::new(FakeHost::new(&world));
        let (count, on_reveal) = counter();

        let sub = controller.subscribe(Some(&below_fold()), config_900(), on_reveal);
        for t in (0..=2_000).step_by(100) {
            world.advance_to(t);
            world.scroll_to(0.0);
            let expected = if t < 900 {
                RevealState::Pending
            } else {
                RevealState::Revealed
            };
            assert_eq!(sub.state(), expected, "at t={}", t);
        }

        controller.unsubscribe(&sub);
        assert_eq!(sub.state(), RevealState::Revealed);
        assert_eq!(count.get(), 1);
        assert_eq!(world.live_timers(), 0);
        assert!(world.observers.borrow().is_empty());
    }

    #[test]
    fn early_intersection_wins_and_cancels_fallback() {
        let world = Rc::new(World::default());
        let controller = RevealController::new(FakeHost::new(&world));
        let (count, on_reveal) = counter();

        let sub = controller.subscribe(Some(&below_fold()), config_900(), on_reveal);
        world.advance_to(50);
        world.emit(IntersectionSample {
            is_intersecting: true,
            ratio: 0.3,
        });

        assert_eq!(sub.state(), RevealState::Revealed);
        assert_eq!(world.now.get(), 50);
        assert_eq!(world.live_timers(), 0);
        assert_eq!(world.live_observers(), 0);

        world.advance_to(2_000);
        assert_eq!(world.fired_timers.get(), 0);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn intersection_below_threshold_does_not_reveal() {
        let world = Rc::new(World::default());
        let controller = RevealController::new(FakeHost::new(&world));
        let (_count, on_reveal) = counter();

        let sub = controller.subscribe(Some(&below_fold()), config_900(), on_reveal);
        world.emit(IntersectionSample {
            is_intersecting: true,
            ratio: 0.1,
        });
        world.emit(IntersectionSample {
            is_intersecting: false,
            ratio: 0.0,
        });
        assert_eq!(sub.state(), RevealState::Pending);

        world.advance_to(900);
        assert!(sub.is_revealed());
    }

    #[test]
    fn repeated_samples_in_one_turn_reveal_once() {
        let world = Rc::new(World::default());
        let controller = RevealController::new(FakeHost::new(&world));
        let (count, on_reveal) = counter();

        let sub = controller.subscribe(Some(&below_fold()), config_900(), on_reveal);
        let sample = IntersectionSample {
            is_intersecting: true,
            ratio: 1.0,
        };
        let shared = Rc::clone(&sub.shared);
        shared.on_sample(sample);
        shared.on_sample(sample);
        shared.reveal(Trigger::Fallback);

        assert_eq!(count.get(), 1);
        assert!(sub.is_revealed());
    }

    #[test]
    fn root_margin_shrinks_the_viewport_bottom() {
        let world = Rc::new(World::default());
        let controller = RevealController::new(FakeHost::new(&world));
        let (_count, on_reveal) = counter();

        // 100px tall element; the bottom 80px strip of the viewport is excluded.
        let target = Rect::new(0.0, 1000.0, 500.0, 1100.0);
        let sub = controller.subscribe(Some(&target), config_900(), on_reveal);

        // element top sits at 750px on screen: inside the literal viewport only
        world.scroll_to(250.0);
        assert_eq!(sub.state(), RevealState::Pending);

        // 20% of it is above the 720px line now
        world.scroll_to(300.0);
        assert_eq!(sub.state(), RevealState::Revealed);
    }

    #[test]
    fn unsubscribe_before_any_trigger_stays_pending() {
        let world = Rc::new(World::default());
        let controller = RevealController::new(FakeHost::new(&world));
        let (count, on_reveal) = counter();

        let sub = controller.subscribe(Some(&below_fold()), config_900(), on_reveal);
        world.advance_to(300);
        sub.unsubscribe();

        assert_eq!(world.live_timers(), 0);
        assert!(world.observers.borrow().is_empty());

        world.emit(IntersectionSample {
            is_intersecting: true,
            ratio: 1.0,
        });
        world.advance_to(10_000);
        assert_eq!(sub.state(), RevealState::Pending);
        assert_eq!(world.fired_timers.get(), 0);
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn unsubscribe_is_idempotent() {
        let world = Rc::new(World::default());
        let controller = RevealController::new(FakeHost::new(&world));
        let (_count, on_reveal) = counter();

        let sub = controller.subscribe(Some(&below_fold()), config_900(), on_reveal);
        world.advance_to(900);
        assert!(sub.is_revealed());

        sub.unsubscribe();
        sub.unsubscribe();
        controller.unsubscribe(&sub);
        assert!(sub.is_revealed());
    }

    #[test]
    fn double_unsubscribe_while_pending_ignores_late_triggers() {
        let world = Rc::new(World::default());
        let controller = RevealController::new(FakeHost::new(&world));
        let (count, on_reveal) = counter();

        let sub = controller.subscribe(Some(&below_fold()), config_900(), on_reveal);
        let shared = Rc::clone(&sub.shared);
        world.advance_to(100);
        controller.unsubscribe(&sub);
        sub.unsubscribe();
        assert_eq!(controller.current_state(&sub), RevealState::Pending);

        // late deliveries that raced the teardown
        shared.on_sample(IntersectionSample {
            is_intersecting: true,
            ratio: 1.0,
        });
        shared.reveal(Trigger::Fallback);
        world.scroll_to(2_000.0);
        world.advance_to(5_000);

        assert_eq!(sub.state(), RevealState::Pending);
        assert_eq!(count.get(), 0);
        assert_eq!(world.fired_timers.get(), 0);
        assert_eq!(world.live_timers(), 0);
        assert!(world.observers.borrow().is_empty());
    }

    #[test]
    fn dropping_the_subscription_releases_everything() {
        let world = Rc::new(World::default());
        let controller = RevealController::new(FakeHost::new(&world));
        let (count, on_reveal) = counter();

        let sub = controller.subscribe(Some(&below_fold()), config_900(), on_reveal);
        assert_eq!(world.live_timers(), 1);
        assert_eq!(world.live_observers(), 1);
        drop(sub);

        assert_eq!(world.live_timers(), 0);
        assert!(world.observers.borrow().is_empty());
        world.advance_to(2_000);
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn config_clamps_threshold_and_defaults_bad_margin() {
        let config = RevealConfig::new(1.7, "ten pixels", 500);
        assert_eq!(config.threshold, 1.0);
        assert_eq!(config.root_margin, RootMargin::default());
        assert_eq!(config.fallback_delay_ms, 500);

        assert_eq!(RevealConfig::default().with_threshold(-0.5).threshold, 0.0);
        assert_eq!(
            RevealConfig::default().with_threshold(f64::NAN).threshold,
            DEFAULT_THRESHOLD
        );
    }
}
