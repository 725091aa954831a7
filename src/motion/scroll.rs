//! Scroll-driven scenes.
//!
//! Progress is computed once from the raw scroll offset and every track of a
//! scene maps that single value onto its own pose. Tracks hold no state, so
//! returning to an offset reproduces exactly the poses seen there before.

use super::ease::Ease;
use super::pose::{lerp, Pose, Tween};
use super::Frame;

/// The stretch of document scroll over which a scene plays.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollWindow {
    /// Document scroll offset at which progress leaves 0.
    pub start: f64,
    /// Scroll distance from 0 to 1.
    pub distance: f64,
}

impl ScrollWindow {
    /// Window that starts when the trigger's top meets the viewport top and
    /// lasts `length_viewports` viewport heights.
    pub fn from_trigger(trigger_top: f64, scroll_y: f64, viewport_height: f64, length_viewports: f64) -> Self {
        Self {
            start: trigger_top + scroll_y,
            distance: viewport_height * length_viewports,
        }
    }

    pub fn progress(&self, scroll_y: f64) -> f64 {
        if self.distance <= 0.0 {
            return if scroll_y >= self.start { 1.0 } else { 0.0 };
        }
        ((scroll_y - self.start) / self.distance).clamp(0.0, 1.0)
    }

    pub fn pin_state(&self, scroll_y: f64) -> PinState {
        if scroll_y < self.start {
            PinState::Before
        } else if scroll_y <= self.start + self.distance {
            PinState::Pinned
        } else {
            PinState::After
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinState {
    Before,
    Pinned,
    After,
}

/// Eases the applied playhead toward the scroll-derived target.
///
/// Every new target starts a fresh power3-out catch-up from wherever the
/// playhead is, lasting exactly `lag_secs`. Zero lag applies the target
/// immediately.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrubFollower {
    lag_secs: f64,
    from: f64,
    current: f64,
    target: f64,
    elapsed: f64,
}

const SCRUB_EASE: Ease = Ease::Power3Out;
/// Catch-up fraction treated as complete; absorbs frame-delta rounding.
const SCRUB_SETTLE: f64 = 1.0 - 1e-9;

impl ScrubFollower {
    pub fn new(lag_secs: f64, initial: f64) -> Self {
        let lag_secs = lag_secs.max(0.0);
        Self { lag_secs, from: initial, current: initial, target: initial, elapsed: lag_secs }
    }

    pub fn current(&self) -> f64 {
        self.current
    }

    pub fn set_target(&mut self, target: f64) {
        if self.lag_secs == 0.0 {
            self.current = target;
            self.target = target;
            return;
        }
        if target == self.target {
            return;
        }
        self.from = self.current;
        self.target = target;
        self.elapsed = 0.0;
    }

    /// Jumps straight to the target, used after a geometry refresh.
    pub fn snap(&mut self) {
        self.current = self.target;
        self.from = self.target;
        self.elapsed = self.lag_secs;
    }

    pub fn is_settled(&self) -> bool {
        self.current == self.target
    }

    /// Advances by `dt_secs` and returns the new playhead.
    pub fn step(&mut self, dt_secs: f64) -> f64 {
        if self.lag_secs == 0.0 || self.is_settled() {
            self.current = self.target;
            return self.current;
        }
        self.elapsed = (self.elapsed + dt_secs.max(0.0)).min(self.lag_secs);
        let k = self.elapsed / self.lag_secs;
        self.current = if k >= SCRUB_SETTLE {
            self.target
        } else {
            lerp(self.from, self.target, SCRUB_EASE.apply(k))
        };
        self.current
    }
}

/// Live state of a bound scroll scene: measured window, scrubbed playhead,
/// last pin state and the previous frame's timestamp.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollState {
    window: ScrollWindow,
    scrub: ScrubFollower,
    pin: PinState,
    last_frame: Option<f64>,
}

impl ScrollState {
    pub fn new(window: ScrollWindow, scrub_lag_secs: f64, scroll_y: f64) -> Self {
        Self {
            window,
            scrub: ScrubFollower::new(scrub_lag_secs, window.progress(scroll_y)),
            pin: window.pin_state(scroll_y),
            last_frame: None,
        }
    }

    /// Progress currently applied to the scene.
    pub fn progress(&self) -> f64 {
        self.scrub.current()
    }

    /// Retargets the scrub for a new scroll offset. Returns the pin
    /// transition when the offset crosses a window edge.
    pub fn on_scroll(&mut self, scroll_y: f64) -> Option<(PinState, PinState)> {
        self.scrub.set_target(self.window.progress(scroll_y));
        let pin = self.window.pin_state(scroll_y);
        if pin == self.pin {
            return None;
        }
        let previous = std::mem::replace(&mut self.pin, pin);
        Some((previous, pin))
    }

    /// Swaps in a re-measured window. The playhead jumps to the new progress
    /// rather than easing across a layout change.
    pub fn refresh(&mut self, window: ScrollWindow, scroll_y: f64) -> f64 {
        self.window = window;
        self.pin = window.pin_state(scroll_y);
        self.scrub.set_target(window.progress(scroll_y));
        self.scrub.snap();
        self.last_frame = None;
        self.scrub.current()
    }

    /// Advances the scrub to a frame timestamp (milliseconds). Returns the
    /// progress to apply and whether the loop should keep running.
    pub fn on_frame(&mut self, timestamp: f64) -> (f64, Frame) {
        let dt = self
            .last_frame
            .map(|last| (timestamp - last) / 1000.0)
            .unwrap_or(1.0 / 60.0);
        let progress = self.scrub.step(dt);
        if self.scrub.is_settled() {
            self.last_frame = None;
            (progress, Frame::Idle)
        } else {
            self.last_frame = Some(timestamp);
            (progress, Frame::Continue)
        }
    }
}

/// Elements of the hero driven by scroll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneTarget {
    Car,
    BackLayer,
    MidLayer,
    Headline,
    Stats,
}

impl SceneTarget {
    pub fn name(self) -> &'static str {
        match self {
            SceneTarget::Car => "car",
            SceneTarget::BackLayer => "back layer",
            SceneTarget::MidLayer => "mid layer",
            SceneTarget::Headline => "headline",
            SceneTarget::Stats => "stats",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Track {
    pub target: SceneTarget,
    pub tween: Tween,
}

/// Tracks sharing one scroll progress. Every track spans the whole window.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollScene {
    tracks: Vec<Track>,
}

impl ScrollScene {
    pub fn new(tracks: Vec<Track>) -> Self {
        Self { tracks }
    }

    /// The pinned hero: car flight path, two parallax layers, headline dim
    /// and stat lift.
    pub fn hero(ease: Ease) -> Self {
        let car_from = Pose {
            x_percent: -40.0,
            y_percent: 40.0,
            y_px: 0.0,
            scale: 0.8,
            rotate: -12.0,
            opacity: 1.0,
        };
        let car_to = Pose {
            x_percent: 30.0,
            y_percent: -20.0,
            y_px: 0.0,
            scale: 1.15,
            rotate: 6.0,
            opacity: 1.0,
        };
        Self::new(vec![
            Track { target: SceneTarget::Car, tween: Tween::new(car_from, car_to, ease) },
            Track {
                target: SceneTarget::BackLayer,
                tween: Tween::to_pose(Pose::NATURAL.with_y_percent(-25.0), ease),
            },
            Track {
                target: SceneTarget::MidLayer,
                tween: Tween::to_pose(Pose::NATURAL.with_y_percent(-40.0), ease),
            },
            Track {
                target: SceneTarget::Headline,
                tween: Tween::to_pose(Pose::NATURAL.with_y_percent(-10.0).with_opacity(0.7), ease),
            },
            Track {
                target: SceneTarget::Stats,
                tween: Tween::to_pose(Pose::NATURAL.with_y_percent(-10.0).with_opacity(0.95), ease),
            },
        ])
    }

    pub fn pose(&self, target: SceneTarget, progress: f64) -> Option<Pose> {
        self.tracks
            .iter()
            .find(|track| track.target == target)
            .map(|track| track.tween.sample(progress))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window() -> ScrollWindow {
        ScrollWindow::from_trigger(0.0, 0.0, 800.0, 2.0)
    }

    const TARGETS: [SceneTarget; 5] = [
        SceneTarget::Car,
        SceneTarget::BackLayer,
        SceneTarget::MidLayer,
        SceneTarget::Headline,
        SceneTarget::Stats,
    ];

    fn sample(scene: &ScrollScene, progress: f64) -> Vec<Pose> {
        TARGETS.iter().filter_map(|target| scene.pose(*target, progress)).collect()
    }

    #[test]
    fn test_window_from_trigger() {
        let w = ScrollWindow::from_trigger(-150.0, 400.0, 900.0, 2.0);
        assert_eq!(w.start, 250.0);
        assert_eq!(w.distance, 1800.0);
    }

    #[test]
    fn test_progress_clamped() {
        let w = window();
        assert_eq!(w.progress(-50.0), 0.0);
        assert_eq!(w.progress(0.0), 0.0);
        assert_eq!(w.progress(800.0), 0.5);
        assert_eq!(w.progress(1600.0), 1.0);
        assert_eq!(w.progress(5000.0), 1.0);
    }

    #[test]
    fn test_zero_distance_window() {
        let w = ScrollWindow { start: 100.0, distance: 0.0 };
        assert_eq!(w.progress(99.0), 0.0);
        assert_eq!(w.progress(100.0), 1.0);
    }

    #[test]
    fn test_pin_state() {
        let w = ScrollWindow { start: 100.0, distance: 1600.0 };
        assert_eq!(w.pin_state(0.0), PinState::Before);
        assert_eq!(w.pin_state(100.0), PinState::Pinned);
        assert_eq!(w.pin_state(1700.0), PinState::Pinned);
        assert_eq!(w.pin_state(1701.0), PinState::After);
    }

    #[test]
    fn test_scene_reversible() {
        let scene = ScrollScene::hero(Ease::Power2Out);
        let w = window();
        let at_f = sample(&scene, w.progress(420.0));
        assert_eq!(at_f.len(), 5);
        let _ = sample(&scene, w.progress(1500.0));
        let _ = sample(&scene, w.progress(10.0));
        assert_eq!(sample(&scene, w.progress(420.0)), at_f);
    }

    #[test]
    fn test_scene_continuous() {
        let scene = ScrollScene::hero(Ease::Power2Out);
        for i in 0..1000 {
            let a = sample(&scene, i as f64 / 1000.0);
            let b = sample(&scene, (i + 1) as f64 / 1000.0);
            for (pa, pb) in a.iter().zip(b.iter()) {
                assert!((pa.x_percent - pb.x_percent).abs() < 1.0);
                assert!((pa.y_percent - pb.y_percent).abs() < 1.0);
                assert!((pa.opacity - pb.opacity).abs() < 0.01);
            }
        }
    }

    #[test]
    fn test_car_midpoint_is_eased_midpoint() {
        let scene = ScrollScene::hero(Ease::Power2Out);
        let w = window();
        let mid = w.progress(800.0);
        let eased = Ease::Power2Out.apply(0.5);
        let car = scene.pose(SceneTarget::Car, mid).unwrap();
        assert!((car.x_percent - (-40.0 + 70.0 * eased)).abs() < 1e-9);
        assert!((car.y_percent - (40.0 - 60.0 * eased)).abs() < 1e-9);
        assert!((car.scale - (0.8 + 0.35 * eased)).abs() < 1e-9);
        assert!((car.rotate - (-12.0 + 18.0 * eased)).abs() < 1e-9);
        assert_eq!(scene.pose(SceneTarget::Car, mid), Some(car));
    }

    #[test]
    fn test_scene_endpoints() {
        let scene = ScrollScene::hero(Ease::Power2Out);
        assert_eq!(scene.pose(SceneTarget::BackLayer, 0.0), Some(Pose::NATURAL));
        assert_eq!(scene.pose(SceneTarget::BackLayer, 1.0).unwrap().y_percent, -25.0);
        assert_eq!(scene.pose(SceneTarget::MidLayer, 1.0).unwrap().y_percent, -40.0);
        let headline = scene.pose(SceneTarget::Headline, 1.0).unwrap();
        assert!((headline.opacity - 0.7).abs() < 1e-9);
        let stats = scene.pose(SceneTarget::Stats, 1.0).unwrap();
        assert!((stats.opacity - 0.95).abs() < 1e-9);
        assert_eq!(stats.y_percent, -10.0);
    }

    #[test]
    fn test_layers_parallax_at_different_rates() {
        let scene = ScrollScene::hero(Ease::Power2Out);
        for p in [0.1, 0.5, 0.9] {
            let back = scene.pose(SceneTarget::BackLayer, p).unwrap();
            let mid = scene.pose(SceneTarget::MidLayer, p).unwrap();
            assert!(mid.y_percent < back.y_percent);
        }
    }

    #[test]
    fn test_scrub_converges() {
        let mut scrub = ScrubFollower::new(1.0, 0.0);
        scrub.set_target(1.0);
        assert!(!scrub.is_settled());
        let mut prev = 0.0;
        for _ in 0..180 {
            let v = scrub.step(1.0 / 60.0);
            assert!(v >= prev && v <= 1.0);
            prev = v;
        }
        assert!(scrub.is_settled());
        assert_eq!(scrub.current(), 1.0);
    }

    #[test]
    fn test_scrub_zero_lag_is_immediate() {
        let mut scrub = ScrubFollower::new(0.0, 0.2);
        scrub.set_target(0.7);
        assert_eq!(scrub.current(), 0.7);
        assert_eq!(scrub.step(0.016), 0.7);
    }

    #[test]
    fn test_scrub_snap() {
        let mut scrub = ScrubFollower::new(1.0, 0.0);
        scrub.set_target(0.4);
        scrub.snap();
        assert!(scrub.is_settled());
        assert_eq!(scrub.current(), 0.4);
    }

    #[test]
    fn test_scrub_settles_within_lag() {
        let mut scrub = ScrubFollower::new(1.0, 0.0);
        scrub.set_target(1.0);
        for _ in 0..30 {
            scrub.step(1.0 / 60.0);
        }
        assert!(!scrub.is_settled());
        assert!((scrub.current() - Ease::Power3Out.apply(0.5)).abs() < 1e-6);
        for _ in 0..30 {
            scrub.step(1.0 / 60.0);
        }
        assert!(scrub.is_settled());
        assert_eq!(scrub.current(), 1.0);
    }

    #[test]
    fn test_scrub_retarget_starts_from_playhead() {
        let mut scrub = ScrubFollower::new(1.0, 0.0);
        scrub.set_target(1.0);
        scrub.step(0.25);
        let midway = scrub.current();
        scrub.set_target(0.0);
        let next = scrub.step(1.0 / 60.0);
        assert!(next < midway && next > 0.0);
        scrub.step(1.0);
        assert_eq!(scrub.current(), 0.0);
    }

    fn pinned_state(lag: f64) -> ScrollState {
        ScrollState::new(ScrollWindow { start: 100.0, distance: 1600.0 }, lag, 0.0)
    }

    #[test]
    fn test_state_reports_pin_transitions_once() {
        let mut state = pinned_state(1.0);
        assert_eq!(state.on_scroll(50.0), None);
        assert_eq!(state.on_scroll(150.0), Some((PinState::Before, PinState::Pinned)));
        assert_eq!(state.on_scroll(900.0), None);
        assert_eq!(state.on_scroll(2000.0), Some((PinState::Pinned, PinState::After)));
        assert_eq!(state.on_scroll(0.0), Some((PinState::After, PinState::Before)));
    }

    #[test]
    fn test_state_scroll_moves_target_not_playhead() {
        let mut state = pinned_state(1.0);
        state.on_scroll(900.0);
        assert_eq!(state.progress(), 0.0);
        let (progress, next) = state.on_frame(0.0);
        assert!(progress > 0.0 && progress < 0.5);
        assert_eq!(next, Frame::Continue);
    }

    #[test]
    fn test_state_frames_go_idle_after_one_lag() {
        let mut state = pinned_state(1.0);
        state.on_scroll(900.0);
        let mut frames = 0;
        loop {
            let (progress, next) = state.on_frame(frames as f64 * 1000.0 / 60.0);
            frames += 1;
            if next == Frame::Idle {
                assert_eq!(progress, 0.5);
                break;
            }
            assert!(frames <= 61, "still catching up after {} frames", frames);
        }
        assert_eq!(state.last_frame, None);
    }

    #[test]
    fn test_state_refresh_snaps_to_new_window() {
        let mut state = pinned_state(1.0);
        state.on_scroll(900.0);
        state.on_frame(0.0);
        let progress = state.refresh(ScrollWindow { start: 100.0, distance: 800.0 }, 900.0);
        assert_eq!(progress, 1.0);
        assert_eq!(state.pin, PinState::Pinned);
        assert_eq!(state.on_frame(16.0), (1.0, Frame::Idle));
    }

    #[test]
    fn test_state_zero_lag_follows_scroll() {
        let mut state = pinned_state(0.0);
        state.on_scroll(500.0);
        assert_eq!(state.progress(), 0.25);
        assert_eq!(state.on_frame(0.0), (0.25, Frame::Idle));
    }
}
