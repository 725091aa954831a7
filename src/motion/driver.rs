//! Drives sequences and scroll scenes against live elements.
//!
//! Both drivers only bind what they are handed; finding targets (and deciding
//! to skip a group that is missing) is the caller's job.

use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, info};
use web_sys::{HtmlElement, Window};

use super::dom::{self, BindError, Debounce, FrameLoop, FrameWaker, Listener, StyleRevert};
use super::pose::Pose;
use super::scope::MotionScope;
use super::scroll::{SceneTarget, ScrollScene, ScrollState, ScrollWindow};
use super::timeline::{EntranceClock, Sequence, StageSpec};
use super::Frame;

/// Writes every placed stage's pose at sequence time `t` to its targets.
fn sequence_writer<E, W>(sequence: Sequence, bound: Vec<(usize, Vec<E>)>, write: W) -> impl Fn(f64)
where
    W: Fn(&E, &Pose),
{
    move |t: f64| {
        for (index, targets) in &bound {
            if let Some(stage) = sequence.stage(*index) {
                for (i, target) in targets.iter().enumerate() {
                    write(target, &stage.pose_at(i, t));
                }
            }
        }
    }
}

/// Writes the scene's pose at `progress` to each bound target. Tracks
/// without a bound target are left alone.
fn scene_writer<E, W>(scene: ScrollScene, targets: Vec<(SceneTarget, E)>, write: W) -> impl Fn(f64)
where
    W: Fn(&E, &Pose),
{
    move |progress: f64| {
        for (target, element) in &targets {
            if let Some(pose) = scene.pose(*target, progress) {
                write(element, &pose);
            }
        }
    }
}

fn entrance_tick<A: Fn(f64)>(end: f64, apply: A) -> impl FnMut(f64) -> Frame {
    let mut clock = EntranceClock::new(end);
    move |timestamp| {
        let (t, next) = clock.tick(timestamp);
        apply(t);
        if next == Frame::Idle {
            debug!("Entrance finished at {:.2}s", t);
        }
        next
    }
}

fn scroll_tick(state: Rc<RefCell<ScrollState>>, apply: Rc<dyn Fn(f64)>) -> impl FnMut(f64) -> Frame {
    move |timestamp| {
        let (progress, next) = state.borrow_mut().on_frame(timestamp);
        apply(progress);
        next
    }
}

fn handle_scroll(state: &RefCell<ScrollState>, waker: &FrameWaker, scroll_y: f64) {
    if let Some((from, to)) = state.borrow_mut().on_scroll(scroll_y) {
        debug!("Hero pin {:?} -> {:?} at {:.0}px", from, to, scroll_y);
    }
    waker.wake();
}

fn handle_refresh(state: &RefCell<ScrollState>, apply: &dyn Fn(f64), scroll_y: f64, window: ScrollWindow) {
    let progress = state.borrow_mut().refresh(window, scroll_y);
    apply(progress);
    debug!("Scroll scene refreshed: distance {:.0}px", window.distance);
}

/// Plays a time-driven entrance once. Every target is put in its starting
/// pose immediately so nothing flashes in its final state before the first
/// frame.
pub fn play_entrance(
    window: &Window,
    scope: &mut MotionScope,
    groups: Vec<(StageSpec, Vec<HtmlElement>)>,
) {
    let mut sequence = Sequence::new();
    let mut bound: Vec<(usize, Vec<HtmlElement>)> = Vec::new();
    for (spec, elements) in groups {
        if let Some(index) = sequence.place(spec, elements.len()) {
            bound.push((index, elements));
        }
    }
    if bound.is_empty() {
        info!("Entrance has no targets, nothing to play");
        return;
    }

    let total = sequence.end();
    info!("Entrance bound: {} stages, {:.2}s", sequence.stages().len(), total);
    let elements: Vec<HtmlElement> = bound.iter().flat_map(|(_, elements)| elements.iter().cloned()).collect();
    let apply = sequence_writer(sequence, bound, dom::apply_pose);
    apply(0.0);

    let frames = FrameLoop::new(window, entrance_tick(total, apply));
    frames.start();

    scope.adopt(StyleRevert::new(elements));
    scope.adopt(frames);
}

pub struct ScrollBinding {
    /// Element whose top starts the window; it must not move while pinned.
    pub trigger: HtmlElement,
    pub targets: Vec<(SceneTarget, HtmlElement)>,
    pub scene: ScrollScene,
    pub length_viewports: f64,
    pub scrub_lag_secs: f64,
    pub resize_debounce_ms: u32,
}

fn measure(window: &Window, trigger: &HtmlElement, length_viewports: f64) -> Result<(f64, ScrollWindow), BindError> {
    let scroll_y = window.scroll_y()?;
    let top = trigger.get_bounding_client_rect().top();
    let height = dom::viewport_height(window)?;
    Ok((scroll_y, ScrollWindow::from_trigger(top, scroll_y, height, length_viewports)))
}

/// Binds a scroll scene: scroll updates the scrub target, a frame loop eases
/// the applied progress toward it, and resizes re-measure the window.
pub fn bind_scroll(window: &Window, scope: &mut MotionScope, binding: ScrollBinding) -> Result<(), BindError> {
    let ScrollBinding {
        trigger,
        targets,
        scene,
        length_viewports,
        scrub_lag_secs,
        resize_debounce_ms,
    } = binding;
    if targets.is_empty() {
        return Err(BindError::MissingTarget("scroll scene targets"));
    }

    let (scroll_y, scroll_window) = measure(window, &trigger, length_viewports)?;
    let state = Rc::new(RefCell::new(ScrollState::new(scroll_window, scrub_lag_secs, scroll_y)));
    let initial = state.borrow().progress();

    let elements: Vec<HtmlElement> = targets.iter().map(|(_, element)| element.clone()).collect();
    let apply: Rc<dyn Fn(f64)> = Rc::new(scene_writer(scene, targets, dom::apply_pose));
    apply(initial);
    scope.adopt(StyleRevert::new(elements));
    info!(
        "Scroll scene bound: start {:.0}px, distance {:.0}px, progress {:.3}",
        scroll_window.start, scroll_window.distance, initial
    );

    let frames = FrameLoop::new(window, scroll_tick(state.clone(), apply.clone()));
    let waker = frames.waker();
    scope.adopt(frames);

    let on_scroll = {
        let state = state.clone();
        let window = window.clone();
        move || match window.scroll_y() {
            Ok(scroll_y) => handle_scroll(&state, &waker, scroll_y),
            Err(e) => debug!("scrollY unavailable: {:?}", e),
        }
    };
    let scroll_listener = Listener::new(window.as_ref(), "scroll", on_scroll)?;

    let debounce = Debounce::default();
    let on_resize = {
        let debounce = debounce.clone();
        let window = window.clone();
        move || {
            let state = state.clone();
            let window = window.clone();
            let trigger = trigger.clone();
            let apply = apply.clone();
            debounce.schedule(resize_debounce_ms, move || {
                match measure(&window, &trigger, length_viewports) {
                    Ok((scroll_y, scroll_window)) => handle_refresh(&state, apply.as_ref(), scroll_y, scroll_window),
                    Err(e) => debug!("Scroll scene refresh skipped: {}", e),
                }
            });
        }
    };
    let resize_listener = Listener::new(window.as_ref(), "resize", on_resize)?;

    scope.adopt(scroll_listener);
    scope.adopt(resize_listener);
    scope.adopt(debounce);
    Ok(())
}
