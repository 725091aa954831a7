//! Browser glue for the motion layer: target lookup, style writes, event
//! listeners and the `requestAnimationFrame` loop. Every handle here is a
//! [`Disposable`] meant to live in a [`super::scope::MotionScope`].

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use log::debug;
use thiserror::Error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, EventTarget, HtmlElement, Window};
use yew::NodeRef;

use super::pose::Pose;
use super::scope::Disposable;
use super::Frame;

#[derive(Debug, Error)]
pub enum BindError {
    #[error("no browser window available")]
    NoWindow,
    #[error("target {0} is not in the document")]
    MissingTarget(&'static str),
    #[error("browser call failed: {0}")]
    Js(String),
}

impl From<JsValue> for BindError {
    fn from(value: JsValue) -> Self {
        BindError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

pub fn window() -> Result<Window, BindError> {
    web_sys::window().ok_or(BindError::NoWindow)
}

pub fn viewport_height(window: &Window) -> Result<f64, BindError> {
    window
        .inner_height()?
        .as_f64()
        .ok_or_else(|| BindError::Js("innerHeight is not a number".to_string()))
}

pub fn node(node_ref: &NodeRef, name: &'static str) -> Result<HtmlElement, BindError> {
    node_ref.cast::<HtmlElement>().ok_or(BindError::MissingTarget(name))
}

/// All elements under `root` matching `selector`; an empty match is an error
/// so the caller can skip the stage.
pub fn query_all(root: &Element, selector: &'static str) -> Result<Vec<HtmlElement>, BindError> {
    let list = root.query_selector_all(selector)?;
    let found: Vec<HtmlElement> = (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect();
    if found.is_empty() {
        return Err(BindError::MissingTarget(selector));
    }
    Ok(found)
}

pub fn apply_pose(element: &HtmlElement, pose: &Pose) {
    let style = element.style();
    if let Err(e) = style.set_property("transform", &pose.transform_css()) {
        debug!("Could not set transform: {:?}", e);
    }
    if let Err(e) = style.set_property("opacity", &pose.opacity_css()) {
        debug!("Could not set opacity: {:?}", e);
    }
}

/// Clears the inline properties written by [`apply_pose`] on teardown.
pub struct StyleRevert {
    elements: Vec<HtmlElement>,
}

impl StyleRevert {
    pub fn new(elements: Vec<HtmlElement>) -> Self {
        Self { elements }
    }
}

impl Disposable for StyleRevert {
    fn dispose(&mut self) {
        for element in self.elements.drain(..) {
            let style = element.style();
            for property in ["transform", "opacity"] {
                if let Err(e) = style.remove_property(property) {
                    debug!("Could not clear {}: {:?}", property, e);
                }
            }
        }
    }
}

/// An event listener that is removed when disposed.
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Option<Closure<dyn FnMut()>>,
}

impl Listener {
    pub fn new<F: FnMut() + 'static>(target: &EventTarget, event: &'static str, f: F) -> Result<Self, BindError> {
        let callback = Closure::wrap(Box::new(f) as Box<dyn FnMut()>);
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Self { target: target.clone(), event, callback: Some(callback) })
    }
}

impl Disposable for Listener {
    fn dispose(&mut self) {
        if let Some(callback) = self.callback.take() {
            if let Err(e) = self
                .target
                .remove_event_listener_with_callback(self.event, callback.as_ref().unchecked_ref())
            {
                debug!("Could not remove {} listener: {:?}", self.event, e);
            }
        }
    }
}

/// Where a [`FrameLoop`] gets its frames from.
pub trait FrameHost {
    fn request_frame(&self) -> Option<i32>;
    fn cancel_frame(&self, id: i32);
}

/// `requestAnimationFrame` on the page window.
pub struct BrowserFrames {
    window: Window,
    callback: Closure<dyn FnMut(f64)>,
}

impl FrameHost for BrowserFrames {
    fn request_frame(&self) -> Option<i32> {
        match self.window.request_animation_frame(self.callback.as_ref().unchecked_ref()) {
            Ok(id) => Some(id),
            Err(e) => {
                debug!("requestAnimationFrame failed: {:?}", e);
                None
            }
        }
    }

    fn cancel_frame(&self, id: i32) {
        if let Err(e) = self.window.cancel_animation_frame(id) {
            debug!("cancelAnimationFrame({}) failed: {:?}", id, e);
        }
    }
}

type Tick = Box<dyn FnMut(f64) -> Frame>;

struct LoopCore<H> {
    host: H,
    pending: Cell<Option<i32>>,
    tick: RefCell<Option<Tick>>,
}

impl<H: FrameHost> LoopCore<H> {
    fn new(host: H, tick: Tick) -> Self {
        Self { host, pending: Cell::new(None), tick: RefCell::new(Some(tick)) }
    }

    fn request(&self) {
        if self.pending.get().is_some() || self.tick.borrow().is_none() {
            return;
        }
        if let Some(id) = self.host.request_frame() {
            self.pending.set(Some(id));
        }
    }

    fn fire(&self, timestamp: f64) {
        self.pending.set(None);
        let next = match self.tick.borrow_mut().as_mut() {
            Some(tick) => tick(timestamp),
            None => return,
        };
        if next == Frame::Continue {
            self.request();
        }
    }

    fn stop(&self) {
        if let Some(id) = self.pending.take() {
            self.host.cancel_frame(id);
        }
        self.tick.borrow_mut().take();
    }
}

trait Pulse {
    fn wake(&self);
    #[cfg(test)]
    fn fire(&self, timestamp: f64);
}

impl<H: FrameHost> Pulse for LoopCore<H> {
    fn wake(&self) {
        self.request();
    }

    #[cfg(test)]
    fn fire(&self, timestamp: f64) {
        LoopCore::fire(self, timestamp);
    }
}

/// A frame loop. The tick receives the frame timestamp in milliseconds and
/// decides whether another frame is needed; an idle loop is restarted
/// through its [`FrameWaker`].
pub struct FrameLoop<H: FrameHost = BrowserFrames> {
    core: Rc<LoopCore<H>>,
}

impl FrameLoop<BrowserFrames> {
    pub fn new<F: FnMut(f64) -> Frame + 'static>(window: &Window, tick: F) -> Self {
        let core = Rc::new_cyclic(|weak: &Weak<LoopCore<BrowserFrames>>| {
            let weak = weak.clone();
            let callback = Closure::wrap(Box::new(move |timestamp: f64| {
                if let Some(core) = weak.upgrade() {
                    core.fire(timestamp);
                }
            }) as Box<dyn FnMut(f64)>);
            LoopCore::new(BrowserFrames { window: window.clone(), callback }, Box::new(tick))
        });
        Self { core }
    }
}

impl<H: FrameHost + 'static> FrameLoop<H> {
    #[cfg(test)]
    pub fn with_host<F: FnMut(f64) -> Frame + 'static>(host: H, tick: F) -> Self {
        Self { core: Rc::new(LoopCore::new(host, Box::new(tick))) }
    }

    pub fn start(&self) {
        self.core.request();
    }

    pub fn waker(&self) -> FrameWaker {
        let core: Weak<LoopCore<H>> = Rc::downgrade(&self.core);
        let core: Weak<dyn Pulse> = core;
        FrameWaker { core }
    }
}

impl<H: FrameHost> Disposable for FrameLoop<H> {
    fn dispose(&mut self) {
        self.core.stop();
    }
}

/// Weak handle that schedules a frame if the loop is still alive.
#[derive(Clone)]
pub struct FrameWaker {
    core: Weak<dyn Pulse>,
}

impl FrameWaker {
    pub fn wake(&self) {
        if let Some(core) = self.core.upgrade() {
            core.wake();
        }
    }

    /// Runs the loop's tick as if the host delivered a frame.
    #[cfg(test)]
    pub fn fire(&self, timestamp: f64) {
        if let Some(core) = self.core.upgrade() {
            core.fire(timestamp);
        }
    }
}

/// A debounce timer slot; a pending timeout is cancelled on dispose.
#[derive(Clone, Default)]
pub struct Debounce {
    slot: Rc<RefCell<Option<gloo_timers::callback::Timeout>>>,
}

impl Debounce {
    pub fn schedule<F: FnOnce() + 'static>(&self, millis: u32, f: F) {
        let timeout = gloo_timers::callback::Timeout::new(millis, f);
        // Replacing drops (and so cancels) any earlier pending timeout.
        *self.slot.borrow_mut() = Some(timeout);
    }
}

impl Disposable for Debounce {
    fn dispose(&mut self) {
        drop(self.slot.borrow_mut().take());
    }
}

#[cfg(test)]
pub mod testing {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::FrameHost;

    #[derive(Debug, Default)]
    pub struct FrameLog {
        pub requested: Vec<i32>,
        pub cancelled: Vec<i32>,
    }

    /// Frame host that only records; frames are delivered by hand through
    /// [`super::FrameWaker::fire`].
    #[derive(Clone, Default)]
    pub struct ManualFrames {
        pub log: Rc<RefCell<FrameLog>>,
    }

    impl FrameHost for ManualFrames {
        fn request_frame(&self) -> Option<i32> {
            let mut log = self.log.borrow_mut();
            let id = log.requested.len() as i32 + 1;
            log.requested.push(id);
            Some(id)
        }

        fn cancel_frame(&self, id: i32) {
            self.log.borrow_mut().cancelled.push(id);
        }
    }
}
