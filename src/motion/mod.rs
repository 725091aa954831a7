//! Scroll and time driven animation for the hero.
//!
//! The pure half (`ease`, `pose`, `timeline`, `scroll`, `scope`) knows nothing
//! about the browser; `dom` and `driver` connect it to elements.

pub mod dom;
pub mod driver;
pub mod ease;
pub mod pose;
pub mod scope;
pub mod scroll;
pub mod timeline;

/// What a frame tick asks of its loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frame {
    Continue,
    Idle,
}
