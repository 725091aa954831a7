//! Lifetime ownership for everything a mounted component binds.
//!
//! Listeners, frame loops and style reverts are adopted into a
//! [`MotionScope`]; disposing the scope (explicitly or by dropping it) releases
//! all of them, newest first, exactly once.

use log::info;

pub trait Disposable {
    fn dispose(&mut self);
}

pub struct MotionScope {
    label: &'static str,
    resources: Vec<Box<dyn Disposable>>,
    disposed: bool,
}

impl MotionScope {
    pub fn new(label: &'static str) -> Self {
        Self { label, resources: Vec::new(), disposed: false }
    }

    pub fn adopt<D: Disposable + 'static>(&mut self, resource: D) {
        if self.disposed {
            // Late arrivals after teardown are released on the spot.
            let mut resource = resource;
            resource.dispose();
            return;
        }
        self.resources.push(Box::new(resource));
    }

    pub fn active(&self) -> usize {
        self.resources.len()
    }

    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;
        let count = self.resources.len();
        while let Some(mut resource) = self.resources.pop() {
            resource.dispose();
        }
        info!("Released {} motion bindings for {}", count, self.label);
    }
}

impl Drop for MotionScope {
    fn drop(&mut self) {
        self.dispose();
    }
}
