use std::cell::RefCell;
use std::rc::Rc;

use gloo_render::{request_animation_frame, AnimationFrame};
use gloo_timers::callback::Timeout;

/// Admits at most one piece of work until the previous one finishes.
#[derive(Debug, Default)]
pub struct FrameGate {
    ticking: bool,
}

impl FrameGate {
    pub fn try_begin(&mut self) -> bool {
        if self.ticking {
            return false;
        }
        self.ticking = true;
        true
    }

    pub fn finish(&mut self) {
        self.ticking = false;
    }
}

/// Keeps only the newest input while a frame is pending.
#[derive(Debug)]
pub struct Latest<T> {
    value: Option<T>,
    gate: FrameGate,
}

impl<T> Default for Latest<T> {
    fn default() -> Self {
        Self {
            value: None,
            gate: FrameGate::default(),
        }
    }
}

impl<T> Latest<T> {
    /// Stores `value`. Returns true when the caller must request a frame.
    pub fn push(&mut self, value: T) -> bool {
        self.value = Some(value);
        self.gate.try_begin()
    }

    /// Hands the newest input to the frame and reopens the gate.
    pub fn take(&mut self) -> Option<T> {
        self.gate.finish();
        self.value.take()
    }
}

/// Runs scheduled work on the next animation frame, dropping requests that
/// arrive while one is already queued. Work should read the latest input
/// from shared state rather than capture it.
#[derive(Clone, Default)]
pub struct FrameThrottle {
    gate: Rc<RefCell<FrameGate>>,
    handle: Rc<RefCell<Option<AnimationFrame>>>,
}

impl FrameThrottle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule<F>(&self, work: F)
    where
        F: FnOnce() + 'static,
    {
        if !self.gate.borrow_mut().try_begin() {
            return;
        }
        let gate = self.gate.clone();
        let frame = request_animation_frame(move |_| {
            gate.borrow_mut().finish();
            work();
        });
        *self.handle.borrow_mut() = Some(frame);
    }
}

/// Delays work until calls stop arriving for `delay_ms`.
#[derive(Clone)]
pub struct Debounce {
    delay_ms: u32,
    pending: Rc<RefCell<Option<Timeout>>>,
}

impl Debounce {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            pending: Rc::new(RefCell::new(None)),
        }
    }

    pub fn call<F>(&self, work: F)
    where
        F: FnOnce() + 'static,
    {
        // Replacing the handle drops, and so cancels, the previous timeout.
        *self.pending.borrow_mut() = Some(Timeout::new(self.delay_ms, work));
    }
}

/// Applies the newest pushed input once per animation frame. Inputs that
/// arrive while a frame is pending replace each other, so the frame always
/// sees the last one.
pub struct FrameLatest<T> {
    latest: Rc<RefCell<Latest<T>>>,
    handle: Rc<RefCell<Option<AnimationFrame>>>,
}

impl<T> Clone for FrameLatest<T> {
    fn clone(&self) -> Self {
        Self {
            latest: self.latest.clone(),
            handle: self.handle.clone(),
        }
    }
}

impl<T> Default for FrameLatest<T> {
    fn default() -> Self {
        Self {
            latest: Rc::new(RefCell::new(Latest::default())),
            handle: Rc::new(RefCell::new(None)),
        }
    }
}

impl<T: 'static> FrameLatest<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Only the `apply` of the push that requested the frame runs. Callers
    /// pass closures that differ only in the value they receive.
    pub fn push<F>(&self, value: T, apply: F)
    where
        F: FnOnce(T) + 'static,
    {
        if !self.latest.borrow_mut().push(value) {
            return;
        }
        let latest = self.latest.clone();
        let frame = request_animation_frame(move |_| {
            let value = latest.borrow_mut().take();
            if let Some(value) = value {
                apply(value);
            }
        });
        *self.handle.borrow_mut() = Some(frame);
    }

    /// Drops any queued frame and its input.
    pub fn cancel(&self) {
        self.handle.borrow_mut().take();
        self.latest.borrow_mut().take();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gate_admits_one_until_finished() {
        let mut gate = FrameGate::default();
        assert!(gate.try_begin());
        assert!(!gate.try_begin());
        gate.finish();
        assert!(gate.try_begin());
    }

    #[test]
    fn burst_of_moves_needs_one_frame_and_keeps_the_last() {
        let mut latest = Latest::default();
        let requests = (1..=5).filter(|&x| latest.push(x)).count();
        assert_eq!(requests, 1);
        assert_eq!(latest.take(), Some(5));
        assert_eq!(latest.take(), None);
    }

    #[test]
    fn move_after_frame_requests_another() {
        let mut latest = Latest::default();
        assert!(latest.push((1.0, 2.0)));
        assert_eq!(latest.take(), Some((1.0, 2.0)));
        assert!(latest.push((3.0, 4.0)));
        assert!(!latest.push((5.0, 6.0)));
        assert_eq!(latest.take(), Some((5.0, 6.0)));
    }

    #[test]
    fn dropped_input_leaves_nothing_for_the_next_frame() {
        let mut latest = Latest::default();
        latest.push(7);
        latest.take();
        assert_eq!(latest.take(), None);
        assert!(latest.push(8));
    }
}
