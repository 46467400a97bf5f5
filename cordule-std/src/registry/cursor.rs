//! Per-dispatch iteration cursors.
//!
//! Every running dispatch owns one frame on the stack, holding the index of
//! the next observer it will notify. Removing an observer shifts the frames
//! iterating the same request so that none of them skips or repeats anyone.

use std::cell::RefCell;

struct Frame {
    request: String,
    next: usize,
}

/// Stack of in-flight dispatches, innermost last.
#[derive(Default)]
pub(crate) struct CursorStack {
    frames: RefCell<Vec<Frame>>,
}

impl CursorStack {
    /// Push a frame for a dispatch of `request`. The frame is popped when the
    /// returned guard is dropped.
    pub(crate) fn enter(&self, request: &str) -> ActiveCursor<'_> {
        let mut frames = self.frames.borrow_mut();
        let depth = frames.len();
        frames.push(Frame {
            request: request.to_owned(),
            next: 0,
        });
        ActiveCursor { stack: self, depth }
    }

    /// Account for the observer at `index` of `request` having been removed.
    pub(crate) fn shift_removed(&self, request: &str, index: usize) {
        for frame in self.frames.borrow_mut().iter_mut() {
            if frame.request == request && index < frame.next {
                frame.next -= 1;
            }
        }
    }

    /// Number of dispatches currently running.
    pub(crate) fn depth(&self) -> usize {
        self.frames.borrow().len()
    }
}

/// Guard over the frame of one running dispatch.
pub(crate) struct ActiveCursor<'a> {
    stack: &'a CursorStack,
    depth: usize,
}

impl ActiveCursor<'_> {
    /// Index of the next observer to notify.
    pub(crate) fn next(&self) -> usize {
        self.stack.frames.borrow()[self.depth].next
    }

    /// Move past the observer at `index`.
    pub(crate) fn advance_past(&self, index: usize) {
        self.stack.frames.borrow_mut()[self.depth].next = index + 1;
    }
}

impl Drop for ActiveCursor<'_> {
    fn drop(&mut self) {
        self.stack.frames.borrow_mut().truncate(self.depth);
    }
}
