//! Delivery of recognized gestures to the embedding application.

use crate::events::{
    ContextMenuEvent, PanGestureEvent, PinchGestureEvent, RotateGestureEvent, SwipeGestureEvent,
};

/// Receiver for recognized gestures.
///
/// Every method has a no-op default so embedders implement only the
/// gestures they care about. The recognizer calls these synchronously while
/// processing an input event.
pub trait GestureSink {
    /// A pan crossed its recognition threshold.
    fn on_pan_start(&mut self, event: PanGestureEvent) {
        let _ = event;
    }

    /// An active pan progressed.
    fn on_pan_update(&mut self, event: PanGestureEvent) {
        let _ = event;
    }

    /// An active pan completed.
    fn on_pan_end(&mut self, event: PanGestureEvent) {
        let _ = event;
    }

    /// An active pan was cut short.
    fn on_pan_cancel(&mut self, event: PanGestureEvent) {
        let _ = event;
    }

    /// A pinch crossed its recognition threshold.
    fn on_pinch_start(&mut self, event: PinchGestureEvent) {
        let _ = event;
    }

    /// An active pinch progressed.
    fn on_pinch_update(&mut self, event: PinchGestureEvent) {
        let _ = event;
    }

    /// An active pinch completed.
    fn on_pinch_end(&mut self, event: PinchGestureEvent) {
        let _ = event;
    }

    /// An active pinch was cut short.
    fn on_pinch_cancel(&mut self, event: PinchGestureEvent) {
        let _ = event;
    }

    /// A rotate crossed its recognition threshold.
    fn on_rotate_start(&mut self, event: RotateGestureEvent) {
        let _ = event;
    }

    /// An active rotate progressed.
    fn on_rotate_update(&mut self, event: RotateGestureEvent) {
        let _ = event;
    }

    /// An active rotate completed.
    fn on_rotate_end(&mut self, event: RotateGestureEvent) {
        let _ = event;
    }

    /// An active rotate was cut short.
    fn on_rotate_cancel(&mut self, event: RotateGestureEvent) {
        let _ = event;
    }

    /// A contact lifted fast enough to count as a swipe.
    fn on_swipe(&mut self, event: SwipeGestureEvent) {
        let _ = event;
    }

    /// A context menu was requested, via long-press or secondary button.
    fn on_context_menu(&mut self, event: ContextMenuEvent) {
        let _ = event;
    }
}

/// A recognized gesture captured by [`CollectedGestures`].
#[derive(Debug, Clone, Copy)]
pub enum RecognizedGesture {
    /// Pan lifecycle event.
    Pan(PanGestureEvent),
    /// Pinch lifecycle event.
    Pinch(PinchGestureEvent),
    /// Rotate lifecycle event.
    Rotate(RotateGestureEvent),
    /// Swipe, fired once on lift.
    Swipe(SwipeGestureEvent),
    /// Context menu request.
    ContextMenu(ContextMenuEvent),
}

/// Sink that records every gesture in emission order.
///
/// Useful in tests and for embedders that prefer to drain events from a
/// queue rather than react in callbacks.
#[derive(Debug, Default)]
pub struct CollectedGestures {
    /// Gestures in the order they were emitted.
    pub events: Vec<RecognizedGesture>,
}

impl CollectedGestures {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes and returns all recorded gestures.
    pub fn drain(&mut self) -> Vec<RecognizedGesture> {
        std::mem::take(&mut self.events)
    }
}

impl GestureSink for CollectedGestures {
    fn on_pan_start(&mut self, event: PanGestureEvent) {
        self.events.push(RecognizedGesture::Pan(event));
    }

    fn on_pan_update(&mut self, event: PanGestureEvent) {
        self.events.push(RecognizedGesture::Pan(event));
    }

    fn on_pan_end(&mut self, event: PanGestureEvent) {
        self.events.push(RecognizedGesture::Pan(event));
    }

    fn on_pan_cancel(&mut self, event: PanGestureEvent) {
        self.events.push(RecognizedGesture::Pan(event));
    }

    fn on_pinch_start(&mut self, event: PinchGestureEvent) {
        self.events.push(RecognizedGesture::Pinch(event));
    }

    fn on_pinch_update(&mut self, event: PinchGestureEvent) {
        self.events.push(RecognizedGesture::Pinch(event));
    }

    fn on_pinch_end(&mut self, event: PinchGestureEvent) {
        self.events.push(RecognizedGesture::Pinch(event));
    }

    fn on_pinch_cancel(&mut self, event: PinchGestureEvent) {
        self.events.push(RecognizedGesture::Pinch(event));
    }

    fn on_rotate_start(&mut self, event: RotateGestureEvent) {
        self.events.push(RecognizedGesture::Rotate(event));
    }

    fn on_rotate_update(&mut self, event: RotateGestureEvent) {
        self.events.push(RecognizedGesture::Rotate(event));
    }

    fn on_rotate_end(&mut self, event: RotateGestureEvent) {
        self.events.push(RecognizedGesture::Rotate(event));
    }

    fn on_rotate_cancel(&mut self, event: RotateGestureEvent) {
        self.events.push(RecognizedGesture::Rotate(event));
    }

    fn on_swipe(&mut self, event: SwipeGestureEvent) {
        self.events.push(RecognizedGesture::Swipe(event));
    }

    fn on_context_menu(&mut self, event: ContextMenuEvent) {
        self.events.push(RecognizedGesture::ContextMenu(event));
    }
}
