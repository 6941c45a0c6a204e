//! Binding for a container that accepts drops

use crate::dnd::{DragState, ElementId, LEAVE_DEBOUNCE};
use std::time::Instant;

/// Configuration for a [`Droppable`]; swappable in place via
/// [`Droppable::set_options`].
pub struct DroppableOptions<T> {
    pub payload: T,
    pub scope: String,
}

/// Visual drop-candidate state, including the post-leave grace window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Highlight {
    Off,
    On,
    /// Leave received; stays lit until `since + LEAVE_DEBOUNCE` unless an
    /// enter/over cancels the fade first
    Fading { since: Instant },
}

/// Drag-over/enter/leave/drop behavior for one container element.
///
/// Only gestures whose source scope equals this container's scope are
/// accepted; everything else is ignored without touching [`DragState`].
/// Highlighting is tracked locally and exposed through
/// [`Droppable::is_highlighted`] for the host's render cycle to poll.
pub struct Droppable<T> {
    options: DroppableOptions<T>,
    element: ElementId,
    highlight: Highlight,
}

impl<T: Clone> Droppable<T> {
    pub fn new(element: ElementId, options: DroppableOptions<T>) -> Self {
        Droppable {
            options,
            element,
            highlight: Highlight::Off,
        }
    }

    pub fn element(&self) -> ElementId {
        self.element
    }

    fn accepts<S>(&self, state: &DragState<S, T>) -> bool {
        state.is_dragging && state.source_scope == self.options.scope
    }

    /// Pointer entered this container.
    ///
    /// Marks the container as a drop candidate (idempotent; repeated events
    /// do not stack) and cancels any pending leave fade. Returns `true` when
    /// the host must suppress its default action to permit a drop.
    pub fn drag_enter<S>(&mut self, state: &DragState<S, T>) -> bool {
        if !self.accepts(state) {
            return false;
        }
        self.highlight = Highlight::On;
        true
    }

    /// Pointer moved within this container; same handling as enter.
    pub fn drag_over<S>(&mut self, state: &DragState<S, T>) -> bool {
        if !self.accepts(state) {
            return false;
        }
        self.highlight = Highlight::On;
        true
    }

    /// Pointer left this container.
    ///
    /// Starts the debounced fade rather than unhighlighting immediately:
    /// leave/enter pairs arrive out of order across nested element
    /// boundaries, and a real leave is one no enter follows within
    /// [`LEAVE_DEBOUNCE`].
    pub fn drag_leave<S>(&mut self, state: &DragState<S, T>, now: Instant) -> bool {
        if !self.accepts(state) {
            return false;
        }
        if self.highlight == Highlight::On {
            self.highlight = Highlight::Fading { since: now };
        }
        true
    }

    /// The gesture dropped on this container.
    ///
    /// Commits the target into [`DragState`] (payload, element, validity) so
    /// the draggable's drag-end fires its handler. The highlight and any
    /// pending fade are cleared; the drop is committed and the candidate
    /// marking is no longer needed. A scope mismatch leaves the state
    /// untouched, so the gesture will end as an ignored drop.
    pub fn drop_on<S>(&mut self, state: &mut DragState<S, T>) -> bool {
        if !self.accepts(state) {
            return false;
        }
        tracing::debug!(scope = %self.options.scope, element = ?self.element, "drop committed");
        state.target_container = Some(self.options.payload.clone());
        state.target_element = Some(self.element);
        state.target_valid = true;
        state.touch();
        self.highlight = Highlight::Off;
        true
    }

    /// Whether the container should render as a drop candidate at `now`.
    pub fn is_highlighted(&self, now: Instant) -> bool {
        match self.highlight {
            Highlight::Off => false,
            Highlight::On => true,
            Highlight::Fading { since } => now.duration_since(since) < LEAVE_DEBOUNCE,
        }
    }

    /// Swaps payload/scope without re-creating the binding.
    pub fn set_options(&mut self, options: DroppableOptions<T>) {
        self.options = options;
    }
}
