//! The shared gesture record
//!
//! [`DragState`] is a passive data holder: the two bindings read and write
//! its fields directly, and anything that wants to render highlighting polls
//! it synchronously. The `revision` counter is the change notification: it
//! bumps on every mutation, so an observer can cheaply detect "something
//! changed since I last looked" without a callback registry.

use crate::dnd::ElementId;

/// State of the one in-flight drag gesture.
///
/// `S` is the dragged payload type, `T` the drop-target payload type. The
/// default value is the idle sentinel: all flags false, all payloads empty.
/// Exactly one gesture is active at a time; the state is never shared across
/// independent gestures because every gesture ends in [`DragState::reset`].
#[derive(Debug)]
pub struct DragState<S, T> {
    pub is_dragging: bool,
    /// Payload recorded at drag-start, consumed at a valid drag-end
    pub dragged_item: Option<S>,
    /// Scope tag of the element that started the gesture; empty when idle
    pub source_scope: String,
    /// Payload of the droppable that committed the drop, if any
    pub target_container: Option<T>,
    /// Concrete element that committed the drop, if any
    pub target_element: Option<ElementId>,
    /// Set by a compatible drop; gates the drop handler at drag-end
    pub target_valid: bool,
    revision: u64,
}

impl<S, T> Default for DragState<S, T> {
    fn default() -> Self {
        DragState {
            is_dragging: false,
            dragged_item: None,
            source_scope: String::new(),
            target_container: None,
            target_element: None,
            target_valid: false,
            revision: 0,
        }
    }
}

impl<S, T> DragState<S, T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all public fields to the idle sentinel.
    ///
    /// Called unconditionally at drag-end so a failed or cancelled drag never
    /// leaves stale state for the next gesture.
    pub fn reset(&mut self) {
        self.is_dragging = false;
        self.dragged_item = None;
        self.source_scope.clear();
        self.target_container = None;
        self.target_element = None;
        self.target_valid = false;
        self.touch();
    }

    /// Records a mutation for polling observers.
    pub fn touch(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }

    /// Monotonic (wrapping) change counter; bumps on every mutation.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Whether the state is at the idle sentinel.
    pub fn is_idle(&self) -> bool {
        !self.is_dragging
            && self.dragged_item.is_none()
            && self.source_scope.is_empty()
            && self.target_container.is_none()
            && self.target_element.is_none()
            && !self.target_valid
    }
}
