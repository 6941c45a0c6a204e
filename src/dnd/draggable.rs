//! Binding for a movable item (a rule row or a group header)

use crate::dnd::DragState;

/// Handler invoked with `(source, target)` after a valid drop.
pub type DropHandler<S, T> = Box<dyn FnMut(S, T)>;

/// Configuration for a [`Draggable`]; swappable in place via
/// [`Draggable::set_options`] when the underlying item re-renders.
pub struct DraggableOptions<S, T> {
    pub payload: S,
    pub scope: String,
    pub on_drop: Option<DropHandler<S, T>>,
}

/// Drag-start/drag-end behavior for one movable element.
///
/// Publishes into the shared [`DragState`] at drag-start and, at drag-end,
/// fires the drop handler when (and only when) a compatible droppable
/// committed the drop mid-gesture. No teardown hook is needed: a completed
/// gesture has already reset the state, and the supported UI model never
/// detaches an element mid-gesture.
pub struct Draggable<S, T> {
    options: DraggableOptions<S, T>,
}

impl<S: Clone, T> Draggable<S, T> {
    pub fn new(options: DraggableOptions<S, T>) -> Self {
        Draggable { options }
    }

    /// Records this item and its scope as the gesture source.
    pub fn drag_start(&self, state: &mut DragState<S, T>) {
        tracing::debug!(scope = %self.options.scope, "drag start");
        state.is_dragging = true;
        state.dragged_item = Some(self.options.payload.clone());
        state.source_scope = self.options.scope.clone();
        state.touch();
    }

    /// Completes or aborts the gesture.
    ///
    /// Reads the state as it is *now*, not a drag-start snapshot, so a drop
    /// that updated the target container mid-gesture is honored. The state is
    /// reset unconditionally afterwards, valid drop or not.
    pub fn drag_end(&mut self, state: &mut DragState<S, T>) {
        if state.target_valid
            && let Some(on_drop) = self.options.on_drop.as_mut()
            && let (Some(source), Some(target)) =
                (state.dragged_item.take(), state.target_container.take())
        {
            tracing::debug!(scope = %self.options.scope, "drop completed");
            on_drop(source, target);
        }
        state.reset();
    }

    /// Swaps payload/scope/handler without re-creating the binding, for
    /// reactive re-render of the underlying item.
    pub fn set_options(&mut self, options: DraggableOptions<S, T>) {
        self.options = options;
    }
}
