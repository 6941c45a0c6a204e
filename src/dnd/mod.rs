//! Drag-and-drop gesture state machine
//!
//! The editing surface lets a user reorder rules within a group, move rules
//! between groups, and reorder groups. This module is the host-agnostic core
//! of that interaction: it knows nothing about widgets or pointers, only
//! about the discrete events the host environment delivers for one gesture.
//!
//! # Pieces
//!
//! - [`DragState`]: one explicitly owned record describing the in-flight
//!   gesture, passed `&mut` into the bindings. Reset to its empty sentinel
//!   after every completed or aborted drag.
//! - [`Draggable`]: bound to one movable item; handles drag-start and
//!   drag-end, firing the caller's drop handler when a valid drop happened.
//! - [`Droppable`]: bound to one container; handles drag-enter/over/leave and
//!   drop, accepting only gestures whose source scope matches its own.
//!
//! # Scopes
//!
//! A drag started in one scope may only be dropped into a droppable carrying
//! the same scope string: a "rule" drag into a rules container, a "group"
//! drag into the groups list. A mismatched drop is not an error, it is an
//! expected user action and is simply ignored.
//!
//! # Event ordering
//!
//! The host event model delivers drag-start before any over/enter/leave/drop
//! for the same gesture and drag-end after all of them, and always eventually
//! delivers drag-end. Exactly one gesture is active at a time. This module
//! relies on that ordering and does not re-verify it.
//!
//! Each event method on [`Droppable`] returns `true` when the event was
//! accepted, which is the host's cue to suppress its default action.

use std::time::Duration;

pub mod draggable;
pub mod droppable;
pub mod state;


pub use draggable::{Draggable, DraggableOptions};
pub use droppable::{Droppable, DroppableOptions};
pub use state::DragState;

/// Opaque handle to a host UI element.
///
/// The drag subsystem never dereferences these; it only records which
/// concrete element committed the drop so the host can resolve it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(pub u64);

/// How long a highlight survives after drag-leave before it fades.
///
/// Enter/leave events arrive out of order when the pointer crosses internal
/// boundaries of a nested container; a short grace window that a subsequent
/// enter cancels keeps the highlight from flickering.
pub const LEAVE_DEBOUNCE: Duration = Duration::from_millis(50);
