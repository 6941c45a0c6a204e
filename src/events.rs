//! Notification channel toward the presentation layer
//!
//! The core never renders anything. Completion and failure are signalled as
//! named events a presentation layer subscribes to: toasts with a severity
//! kind, and an overlay that is shown with a message and later hidden.
//! Dispatch is synchronous and single-threaded; there is no queue.

use strum::Display;

/// Severity of a toast notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum ToastKind {
    Info,
    Success,
    Error,
    Warning,
}

/// An event for the presentation layer to render
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    Toast { content: String, kind: ToastKind },
    Overlay { content: Option<String>, shown: bool },
}

type Subscriber = Box<dyn Fn(&UiEvent)>;

/// Synchronous fan-out of [`UiEvent`]s to registered subscribers.
#[derive(Default)]
pub struct EventBus {
    subscribers: Vec<Subscriber>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, subscriber: impl Fn(&UiEvent) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    pub fn emit(&self, event: &UiEvent) {
        for subscriber in &self.subscribers {
            subscriber(event);
        }
    }

    pub fn toast(&self, kind: ToastKind, content: impl Into<String>) {
        self.emit(&UiEvent::Toast {
            content: content.into(),
            kind,
        });
    }

    pub fn toast_info(&self, content: impl Into<String>) {
        self.toast(ToastKind::Info, content);
    }

    pub fn toast_success(&self, content: impl Into<String>) {
        self.toast(ToastKind::Success, content);
    }

    pub fn toast_error(&self, content: impl Into<String>) {
        self.toast(ToastKind::Error, content);
    }

    pub fn toast_warning(&self, content: impl Into<String>) {
        self.toast(ToastKind::Warning, content);
    }

    pub fn overlay_show(&self, content: impl Into<String>) {
        self.emit(&UiEvent::Overlay {
            content: Some(content.into()),
            shown: true,
        });
    }

    pub fn overlay_hide(&self) {
        self.emit(&UiEvent::Overlay {
            content: None,
            shown: false,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_emit_reaches_all_subscribers() {
        let seen: Rc<RefCell<Vec<UiEvent>>> = Rc::default();
        let mut bus = EventBus::new();
        for _ in 0..2 {
            let sink = Rc::clone(&seen);
            bus.subscribe(move |event| sink.borrow_mut().push(event.clone()));
        }

        bus.toast_error("save failed");
        assert_eq!(seen.borrow().len(), 2);
        assert!(matches!(
            &seen.borrow()[0],
            UiEvent::Toast { kind: ToastKind::Error, content } if content == "save failed"
        ));
    }

    #[test]
    fn test_overlay_events() {
        let seen: Rc<RefCell<Vec<UiEvent>>> = Rc::default();
        let sink = Rc::clone(&seen);
        let mut bus = EventBus::new();
        bus.subscribe(move |event| sink.borrow_mut().push(event.clone()));

        bus.overlay_show("saving");
        bus.overlay_hide();
        assert_eq!(
            seen.borrow().as_slice(),
            &[
                UiEvent::Overlay {
                    content: Some("saving".to_string()),
                    shown: true
                },
                UiEvent::Overlay {
                    content: None,
                    shown: false
                },
            ]
        );
    }

    #[test]
    fn test_toast_kind_wire_names() {
        assert_eq!(ToastKind::Info.to_string(), "info");
        assert_eq!(ToastKind::Warning.to_string(), "warning");
    }
}
