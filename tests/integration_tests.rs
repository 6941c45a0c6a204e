//! End-to-end exercises of the editing core: parse a document, drive a drag
//! gesture, and commit the reorder the gesture describes.

use routedit::core::model::{Config, RulePos};
use routedit::dnd::{DragState, Draggable, DraggableOptions, Droppable, DroppableOptions, ElementId};
use std::cell::RefCell;
use std::rc::Rc;

const DOC: &str = r##"{
    "groups": [
        {
            "id": "03187af4",
            "name": "Streaming",
            "color": "#ff4400",
            "interface": "wg0",
            "enable": true,
            "rules": [
                {"id": "0a1b2c3d", "name": "CDN", "rule": ".example.com", "type": "namespace", "enable": true},
                {"id": "4e5f6071", "name": "", "rule": "*.video.example", "type": "wildcard", "enable": true}
            ]
        },
        {
            "id": "deadbeef",
            "name": "Work",
            "color": "#00ff44",
            "interface": "eth1",
            "enable": true,
            "rules": [
                {"id": "11223344", "name": "", "rule": "intranet.corp", "type": "domain", "enable": true}
            ]
        }
    ]
}"##;

#[test]
fn drag_gesture_moves_a_rule_between_groups() {
    let config = Rc::new(RefCell::new(Config::parse(DOC).unwrap()));

    // The drop handler commits the move the gesture described
    let edited = Rc::clone(&config);
    let mut draggable = Draggable::new(DraggableOptions {
        payload: RulePos { group: 0, index: 1 },
        scope: "rules".to_string(),
        on_drop: Some(Box::new(move |from: RulePos, to: RulePos| {
            assert!(edited.borrow_mut().move_rule(from, to));
        })),
    });
    let mut droppable = Droppable::new(
        ElementId(42),
        DroppableOptions {
            payload: RulePos { group: 1, index: 0 },
            scope: "rules".to_string(),
        },
    );

    let mut state = DragState::new();
    draggable.drag_start(&mut state);
    assert!(droppable.drag_enter(&state));
    assert!(droppable.drop_on(&mut state));
    draggable.drag_end(&mut state);
    assert!(state.is_idle());

    let config = config.borrow();
    assert_eq!(config.groups[0].rules.len(), 1);
    assert_eq!(config.groups[1].rules.len(), 2);
    assert_eq!(config.groups[1].rules[0].id, "4e5f6071");
    assert_eq!(config.groups[1].rules[1].id, "11223344");
}

#[test]
fn drag_gesture_reorders_groups() {
    let config = Rc::new(RefCell::new(Config::parse(DOC).unwrap()));

    let edited = Rc::clone(&config);
    let mut draggable = Draggable::new(DraggableOptions {
        payload: 0usize,
        scope: "groups".to_string(),
        on_drop: Some(Box::new(move |from: usize, to: usize| {
            assert!(edited.borrow_mut().move_group(from, to));
        })),
    });
    let mut droppable = Droppable::new(
        ElementId(1),
        DroppableOptions {
            payload: 1usize,
            scope: "groups".to_string(),
        },
    );

    let mut state = DragState::new();
    draggable.drag_start(&mut state);
    assert!(droppable.drop_on(&mut state));
    draggable.drag_end(&mut state);

    let config = config.borrow();
    assert_eq!(config.groups[0].id, "deadbeef");
    assert_eq!(config.groups[1].id, "03187af4");
}

#[test]
fn rule_scoped_drag_cannot_land_in_group_list() {
    let mut state: DragState<RulePos, RulePos> = DragState::new();
    let fired = Rc::new(RefCell::new(0u32));

    let sink = Rc::clone(&fired);
    let mut draggable = Draggable::new(DraggableOptions {
        payload: RulePos { group: 0, index: 0 },
        scope: "rules".to_string(),
        on_drop: Some(Box::new(move |_, _| *sink.borrow_mut() += 1)),
    });
    let mut groups_list = Droppable::new(
        ElementId(2),
        DroppableOptions {
            payload: RulePos { group: 0, index: 0 },
            scope: "groups".to_string(),
        },
    );

    draggable.drag_start(&mut state);
    assert!(!groups_list.drag_over(&state));
    assert!(!groups_list.drop_on(&mut state));
    draggable.drag_end(&mut state);

    assert_eq!(*fired.borrow(), 0);
    assert!(state.is_idle());
}

#[test]
fn parsed_document_rules_validate_per_kind() {
    let config = Config::parse(DOC).unwrap();
    for group in &config.groups {
        for rule in &group.rules {
            assert!(rule.is_valid(), "rule {} should be valid", rule.id);
        }
    }
}
