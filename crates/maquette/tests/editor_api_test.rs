//! Integration tests for the Editor API
//!
//! These tests exercise the public surface the way a front end would:
//! commands in, undo/redo, generated code out.

use proptest::prelude::*;

use maquette::config::AppConfig;
use maquette::identifier::Id;
use maquette::model::{Access, Attribute, ClassPatch, Method, RelationKind};
use maquette::{Command, Editor, Language};

fn editor() -> Editor {
    Editor::new(AppConfig::default())
}

fn add_class(editor: &mut Editor, name: &str) -> Id {
    editor
        .dispatch(Command::AddClass {
            name: name.to_string(),
            x: 0.0,
            y: 0.0,
            attributes: Vec::new(),
            methods: Vec::new(),
        })
        .expect("adding a class preserves invariants");
    editor
        .diagram()
        .classes()
        .last()
        .expect("class was just added")
        .id()
}

#[test]
fn undo_redo_inverse_law() {
    let mut editor = editor();

    let animal = add_class(&mut editor, "Animal");
    let dog = add_class(&mut editor, "Dog");
    editor
        .dispatch(Command::AddRelation {
            source: dog,
            target: animal,
            kind: RelationKind::Generalization,
            source_cardinality: None,
            target_cardinality: None,
        })
        .expect("dispatch relation");
    editor
        .dispatch(Command::AddGroup {
            name: "Mammals".to_string(),
            members: vec![animal, dog],
        })
        .expect("dispatch group");
    editor
        .dispatch(Command::UpdateClass {
            id: dog,
            patch: ClassPatch {
                name: Some("Hound".to_string()),
                ..ClassPatch::default()
            },
        })
        .expect("dispatch update");

    let final_state = editor.diagram().clone();
    let mutations = 5;

    for _ in 0..mutations {
        assert!(editor.undo());
    }
    assert!(editor.diagram().is_empty());
    assert!(!editor.undo(), "undo past the beginning is a no-op");

    for _ in 0..mutations {
        assert!(editor.redo());
    }
    assert_eq!(editor.diagram(), &final_state);
    assert!(!editor.redo(), "redo past the end is a no-op");
}

#[test]
fn new_mutation_discards_redo_candidates() {
    let mut editor = editor();
    add_class(&mut editor, "Animal");
    add_class(&mut editor, "Dog");

    assert!(editor.undo());
    assert!(editor.can_redo());

    add_class(&mut editor, "Cat");
    assert!(!editor.can_redo());
    assert!(!editor.redo());
}

#[test]
fn deleting_unknown_class_records_no_history_entry() {
    let mut editor = editor();
    add_class(&mut editor, "Animal");
    let depth = editor.history().undo_depth();

    let changed = editor
        .dispatch(Command::DeleteClass {
            id: Id::new("never-assigned"),
        })
        .expect("no-op delete");

    assert!(!changed);
    assert_eq!(editor.history().undo_depth(), depth);
}

#[test]
fn deleting_a_class_prunes_its_relations() {
    let mut editor = editor();
    let a = add_class(&mut editor, "A");
    let b = add_class(&mut editor, "B");
    editor
        .dispatch(Command::AddRelation {
            source: a,
            target: b,
            kind: RelationKind::Association,
            source_cardinality: None,
            target_cardinality: None,
        })
        .expect("dispatch relation");

    editor
        .dispatch(Command::DeleteClass { id: a })
        .expect("dispatch delete");

    assert!(
        editor
            .diagram()
            .relations()
            .iter()
            .all(|relation| !relation.touches(a))
    );
    assert!(editor.diagram().relations().is_empty());

    // the cascade is a single transaction: one undo restores both
    assert!(editor.undo());
    assert_eq!(editor.diagram().classes().len(), 2);
    assert_eq!(editor.diagram().relations().len(), 1);
}

#[test]
fn connecting_a_connected_pair_retypes_in_place() {
    let mut editor = editor();
    let a = add_class(&mut editor, "A");
    let b = add_class(&mut editor, "B");

    editor
        .dispatch(Command::AddRelation {
            source: a,
            target: b,
            kind: RelationKind::Association,
            source_cardinality: None,
            target_cardinality: None,
        })
        .expect("first relation");
    editor
        .dispatch(Command::AddRelation {
            source: b,
            target: a,
            kind: RelationKind::Composition,
            source_cardinality: None,
            target_cardinality: None,
        })
        .expect("second relation");

    assert_eq!(editor.diagram().relations().len(), 1);
    assert_eq!(
        editor.diagram().relations()[0].kind(),
        RelationKind::Composition
    );
}

#[test]
fn moving_a_class_bypasses_history() {
    let mut editor = editor();
    let id = add_class(&mut editor, "Animal");
    let depth = editor.history().undo_depth();

    let changed = editor
        .dispatch(Command::MoveClass {
            id,
            x: 250.0,
            y: 125.0,
        })
        .expect("dispatch move");

    assert!(changed);
    assert_eq!(editor.history().undo_depth(), depth);
    let class = editor.diagram().class(id).expect("class exists");
    assert_eq!(class.x(), 250.0);
    assert_eq!(class.y(), 125.0);
}

#[test]
fn relation_to_unknown_class_fails_fast_and_rolls_back() {
    let mut editor = editor();
    let a = add_class(&mut editor, "A");
    let before = editor.diagram().clone();
    let depth = editor.history().undo_depth();

    let result = editor.dispatch(Command::AddRelation {
        source: a,
        target: Id::new("never-assigned"),
        kind: RelationKind::Association,
        source_cardinality: None,
        target_cardinality: None,
    });

    assert!(result.is_err());
    assert_eq!(editor.diagram(), &before);
    assert_eq!(editor.history().undo_depth(), depth);
}

#[test]
fn generated_code_is_deterministic() {
    let mut editor = editor();
    editor
        .dispatch(Command::AddClass {
            name: "Animal".to_string(),
            x: 0.0,
            y: 0.0,
            attributes: vec![Attribute::new("name", "String", Access::Private)],
            methods: vec![Method::new("speak", "void", Access::Public)],
        })
        .expect("dispatch class");

    let first = editor.generate(Language::Java);
    let second = editor.generate(Language::Java);
    assert_eq!(first, second);
}

#[test]
fn generalization_produces_a_java_subclass() {
    let mut editor = editor();
    let animal = add_class(&mut editor, "Animal");
    let dog = add_class(&mut editor, "Dog");
    editor
        .dispatch(Command::AddRelation {
            source: dog,
            target: animal,
            kind: RelationKind::Generalization,
            source_cardinality: None,
            target_cardinality: None,
        })
        .expect("dispatch relation");

    let code = editor.generate(Language::Java);
    assert!(code.contains("public class Dog extends Animal"));
    assert!(code.contains("public class Animal {"));
}

#[test]
fn history_cap_limits_undo_depth() {
    use maquette::config::{GeneratorConfig, HistoryConfig};

    let config = AppConfig::new(HistoryConfig::new(Some(2)), GeneratorConfig::default());
    let mut editor = Editor::new(config);

    add_class(&mut editor, "A");
    add_class(&mut editor, "B");
    add_class(&mut editor, "C");

    assert_eq!(editor.history().undo_depth(), 2);
    assert!(editor.undo());
    assert!(editor.undo());
    assert!(!editor.undo());
    // the oldest snapshot was evicted; the first class is stranded
    assert_eq!(editor.diagram().classes().len(), 1);
}

proptest! {
    /// Any sequence of recorded structural edits can be fully retraced:
    /// undoing everything returns to the empty diagram, redoing everything
    /// restores the final state.
    #[test]
    fn undo_retraces_any_edit_sequence(ops in proptest::collection::vec((any::<bool>(), "[a-z]{1,6}"), 1..12)) {
        let mut editor = editor();
        let mut recorded = 0usize;

        for (delete, name) in ops {
            let command = if delete && !editor.diagram().classes().is_empty() {
                let id = editor.diagram().classes()[0].id();
                Command::DeleteClass { id }
            } else {
                Command::AddClass {
                    name,
                    x: 0.0,
                    y: 0.0,
                    attributes: Vec::new(),
                    methods: Vec::new(),
                }
            };
            if editor.dispatch(command).expect("structural edits preserve invariants") {
                recorded += 1;
            }
        }

        let final_state = editor.diagram().clone();

        for _ in 0..recorded {
            prop_assert!(editor.undo());
        }
        prop_assert!(editor.diagram().is_empty());
        prop_assert!(!editor.undo());

        for _ in 0..recorded {
            prop_assert!(editor.redo());
        }
        prop_assert_eq!(editor.diagram(), &final_state);
    }
}
