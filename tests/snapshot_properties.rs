use datasnap::data::{columns, Column, ColumnData, ColumnDataSource, SourceRef, Value};
use datasnap::notify::{ChangeEvent, EventLog, DATA_PROPERTY};
use datasnap::snapshot::{SnapshotManager, StackState};
use datasnap::tools::{ToolKind, Toolbar};
use ndarray::{arr1, IxDyn};
use std::collections::BTreeMap;

fn ints(values: &[i64]) -> Column {
    values.iter().copied().map(Value::Int).collect()
}

fn shared(data: ColumnData) -> SourceRef {
    ColumnDataSource::new(data).into_shared()
}

#[test]
fn live_mutation_does_not_reach_the_snapshot() {
    let image = Value::buffer(arr1(&[1.0, 2.0]).into_dyn());
    let points = Value::array(vec![Value::Int(1)]);
    let source = shared(columns([
        ("image", vec![image.clone()]),
        ("points", vec![points.clone()]),
        ("x", ints(&[1, 2, 3])),
    ]));
    let id = source.borrow().id();
    let mut manager = SnapshotManager::new();

    manager.checkpoint(&[source.clone()]);

    // In-place edits of the live columns and of the cells they hold.
    source.borrow_mut().column_mut("x").unwrap().push(Value::Int(4));
    if let Value::Buffer(data) = &image {
        data.borrow_mut()[IxDyn(&[0])] = -1.0;
    }
    if let Value::Array(items) = &points {
        items.borrow_mut().clear();
    }

    let top = manager.stack(id).and_then(|s| s.top()).unwrap();
    assert_eq!(top.column("x"), Some(&ints(&[1, 2, 3])));
    assert_eq!(
        top.column("image"),
        Some(&vec![Value::buffer(arr1(&[1.0, 2.0]).into_dyn())])
    );
    assert_eq!(top.column("points"), Some(&vec![Value::array(vec![Value::Int(1)])]));
}

#[test]
fn restored_data_does_not_alias_remaining_snapshots() {
    let source = shared(columns([("cells", vec![Value::array(vec![Value::Int(1)])])]));
    let id = source.borrow().id();
    let mut manager = SnapshotManager::new();
    let mut log = EventLog::new();

    manager.checkpoint(&[source.clone()]);
    manager.checkpoint(&[source.clone()]);
    manager.restore(&[source.clone()], &mut log);

    if let Some(Value::Array(items)) = source.borrow().column("cells").and_then(|c| c.first()) {
        items.borrow_mut().push(Value::Int(2));
    }

    let remaining = manager.stack(id).and_then(|s| s.top()).unwrap();
    assert_eq!(
        remaining.column("cells"),
        Some(&vec![Value::array(vec![Value::Int(1)])])
    );
}

#[test]
fn object_cells_stay_shared() {
    let mut meta = BTreeMap::new();
    meta.insert("color".to_string(), Value::str("red"));
    let object = Value::object(meta);
    let source = shared(columns([("meta", vec![object.clone()])]));
    let id = source.borrow().id();
    let mut manager = SnapshotManager::new();

    manager.checkpoint(&[source.clone()]);
    if let Value::Object(map) = &object {
        map.borrow_mut().insert("color".to_string(), Value::str("blue"));
    }

    let top = manager.stack(id).and_then(|s| s.top()).unwrap();
    let cell = &top.column("meta").unwrap()[0];
    assert!(cell.shares_storage(&object));
}

#[test]
fn clear_is_idempotent() {
    let source = shared(columns([
        ("x", ints(&[1, 2])),
        ("y", vec![Value::str("a"), Value::str("b")]),
    ]));
    let mut manager = SnapshotManager::new();
    let mut log = EventLog::new();

    manager.clear(&[source.clone()], &mut log);
    let once = source.borrow().data().clone();
    manager.clear(&[source.clone()], &mut log);

    assert_eq!(source.borrow().data(), &once);
    assert_eq!(source.borrow().column_names(), vec!["x", "y"]);
    assert_eq!(once["x"], Column::new());
    assert_eq!(once["y"], Column::new());
}

#[test]
fn n_checkpoints_then_n_restores_round_trip() {
    let source = shared(columns([("x", ints(&[0]))]));
    let id = source.borrow().id();
    let original = source.borrow().data().clone();
    let mut manager = SnapshotManager::new();
    let mut log = EventLog::new();

    for i in 1..=5 {
        manager.checkpoint(&[source.clone()]);
        source.borrow_mut().column_mut("x").unwrap().push(Value::Int(i));
    }
    assert_eq!(manager.state(id), StackState::HasSnapshots(5));

    for _ in 0..5 {
        manager.restore(&[source.clone()], &mut log);
    }

    assert_eq!(source.borrow().data(), &original);
    assert_eq!(manager.state(id), StackState::Empty);
}

#[test]
fn restore_without_snapshots_is_a_silent_no_op() {
    let source = shared(columns([("x", ints(&[1, 2]))]));
    let before = source.borrow().data().clone();
    let mut manager = SnapshotManager::new();
    let mut log = EventLog::new();

    manager.restore(&[source.clone()], &mut log);

    assert_eq!(source.borrow().data(), &before);
    assert!(log.is_empty());
    assert_eq!(manager.tracked_sources(), 0);
}

#[test]
fn walkthrough_of_the_stack() {
    let source = shared(columns([("x", ints(&[1, 2, 3]))]));
    let id = source.borrow().id();
    let mut toolbar = Toolbar::with_sources(vec![source.clone()]);
    let mut log = EventLog::new();

    toolbar.activate(ToolKind::Checkpoint, &mut log);
    assert_eq!(toolbar.manager().depth(id), 1);

    source.borrow_mut().set_data(columns([("x", ints(&[1, 2, 3, 4]))]));
    toolbar.activate(ToolKind::Checkpoint, &mut log);
    assert_eq!(toolbar.manager().depth(id), 2);
    assert!(log.is_empty());

    toolbar.activate(ToolKind::Restore, &mut log);
    assert_eq!(source.borrow().column("x"), Some(&ints(&[1, 2, 3, 4])));
    assert_eq!(toolbar.manager().depth(id), 1);

    toolbar.activate(ToolKind::Restore, &mut log);
    assert_eq!(source.borrow().column("x"), Some(&ints(&[1, 2, 3])));
    assert_eq!(toolbar.manager().depth(id), 0);

    toolbar.activate(ToolKind::Restore, &mut log);
    assert_eq!(source.borrow().column("x"), Some(&ints(&[1, 2, 3])));

    assert_eq!(
        log.events(),
        &[
            ChangeEvent::SourceChanged(id),
            ChangeEvent::PropertyChanged {
                source: id,
                property: DATA_PROPERTY
            },
            ChangeEvent::SourceChanged(id),
            ChangeEvent::PropertyChanged {
                source: id,
                property: DATA_PROPERTY
            },
        ]
    );
}

#[test]
fn clear_keeps_column_names() {
    let source = shared(columns([
        ("x", ints(&[1, 2])),
        ("y", vec![Value::str("a"), Value::str("b")]),
    ]));
    let mut toolbar = Toolbar::with_sources(vec![source.clone()]);
    let mut log = EventLog::new();

    toolbar.activate(ToolKind::Clear, &mut log);

    assert_eq!(
        source.borrow().data(),
        &columns([("x", Column::new()), ("y", Column::new())])
    );
    assert_eq!(log.len(), 2);
}

#[test]
fn every_source_is_processed_in_order() {
    let empty_stack = shared(columns([("x", ints(&[1]))]));
    let with_stack = shared(columns([("x", ints(&[2]))]));
    let first = empty_stack.borrow().id();
    let second = with_stack.borrow().id();
    let mut toolbar = Toolbar::with_sources(vec![empty_stack.clone(), with_stack.clone()]);
    let mut log = EventLog::new();

    // Only the second source gets a snapshot.
    toolbar.manager_mut().checkpoint(&[with_stack.clone()]);
    with_stack.borrow_mut().set_data(columns([("x", ints(&[9]))]));

    toolbar.activate(ToolKind::Restore, &mut log);
    assert_eq!(empty_stack.borrow().column("x"), Some(&ints(&[1])));
    assert_eq!(with_stack.borrow().column("x"), Some(&ints(&[2])));
    assert!(log.events().iter().all(|e| e.source() == second));

    log.take();
    toolbar.activate(ToolKind::Clear, &mut log);
    let order: Vec<_> = log.events().iter().map(ChangeEvent::source).collect();
    assert_eq!(order, vec![first, first, second, second]);
}
