use super::*;

// =============================================================
// Helpers
// =============================================================

fn fields(title: &str) -> TaskFields {
    TaskFields {
        title: title.to_owned(),
        ..TaskFields::default()
    }
}

fn board_with(titles: &[(&str, ColumnId)]) -> (BoardState, Vec<TaskId>) {
    let mut board = BoardState::default();
    let ids = titles
        .iter()
        .map(|(title, column)| board.create_task(*column, fields(title)).expect("create"))
        .collect();
    (board, ids)
}

fn ids_in(board: &BoardState, column: ColumnId) -> Vec<TaskId> {
    board.column(column).expect("column").task_ids.clone()
}

// =============================================================
// Default board
// =============================================================

#[test]
fn default_board_has_three_empty_columns_in_order() {
    let board = BoardState::default();
    assert_eq!(board.column_order, vec![ColumnId::Todo, ColumnId::InProgress, ColumnId::Done]);
    assert!(board.tasks.is_empty());
    for id in ColumnId::ALL {
        let column = board.column(id).expect("column");
        assert_eq!(column.id, id);
        assert!(column.task_ids.is_empty());
    }
    assert_eq!(board.column(ColumnId::InProgress).map(|c| c.title.as_str()), Some("In Progress"));
}

#[test]
fn default_board_is_valid() {
    assert_eq!(BoardState::default().validate(), Ok(()));
}

#[test]
fn column_id_parses_wire_names() {
    assert_eq!("todo".parse::<ColumnId>(), Ok(ColumnId::Todo));
    assert_eq!("inprogress".parse::<ColumnId>(), Ok(ColumnId::InProgress));
    assert_eq!("done".parse::<ColumnId>(), Ok(ColumnId::Done));
    assert_eq!(
        "archive".parse::<ColumnId>(),
        Err(BoardError::UnknownColumn("archive".to_owned()))
    );
}

// =============================================================
// create_task
// =============================================================

#[test]
fn create_task_appends_to_column_with_empty_defaults() {
    let mut board = BoardState::default();
    let id = board.create_task(ColumnId::Todo, fields("Buy milk")).expect("create");

    let task = board.task(&id).expect("task");
    assert_eq!(task.title, "Buy milk");
    assert_eq!(task.desc, "");
    assert_eq!(task.column, ColumnId::Todo);
    assert_eq!(task.priority, Priority::Medium);
    assert!(task.subtasks.is_empty());
    assert_eq!(ids_in(&board, ColumnId::Todo), vec![id]);
}

#[test]
fn create_task_blank_title_gets_placeholder() {
    let mut board = BoardState::default();
    let id = board.create_task(ColumnId::Done, fields("   ")).expect("create");
    assert_eq!(board.task(&id).map(|t| t.title.as_str()), Some(UNTITLED_TASK));
}

#[test]
fn create_task_trims_text_fields() {
    let mut board = BoardState::default();
    let id = board
        .create_task(
            ColumnId::Todo,
            TaskFields {
                title: "  Ship it ".to_owned(),
                desc: "\tsoon\n".to_owned(),
                priority: Priority::High,
                due_date: "2026-01-02".to_owned(),
            },
        )
        .expect("create");
    let task = board.task(&id).expect("task");
    assert_eq!(task.title, "Ship it");
    assert_eq!(task.desc, "soon");
    assert_eq!(task.priority, Priority::High);
    assert_eq!(task.due_date, "2026-01-02");
}

#[test]
fn create_task_ids_are_unique() {
    let mut board = BoardState::default();
    for _ in 0..50 {
        board.create_task(ColumnId::Todo, fields("x")).expect("create");
    }
    assert_eq!(board.tasks.len(), 50);
    assert_eq!(ids_in(&board, ColumnId::Todo).len(), 50);
    assert!(board.tasks.keys().all(|id| id.as_str().starts_with("task-")));
}

#[test]
fn create_task_in_missing_column_is_rejected_without_change() {
    let mut board = BoardState::default();
    board.columns.remove(&ColumnId::Done);
    let before = board.clone();

    let result = board.create_task(ColumnId::Done, fields("lost"));

    assert_eq!(result, Err(BoardError::UnknownColumn("done".to_owned())));
    assert_eq!(board, before);
}

#[test]
fn insert_task_rejects_duplicate_id() {
    let mut board = BoardState::default();
    let id = TaskId::from("task-1");
    board.insert_task(id.clone(), ColumnId::Todo, fields("a")).expect("insert");
    let before = board.clone();
    assert!(board.insert_task(id, ColumnId::Done, fields("b")).is_err());
    assert_eq!(board, before);
}

// =============================================================
// delete_task
// =============================================================

#[test]
fn delete_task_removes_from_map_and_column() {
    let (mut board, ids) = board_with(&[("a", ColumnId::Todo), ("b", ColumnId::Todo), ("c", ColumnId::Done)]);

    let removed = board.delete_task(&ids[0]).expect("removed");

    assert_eq!(removed.title, "a");
    assert!(board.task(&ids[0]).is_none());
    assert_eq!(ids_in(&board, ColumnId::Todo), vec![ids[1].clone()]);
    assert_eq!(ids_in(&board, ColumnId::Done), vec![ids[2].clone()]);
    assert_eq!(board.validate(), Ok(()));
}

#[test]
fn delete_task_twice_is_noop() {
    let (mut board, ids) = board_with(&[("a", ColumnId::InProgress)]);
    assert!(board.delete_task(&ids[0]).is_some());
    let after_first = board.clone();

    assert!(board.delete_task(&ids[0]).is_none());
    assert_eq!(board, after_first);
}

#[test]
fn delete_unknown_task_is_noop() {
    let (mut board, _) = board_with(&[("a", ColumnId::Todo)]);
    let before = board.clone();
    assert!(board.delete_task(&TaskId::from("task-missing")).is_none());
    assert_eq!(board, before);
}

// =============================================================
// move_task
// =============================================================

#[test]
fn move_task_to_same_column_leaves_state_unchanged() {
    let (mut board, ids) = board_with(&[("a", ColumnId::Todo), ("b", ColumnId::Todo)]);
    let before = board.to_json().expect("json");

    assert_eq!(board.move_task(&ids[0], ColumnId::Todo), Ok(false));

    assert_eq!(board.to_json().expect("json"), before);
    assert_eq!(ids_in(&board, ColumnId::Todo), ids);
}

#[test]
fn move_task_appends_to_destination_and_updates_column() {
    let (mut board, ids) = board_with(&[("a", ColumnId::Todo), ("b", ColumnId::Done)]);

    assert_eq!(board.move_task(&ids[0], ColumnId::Done), Ok(true));

    assert!(ids_in(&board, ColumnId::Todo).is_empty());
    assert_eq!(ids_in(&board, ColumnId::Done), vec![ids[1].clone(), ids[0].clone()]);
    assert_eq!(board.task(&ids[0]).map(|t| t.column), Some(ColumnId::Done));
    assert_eq!(board.validate(), Ok(()));
}

#[test]
fn move_unknown_task_is_rejected() {
    let mut board = BoardState::default();
    let before = board.clone();
    assert!(matches!(
        board.move_task(&TaskId::from("task-ghost"), ColumnId::Done),
        Err(BoardError::UnknownTask(_))
    ));
    assert_eq!(board, before);
}

// =============================================================
// Subtasks
// =============================================================

#[test]
fn add_subtask_appends_open_item_in_order() {
    let (mut board, ids) = board_with(&[("a", ColumnId::Todo)]);
    assert_eq!(board.add_subtask(&ids[0], "first"), Ok(1));
    assert_eq!(board.add_subtask(&ids[0], "  second "), Ok(2));

    let subtasks = &board.task(&ids[0]).expect("task").subtasks;
    assert_eq!(subtasks[0], Subtask { text: "first".to_owned(), completed: false });
    assert_eq!(subtasks[1].text, "second");
}

#[test]
fn add_subtask_rejects_blank_text() {
    let (mut board, ids) = board_with(&[("a", ColumnId::Todo)]);
    let before = board.clone();
    assert_eq!(board.add_subtask(&ids[0], " \t "), Err(BoardError::EmptySubtask));
    assert_eq!(board, before);
}

#[test]
fn toggle_subtask_flips_flag() {
    let (mut board, ids) = board_with(&[("a", ColumnId::Todo)]);
    board.add_subtask(&ids[0], "one").expect("add");

    assert_eq!(board.toggle_subtask(&ids[0], 0), Ok(true));
    assert_eq!(board.task(&ids[0]).map(Task::subtask_counts), Some((1, 1)));
    assert_eq!(board.toggle_subtask(&ids[0], 0), Ok(false));
    assert_eq!(board.task(&ids[0]).map(Task::subtask_counts), Some((0, 1)));
}

#[test]
fn toggle_subtask_out_of_range_is_rejected() {
    let (mut board, ids) = board_with(&[("a", ColumnId::Todo)]);
    board.add_subtask(&ids[0], "one").expect("add");
    let before = board.clone();

    assert!(matches!(
        board.toggle_subtask(&ids[0], 1),
        Err(BoardError::SubtaskOutOfRange { index: 1, .. })
    ));
    assert_eq!(board, before);
}

// =============================================================
// Persistence shape
// =============================================================

#[test]
fn json_round_trip_preserves_board() {
    let (mut board, ids) = board_with(&[("a", ColumnId::Todo), ("b", ColumnId::InProgress)]);
    board.add_subtask(&ids[1], "check").expect("add");
    board.toggle_subtask(&ids[1], 0).expect("toggle");

    let raw = board.to_json().expect("json");
    let decoded = BoardState::from_json(&raw).expect("decode");

    assert_eq!(decoded, board);
    assert_eq!(decoded.to_json().expect("json"), raw);
}

#[test]
fn json_uses_original_field_names() {
    let mut board = BoardState::default();
    board
        .insert_task(
            TaskId::from("task-1"),
            ColumnId::InProgress,
            TaskFields {
                title: "t".to_owned(),
                due_date: "2026-03-01".to_owned(),
                ..TaskFields::default()
            },
        )
        .expect("insert");
    let value: serde_json::Value = serde_json::from_str(&board.to_json().expect("json")).expect("value");

    assert_eq!(value["columnOrder"], serde_json::json!(["todo", "inprogress", "done"]));
    assert_eq!(value["columns"]["inprogress"]["taskIds"], serde_json::json!(["task-1"]));
    assert_eq!(value["tasks"]["task-1"]["dueDate"], "2026-03-01");
    assert_eq!(value["tasks"]["task-1"]["priority"], "medium");
}

#[test]
fn load_or_default_accepts_blob_written_by_earlier_versions() {
    let raw = r#"{
        "tasks": {
            "task-1700000000000": {
                "id": "task-1700000000000",
                "column": "todo",
                "title": "Old task",
                "desc": "",
                "priority": "high",
                "dueDate": "",
                "subtasks": [{ "text": "a", "completed": true }]
            }
        },
        "columns": {
            "todo": { "id": "todo", "title": "To Do", "taskIds": ["task-1700000000000"] },
            "inprogress": { "id": "inprogress", "title": "In Progress", "taskIds": [] },
            "done": { "id": "done", "title": "Done", "taskIds": [] }
        },
        "columnOrder": ["todo", "inprogress", "done"]
    }"#;

    let board = BoardState::load_or_default(Some(raw));

    let task = board.task(&TaskId::from("task-1700000000000")).expect("task");
    assert_eq!(task.priority, Priority::High);
    assert_eq!(task.subtask_counts(), (1, 1));
}

#[test]
fn load_or_default_missing_blob_gives_default() {
    assert_eq!(BoardState::load_or_default(None), BoardState::default());
}

#[test]
fn load_or_default_unparseable_blob_gives_default() {
    assert_eq!(BoardState::load_or_default(Some("{not json")), BoardState::default());
    assert_eq!(BoardState::load_or_default(Some("null")), BoardState::default());
}

#[test]
fn from_json_rejects_dangling_task_reference() {
    let mut board = BoardState::default();
    board
        .columns
        .get_mut(&ColumnId::Todo)
        .expect("column")
        .task_ids
        .push(TaskId::from("task-ghost"));
    let raw = serde_json::to_string(&board).expect("json");

    assert!(matches!(BoardState::from_json(&raw), Err(BoardError::Corrupt(_))));
    assert_eq!(BoardState::load_or_default(Some(&raw)), BoardState::default());
}

#[test]
fn validate_rejects_task_listed_in_wrong_column() {
    let (mut board, ids) = board_with(&[("a", ColumnId::Todo)]);
    board.tasks.get_mut(&ids[0]).expect("task").column = ColumnId::Done;
    assert!(matches!(board.validate(), Err(BoardError::Corrupt(_))));
}

#[test]
fn validate_rejects_duplicate_listing() {
    let (mut board, ids) = board_with(&[("a", ColumnId::Todo)]);
    board.columns.get_mut(&ColumnId::Todo).expect("column").task_ids.push(ids[0].clone());
    assert!(matches!(board.validate(), Err(BoardError::Corrupt(_))));
}

#[test]
fn validate_rejects_unlisted_task() {
    let (mut board, _) = board_with(&[("a", ColumnId::Todo)]);
    board.columns.get_mut(&ColumnId::Todo).expect("column").task_ids.clear();
    assert!(matches!(board.validate(), Err(BoardError::Corrupt(_))));
}

#[test]
fn validate_rejects_bad_column_order() {
    let mut board = BoardState::default();
    board.column_order = vec![ColumnId::Todo, ColumnId::Todo, ColumnId::Done];
    assert!(matches!(board.validate(), Err(BoardError::Corrupt(_))));
}

// =============================================================
// Scenario
// =============================================================

#[test]
fn task_lifecycle_across_columns() {
    let mut board = BoardState::default();
    let id = board.create_task(ColumnId::Todo, fields("Buy milk")).expect("create");
    assert_eq!(ids_in(&board, ColumnId::Todo), vec![id.clone()]);

    assert_eq!(board.move_task(&id, ColumnId::Done), Ok(true));
    assert!(ids_in(&board, ColumnId::Todo).is_empty());
    assert_eq!(ids_in(&board, ColumnId::Done), vec![id.clone()]);

    assert_eq!(board.add_subtask(&id, "pick 2%"), Ok(1));
    assert_eq!(board.task(&id).map(Task::subtask_counts), Some((0, 1)));
    assert_eq!(board.toggle_subtask(&id, 0), Ok(true));
    assert_eq!(board.task(&id).map(Task::subtask_counts), Some((1, 1)));

    assert!(board.delete_task(&id).is_some());
    assert!(board.task(&id).is_none());
    assert!(ids_in(&board, ColumnId::Done).is_empty());
}
