use chrono::{NaiveDate, TimeZone, Utc};
use tasklist_core::storage::{open_db, open_db_in_memory};
use tasklist_core::{
    Category, Clock, FixedClock, NewTask, Priority, RepoError, RepoResult, SlotStore,
    SlotTaskRepository, SqliteSlotStore, Task, TaskRepository, TaskStore, TASKS_SLOT_KEY,
};
use uuid::Uuid;

fn clock() -> FixedClock {
    FixedClock::new(Utc.with_ymd_and_hms(2025, 1, 1, 9, 0, 0).unwrap())
}

#[test]
fn task_serialization_uses_expected_wire_fields() {
    let id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let mut task = Task::with_id(id, "Buy milk", 1_735_722_000_000).unwrap();
    task.priority = Priority::High;
    task.category = Category::Shopping;
    task.due_date = NaiveDate::from_ymd_opt(2025, 1, 2);

    let json = serde_json::to_value(&task).unwrap();
    assert_eq!(json["id"], id.to_string());
    assert_eq!(json["text"], "Buy milk");
    assert_eq!(json["completed"], false);
    assert_eq!(json["priority"], "high");
    assert_eq!(json["category"], "shopping");
    assert_eq!(json["createdAt"], 1_735_722_000_000_i64);
    assert_eq!(json["dueDate"], "2025-01-02");

    let decoded: Task = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, task);
}

#[test]
fn unset_due_date_is_omitted() {
    let task = Task::new("no deadline", 5).unwrap();
    let json = serde_json::to_value(&task).unwrap();
    assert!(json.get("dueDate").is_none());
}

#[test]
fn deserialize_rejects_blank_text() {
    let value = serde_json::json!({
        "id": "11111111-2222-4333-8444-555555555555",
        "text": "   ",
        "completed": false,
        "priority": "low",
        "category": "work",
        "createdAt": 10
    });

    let err = serde_json::from_value::<Task>(value).unwrap_err();
    assert!(err.to_string().contains("task text cannot be empty"), "unexpected error: {err}");
}

#[test]
fn tasks_survive_reopening_the_database() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tasklist.sqlite3");

    let saved = {
        let conn = open_db(&path).unwrap();
        let repo = SlotTaskRepository::new(SqliteSlotStore::new(&conn));
        let mut store = TaskStore::load(repo, clock());
        store
            .add(
                NewTask::new("Buy milk")
                    .priority(Priority::High)
                    .category(Category::Shopping)
                    .due_date(NaiveDate::from_ymd_opt(2025, 1, 1)),
            )
            .unwrap();
        let second = store.add(NewTask::new("Call mom")).unwrap();
        store.toggle(second);
        store.tasks().to_vec()
    };

    let conn = open_db(&path).unwrap();
    let repo = SlotTaskRepository::new(SqliteSlotStore::new(&conn));
    let store = TaskStore::load(repo, clock());
    assert_eq!(store.tasks(), saved.as_slice());
}

#[test]
fn repository_round_trip_preserves_order_and_fields() {
    let conn = open_db_in_memory().unwrap();
    let repo = SlotTaskRepository::new(SqliteSlotStore::new(&conn));

    let mut first = Task::new("first", 1).unwrap();
    first.completed = true;
    let mut second = Task::new("second", 2).unwrap();
    second.due_date = NaiveDate::from_ymd_opt(2030, 6, 1);
    let tasks = vec![second, first];

    repo.save_tasks(&tasks).unwrap();
    assert_eq!(repo.load_tasks().unwrap(), tasks);
}

#[test]
fn absent_or_blank_slot_loads_empty() {
    let conn = open_db_in_memory().unwrap();
    let repo = SlotTaskRepository::new(SqliteSlotStore::new(&conn));
    assert!(repo.load_tasks().unwrap().is_empty());

    SqliteSlotStore::new(&conn)
        .write_slot(TASKS_SLOT_KEY, "  ")
        .unwrap();
    assert!(repo.load_tasks().unwrap().is_empty());
}

#[test]
fn malformed_slot_is_rejected_by_repo_and_recovered_by_store() {
    let conn = open_db_in_memory().unwrap();
    SqliteSlotStore::new(&conn)
        .write_slot(TASKS_SLOT_KEY, "{not json")
        .unwrap();

    let repo = SlotTaskRepository::new(SqliteSlotStore::new(&conn));
    assert!(matches!(repo.load_tasks(), Err(RepoError::Serialization(_))));

    let store = TaskStore::load(repo, clock());
    assert!(store.is_empty());
}

#[test]
fn duplicate_ids_are_invalid_data() {
    let conn = open_db_in_memory().unwrap();
    let task = Task::new("twin", 1).unwrap();
    let raw = serde_json::to_string(&vec![task.clone(), task]).unwrap();
    SqliteSlotStore::new(&conn)
        .write_slot(TASKS_SLOT_KEY, &raw)
        .unwrap();

    let repo = SlotTaskRepository::new(SqliteSlotStore::new(&conn));
    assert!(matches!(repo.load_tasks(), Err(RepoError::InvalidData(_))));
    assert!(TaskStore::load(repo, clock()).is_empty());
}

#[test]
fn every_mutation_rewrites_the_slot() {
    let conn = open_db_in_memory().unwrap();
    let repo = SlotTaskRepository::new(SqliteSlotStore::new(&conn));
    let mut store = TaskStore::load(repo, clock());
    let slots = SqliteSlotStore::new(&conn);

    let id = store.add(NewTask::new("persist me")).unwrap();
    let persisted: Vec<Task> =
        serde_json::from_str(&slots.read_slot(TASKS_SLOT_KEY).unwrap().unwrap()).unwrap();
    assert_eq!(persisted.len(), 1);
    assert!(!persisted[0].completed);

    store.toggle(id);
    let persisted: Vec<Task> =
        serde_json::from_str(&slots.read_slot(TASKS_SLOT_KEY).unwrap().unwrap()).unwrap();
    assert!(persisted[0].completed);

    store.delete(id);
    assert_eq!(slots.read_slot(TASKS_SLOT_KEY).unwrap().as_deref(), Some("[]"));
}

#[test]
fn created_at_at_the_limit_is_invalid_data_and_add_still_works() {
    let conn = open_db_in_memory().unwrap();
    let raw = serde_json::json!([{
        "id": "0193aaaa-0000-7000-8000-000000000001",
        "text": "from the far future",
        "completed": false,
        "priority": "medium",
        "category": "personal",
        "createdAt": i64::MAX
    }])
    .to_string();
    SqliteSlotStore::new(&conn)
        .write_slot(TASKS_SLOT_KEY, &raw)
        .unwrap();

    let repo = SlotTaskRepository::new(SqliteSlotStore::new(&conn));
    assert!(matches!(repo.load_tasks(), Err(RepoError::InvalidData(_))));

    let mut store = TaskStore::load(repo, clock());
    assert!(store.is_empty());
    let id = store.add(NewTask::new("y")).unwrap();
    assert_eq!(store.get(id).unwrap().created_at, clock().now_millis());
}

struct PreloadedRepo(Vec<Task>);

impl TaskRepository for PreloadedRepo {
    fn load_tasks(&self) -> RepoResult<Vec<Task>> {
        Ok(self.0.clone())
    }

    fn save_tasks(&self, _tasks: &[Task]) -> RepoResult<()> {
        Ok(())
    }
}

#[test]
fn add_after_created_at_limit_saturates_instead_of_overflowing() {
    let at_limit = Task::new("at the limit", i64::MAX).unwrap();
    let mut store = TaskStore::load(PreloadedRepo(vec![at_limit]), clock());

    let id = store.add(NewTask::new("next")).unwrap();
    assert_eq!(store.len(), 2);
    assert_eq!(store.get(id).unwrap().created_at, i64::MAX);
}

#[test]
fn non_uuid_ids_make_the_blob_malformed() {
    let conn = open_db_in_memory().unwrap();
    let raw = serde_json::json!([{
        "id": "1700000000000-ab12cd3",
        "text": "legacy",
        "completed": false,
        "priority": "low",
        "category": "work",
        "createdAt": 1_700_000_000_000_i64
    }])
    .to_string();
    SqliteSlotStore::new(&conn)
        .write_slot(TASKS_SLOT_KEY, &raw)
        .unwrap();

    let repo = SlotTaskRepository::new(SqliteSlotStore::new(&conn));
    assert!(matches!(repo.load_tasks(), Err(RepoError::Serialization(_))));
    assert!(TaskStore::load(repo, clock()).is_empty());
}
