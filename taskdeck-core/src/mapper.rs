//! Conversions between stored records, client representations and write
//! payloads. Payloads are expected to be validated by the caller.

use taskdeck_model::{Todo, TodoId, TodoPatch, TodoRecord};

// -----------------------------------------------------------------------------
// TodoRecord --> Todo
pub fn to_todo(record: TodoRecord) -> Todo {
    Todo {
        id: record.id,
        title: record.title,
        completed: record.completed,
    }
}

// -----------------------------------------------------------------------------
// title --> TodoRecord (fresh id, not completed)
pub fn new_record(title: &str) -> TodoRecord {
    TodoRecord::new(title)
}

// -----------------------------------------------------------------------------
// (id, title, completed) --> TodoRecord
pub fn replacement_record(id: TodoId, title: &str, completed: bool) -> TodoRecord {
    TodoRecord {
        id,
        title: title.to_string(),
        completed,
    }
}

// -----------------------------------------------------------------------------
// TodoRecord + TodoPatch --> TodoRecord
/// Copies `record` and overwrites only the fields present in `patch`.
pub fn patched_record(record: &TodoRecord, patch: &TodoPatch) -> TodoRecord {
    let mut patched = record.clone();

    if let Some(title) = &patch.title {
        patched.title = title.clone();
    }

    if let Some(completed) = patch.completed {
        patched.completed = completed;
    }

    patched
}
