use dashlet_core::storage::{keys, StorageBackend};
use dashlet_core::{open_store, SignupRequest, Store};
use serde_json::Value;

fn read_backup(path: &std::path::Path) -> Value {
    let backend = open_store(path).unwrap();
    let raw = backend.read(keys::BACKUP).unwrap().expect("backup written");
    serde_json::from_str(&raw).unwrap()
}

#[test]
fn backup_snapshot_mirrors_the_full_aggregate() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dashlet.db");

    {
        let mut store = Store::open(open_store(&path).unwrap());
        store
            .signup(&SignupRequest {
                email: "a@b.com".to_string(),
                password: "12345678".to_string(),
                first_name: "A".to_string(),
                last_name: "B".to_string(),
            })
            .unwrap();
        store.add_task("Buy milk").unwrap();
    }

    let backup = read_backup(&path);
    assert!(backup["lastUpdate"].is_string());
    assert_eq!(backup["auth"]["user"]["email"], "a@b.com");
    assert_eq!(backup["auth"]["loading"], false);
    assert_eq!(backup["profile"]["profile"]["firstName"], "A");
    assert_eq!(backup["tasks"]["tasks"][0]["text"], "Buy milk");
    assert_eq!(
        backup["notifications"]["items"][0]["text"],
        "New task added: Buy milk"
    );
}

#[test]
fn backup_is_written_even_for_settled_failures() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dashlet.db");

    {
        let mut store = Store::open(open_store(&path).unwrap());
        store.login("ghost@b.com", "pw").unwrap_err();
    }

    let backup = read_backup(&path);
    assert_eq!(backup["auth"]["user"], Value::Null);
    assert_eq!(backup["auth"]["error"], "Invalid email or password");
}

#[test]
fn backup_reflects_the_latest_state_after_clearing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dashlet.db");

    {
        let mut store = Store::open(open_store(&path).unwrap());
        store.add_task("x").unwrap();
        store.clear_notifications();
    }

    let backup = read_backup(&path);
    assert_eq!(backup["notifications"]["items"], Value::Array(vec![]));
    assert_eq!(backup["tasks"]["tasks"][0]["text"], "x");
}
