//! Storage layer tests for the RemoteUAC daemon.

use remoteuac_core::InstallStatus;
use remoteuac_core::db::DatabaseError;

use super::db::Database;
use super::models::NewInstallRequest;

async fn test_db() -> Database {
    Database::open_in_memory().await.unwrap()
}

fn sample_request(device_id: &str) -> NewInstallRequest {
    NewInstallRequest {
        device_id: device_id.to_string(),
        app_name: "installer.exe".to_string(),
        size: "1MB".to_string(),
        path: "/tmp".to_string(),
        download_source: "http://downloads.example.com/installer.exe".to_string(),
        requested_changes: serde_json::json!({"PATH": true}).to_string(),
        device_timestamp: 1_700_000_000,
    }
}

#[tokio::test]
async fn create_and_get_install_request() {
    let db = test_db().await;
    let row = db.create_install_request(&sample_request("D1")).await.unwrap();

    assert!(row.id > 0);
    assert_eq!(row.device_id, "D1");
    assert_eq!(row.app_name, "installer.exe");
    assert_eq!(row.status().unwrap(), InstallStatus::Pending);
    assert_eq!(row.device_timestamp, 1_700_000_000);
    assert!(row.created_at > 0);
    assert!(row.decided_at.is_none());

    let fetched = db.get_install_request(row.id).await.unwrap();
    assert_eq!(fetched.id, row.id);
    assert_eq!(fetched.requested_changes, row.requested_changes);
}

#[tokio::test]
async fn ids_are_unique_and_increasing() {
    let db = test_db().await;
    let first = db.create_install_request(&sample_request("D1")).await.unwrap();
    let second = db.create_install_request(&sample_request("D1")).await.unwrap();
    assert!(second.id > first.id);
}

#[tokio::test]
async fn requested_changes_stored_verbatim() {
    let db = test_db().await;
    // Not an object, not validated; the store keeps whatever it was given.
    let mut req = sample_request("D1");
    req.requested_changes = r#"["HKLM\\Software", 42, null]"#.to_string();

    let row = db.create_install_request(&req).await.unwrap();
    assert_eq!(row.requested_changes, req.requested_changes);
}

#[tokio::test]
async fn get_missing_request_is_not_found() {
    let db = test_db().await;
    let err = db.get_install_request(99_999).await.unwrap_err();
    assert!(matches!(err, DatabaseError::NotFound(_)));
}

#[tokio::test]
async fn mark_decided_moves_pending_to_terminal() {
    let db = test_db().await;
    let row = db.create_install_request(&sample_request("D1")).await.unwrap();

    assert!(db.mark_decided(row.id, InstallStatus::Approved).await.unwrap());

    let updated = db.get_install_request(row.id).await.unwrap();
    assert_eq!(updated.status().unwrap(), InstallStatus::Approved);
    assert!(updated.decided_at.is_some());
}

#[tokio::test]
async fn mark_decided_is_guarded_by_pending_status() {
    let db = test_db().await;
    let row = db.create_install_request(&sample_request("D1")).await.unwrap();

    assert!(db.mark_decided(row.id, InstallStatus::Denied).await.unwrap());
    // Second decision finds no pending row to update.
    assert!(!db.mark_decided(row.id, InstallStatus::Approved).await.unwrap());

    let updated = db.get_install_request(row.id).await.unwrap();
    assert_eq!(updated.status().unwrap(), InstallStatus::Denied);
}

#[tokio::test]
async fn mark_decided_on_missing_id_updates_nothing() {
    let db = test_db().await;
    assert!(!db.mark_decided(99_999, InstallStatus::Approved).await.unwrap());
}

#[tokio::test]
async fn file_backed_database_persists_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("remoteuac.db");

    let id = {
        let db = Database::open(&path).await.unwrap();
        let row = db.create_install_request(&sample_request("D1")).await.unwrap();
        db.mark_decided(row.id, InstallStatus::Approved).await.unwrap();
        row.id
    };

    let db = Database::open(&path).await.unwrap();
    let row = db.get_install_request(id).await.unwrap();
    assert_eq!(row.status().unwrap(), InstallStatus::Approved);
}
