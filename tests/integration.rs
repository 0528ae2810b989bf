use std::fs;
use std::io::Cursor;
use std::sync::Arc;

use srms::auth::credentials::MIN_COST;
use srms::auth::{AuthGate, Identity, PasswordHasher, Role};
use srms::error::{AppError, AuthError, ErrorKind, RecordError, UserError, error_kind};
use srms::records::{Confirmation, DeleteOutcome, NewRecord, RecordDirectory, RecordUpdate};
use srms::storage::{CollectionStore, JsonFileStore, RECORDS, USERS};
use srms::users::UserDirectory;
use srms::{App, Shell};
use tempfile::tempdir;

// Helper to build the core over a JSON store rooted in a temp directory
fn setup(root: &std::path::Path) -> (AuthGate, RecordDirectory) {
    let store: Arc<dyn CollectionStore> = Arc::new(JsonFileStore::new(root));
    let users = UserDirectory::new(store.clone(), PasswordHasher::new(MIN_COST));
    (AuthGate::new(users), RecordDirectory::new(store))
}

#[test]
fn test_record_lifecycle_example() {
    let dir = tempdir().unwrap();
    let (gate, records) = setup(dir.path());
    let admin = gate.signup_admin("root", "pw", "pw").unwrap();

    records
        .create(&admin, NewRecord::new("S1", "Ann", "Math", "A"))
        .unwrap();
    let found = records.find(&admin, "S1").unwrap();
    assert_eq!(
        (found.id.as_str(), found.name.as_str(), found.course.as_str(), found.grade.as_str()),
        ("S1", "Ann", "Math", "A")
    );

    let updated = records
        .update(&admin, "S1", &RecordUpdate::default().grade("B"))
        .unwrap();
    assert_eq!(updated.grade, "B");
    assert_eq!(updated.name, "Ann");
    assert_eq!(updated.course, "Math");

    let outcome = records.delete(&admin, "S1", Confirmation::Cancelled).unwrap();
    assert_eq!(outcome, DeleteOutcome::Cancelled);
    assert!(records.find(&admin, "S1").is_ok());

    records.delete(&admin, "S1", Confirmation::Confirmed).unwrap();
    let err = records.find(&admin, "S1").unwrap_err();
    assert!(matches!(err, RecordError::NotFound(_)));
    assert_eq!(error_kind(&AppError::from(err)), ErrorKind::NotFound);
}

#[test]
fn test_state_survives_reopening_the_store() {
    let dir = tempdir().unwrap();
    {
        let (gate, records) = setup(dir.path());
        let staff = gate.signup_staff("ann", "pw", "pw").unwrap();
        records
            .create(&staff, NewRecord::new("S1", "Ann", "Math", "A"))
            .unwrap();
    }

    let (gate, records) = setup(dir.path());
    let staff = gate.login("ann", "pw").unwrap();
    assert_eq!(staff, Identity::new("ann", Role::Staff));

    let record = records.find(&staff, "S1").unwrap();
    assert_eq!(record.created_by, "ann");

    let raw = fs::read_to_string(dir.path().join("records.json")).unwrap();
    assert!(raw.contains("\"created_at\""));
    assert!(raw.contains("\"created_by\": \"ann\""));

    let raw = fs::read_to_string(dir.path().join("users.json")).unwrap();
    assert!(raw.contains("\"role\": \"staff\""));
    assert!(!raw.contains("\"pw\""));
}

#[test]
fn test_corrupt_collections_load_as_empty() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("users.json"), "not json at all").unwrap();
    fs::write(dir.path().join("records.json"), "[{\"id\": \"broken\"}]").unwrap();

    let (gate, records) = setup(dir.path());
    assert!(!gate.users().admin_exists());

    let admin = gate.signup_admin("root", "pw", "pw").unwrap();
    assert!(records.list_all(&admin).unwrap().is_empty());

    records
        .create(&admin, NewRecord::new("S1", "Ann", "Math", "A"))
        .unwrap();
    assert_eq!(records.list_all(&admin).unwrap().len(), 1);
}

#[test]
fn test_legacy_records_without_creator_are_listed() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("records.json"),
        r#"[{"id": "S7", "name": "Old", "course": "History", "grade": "B",
             "created_at": "2022-01-15 08:00:00"}]"#,
    )
    .unwrap();

    let (_, records) = setup(dir.path());
    let listed = records.list_all(&Identity::guest()).unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].created_by, "");
}

#[test]
fn test_guest_role_matrix() {
    let dir = tempdir().unwrap();
    let (gate, records) = setup(dir.path());
    let admin = gate.signup_admin("root", "pw", "pw").unwrap();
    records
        .create(&admin, NewRecord::new("S1", "Ann", "Math", "A"))
        .unwrap();

    let guest = gate.guest_login();
    assert_eq!(records.list_all(&guest).unwrap().len(), 1);

    assert!(matches!(
        records.create(&guest, NewRecord::new("S2", "B", "C", "D")),
        Err(RecordError::Forbidden(_))
    ));
    assert!(matches!(records.find(&guest, "S1"), Err(RecordError::Forbidden(_))));
    assert!(matches!(
        records.update(&guest, "S1", &RecordUpdate::default().name("X")),
        Err(RecordError::Forbidden(_))
    ));
    assert!(matches!(
        records.delete(&guest, "S1", Confirmation::Confirmed),
        Err(RecordError::Forbidden(_))
    ));
    assert!(matches!(
        records.delete_all(&guest, Confirmation::Confirmed),
        Err(RecordError::Forbidden(_))
    ));
    assert!(matches!(gate.users().list_users(&guest), Err(UserError::Forbidden(_))));
    assert!(matches!(
        gate.users().delete_user(&guest, "root"),
        Err(UserError::Forbidden(_))
    ));
}

#[test]
fn test_sole_admin_cannot_be_deleted() {
    let dir = tempdir().unwrap();
    let (gate, _) = setup(dir.path());
    let admin = gate.signup_admin("root", "pw", "pw").unwrap();

    let err = gate.users().delete_user(&admin, "root").unwrap_err();
    assert!(matches!(err, UserError::LastAdminProtected(_)));
    assert!(gate.login("root", "pw").is_ok());
}

#[test]
fn test_login_failures_look_the_same() {
    let dir = tempdir().unwrap();
    let (gate, _) = setup(dir.path());
    gate.signup_admin("root", "pw", "pw").unwrap();

    let wrong = gate.login("root", "bad").unwrap_err();
    let unknown = gate.login("ghost", "pw").unwrap_err();
    assert!(matches!(wrong, AuthError::InvalidCredentials));
    assert!(matches!(unknown, AuthError::InvalidCredentials));
    assert_eq!(wrong.to_string(), unknown.to_string());
}

#[test]
fn test_shell_session_over_files() {
    let dir = tempdir().unwrap();
    let store = JsonFileStore::new(dir.path())
        .with_collection(USERS, "accounts.json")
        .with_collection(RECORDS, "students.json");
    let app = App::new(Arc::new(store), PasswordHasher::new(MIN_COST));

    let script = [
        "2", "root", "pw", "pw",
        "1", "S1", "Ann", "Math", "A",
        "1", "S2", "Ben", "Art", "C",
        "6", "n",
        "2",
        "9",
        "3", "ann", "pw", "wrong",
        "3", "ann", "pw", "pw",
        "6",
        "8",
        "10",
    ]
    .join("\n")
        + "\n";

    let mut shell = Shell::new(&app, Cursor::new(script), Vec::new());
    shell.run().unwrap();
    let output = String::from_utf8(shell.into_output()).unwrap();

    assert!(output.contains("Deletion cancelled."));
    assert!(output.contains("S2         Ben"));
    assert!(output.contains("Error: Passwords do not match"));
    assert!(output.contains("Account created. Welcome, ann (staff)!"));
    assert!(output.contains("Error: Access denied: staff users may not delete all records"));
    assert!(output.contains("Error: Access denied: staff users may not delete users"));

    assert!(dir.path().join("accounts.json").is_file());
    assert!(dir.path().join("students.json").is_file());
    let root = Identity::new("root", Role::Admin);
    assert_eq!(app.records.list_all(&root).unwrap().len(), 2);
}
