//! Repository behaviour over the on-disk storage medium.

use aurora_store::{FileStorage, UserRepository, UserStore};
use aurora_types::{NewUser, User};
use tempfile::TempDir;

fn open(dir: &TempDir) -> UserRepository {
    UserRepository::new(UserStore::new(FileStorage::in_dir(dir.path())))
}

fn ids(users: &[User]) -> Vec<String> {
    users.iter().map(|u| u.id.clone()).collect()
}

#[test]
fn test_seed_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let first = open(&dir).list().unwrap();
    let second = open(&dir).list().unwrap();
    assert_eq!(first, second);
    assert_eq!(ids(&first), vec!["u1", "u2", "u3"]);
}

#[test]
fn test_end_to_end_scenario() {
    let dir = TempDir::new().unwrap();
    let mut repo = open(&dir);

    assert_eq!(repo.list().unwrap().len(), 3);

    let grace = repo
        .add(NewUser::new("Grace Hopper", "grace@navy.mil", ""))
        .unwrap();
    let users = repo.list().unwrap();
    assert_eq!(users.len(), 4);
    assert_eq!(users[0].id, grace.id);

    repo.delete("u1").unwrap();
    let users = repo.list().unwrap();
    assert_eq!(ids(&users), vec![grace.id.clone(), "u2".into(), "u3".into()]);

    let mut edited = repo.get_by_id(&grace.id).unwrap().unwrap();
    edited.profile.basic.first_name = "Grace".to_string();
    repo.upsert(edited).unwrap();

    let reloaded = open(&dir).get_by_id(&grace.id).unwrap().unwrap();
    assert_eq!(reloaded.profile.basic.first_name, "Grace");
    assert_eq!(reloaded.name, "Grace Hopper");
}

#[test]
fn test_corrupt_file_reseeds() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("storage.json"), "garbage").unwrap();

    let users = open(&dir).list().unwrap();
    assert_eq!(users.len(), 3);
}

#[test]
fn test_other_keys_are_left_alone() {
    use aurora_store::Storage;

    let dir = TempDir::new().unwrap();
    let mut raw = FileStorage::in_dir(dir.path());
    raw.set_item("theme", "dark").unwrap();

    open(&dir).delete("u2").unwrap();

    assert_eq!(raw.get_item("theme").unwrap().as_deref(), Some("dark"));
}
