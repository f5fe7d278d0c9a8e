//! Integration tests for the local store contract.

use teamboard_model::{AppData, Designer, SeedData, Skill, SkillRating};
use teamboard_persistence::{
    FileStorage, KeyValueStorage, LocalStore, MemoryStorage, STORAGE_KEY, export_file_name,
    read_backup, write_backup,
};
use tempfile::tempdir;

fn seed() -> SeedData {
    let mut anna = Designer::new("d1", "Anna");
    anna.email = "anna@studio.io".into();
    anna.position = "Product designer".into();
    anna.skills.push(SkillRating::new("s1", 60, 80));
    SeedData {
        designers: Some(vec![anna]),
        skills: Some(vec![Skill::new("s1", "Figma", "Tools")]),
        ..SeedData::default()
    }
}

#[test]
fn seeding_copies_collections_and_sets_version() {
    let mut store = LocalStore::new(MemoryStorage::new());
    let fixtures = seed();
    store.initialize_with_mock_data(fixtures.clone()).unwrap();

    let data = store.get_all_data().unwrap().expect("document written");
    assert_eq!(data.version, 1);
    assert_eq!(Some(data.designers), fixtures.designers);
    assert_eq!(Some(data.skills), fixtures.skills);
    assert!(data.learning_modules.is_empty());
    assert!(data.projects.is_empty());
    assert!(data.tests.is_empty());
    assert!(data.lessons.is_empty());
}

#[test]
fn save_designer_upserts() {
    let mut store = LocalStore::new(MemoryStorage::new());
    store.initialize_with_mock_data(seed()).unwrap();
    let before = store.get_all_data().unwrap().unwrap().last_updated;

    let mut renamed = Designer::new("d1", "Anna Petrova");
    renamed.position = "Lead designer".into();
    store.save_designer(renamed.clone()).unwrap();
    store.save_designer(renamed).unwrap();

    let data = store.get_all_data().unwrap().unwrap();
    assert_eq!(data.designers.len(), 1);
    assert_eq!(data.designers[0].name, "Anna Petrova");
    assert_eq!(data.designers[0].position, "Lead designer");
    assert!(data.last_updated >= before);
    assert_eq!(data.version, 1);
}

#[test]
fn export_import_round_trip() {
    let mut store = LocalStore::new(MemoryStorage::new());
    store.initialize_with_mock_data(seed()).unwrap();
    let before = store.get_all_data().unwrap();

    let exported = store.export_data().unwrap();
    assert!(store.import_data(&exported).unwrap());

    assert_eq!(store.get_all_data().unwrap(), before);
    let reparsed: serde_json::Value = serde_json::from_str(&store.export_data().unwrap()).unwrap();
    let original: serde_json::Value = serde_json::from_str(&exported).unwrap();
    assert_eq!(reparsed, original);
}

#[test]
fn import_moves_data_between_stores() {
    let mut source = LocalStore::new(MemoryStorage::new());
    source.initialize_with_mock_data(seed()).unwrap();

    let mut target = LocalStore::new(MemoryStorage::new());
    target.initialize_with_mock_data(SeedData::default()).unwrap();
    assert!(target.import_data(&source.export_data().unwrap()).unwrap());

    assert_eq!(target.get_designers().unwrap().len(), 1);
    assert_eq!(target.get_skills().unwrap()[0].name, "Figma");
}

#[test]
fn bad_import_leaves_document_untouched() {
    let mut store = LocalStore::new(MemoryStorage::new());
    store.initialize_with_mock_data(seed()).unwrap();
    let before = store.export_data().unwrap();

    assert!(!store.import_data("not json").unwrap());
    assert!(!store.import_data("{\"designers\": []}").unwrap());
    assert!(!store.import_data("null").unwrap());

    assert_eq!(store.export_data().unwrap(), before);
}

#[test]
fn bad_import_on_empty_store_keeps_it_empty() {
    let mut store = LocalStore::new(MemoryStorage::new());
    assert!(!store.import_data("not json").unwrap());
    assert!(store.get_all_data().unwrap().is_none());
}

#[test]
fn clear_then_read_is_none() {
    let mut store = LocalStore::new(MemoryStorage::new());
    store.initialize_with_mock_data(seed()).unwrap();
    store.clear_all_data().unwrap();

    assert!(store.get_all_data().unwrap().is_none());
    assert!(store.get_designers().unwrap().is_empty());
    assert!(store.ensure_initialized(seed()).unwrap());
}

#[test]
fn file_storage_survives_reopen() {
    let dir = tempdir().unwrap();
    {
        let mut store = LocalStore::new(FileStorage::new(dir.path()));
        store.initialize_with_mock_data(seed()).unwrap();
        store.save_skill(Skill::new("s2", "User research", "Research")).unwrap();
    }

    let store = LocalStore::new(FileStorage::new(dir.path()));
    let skills = store.get_skills().unwrap();
    assert_eq!(skills.len(), 2);
    assert!(store.storage().get(STORAGE_KEY).unwrap().is_some());
}

#[test]
fn backup_file_restores_document() {
    let dir = tempdir().unwrap();
    let mut store = LocalStore::new(MemoryStorage::new());
    store.initialize_with_mock_data(seed()).unwrap();

    let date = chrono::NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
    let path = dir.path().join(export_file_name("Teamboard", date));
    write_backup(&path, &store.export_data().unwrap()).unwrap();

    store.clear_all_data().unwrap();
    assert!(store.import_data(&read_backup(&path).unwrap()).unwrap());

    let data: AppData = store.get_all_data().unwrap().unwrap();
    assert_eq!(data.designers[0].skills[0].target_level, 80);
}

#[test]
fn import_keeps_unknown_fields_of_nested_records() {
    let json = r#"{
      "designers": [{
        "id": "d1",
        "name": "Anna",
        "mood": "calm",
        "skills": [{ "skillId": "s1", "currentLevel": 50, "targetLevel": 70, "note": "keep" }],
        "achievements": [{ "id": "a1", "title": "Speaker", "icon": "mic" }],
        "careerGoals": [{ "id": "g1", "title": "Mentor", "owner": "self" }]
      }],
      "skills": [],
      "learningModules": [],
      "projects": [],
      "tests": [{
        "id": "t1",
        "moduleId": "m1",
        "title": "Quiz",
        "questions": [{ "id": "q1", "text": "Pick", "options": ["a"], "type": "single" }]
      }],
      "lessons": [],
      "version": 2,
      "lastUpdated": "2024-05-02T08:30:00Z"
    }"#;

    let mut store = LocalStore::new(MemoryStorage::new());
    assert!(store.import_data(json).unwrap());
    // Any later write rewrites the whole document
    store.save_skill(Skill::new("s1", "Figma", "Tools")).unwrap();

    let exported: serde_json::Value = serde_json::from_str(&store.export_data().unwrap()).unwrap();
    let designer = &exported["designers"][0];
    assert_eq!(designer["mood"], "calm");
    assert_eq!(designer["skills"][0]["note"], "keep");
    assert_eq!(designer["achievements"][0]["icon"], "mic");
    assert_eq!(designer["careerGoals"][0]["owner"], "self");
    assert_eq!(exported["tests"][0]["questions"][0]["type"], "single");
}

#[test]
fn import_accepts_empty_form_dates() {
    let json = r#"{
      "designers": [{ "id": "d1", "name": "Anna", "hireDate": "" }],
      "skills": [],
      "learningModules": [],
      "projects": [{ "id": "p1", "name": "Audit", "startDate": "", "endDate": "" }],
      "tests": [],
      "lessons": [],
      "version": 1,
      "lastUpdated": "2024-05-02T08:30:00Z"
    }"#;

    let mut store = LocalStore::new(MemoryStorage::new());
    assert!(store.import_data(json).unwrap());
    assert_eq!(store.get_designers().unwrap()[0].hire_date, None);
    assert_eq!(store.get_projects().unwrap()[0].start_date, None);
}
