use role_tagger::storage::{JsonStorage, TagStore};
use role_tagger::worker::{RoleWorker, WorkerMessage, WorkerResponse};

fn configured(dir: &tempfile::TempDir) -> RoleWorker {
    let mut worker = RoleWorker::default();
    let response = worker.handle_message(WorkerMessage::configure(
        dir.path().join("roles.json").display().to_string(),
        vec!["SWE".to_string(), "SE".to_string()],
    ));
    assert_eq!(response, WorkerResponse::Configured);
    worker
}

#[test]
fn saved_state_is_returned_by_the_next_load() {
    let dir = tempfile::tempdir().unwrap();
    let mut worker = configured(&dir);

    let response = worker.handle_message(WorkerMessage::save_registry(vec![
        "SWE".to_string(),
        "SE".to_string(),
        "SRE".to_string(),
    ]));
    assert_eq!(response, WorkerResponse::RegistrySaved { count: 3 });

    let response = worker.handle_message(WorkerMessage::save_selection("12".to_string(), vec!["SRE".to_string()]));
    assert_eq!(
        response,
        WorkerResponse::SelectionSaved {
            candidate_id: "12".to_string(),
            count: 1,
        }
    );

    let response = worker.handle_message(WorkerMessage::load_candidate("12".to_string()));
    assert_eq!(
        response,
        WorkerResponse::CandidateLoaded {
            candidate_id: "12".to_string(),
            registry: vec!["SWE".to_string(), "SE".to_string(), "SRE".to_string()],
            roles: vec!["SRE".to_string()],
        }
    );
}

#[test]
fn load_registry_seeds_an_empty_store() {
    let dir = tempfile::tempdir().unwrap();
    let mut worker = configured(&dir);

    let response = worker.handle_message(WorkerMessage::load_registry());
    assert_eq!(
        response,
        WorkerResponse::RegistryLoaded {
            registry: vec!["SWE".to_string(), "SE".to_string()],
        }
    );
}

#[test]
fn empty_seed_list_uses_the_default_vocabulary() {
    let dir = tempfile::tempdir().unwrap();
    let storage = JsonStorage::new(dir.path().join("roles.json")).unwrap();
    let mut worker = RoleWorker::with_store(Box::new(storage), Vec::new());

    let WorkerResponse::RegistryLoaded { registry } = worker.handle_message(WorkerMessage::load_registry()) else {
        panic!("expected a loaded registry");
    };
    assert_eq!(registry.first().map(String::as_str), Some("SWE"));
    assert_eq!(registry.len(), 8);
}

#[test]
fn writes_are_visible_to_a_fresh_store() {
    let dir = tempfile::tempdir().unwrap();
    {
        let mut worker = configured(&dir);
        worker.handle_message(WorkerMessage::save_registry(vec!["DBA".to_string()]));
    }

    let storage = JsonStorage::new(dir.path().join("roles.json")).unwrap();
    assert_eq!(storage.load_registry().unwrap(), Some(vec!["DBA".to_string()]));
}

#[test]
fn requests_survive_json_transport() {
    let dir = tempfile::tempdir().unwrap();
    let mut worker = configured(&dir);

    let payload = serde_json::to_string(&WorkerMessage::load_candidate("3".to_string())).unwrap();
    let request: WorkerMessage = serde_json::from_str(&payload).unwrap();
    let response = worker.handle_message(request);

    let payload = serde_json::to_string(&response).unwrap();
    let back: WorkerResponse = serde_json::from_str(&payload).unwrap();
    assert!(matches!(back, WorkerResponse::CandidateLoaded { ref roles, .. } if roles.is_empty()));
}
