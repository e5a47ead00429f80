//! In-memory backend implementing both service traits.
//!
//! Records every call by endpoint name and can be told to fail the next
//! call to a given endpoint, so services can be tested for "state is only
//! touched after a confirmed success".

use hypodesk_runtime::{AuthApi, Error, HypothesisApi, Result};
use hypodesk_types::wire::{
    GetHypothesisResponse, HypothesisRecord, MessageResponse, SaveTopicRequest, SignInRequest,
    SignInResponse, UpsertAction, UpsertRequest, UpsertResponse, UserLookupResponse,
};
use hypodesk_types::{RecordId, Role};
use std::collections::HashMap;
use std::sync::Mutex;

use crate::fixtures;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Upload {
    pub id: RecordId,
    pub file_name: String,
    pub size: usize,
}

#[derive(Debug, Clone)]
struct User {
    name: String,
    password: String,
}

#[derive(Debug, Default)]
struct State {
    records: Vec<HypothesisRecord>,
    users: HashMap<String, User>,
    calls: Vec<String>,
    failures: HashMap<&'static str, (u16, String)>,
    uploads: Vec<Upload>,
    saved_for_now: Vec<SaveTopicRequest>,
    next_id: u64,
}

#[derive(Debug, Default)]
pub struct FakeBackend {
    state: Mutex<State>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend preloaded with the 25 fixture topics.
    pub fn with_fixture_topics() -> Self {
        Self::new().with_records(fixtures::topic_records())
    }

    pub fn with_records(self, records: Vec<HypothesisRecord>) -> Self {
        {
            let mut state = self.state.lock().unwrap();
            state.next_id = 1000 + records.len() as u64;
            state.records = records;
        }
        self
    }

    pub fn with_user(self, user_id: &str, name: &str, password: &str) -> Self {
        self.state.lock().unwrap().users.insert(
            user_id.to_string(),
            User {
                name: name.to_string(),
                password: password.to_string(),
            },
        );
        self
    }

    /// Make the next call to `endpoint` fail with `status`.
    pub fn fail_next(&self, endpoint: &'static str, status: u16, message: &str) {
        self.state
            .lock()
            .unwrap()
            .failures
            .insert(endpoint, (status, message.to_string()));
    }

    /// Endpoint names in call order.
    pub fn calls(&self) -> Vec<String> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn records(&self) -> Vec<HypothesisRecord> {
        self.state.lock().unwrap().records.clone()
    }

    pub fn uploads(&self) -> Vec<Upload> {
        self.state.lock().unwrap().uploads.clone()
    }

    pub fn saved_for_now(&self) -> Vec<SaveTopicRequest> {
        self.state.lock().unwrap().saved_for_now.clone()
    }

    fn begin(&self, endpoint: &'static str) -> Result<std::sync::MutexGuard<'_, State>> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(endpoint.to_string());
        if let Some((status, message)) = state.failures.remove(endpoint) {
            return Err(Error::Api { status, message });
        }
        Ok(state)
    }
}

fn not_found(id: &RecordId) -> Error {
    Error::Api {
        status: 404,
        message: format!("Hypothesis {} not found", id),
    }
}

impl HypothesisApi for FakeBackend {
    fn list_topics(&self) -> Result<Vec<HypothesisRecord>> {
        let state = self.begin("get-topic")?;
        Ok(state.records.clone())
    }

    fn upsert_hypothesis(&self, request: &UpsertRequest) -> Result<UpsertResponse> {
        let mut state = self.begin("add-hypothesis")?;
        let today = chrono::Local::now().date_naive().format("%Y-%m-%d").to_string();

        let existing = state
            .records
            .iter()
            .position(|r| r.hypothesis_nm == request.hypothesis_name);

        let (id, action) = match existing {
            Some(pos) => (state.records[pos].hypothesis_id.clone(), UpsertAction::Updated),
            None => {
                state.next_id += 1;
                (RecordId::from(state.next_id), UpsertAction::Inserted)
            }
        };

        let record = HypothesisRecord {
            hypothesis_id: id.clone(),
            hypothesis_nm: request.hypothesis_name.clone(),
            hypothesis_smry_txt: Some(request.details.clone()),
            hypothesis_rtnle_smry_txt: Some(request.rationale.clone()),
            hypothesis_last_updtd_dt: Some(today),
            hypothesis_status: Some("Draft".to_string()),
            lobs: Vec::new(),
            category: None,
            market: None,
        };

        match existing {
            Some(pos) => state.records[pos] = record.clone(),
            None => state.records.insert(0, record.clone()),
        }

        Ok(UpsertResponse {
            hypothesis_id: id,
            action,
            message: Some(match action {
                UpsertAction::Updated => "Hypothesis updated successfully!".to_string(),
                UpsertAction::Inserted => "Hypothesis created successfully!".to_string(),
            }),
            data: Some(record),
        })
    }

    fn get_hypothesis(&self, id: &RecordId) -> Result<GetHypothesisResponse> {
        let state = self.begin("get-hypothesis")?;
        let record = state
            .records
            .iter()
            .find(|r| &r.hypothesis_id == id)
            .cloned()
            .ok_or_else(|| not_found(id))?;

        Ok(GetHypothesisResponse {
            message: Some("Hypothesis data retrieved successfully!".to_string()),
            data: Some(record),
        })
    }

    fn delete_hypothesis(&self, id: &RecordId) -> Result<MessageResponse> {
        let mut state = self.begin("delete-hypothesis")?;
        let pos = state
            .records
            .iter()
            .position(|r| &r.hypothesis_id == id)
            .ok_or_else(|| not_found(id))?;
        state.records.remove(pos);

        Ok(MessageResponse {
            message: Some("Hypothesis deleted successfully".to_string()),
        })
    }

    fn save_topic(&self, request: &SaveTopicRequest) -> Result<MessageResponse> {
        let mut state = self.begin("update-topic")?;
        state.saved_for_now.push(request.clone());
        Ok(MessageResponse {
            message: Some("Topic saved".to_string()),
        })
    }

    fn upload_file(
        &self,
        id: &RecordId,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<MessageResponse> {
        let mut state = self.begin("upload-hypothesis-file")?;
        if !state.records.iter().any(|r| &r.hypothesis_id == id) {
            return Err(not_found(id));
        }
        state.uploads.push(Upload {
            id: id.clone(),
            file_name: file_name.to_string(),
            size: bytes.len(),
        });
        Ok(MessageResponse {
            message: Some("File uploaded".to_string()),
        })
    }
}

impl AuthApi for FakeBackend {
    fn lookup_user(
        &self,
        user_id: &str,
        _application_code: &str,
        role: Role,
    ) -> Result<UserLookupResponse> {
        let state = self.begin("validate-user")?;
        Ok(match state.users.get(user_id) {
            Some(user) => UserLookupResponse {
                user_exists: true,
                user_name: Some(user.name.clone()),
                available_roles: vec![role.as_str().to_string()],
                message: Some("User validated successfully".to_string()),
            },
            None => UserLookupResponse {
                user_exists: false,
                user_name: None,
                available_roles: Vec::new(),
                message: None,
            },
        })
    }

    fn sign_in(&self, request: &SignInRequest, password: &str) -> Result<SignInResponse> {
        let state = self.begin("sign-in")?;
        match state.users.get(&request.user_id) {
            Some(user) if user.password == password => Ok(SignInResponse {
                user_id: Some(request.user_id.clone()),
                message: Some("Login successful".to_string()),
            }),
            _ => Err(Error::Api {
                status: 401,
                message: "Invalid username or password".to_string(),
            }),
        }
    }
}
