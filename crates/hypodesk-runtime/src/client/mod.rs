//! Clients for the external topic/hypothesis and identity services.
//!
//! Services depend on the traits, never on the HTTP implementation, so the
//! whole runtime can be driven by an in-memory backend in tests.

mod http;

pub use http::HttpClient;

use crate::Result;
use hypodesk_types::wire::{
    GetHypothesisResponse, HypothesisRecord, MessageResponse, SaveTopicRequest, SignInRequest,
    SignInResponse, UpsertRequest, UpsertResponse, UserLookupResponse,
};
use hypodesk_types::{RecordId, Role};

/// Topic and hypothesis persistence.
pub trait HypothesisApi: Send + Sync {
    fn list_topics(&self) -> Result<Vec<HypothesisRecord>>;

    /// Create or update; the response says which one happened.
    fn upsert_hypothesis(&self, request: &UpsertRequest) -> Result<UpsertResponse>;

    fn get_hypothesis(&self, id: &RecordId) -> Result<GetHypothesisResponse>;

    fn delete_hypothesis(&self, id: &RecordId) -> Result<MessageResponse>;

    fn save_topic(&self, request: &SaveTopicRequest) -> Result<MessageResponse>;

    /// Forward an opaque file to the service; the content is never inspected.
    fn upload_file(&self, id: &RecordId, file_name: &str, bytes: Vec<u8>)
    -> Result<MessageResponse>;
}

/// Two-step credential check against the identity service.
pub trait AuthApi: Send + Sync {
    fn lookup_user(
        &self,
        user_id: &str,
        application_code: &str,
        role: Role,
    ) -> Result<UserLookupResponse>;

    fn sign_in(&self, request: &SignInRequest, password: &str) -> Result<SignInResponse>;
}
