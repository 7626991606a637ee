//! Profile and check-in persistence.
//!
//! The managed document database behind production deployments is an
//! external collaborator; [`ProfileStore`] is the seam. The gateway holds
//! the store as `Arc<dyn ProfileStore>`, so backends can be swapped
//! without touching handlers. [`MemoryStore`] is the in-process backend
//! used by the server default and by tests.

pub mod memory;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::StoreError;

pub use memory::MemoryStore;

/// A registered user profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub user_id: String,
    pub email: String,
    pub name: String,
    pub phone: String,
    pub age: Option<u8>,
    pub place: String,
    pub emergency_contact: String,
    pub terms_accepted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields accepted on profile create/update.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileUpdate {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub age: Option<u16>,
    #[serde(default)]
    pub place: Option<String>,
    #[serde(default)]
    pub emergency_contact: Option<String>,
    #[serde(default)]
    pub terms_accepted: Option<bool>,
}

impl ProfileUpdate {
    /// Validate field ranges before the update reaches a store.
    pub fn validate(&self) -> Result<(), StoreError> {
        if let Some(age) = self.age {
            if age > 120 {
                return Err(StoreError::InvalidField {
                    field: "age".to_string(),
                    message: "must be between 0 and 120".to_string(),
                });
            }
        }
        Ok(())
    }
}

/// One daily mood check-in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckinEntry {
    pub date: NaiveDate,
    /// 1-10 scales.
    pub mood: u8,
    pub energy: u8,
    pub stress: u8,
    pub gratitude: String,
    pub challenge: String,
}

/// A persisted generated story.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredStory {
    pub id: Uuid,
    pub user_id: String,
    pub scenario_prompt: String,
    pub title: String,
    pub story: String,
    pub created_at: DateTime<Utc>,
}

/// Persistence seam for profiles, check-ins, and stories.
///
/// Semantics every backend must honor:
/// - `upsert_profile` on a new user fails with
///   [`StoreError::TermsNotAccepted`] unless the update carries
///   `terms_accepted == Some(true)`; once accepted, terms can never be
///   revoked by a later update.
/// - `record_checkin` replaces any existing entry for the same date.
/// - `checkins` returns entries sorted by date ascending.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn get_profile(&self, user_id: &str) -> Result<Option<Profile>, StoreError>;

    async fn upsert_profile(
        &self,
        user_id: &str,
        update: ProfileUpdate,
    ) -> Result<Profile, StoreError>;

    async fn record_checkin(&self, user_id: &str, entry: CheckinEntry) -> Result<(), StoreError>;

    async fn checkins(&self, user_id: &str) -> Result<Vec<CheckinEntry>, StoreError>;

    async fn record_story(&self, story: StoredStory) -> Result<(), StoreError>;

    async fn stories(&self, user_id: &str) -> Result<Vec<StoredStory>, StoreError>;
}
