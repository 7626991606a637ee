//! In-memory store backend.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::error::StoreError;
use crate::store::{CheckinEntry, Profile, ProfileStore, ProfileUpdate, StoredStory};

/// Process-local `ProfileStore` over tokio `RwLock`s.
#[derive(Default)]
pub struct MemoryStore {
    profiles: RwLock<HashMap<String, Profile>>,
    checkins: RwLock<HashMap<String, Vec<CheckinEntry>>>,
    stories: RwLock<Vec<StoredStory>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProfileStore for MemoryStore {
    async fn get_profile(&self, user_id: &str) -> Result<Option<Profile>, StoreError> {
        Ok(self.profiles.read().await.get(user_id).cloned())
    }

    async fn upsert_profile(
        &self,
        user_id: &str,
        update: ProfileUpdate,
    ) -> Result<Profile, StoreError> {
        update.validate()?;
        let now = Utc::now();
        let mut profiles = self.profiles.write().await;

        let profile = match profiles.get_mut(user_id) {
            Some(existing) => {
                if let Some(email) = update.email {
                    existing.email = email;
                }
                if let Some(name) = update.name {
                    existing.name = name;
                }
                if let Some(phone) = update.phone {
                    existing.phone = phone;
                }
                if let Some(age) = update.age {
                    existing.age = Some(age as u8);
                }
                if let Some(place) = update.place {
                    existing.place = place;
                }
                if let Some(emergency_contact) = update.emergency_contact {
                    existing.emergency_contact = emergency_contact;
                }
                // Acceptance is sticky: a later update cannot revoke it.
                if update.terms_accepted == Some(true) {
                    existing.terms_accepted = true;
                }
                existing.updated_at = now;
                existing.clone()
            }
            None => {
                if update.terms_accepted != Some(true) {
                    return Err(StoreError::TermsNotAccepted);
                }
                let profile = Profile {
                    user_id: user_id.to_string(),
                    email: update.email.unwrap_or_default(),
                    name: update.name.unwrap_or_default(),
                    phone: update.phone.unwrap_or_default(),
                    age: update.age.map(|a| a as u8),
                    place: update.place.unwrap_or_default(),
                    emergency_contact: update.emergency_contact.unwrap_or_default(),
                    terms_accepted: true,
                    created_at: now,
                    updated_at: now,
                };
                profiles.insert(user_id.to_string(), profile.clone());
                profile
            }
        };
        Ok(profile)
    }

    async fn record_checkin(&self, user_id: &str, entry: CheckinEntry) -> Result<(), StoreError> {
        let mut all = self.checkins.write().await;
        let entries = all.entry(user_id.to_string()).or_default();
        entries.retain(|e| e.date != entry.date);
        entries.push(entry);
        entries.sort_by_key(|e| e.date);
        Ok(())
    }

    async fn checkins(&self, user_id: &str) -> Result<Vec<CheckinEntry>, StoreError> {
        Ok(self
            .checkins
            .read()
            .await
            .get(user_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn record_story(&self, story: StoredStory) -> Result<(), StoreError> {
        self.stories.write().await.push(story);
        Ok(())
    }

    async fn stories(&self, user_id: &str) -> Result<Vec<StoredStory>, StoreError> {
        Ok(self
            .stories
            .read()
            .await
            .iter()
            .filter(|s| s.user_id == user_id)
            .cloned()
            .collect())
    }
}
