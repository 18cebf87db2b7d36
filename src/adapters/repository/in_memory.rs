//! In-Memory Speaker Repository Adapter
//!
//! Stores speaker registrations in memory with sequential identifier
//! allocation. Useful for testing and development.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::SpeakerId;
use crate::domain::speaker::Speaker;
use crate::ports::{RepositoryError, SpeakerRepository};

/// In-memory speaker store with sequential identifiers.
///
/// Clones share the same underlying storage, so a cloned handle can be
/// passed to the workflow while the test keeps another for assertions.
#[derive(Debug, Clone)]
pub struct InMemorySpeakerRepository {
    records: Arc<RwLock<HashMap<SpeakerId, Speaker>>>,
    next_id: Arc<AtomicI64>,
}

impl InMemorySpeakerRepository {
    /// Creates an empty store. The first saved speaker gets identifier 1.
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(HashMap::new())),
            next_id: Arc::new(AtomicI64::new(1)),
        }
    }

    /// Number of stored registrations.
    pub async fn count(&self) -> usize {
        self.records.read().await.len()
    }

    /// Looks up the stored snapshot for an identifier.
    pub async fn find(&self, id: SpeakerId) -> Option<Speaker> {
        self.records.read().await.get(&id).cloned()
    }

    /// Clear all stored data (useful for tests)
    pub async fn clear(&self) {
        self.records.write().await.clear();
    }
}

impl Default for InMemorySpeakerRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SpeakerRepository for InMemorySpeakerRepository {
    async fn save_speaker(&self, speaker: &Speaker) -> Result<SpeakerId, RepositoryError> {
        let id = SpeakerId::new(self.next_id.fetch_add(1, Ordering::SeqCst));
        let mut records = self.records.write().await;
        records.insert(id, speaker.clone());
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::speaker::{BrowserName, Session, WebBrowser};

    fn test_speaker(email: &str) -> Speaker {
        Speaker {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: email.to_string(),
            years_experience: Some(12),
            has_blog: false,
            blog_url: None,
            browser: WebBrowser::new(BrowserName::Chrome, 126),
            certifications: Vec::new(),
            employer: "Other".to_string(),
            registration_fee: None,
            sessions: vec![Session::new("Intro to Rust", "modern systems")],
        }
    }

    #[tokio::test]
    async fn identifiers_are_sequential_starting_at_one() {
        let repository = InMemorySpeakerRepository::new();

        let first = repository
            .save_speaker(&test_speaker("a@example.com"))
            .await
            .unwrap();
        let second = repository
            .save_speaker(&test_speaker("b@example.com"))
            .await
            .unwrap();

        assert_eq!(first, SpeakerId::new(1));
        assert_eq!(second, SpeakerId::new(2));
    }

    #[tokio::test]
    async fn stored_record_is_a_snapshot() {
        let repository = InMemorySpeakerRepository::new();
        let mut speaker = test_speaker("a@example.com");

        let id = repository.save_speaker(&speaker).await.unwrap();
        speaker.email = "changed@example.com".to_string();

        let stored = repository.find(id).await.unwrap();
        assert_eq!(stored.email, "a@example.com");
    }

    #[tokio::test]
    async fn count_and_clear_track_stored_records() {
        let repository = InMemorySpeakerRepository::new();

        repository
            .save_speaker(&test_speaker("a@example.com"))
            .await
            .unwrap();
        repository
            .save_speaker(&test_speaker("b@example.com"))
            .await
            .unwrap();
        assert_eq!(repository.count().await, 2);

        repository.clear().await;
        assert_eq!(repository.count().await, 0);
    }

    #[tokio::test]
    async fn clones_share_storage() {
        let repository = InMemorySpeakerRepository::new();
        let handle = repository.clone();

        let id = handle
            .save_speaker(&test_speaker("a@example.com"))
            .await
            .unwrap();

        assert!(repository.find(id).await.is_some());
    }

    #[tokio::test]
    async fn find_unknown_identifier_returns_none() {
        let repository = InMemorySpeakerRepository::new();
        assert!(repository.find(SpeakerId::new(99)).await.is_none());
    }
}
