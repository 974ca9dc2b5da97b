//! Shared mocks for social handler tests.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use crate::domain::foundation::{DomainError, RecordId, UserId};
use crate::ports::LikeRepository;

/// Records keyed by id with their visibility, plus a set of likes.
#[derive(Default)]
pub struct MockLikeRepository {
    pub visibility: Mutex<HashMap<RecordId, bool>>,
    pub likes: Mutex<HashSet<(UserId, RecordId)>>,
    pub writes: Mutex<usize>,
}

impl MockLikeRepository {
    pub fn with_record(record_id: RecordId, is_public: bool) -> Self {
        let repo = Self::default();
        repo.visibility.lock().unwrap().insert(record_id, is_public);
        repo
    }

    pub fn like_count(&self) -> usize {
        self.likes.lock().unwrap().len()
    }

    pub fn write_count(&self) -> usize {
        *self.writes.lock().unwrap()
    }
}

#[async_trait]
impl LikeRepository for MockLikeRepository {
    async fn is_record_public(&self, record_id: &RecordId) -> Result<Option<bool>, DomainError> {
        Ok(self.visibility.lock().unwrap().get(record_id).copied())
    }

    async fn create_like(&self, user_id: &UserId, record_id: &RecordId) -> Result<(), DomainError> {
        *self.writes.lock().unwrap() += 1;
        self.likes.lock().unwrap().insert((*user_id, *record_id));
        Ok(())
    }

    async fn delete_like(&self, user_id: &UserId, record_id: &RecordId) -> Result<(), DomainError> {
        *self.writes.lock().unwrap() += 1;
        self.likes.lock().unwrap().remove(&(*user_id, *record_id));
        Ok(())
    }
}
