//! In-memory store backing all repository and reader ports.
//!
//! Mirrors the relational constraints the Postgres schema enforces:
//! unique emails, exercise references, cascading deletes and the unique
//! (user, record) like pair.

use std::collections::{BTreeSet, HashMap, HashSet};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::RwLock;

use crate::domain::exercise::Exercise;
use crate::domain::foundation::{
    CalendarMonth, DomainError, ErrorCode, ExerciseId, RecordId, Timestamp, UserId,
};
use crate::domain::ranking::{GymDaysEntry, TotalVolumeEntry};
use crate::domain::user::{BodyMetrics, Email, User};
use crate::domain::workout::WorkoutRecord;
use crate::ports::{
    DailyRecordView, ExerciseRepository, ExerciseSetView, HomeSummaryView, LikeRepository,
    RankingReader, SummaryReader, TimelineEntry, TimelineReader, UserRepository, WorkoutReader,
    WorkoutRepository,
};

#[derive(Debug, Default)]
struct State {
    users: Vec<User>,
    exercises: Vec<Exercise>,
    /// Insertion order doubles as creation order.
    records: Vec<WorkoutRecord>,
    likes: HashSet<(UserId, RecordId)>,
}

impl State {
    fn exercise_name(&self, id: &ExerciseId) -> Option<&str> {
        self.exercises
            .iter()
            .find(|e| &e.id == id)
            .map(|e| e.name.as_str())
    }

    fn user_email(&self, id: &UserId) -> Option<&str> {
        self.users
            .iter()
            .find(|u| u.id() == id)
            .map(|u| u.email().as_str())
    }

    fn check_references(&self, record: &WorkoutRecord) -> Result<(), DomainError> {
        if self.exercise_name(record.exercise_id()).is_none() {
            return Err(DomainError::new(
                ErrorCode::ReferenceViolation,
                format!("Exercise does not exist: {}", record.exercise_id()),
            ));
        }
        if self.user_email(record.user_id()).is_none() {
            return Err(DomainError::new(
                ErrorCode::ReferenceViolation,
                format!("User does not exist: {}", record.user_id()),
            ));
        }
        Ok(())
    }

    fn records_in(&self, month: CalendarMonth) -> impl Iterator<Item = &WorkoutRecord> {
        self.records
            .iter()
            .filter(move |r| month.contains(r.trained_on()))
    }
}

/// Shared in-memory state; clones share the same data.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    state: Arc<RwLock<State>>,
    fail_record_updates: Arc<AtomicBool>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every `WorkoutRepository::update` fail as a store outage would.
    pub fn fail_record_updates(&self, fail: bool) {
        self.fail_record_updates.store(fail, Ordering::SeqCst);
    }

    pub async fn record_count(&self) -> usize {
        self.state.read().await.records.len()
    }

    pub async fn like_count(&self) -> usize {
        self.state.read().await.likes.len()
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Write side
// ════════════════════════════════════════════════════════════════════════════════

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn create(&self, user: &User) -> Result<(), DomainError> {
        let mut state = self.state.write().await;
        if state.users.iter().any(|u| u.email() == user.email()) {
            return Err(DomainError::new(
                ErrorCode::UniqueViolation,
                format!("Email already registered: {}", user.email()),
            ));
        }
        state.users.push(user.clone());
        Ok(())
    }

    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, DomainError> {
        let state = self.state.read().await;
        Ok(state.users.iter().find(|u| u.email() == email).cloned())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        let state = self.state.read().await;
        Ok(state.users.iter().find(|u| u.id() == id).cloned())
    }

    async fn update_metrics(&self, id: &UserId, metrics: &BodyMetrics) -> Result<(), DomainError> {
        let mut state = self.state.write().await;
        let user = state
            .users
            .iter_mut()
            .find(|u| u.id() == id)
            .ok_or_else(|| DomainError::new(ErrorCode::UserNotFound, format!("User not found: {}", id)))?;

        *user = User::reconstitute(
            *user.id(),
            user.email().clone(),
            user.password_hash().to_string(),
            *metrics,
            *user.created_at(),
            Timestamp::now(),
        );
        Ok(())
    }
}

#[async_trait]
impl ExerciseRepository for InMemoryStore {
    async fn list(&self) -> Result<Vec<Exercise>, DomainError> {
        let mut exercises = self.state.read().await.exercises.clone();
        exercises.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(exercises)
    }

    async fn seed(&self, names: &[&str]) -> Result<u64, DomainError> {
        let mut state = self.state.write().await;
        let mut inserted = 0;
        for name in names {
            if !state.exercises.iter().any(|e| e.name == *name) {
                state.exercises.push(Exercise::new(*name));
                inserted += 1;
            }
        }
        Ok(inserted)
    }
}

#[async_trait]
impl WorkoutRepository for InMemoryStore {
    async fn create(&self, record: &WorkoutRecord) -> Result<(), DomainError> {
        let mut state = self.state.write().await;
        state
            .check_references(record)
            .map_err(|e| DomainError::new(e.code, format!("Failed to insert workout record: {}", e.message)))?;
        state.records.push(record.clone());
        Ok(())
    }

    async fn find_by_id_and_user(
        &self,
        id: &RecordId,
        user_id: &UserId,
    ) -> Result<Option<WorkoutRecord>, DomainError> {
        let state = self.state.read().await;
        Ok(state
            .records
            .iter()
            .find(|r| r.id() == id && r.user_id() == user_id)
            .cloned())
    }

    async fn update(&self, record: &WorkoutRecord) -> Result<(), DomainError> {
        // One write guard spans the whole replace, so readers never observe
        // a record without its sets.
        let mut state = self.state.write().await;

        if self.fail_record_updates.load(Ordering::SeqCst) {
            return Err(DomainError::database("update workout record", "connection reset"));
        }
        state
            .check_references(record)
            .map_err(|e| DomainError::new(e.code, format!("Failed to update workout record: {}", e.message)))?;

        let slot = state
            .records
            .iter_mut()
            .find(|r| r.id() == record.id() && r.user_id() == record.user_id())
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::RecordNotFound,
                    format!("Workout record not found: {}", record.id()),
                )
            })?;
        *slot = record.clone();
        Ok(())
    }

    async fn delete(&self, id: &RecordId, user_id: &UserId) -> Result<(), DomainError> {
        let mut state = self.state.write().await;
        let before = state.records.len();
        state.records.retain(|r| !(r.id() == id && r.user_id() == user_id));
        if state.records.len() == before {
            return Err(DomainError::new(
                ErrorCode::RecordNotFound,
                format!("Workout record not found: {}", id),
            ));
        }
        state.likes.retain(|(_, record_id)| record_id != id);
        Ok(())
    }
}

#[async_trait]
impl LikeRepository for InMemoryStore {
    async fn is_record_public(&self, record_id: &RecordId) -> Result<Option<bool>, DomainError> {
        let state = self.state.read().await;
        Ok(state
            .records
            .iter()
            .find(|r| r.id() == record_id)
            .map(|r| r.is_public()))
    }

    async fn create_like(&self, user_id: &UserId, record_id: &RecordId) -> Result<(), DomainError> {
        let mut state = self.state.write().await;
        if !state.records.iter().any(|r| r.id() == record_id) {
            return Err(DomainError::new(
                ErrorCode::ReferenceViolation,
                format!("Workout record does not exist: {}", record_id),
            ));
        }
        state.likes.insert((*user_id, *record_id));
        Ok(())
    }

    async fn delete_like(&self, user_id: &UserId, record_id: &RecordId) -> Result<(), DomainError> {
        self.state.write().await.likes.remove(&(*user_id, *record_id));
        Ok(())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Read side
// ════════════════════════════════════════════════════════════════════════════════

#[async_trait]
impl WorkoutReader for InMemoryStore {
    async fn find_daily(&self, user_id: &UserId, day: NaiveDate) -> Result<Vec<DailyRecordView>, DomainError> {
        let state = self.state.read().await;
        Ok(state
            .records
            .iter()
            .filter(|r| r.user_id() == user_id && r.trained_on() == day)
            .map(|r| {
                let mut sets = r.sets().to_vec();
                sets.sort_by_key(|s| s.set_no);
                DailyRecordView {
                    id: *r.id(),
                    exercise_id: *r.exercise_id(),
                    exercise_name: state.exercise_name(r.exercise_id()).unwrap_or_default().to_string(),
                    body_weight: r.body_weight(),
                    trained_on: r.trained_on(),
                    is_public: r.is_public(),
                    comment: r.comment().to_string(),
                    sets,
                }
            })
            .collect())
    }

    async fn find_record_days(&self, user_id: &UserId, month: CalendarMonth) -> Result<Vec<NaiveDate>, DomainError> {
        let state = self.state.read().await;
        let days: BTreeSet<NaiveDate> = state
            .records_in(month)
            .filter(|r| r.user_id() == user_id)
            .map(|r| r.trained_on())
            .collect();
        Ok(days.into_iter().collect())
    }

    async fn find_exercise_history(
        &self,
        user_id: &UserId,
        exercise_id: &ExerciseId,
    ) -> Result<Vec<ExerciseSetView>, DomainError> {
        let state = self.state.read().await;
        let mut records: Vec<&WorkoutRecord> = state
            .records
            .iter()
            .filter(|r| r.user_id() == user_id && r.exercise_id() == exercise_id)
            .collect();
        // Stable sort keeps creation order within a day.
        records.sort_by_key(|r| r.trained_on());

        Ok(records
            .into_iter()
            .flat_map(|r| {
                let mut sets = r.sets().to_vec();
                sets.sort_by_key(|s| s.set_no);
                sets.into_iter().map(move |s| ExerciseSetView {
                    record_id: *r.id(),
                    trained_on: r.trained_on(),
                    set_no: s.set_no,
                    reps: s.reps,
                    weight: s.weight,
                    body_weight: r.body_weight(),
                })
            })
            .collect())
    }
}

#[async_trait]
impl TimelineReader for InMemoryStore {
    async fn list_public(&self, viewer: &UserId) -> Result<Vec<TimelineEntry>, DomainError> {
        let state = self.state.read().await;
        let mut public: Vec<(usize, &WorkoutRecord)> = state
            .records
            .iter()
            .enumerate()
            .filter(|(_, r)| r.is_public())
            .collect();
        public.sort_by(|(ia, a), (ib, b)| b.trained_on().cmp(&a.trained_on()).then(ib.cmp(ia)));

        Ok(public
            .into_iter()
            .map(|(_, r)| TimelineEntry {
                record_id: *r.id(),
                user_id: *r.user_id(),
                user_email: state.user_email(r.user_id()).unwrap_or_default().to_string(),
                exercise_name: state.exercise_name(r.exercise_id()).unwrap_or_default().to_string(),
                body_weight: r.body_weight(),
                trained_on: r.trained_on(),
                comment: r.comment().to_string(),
                liked_by_me: state.likes.contains(&(*viewer, *r.id())),
            })
            .collect())
    }
}

#[async_trait]
impl SummaryReader for InMemoryStore {
    async fn home_summary(&self, user_id: &UserId) -> Result<Option<HomeSummaryView>, DomainError> {
        let state = self.state.read().await;
        let Some(user) = state.users.iter().find(|u| u.id() == user_id) else {
            return Ok(None);
        };

        let own: Vec<(usize, &WorkoutRecord)> = state
            .records
            .iter()
            .enumerate()
            .filter(|(_, r)| r.user_id() == user_id)
            .collect();
        let days: BTreeSet<NaiveDate> = own.iter().map(|(_, r)| r.trained_on()).collect();
        let latest = own
            .iter()
            .max_by(|(ia, a), (ib, b)| a.trained_on().cmp(&b.trained_on()).then(ia.cmp(ib)))
            .map(|(_, r)| *r);

        Ok(Some(HomeSummaryView {
            total_training_days: days.len() as i64,
            latest_weight: latest.map(|r| r.body_weight()),
            latest_trained_on: latest.map(|r| r.trained_on()),
            goal_weight_kg: user.metrics().goal_weight_kg,
            height_cm: user.metrics().height_cm,
        }))
    }
}

#[async_trait]
impl RankingReader for InMemoryStore {
    async fn monthly_gym_days(&self, month: CalendarMonth) -> Result<Vec<GymDaysEntry>, DomainError> {
        let state = self.state.read().await;
        let mut days: HashMap<UserId, BTreeSet<NaiveDate>> = HashMap::new();
        for record in state.records_in(month) {
            days.entry(*record.user_id()).or_default().insert(record.trained_on());
        }

        let mut rows: Vec<GymDaysEntry> = days
            .into_iter()
            .map(|(user_id, dates)| GymDaysEntry {
                user_id,
                email: state.user_email(&user_id).unwrap_or_default().to_string(),
                total_training_days: dates.len() as i64,
            })
            .collect();
        rows.sort_by(|a, b| {
            b.total_training_days
                .cmp(&a.total_training_days)
                .then_with(|| a.email.cmp(&b.email))
        });
        Ok(rows)
    }

    async fn monthly_total_volume(&self, month: CalendarMonth) -> Result<Vec<TotalVolumeEntry>, DomainError> {
        let state = self.state.read().await;
        let mut volume: HashMap<UserId, f64> = HashMap::new();
        for record in state.records_in(month) {
            *volume.entry(*record.user_id()).or_default() += record.total_volume();
        }

        let mut rows: Vec<TotalVolumeEntry> = volume
            .into_iter()
            .map(|(user_id, total_volume)| TotalVolumeEntry {
                user_id,
                email: state.user_email(&user_id).unwrap_or_default().to_string(),
                total_volume,
            })
            .collect();
        rows.sort_by(|a, b| {
            b.total_volume
                .total_cmp(&a.total_volume)
                .then_with(|| a.email.cmp(&b.email))
        });
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::workout::{RecordDraft, SetInput};

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, d).unwrap()
    }

    async fn seeded() -> (InMemoryStore, User, ExerciseId) {
        let store = InMemoryStore::new();
        store.seed(&["Squat"]).await.unwrap();
        let exercise_id = store.list().await.unwrap()[0].id;
        let user = User::register(Email::new("lifter@example.com").unwrap(), "hash".into());
        UserRepository::create(&store, &user).await.unwrap();
        (store, user, exercise_id)
    }

    fn record(user: &User, exercise_id: ExerciseId, trained_on: NaiveDate, sets: Vec<SetInput>) -> WorkoutRecord {
        WorkoutRecord::new(
            RecordId::new(),
            *user.id(),
            RecordDraft {
                exercise_id,
                body_weight: 70.0,
                trained_on,
                is_public: true,
                comment: String::new(),
                sets,
            },
        )
        .unwrap()
    }

    #[tokio::test]
    async fn seeding_is_idempotent() {
        let store = InMemoryStore::new();

        assert_eq!(store.seed(&["Squat", "Deadlift"]).await.unwrap(), 2);
        assert_eq!(store.seed(&["Squat", "Deadlift"]).await.unwrap(), 0);
        assert_eq!(store.list().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn unknown_exercise_is_reference_violation() {
        let (store, user, _) = seeded().await;
        let dangling = record(&user, ExerciseId::new(), day(1), vec![SetInput::new(1, 5, 60.0)]);

        let err = WorkoutRepository::create(&store, &dangling).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::ReferenceViolation);
        assert_eq!(store.record_count().await, 0);
    }

    #[tokio::test]
    async fn failed_update_leaves_record_unchanged() {
        let (store, user, exercise_id) = seeded().await;
        let original = record(&user, exercise_id, day(1), vec![SetInput::new(1, 5, 60.0)]);
        WorkoutRepository::create(&store, &original).await.unwrap();

        let mut replaced = original.clone();
        replaced
            .replace(RecordDraft {
                exercise_id,
                body_weight: 80.0,
                trained_on: day(2),
                is_public: false,
                comment: "new".into(),
                sets: vec![SetInput::new(1, 3, 100.0), SetInput::new(2, 3, 100.0)],
            })
            .unwrap();
        store.fail_record_updates(true);

        let err = store.update(&replaced).await.unwrap_err();
        let stored = store
            .find_by_id_and_user(original.id(), user.id())
            .await
            .unwrap()
            .unwrap();

        assert_eq!(err.code, ErrorCode::DatabaseError);
        assert_eq!(stored, original);
    }

    #[tokio::test]
    async fn deleting_record_cascades_likes() {
        let (store, user, exercise_id) = seeded().await;
        let rec = record(&user, exercise_id, day(1), vec![SetInput::new(1, 5, 60.0)]);
        WorkoutRepository::create(&store, &rec).await.unwrap();
        store.create_like(user.id(), rec.id()).await.unwrap();

        WorkoutRepository::delete(&store, rec.id(), user.id()).await.unwrap();

        assert_eq!(store.like_count().await, 0);
    }

    #[tokio::test]
    async fn gym_days_counts_distinct_dates_within_month() {
        let (store, user, exercise_id) = seeded().await;
        for trained_on in [day(1), day(1), day(3), NaiveDate::from_ymd_opt(2025, 4, 1).unwrap()] {
            let rec = record(&user, exercise_id, trained_on, vec![SetInput::new(1, 5, 60.0)]);
            WorkoutRepository::create(&store, &rec).await.unwrap();
        }

        let rows = store
            .monthly_gym_days(CalendarMonth::new(2025, 3).unwrap())
            .await
            .unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].total_training_days, 2);
        assert_eq!(rows[0].email, "lifter@example.com");
    }

    #[tokio::test]
    async fn total_volume_sums_reps_times_weight() {
        let (store, user, exercise_id) = seeded().await;
        let rec = record(
            &user,
            exercise_id,
            day(5),
            vec![SetInput::new(1, 10, 50.0), SetInput::new(2, 8, 60.0)],
        );
        WorkoutRepository::create(&store, &rec).await.unwrap();

        let rows = store
            .monthly_total_volume(CalendarMonth::new(2025, 3).unwrap())
            .await
            .unwrap();

        assert_eq!(rows[0].total_volume, 980.0);
    }

    #[tokio::test]
    async fn timeline_orders_by_trained_on_then_newest() {
        let (store, user, exercise_id) = seeded().await;
        let older_day = record(&user, exercise_id, day(1), vec![SetInput::new(1, 5, 60.0)]);
        let first_same_day = record(&user, exercise_id, day(2), vec![SetInput::new(1, 5, 60.0)]);
        let second_same_day = record(&user, exercise_id, day(2), vec![SetInput::new(1, 5, 60.0)]);
        for rec in [&older_day, &first_same_day, &second_same_day] {
            WorkoutRepository::create(&store, rec).await.unwrap();
        }

        let ids: Vec<RecordId> = store
            .list_public(user.id())
            .await
            .unwrap()
            .into_iter()
            .map(|e| e.record_id)
            .collect();

        assert_eq!(ids, vec![*second_same_day.id(), *first_same_day.id(), *older_day.id()]);
    }
}
