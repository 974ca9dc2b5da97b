//! Shared mocks for workout handler tests.

use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::domain::foundation::{
    CalendarMonth, DomainError, ErrorCode, ExerciseId, RecordId, UserId,
};
use crate::domain::workout::{RecordDraft, SetInput, WorkoutRecord};
use crate::ports::{DailyRecordView, ExerciseSetView, WorkoutReader, WorkoutRepository};

/// Failure to inject on the next `create`/`update` call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InjectedFailure {
    None,
    ReferenceViolation,
    Database,
}

/// Mutex-backed workout repository that counts every call.
pub struct MockWorkoutRepository {
    records: Mutex<Vec<WorkoutRecord>>,
    failure: Mutex<InjectedFailure>,
    calls: AtomicUsize,
}

impl MockWorkoutRepository {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            failure: Mutex::new(InjectedFailure::None),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn with_record(record: WorkoutRecord) -> Self {
        let repo = Self::new();
        repo.records.lock().unwrap().push(record);
        repo
    }

    pub fn fail_writes_with(&self, failure: InjectedFailure) {
        *self.failure.lock().unwrap() = failure;
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn records(&self) -> Vec<WorkoutRecord> {
        self.records.lock().unwrap().clone()
    }

    fn injected(&self) -> Result<(), DomainError> {
        match *self.failure.lock().unwrap() {
            InjectedFailure::None => Ok(()),
            InjectedFailure::ReferenceViolation => Err(DomainError::new(
                ErrorCode::ReferenceViolation,
                "workout_records_exercise_id_fkey",
            )),
            InjectedFailure::Database => Err(DomainError::database(
                "update workout record",
                "connection reset",
            )),
        }
    }
}

#[async_trait]
impl WorkoutRepository for MockWorkoutRepository {
    async fn create(&self, record: &WorkoutRecord) -> Result<(), DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.injected()?;
        self.records.lock().unwrap().push(record.clone());
        Ok(())
    }

    async fn find_by_id_and_user(
        &self,
        id: &RecordId,
        user_id: &UserId,
    ) -> Result<Option<WorkoutRecord>, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let records = self.records.lock().unwrap();
        Ok(records
            .iter()
            .find(|r| r.id() == id && r.user_id() == user_id)
            .cloned())
    }

    async fn update(&self, record: &WorkoutRecord) -> Result<(), DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.injected()?;
        let mut records = self.records.lock().unwrap();
        match records.iter_mut().find(|r| r.id() == record.id()) {
            Some(existing) => {
                *existing = record.clone();
                Ok(())
            }
            None => Err(DomainError::new(ErrorCode::RecordNotFound, "no row updated")),
        }
    }

    async fn delete(&self, id: &RecordId, user_id: &UserId) -> Result<(), DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut records = self.records.lock().unwrap();
        let before = records.len();
        records.retain(|r| !(r.id() == id && r.user_id() == user_id));
        if records.len() == before {
            return Err(DomainError::new(ErrorCode::RecordNotFound, "no row deleted"));
        }
        Ok(())
    }
}

/// Reader returning canned rows and remembering the last month queried.
pub struct MockWorkoutReader {
    pub daily: Vec<DailyRecordView>,
    pub days: Vec<NaiveDate>,
    pub history: Vec<ExerciseSetView>,
    pub last_month: Mutex<Option<CalendarMonth>>,
    pub fail: bool,
}

impl MockWorkoutReader {
    pub fn empty() -> Self {
        Self {
            daily: Vec::new(),
            days: Vec::new(),
            history: Vec::new(),
            last_month: Mutex::new(None),
            fail: false,
        }
    }

    fn check(&self) -> Result<(), DomainError> {
        if self.fail {
            return Err(DomainError::database("query workout records", "timeout"));
        }
        Ok(())
    }
}

#[async_trait]
impl WorkoutReader for MockWorkoutReader {
    async fn find_daily(
        &self,
        _user_id: &UserId,
        day: NaiveDate,
    ) -> Result<Vec<DailyRecordView>, DomainError> {
        self.check()?;
        Ok(self
            .daily
            .iter()
            .filter(|r| r.trained_on == day)
            .cloned()
            .collect())
    }

    async fn find_record_days(
        &self,
        _user_id: &UserId,
        month: CalendarMonth,
    ) -> Result<Vec<NaiveDate>, DomainError> {
        self.check()?;
        *self.last_month.lock().unwrap() = Some(month);
        Ok(self.days.clone())
    }

    async fn find_exercise_history(
        &self,
        _user_id: &UserId,
        _exercise_id: &ExerciseId,
    ) -> Result<Vec<ExerciseSetView>, DomainError> {
        self.check()?;
        Ok(self.history.clone())
    }
}

pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn draft_with(exercise_id: ExerciseId, sets: Vec<SetInput>) -> RecordDraft {
    RecordDraft {
        exercise_id,
        body_weight: 70.0,
        trained_on: day(2025, 10, 1),
        is_public: false,
        comment: String::new(),
        sets,
    }
}

pub fn persisted_record(user_id: UserId, sets: Vec<SetInput>) -> WorkoutRecord {
    WorkoutRecord::new(RecordId::new(), user_id, draft_with(ExerciseId::new(), sets)).unwrap()
}
