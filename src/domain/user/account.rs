//! User account aggregate and body metrics.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Timestamp, UserId, ValidationError};

use super::Email;

/// Upper bound (exclusive) for height and goal weight, matching `NUMERIC(4,1)`.
pub const METRIC_UPPER_BOUND: f64 = 1000.0;

/// Height (cm) and goal weight (kg). Either may be absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BodyMetrics {
    pub height_cm: Option<f64>,
    pub goal_weight_kg: Option<f64>,
}

impl BodyMetrics {
    /// Validates each present value is in `(0, 1000)`.
    pub fn new(height_cm: Option<f64>, goal_weight_kg: Option<f64>) -> Result<Self, ValidationError> {
        check_metric("height_cm", height_cm)?;
        check_metric("goal_weight_kg", goal_weight_kg)?;
        Ok(Self {
            height_cm,
            goal_weight_kg,
        })
    }
}

fn check_metric(field: &str, value: Option<f64>) -> Result<(), ValidationError> {
    match value {
        Some(v) if !v.is_finite() || v <= 0.0 || v >= METRIC_UPPER_BOUND => Err(
            ValidationError::out_of_range(field, "greater than 0 and less than 1000", v),
        ),
        _ => Ok(()),
    }
}

/// A registered user.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    id: UserId,
    email: Email,
    password_hash: String,
    metrics: BodyMetrics,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl User {
    /// Registers a new user from an already-hashed password.
    pub fn register(email: Email, password_hash: String) -> Self {
        let now = Timestamp::now();
        Self {
            id: UserId::new(),
            email,
            password_hash,
            metrics: BodyMetrics::default(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Reconstitute from persistence (no validation).
    pub fn reconstitute(
        id: UserId,
        email: Email,
        password_hash: String,
        metrics: BodyMetrics,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            email,
            password_hash,
            metrics,
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    pub fn metrics(&self) -> &BodyMetrics {
        &self.metrics
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }
}
