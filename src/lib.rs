//! Muscle Diary - Personal workout tracking backend
//!
//! Users log workout records with their sets, browse a public timeline,
//! like each other's records and compare monthly rankings.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
