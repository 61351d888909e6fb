//! GymMania Store Library
//!
//! In-memory plan and log stores backed by whole-document key-value
//! persistence, plus the read-side progress views.

pub mod config;
pub mod error;
pub mod persist;
pub mod repositories;
pub mod services;
pub mod state;
pub mod storage;
