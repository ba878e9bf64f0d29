//! E2E Tests for powcheck
//!
//! End-to-end tests organized by waves.

pub mod wave_01_discovery;
pub mod wave_02_verification;
