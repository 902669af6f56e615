//! Tests for job controller endpoints.
//!
//! This module contains integration tests for the job board HTTP
//! endpoints: posting, browsing, applying, and closing.

mod apply_to_job;
mod get_job;
mod list_job_applications;
mod list_own_applications;
