// PatientIntake Client
// This crate handles backend communication and per-visit session state

// Client configuration
pub mod config;

// HTTP client for the patient intake backend
pub mod api;

// Request and response models for the backend API
pub mod models;

// Per-visit session storage
pub mod session;

// Error types shared across the crate
pub mod error;
