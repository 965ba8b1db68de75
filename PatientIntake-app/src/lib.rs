// PatientIntake-app lib.rs
// This is the main library file for the workflow surface that wires
// pages, submission handlers and views together over the API client.

// Public modules
// Workflow pages and the navigation between them
pub mod pages;

// One submission handler per workflow step
pub mod handlers;

// Views over fetched collections
pub mod views;

// Interactive console front end
pub mod console;
