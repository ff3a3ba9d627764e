//! Business logic layer.
//!
//! This module contains the core business logic for the application: the
//! batch generation engine, the session event definitions and sink, and
//! the preview handle registry. Called by the session layer; delegates
//! metadata fabrication to the `api` layer and record keeping to the
//! `storage` layer.

pub mod events;
pub mod generation_engine;
pub mod preview;
