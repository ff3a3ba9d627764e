//! Session-lifetime record keeping.
//!
//! This module holds generation history records and user settings for the
//! duration of the session. Nothing here touches disk: history and
//! settings have no durable format and vanish when the session ends.

pub mod history;
pub mod settings;
