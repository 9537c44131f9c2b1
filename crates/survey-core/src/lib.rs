//! # survey-core
//!
//! Core types, ID generation, and error types for Survey.
//!
//! This crate provides the foundational types shared across all Survey crates:
//! - Entity structs for the pin/issue/note graph (pins, markers, issues, notes, entries)
//! - Bucket, status and entry-kind enums
//! - ID prefix constants and generation helpers
//! - Pin label assignment
//! - Clock and calendar abstractions for same-day grouping
//! - Positional addressing (`Selection`, `EntryPos`)
//! - Trail operation envelope for JSONL persistence
//! - Read-only response types handed to collaborators
//! - A base64 serde adapter for image payloads

pub mod clock;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod labels;
pub mod media;
pub mod responses;
pub mod selection;
pub mod trail;
