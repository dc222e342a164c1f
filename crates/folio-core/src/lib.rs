//! # folio-core
//!
//! Core types, category vocabulary, and error types for Folio.
//!
//! This crate provides the foundational types shared across all Folio crates:
//! - The closed category vocabularies (technologies, skills, roles, domains)
//! - Project records in their legacy and enhanced shapes
//! - The portfolio content model that drives the site
//! - Site layout enums (live vs. coming-soon)
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod vocabulary;
