//! Résumé analyzer: extracts text from a PDF résumé, pulls out contact details
//! and skills, predicts a career field, and scores the document with tips.
//!
//! The core (`extraction`, `analysis`) is synchronous and stateless; the
//! remaining modules host it behind a small HTTP API.

pub mod analysis;
pub mod config;
pub mod errors;
pub mod extraction;
pub mod routes;
pub mod state;
