//! Brand Check - Brand name connotation analysis service
//!
//! Accepts a proposed brand name over HTTP, asks a chat-completion model for a
//! qualitative analysis of its connotations, and enriches the answer with
//! related domain names from a domain search service.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
