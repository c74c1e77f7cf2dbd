//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `naming` - Brand name value object, analysis prompt and results

pub mod naming;
