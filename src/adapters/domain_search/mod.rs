//! Domain Search Adapters.
//!
//! Implementations of the DomainSearch port.
//!
//! ## Available Adapters
//!
//! - `DomainrSearch` - Domainr search API via RapidAPI
//! - `DisabledDomainSearch` - Always reports "not configured"
//! - `MockDomainSearch` - Configurable mock for testing

mod disabled;
mod domainr;
mod mock;

pub use disabled::DisabledDomainSearch;
pub use domainr::{DomainrConfig, DomainrSearch};
pub use mock::MockDomainSearch;
