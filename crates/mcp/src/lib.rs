//! Tenant metadata access for govpulse.
//!
//! The assessment pipeline fetches a `TenantOverview` through the
//! `TenantDataSource` trait. The only implementation is `FixtureDataSource`,
//! which simulates the metadata platform's MCP tool responses with canned
//! connections and assets; the trait is the seam where a live integration
//! would plug in.

pub mod fixture;
pub mod quality;
pub mod source;

pub use fixture::FixtureDataSource;
pub use quality::{analyze_asset_quality, assess_compliance_readiness};
pub use source::{DataSourceError, SearchFilters, TenantDataSource};
