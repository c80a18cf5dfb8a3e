//! Configuration file handling for skill-release
//!
//! This module contains data structures for:
//! - `.skill-release.yaml` - Release pipeline configuration
//! - `.claude-plugin/marketplace.json` - Marketplace configuration (read-only cross-check)

pub mod marketplace;
pub mod release;

// Re-export commonly used types
pub use marketplace::MarketplaceConfig;
pub use release::ReleaseConfig;
