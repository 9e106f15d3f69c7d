//! # Application Dependencies
//!
//! This module defines the dependency grouping for App construction.
//!
//! **Note**: This is NOT a Builder pattern.
//! - No build steps
//! - No default values
//! - No hidden logic
//! - Just parameter grouping

use std::sync::Arc;

use folio_core::ports::*;

/// Application dependency grouping (non-Builder, just parameter grouping)
///
/// All dependencies are required - no defaults, no optional fields.
pub struct AppDeps {
    // Content dependencies
    pub content: Arc<dyn ContentRepositoryPort>,
    pub message_catalog: Arc<dyn MessageCatalogPort>,

    // Contact dependencies
    pub contact_sender: Arc<dyn ContactSenderPort>,

    // System dependencies
    pub clock: Arc<dyn ClockPort>,
}
