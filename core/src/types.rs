//! Passive EWS schema records.
//!
//! # Design
//! These mirror the schema layer's declarative records and carry no
//! behavior. The transport itself treats every payload as opaque bytes and
//! never constructs or inspects these types; they exist for the message
//! construction and parsing layers built on top.

use serde::{Deserialize, Serialize};

/// Where a resolved directory entry originates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContactSource {
    ActiveDirectory,
    Store,
}

/// A distribution-list record. Every field is optional in the schema.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributionList {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_as: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_source: Option<ContactSource>,
}
