//! Shared DTOs for the dashboard API boundary.
//!
//! DESIGN
//! ======
//! These types mirror the JSON the API emits (Mongo-style `_id`, camelCase
//! field names) so serde does the whole translation at the boundary and the
//! rest of the client works with plain Rust fields.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One record in a bookings or proposals collection.
///
/// Display fields are optional on the wire; absent fields render as
/// placeholders, never as failures. `client_type` and `industry` are only
/// populated by the proposals endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListItem {
    /// Unique record identifier.
    #[serde(rename = "_id")]
    pub id: String,
    /// Creation timestamp; list views sort newest first on this.
    pub created_at: DateTime<Utc>,
    /// Company the deal belongs to.
    #[serde(default)]
    pub company_name: Option<String>,
    /// Client contact name.
    #[serde(default)]
    pub client_name: Option<String>,
    /// Brand shown to the client.
    #[serde(default)]
    pub brand_display_name: Option<String>,
    /// Campaign the deal is attached to.
    #[serde(default)]
    pub campaign_name: Option<String>,
    /// Client category tag (proposals only).
    #[serde(default)]
    pub client_type: Option<String>,
    /// Industry tag (proposals only).
    #[serde(default)]
    pub industry: Option<String>,
}

impl ListItem {
    /// Company name, or the list-card placeholder.
    #[must_use]
    pub fn company_label(&self) -> String {
        self.company_name.clone().unwrap_or_else(|| "No Company".to_owned())
    }

    /// Client name, or the list-card placeholder.
    #[must_use]
    pub fn client_label(&self) -> String {
        self.client_name.clone().unwrap_or_else(|| "No Client".to_owned())
    }

    /// Campaign name, or the list-card placeholder.
    #[must_use]
    pub fn campaign_label(&self) -> String {
        self.campaign_name.clone().unwrap_or_else(|| "No Campaign".to_owned())
    }

    /// Client-type tag, or the generic tag placeholder.
    #[must_use]
    pub fn client_type_label(&self) -> String {
        self.client_type.clone().unwrap_or_else(|| "Client Type".to_owned())
    }

    /// Industry tag, or the generic tag placeholder.
    #[must_use]
    pub fn industry_label(&self) -> String {
        self.industry.clone().unwrap_or_else(|| "Industry".to_owned())
    }
}
