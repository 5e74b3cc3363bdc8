//! Abuse report document and DTO.

use mongodb::bson::oid::ObjectId;
use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};

/// Reporter snapshot embedded in a report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportOwner {
    pub email: String,
}

/// A document from the `reports` collection.
///
/// `report_id` holds the hex `_id` of the reported product, which is the key
/// the combined product-and-report deletion matches on.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    /// MongoDB document ID. `None` only before insertion.
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub report_id: String,
    pub owner: ReportOwner,
    #[serde(default)]
    pub reason: Option<String>,
    pub created_at: DateTime,
}

impl Report {
    pub fn new(input: CreateReport) -> Self {
        Self {
            id: None,
            report_id: input.report_id,
            owner: input.owner,
            reason: input.reason,
            created_at: DateTime::now(),
        }
    }
}

/// Fields accepted when filing a report.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReport {
    pub report_id: String,
    pub owner: ReportOwner,
    #[serde(default)]
    pub reason: Option<String>,
}
