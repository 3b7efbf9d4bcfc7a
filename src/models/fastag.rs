//! FASTag toll-tag event model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::normalize;

/// Incoming FASTag payload. Field names mirror the upstream issuer feed,
/// which sends PascalCase keys.
#[derive(Debug, Clone, Deserialize)]
pub struct FastagData {
    #[serde(rename = "TagId")]
    pub tag_id: String,
    #[serde(rename = "VRN")]
    pub vrn: String,
    #[serde(rename = "TagStatus", default)]
    pub tag_status: Option<String>,
    #[serde(rename = "VehicleClass", default)]
    pub vehicle_class: Option<String>,
    #[serde(rename = "Action", default)]
    pub action: Option<String>,
    #[serde(rename = "IssueDate", default)]
    pub issue_date: Option<String>,
    #[serde(rename = "IssuerBank", default)]
    pub issuer_bank: Option<String>,
    #[serde(rename = "LastUpdate", default)]
    pub last_update: Option<String>,
}

/// A FASTag row ready for insertion, with every field coerced to the column
/// type of `fastag_details`.
#[derive(Debug, Clone)]
pub struct FastagRow {
    pub tag_id: String,
    pub vrn: String,
    pub tag_status: String,
    pub vehicle_class: String,
    pub action: String,
    pub issue_date: Option<NaiveDate>,
    pub issuer_bank: String,
    pub last_update: Option<DateTime<Utc>>,
}

impl FastagRow {
    /// Coerce an incoming payload into a typed row. All FASTag coercions are
    /// lenient, so this never fails.
    pub fn from_request(data: &FastagData) -> Self {
        Self {
            tag_id: data.tag_id.clone(),
            vrn: data.vrn.clone(),
            tag_status: normalize::text_or_empty(data.tag_status.as_ref()),
            vehicle_class: normalize::text_or_empty(data.vehicle_class.as_ref()),
            action: normalize::text_or_empty(data.action.as_ref()),
            issue_date: normalize::parse_date(data.issue_date.as_deref()),
            issuer_bank: normalize::text_or_empty(data.issuer_bank.as_ref()),
            last_update: normalize::parse_datetime(data.last_update.as_deref()),
        }
    }
}

/// Response body for a successful FASTag insert.
#[derive(Debug, Serialize, Deserialize)]
pub struct FastagInsertResponse {
    pub message: String,
    #[serde(rename = "TagId")]
    pub tag_id: String,
    #[serde(rename = "VRN")]
    pub vrn: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn minimal() -> FastagData {
        FastagData {
            tag_id: "34161FA8203".to_string(),
            vrn: "MH12AB1234".to_string(),
            tag_status: None,
            vehicle_class: None,
            action: None,
            issue_date: None,
            issuer_bank: None,
            last_update: None,
        }
    }

    #[test]
    fn missing_text_fields_become_empty_strings() {
        let row = FastagRow::from_request(&minimal());
        assert_eq!(row.tag_status, "");
        assert_eq!(row.vehicle_class, "");
        assert_eq!(row.action, "");
        assert_eq!(row.issuer_bank, "");
        assert!(row.issue_date.is_none());
        assert!(row.last_update.is_none());
    }

    #[test]
    fn unparseable_issue_date_is_soft_null() {
        let mut data = minimal();
        data.issue_date = Some("pending".to_string());
        let row = FastagRow::from_request(&data);
        assert!(row.issue_date.is_none());
    }

    #[test]
    fn typed_fields_are_coerced() {
        let mut data = minimal();
        data.issue_date = Some("15/03/2024".to_string());
        data.last_update = Some("2024-03-15T10:00:00Z".to_string());
        let row = FastagRow::from_request(&data);
        assert_eq!(row.issue_date, NaiveDate::from_ymd_opt(2024, 3, 15));
        assert!(row.last_update.is_some());
    }
}
