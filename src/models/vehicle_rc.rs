//! Vehicle registration-certificate (RC) record model.
//!
//! The RC feed carries a long tail of optional descriptive attributes. Field
//! names (including the camelCase and misspelled ones) mirror the upstream
//! verification API and must not be renamed on the wire.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::normalize;

/// Incoming RC payload. Numeric and boolean-ish fields arrive as `Value`
/// because the upstream sends them inconsistently as strings, numbers or
/// booleans.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VehicleRcData {
    pub rc_number: String,
    #[serde(default)]
    pub registration_date: Option<String>,
    #[serde(default)]
    pub owner_name: Option<String>,
    #[serde(default)]
    pub father_name: Option<String>,
    #[serde(default)]
    pub present_address: Option<String>,
    #[serde(default)]
    pub permanent_address: Option<String>,
    #[serde(default)]
    pub mobile_number: Option<String>,
    #[serde(default)]
    pub vehicle_category: Option<String>,
    #[serde(default)]
    pub vehicle_chasi_number: Option<String>,
    #[serde(default)]
    pub vehicle_engine_number: Option<String>,
    #[serde(default)]
    pub maker_description: Option<String>,
    #[serde(default)]
    pub maker_model: Option<String>,
    #[serde(default)]
    pub body_type: Option<String>,
    #[serde(default)]
    pub fuel_type: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub norms_type: Option<String>,
    #[serde(default)]
    pub fit_up_to: Option<String>,
    #[serde(default)]
    pub financer: Option<String>,
    #[serde(default)]
    pub financed: Option<String>,
    #[serde(default)]
    pub insurance_company: Option<String>,
    #[serde(default)]
    pub insurance_policy_number: Option<String>,
    #[serde(default)]
    pub insurance_upto: Option<String>,
    #[serde(default)]
    pub manufacturing_date: Option<String>,
    #[serde(default)]
    pub manufacturing_date_formatted: Option<String>,
    #[serde(default)]
    pub registered_at: Option<String>,
    #[serde(default)]
    pub latest_by: Option<String>,
    #[serde(default)]
    pub less_info: Option<Value>,
    #[serde(default)]
    pub tax_upto: Option<String>,
    #[serde(default)]
    pub tax_paid_upto: Option<String>,
    #[serde(default)]
    pub cubic_capacity: Option<Value>,
    #[serde(default)]
    pub vehicle_gross_weight: Option<Value>,
    #[serde(default)]
    pub no_cylinders: Option<Value>,
    #[serde(default)]
    pub seat_capacity: Option<Value>,
    #[serde(default)]
    pub sleeper_capacity: Option<String>,
    #[serde(default)]
    pub standing_capacity: Option<String>,
    #[serde(default)]
    pub wheelbase: Option<String>,
    #[serde(default)]
    pub unladen_weight: Option<String>,
    #[serde(default)]
    pub vehicle_category_description: Option<String>,
    #[serde(default)]
    pub pucc_number: Option<String>,
    #[serde(default)]
    pub pucc_upto: Option<String>,
    #[serde(default)]
    pub permit_number: Option<String>,
    #[serde(default)]
    pub permit_issue_date: Option<String>,
    #[serde(default)]
    pub permit_valid_from: Option<String>,
    #[serde(default)]
    pub permit_valid_upto: Option<String>,
    #[serde(default)]
    pub permit_type: Option<String>,
    #[serde(default)]
    pub national_permit_number: Option<String>,
    #[serde(default)]
    pub national_permit_upto: Option<String>,
    #[serde(default)]
    pub national_permit_issued_by: Option<String>,
    #[serde(default)]
    pub non_use_status: Option<Value>,
    #[serde(default)]
    pub non_use_from: Option<String>,
    #[serde(default)]
    pub non_use_to: Option<String>,
    #[serde(default)]
    pub blacklist_status: Option<String>,
    #[serde(default)]
    pub noc_details: Option<String>,
    #[serde(default)]
    pub owner_number: Option<String>,
    #[serde(default)]
    pub rc_status: Option<String>,
    #[serde(default)]
    pub masked_name: Option<Value>,
    #[serde(default)]
    pub variant: Option<String>,
    #[serde(rename = "permanent_Pincode", default)]
    pub permanent_pincode: Option<String>,
    #[serde(rename = "is_luxuryMover", default)]
    pub is_luxury_mover: Option<String>,
    #[serde(rename = "make_Name", default)]
    pub make_name: Option<String>,
    #[serde(rename = "model_Name", default)]
    pub model_name: Option<String>,
    #[serde(rename = "variant_Name", default)]
    pub variant_name: Option<String>,
    #[serde(rename = "statusAsOn", default)]
    pub status_as_on: Option<String>,
    #[serde(rename = "isCommercial", default)]
    pub is_commercial: Option<String>,
    #[serde(rename = "manufacture_Year", default)]
    pub manufacture_year: Option<String>,
    #[serde(rename = "purchase_Date", default)]
    pub purchase_date: Option<String>,
    #[serde(rename = "rto_Code", default)]
    pub rto_code: Option<String>,
    #[serde(rename = "rto_Name", default)]
    pub rto_name: Option<String>,
    #[serde(rename = "regAuthority", default)]
    pub reg_authority: Option<String>,
    #[serde(rename = "rcStandardCap", default)]
    pub rc_standard_cap: Option<String>,
    #[serde(rename = "blacklistDetails", default)]
    pub blacklist_details: Option<String>,
    #[serde(rename = "dbResult", default)]
    pub db_result: Option<String>,
    #[serde(default)]
    pub result: Option<String>,
    #[serde(rename = "recommended_Vehicle", default)]
    pub recommended_vehicle: Option<String>,
    #[serde(rename = "carVariant", default)]
    pub car_variant: Option<String>,
    // "Regitration" is the upstream API's spelling, kept for wire fidelity.
    #[serde(rename = "cityofRegitration", default)]
    pub city_of_regitration: Option<String>,
    #[serde(rename = "cityofRegitrationId", default)]
    pub city_of_regitration_id: Option<String>,
    #[serde(rename = "manufactureMonth", default)]
    pub manufacture_month: Option<String>,
    #[serde(rename = "expiryDuration", default)]
    pub expiry_duration: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub year: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// An RC row ready for insertion into `vehicle_rc_v10`, with every field
/// coerced to its column type. Field order matches the table's column order.
#[derive(Debug, Clone)]
pub struct VehicleRcRow {
    pub rc_number: String,
    pub registration_date: Option<NaiveDate>,
    pub owner_name: String,
    pub father_name: String,
    pub present_address: String,
    pub permanent_address: String,
    pub mobile_number: String,
    pub vehicle_category: String,
    pub vehicle_chasi_number: String,
    pub vehicle_engine_number: String,
    pub maker_description: String,
    pub maker_model: String,
    pub body_type: String,
    pub fuel_type: String,
    pub color: String,
    pub norms_type: String,
    pub fit_up_to: Option<NaiveDate>,
    pub financer: String,
    pub financed: String,
    pub insurance_company: String,
    pub insurance_policy_number: String,
    pub insurance_upto: Option<NaiveDate>,
    pub manufacturing_date: String,
    pub manufacturing_date_formatted: String,
    pub registered_at: String,
    pub latest_by: Option<DateTime<Utc>>,
    pub less_info: u8,
    pub tax_upto: Option<NaiveDate>,
    pub tax_paid_upto: Option<NaiveDate>,
    pub cubic_capacity: Option<f64>,
    pub vehicle_gross_weight: Option<f64>,
    pub no_cylinders: Option<i64>,
    pub seat_capacity: Option<i64>,
    pub sleeper_capacity: String,
    pub standing_capacity: String,
    pub wheelbase: String,
    pub unladen_weight: String,
    pub vehicle_category_description: String,
    pub pucc_number: String,
    pub pucc_upto: Option<NaiveDate>,
    pub permit_number: String,
    pub permit_issue_date: String,
    pub permit_valid_from: String,
    pub permit_valid_upto: String,
    pub permit_type: String,
    pub national_permit_number: String,
    pub national_permit_upto: Option<NaiveDate>,
    pub national_permit_issued_by: String,
    pub non_use_status: Option<i64>,
    pub non_use_from: Option<NaiveDate>,
    pub non_use_to: Option<NaiveDate>,
    pub blacklist_status: String,
    pub noc_details: String,
    pub owner_number: String,
    pub rc_status: String,
    pub masked_name: u8,
    pub variant: String,
    pub permanent_pincode: String,
    pub is_luxury_mover: String,
    pub make_name: String,
    pub model_name: String,
    pub variant_name: String,
    pub status_as_on: String,
    pub is_commercial: String,
    pub manufacture_year: String,
    pub purchase_date: String,
    pub rto_code: String,
    pub rto_name: String,
    pub reg_authority: String,
    pub rc_standard_cap: String,
    pub blacklist_details: String,
    pub db_result: String,
    pub result: String,
    pub recommended_vehicle: String,
    pub car_variant: String,
    pub city_of_regitration: String,
    pub city_of_regitration_id: String,
    pub manufacture_month: String,
    pub expiry_duration: String,
    pub city: String,
    pub year: String,
    pub status: String,
}

impl VehicleRcRow {
    /// Coerce an incoming payload into a typed row. Every coercion is lenient
    /// except `registration_date`, whose contract rejects a non-empty value
    /// that parses as no accepted date format.
    pub fn from_request(data: &VehicleRcData) -> Result<Self, String> {
        let registration_date = normalize::parse_date_strict(data.registration_date.as_deref())?;

        Ok(Self {
            rc_number: data.rc_number.clone(),
            registration_date,
            owner_name: normalize::text_or_empty(data.owner_name.as_ref()),
            father_name: normalize::text_or_empty(data.father_name.as_ref()),
            present_address: normalize::text_or_empty(data.present_address.as_ref()),
            permanent_address: normalize::text_or_empty(data.permanent_address.as_ref()),
            mobile_number: normalize::text_or_empty(data.mobile_number.as_ref()),
            vehicle_category: normalize::text_or_empty(data.vehicle_category.as_ref()),
            vehicle_chasi_number: normalize::text_or_empty(data.vehicle_chasi_number.as_ref()),
            vehicle_engine_number: normalize::text_or_empty(data.vehicle_engine_number.as_ref()),
            maker_description: normalize::text_or_empty(data.maker_description.as_ref()),
            maker_model: normalize::text_or_empty(data.maker_model.as_ref()),
            body_type: normalize::text_or_empty(data.body_type.as_ref()),
            fuel_type: normalize::text_or_empty(data.fuel_type.as_ref()),
            color: normalize::text_or_empty(data.color.as_ref()),
            norms_type: normalize::text_or_empty(data.norms_type.as_ref()),
            fit_up_to: normalize::parse_date(data.fit_up_to.as_deref()),
            financer: normalize::text_or_empty(data.financer.as_ref()),
            financed: normalize::text_or_empty(data.financed.as_ref()),
            insurance_company: normalize::text_or_empty(data.insurance_company.as_ref()),
            insurance_policy_number: normalize::text_or_empty(
                data.insurance_policy_number.as_ref(),
            ),
            insurance_upto: normalize::parse_date(data.insurance_upto.as_deref()),
            manufacturing_date: normalize::text_or_empty(data.manufacturing_date.as_ref()),
            manufacturing_date_formatted: normalize::text_or_empty(
                data.manufacturing_date_formatted.as_ref(),
            ),
            registered_at: normalize::text_or_empty(data.registered_at.as_ref()),
            latest_by: normalize::parse_datetime(data.latest_by.as_deref()),
            less_info: normalize::bool_flag(data.less_info.as_ref()),
            tax_upto: normalize::parse_date(data.tax_upto.as_deref()),
            tax_paid_upto: normalize::parse_date(data.tax_paid_upto.as_deref()),
            cubic_capacity: normalize::coerce_float(data.cubic_capacity.as_ref()),
            vehicle_gross_weight: normalize::coerce_float(data.vehicle_gross_weight.as_ref()),
            no_cylinders: normalize::coerce_int(data.no_cylinders.as_ref()),
            seat_capacity: normalize::coerce_int(data.seat_capacity.as_ref()),
            sleeper_capacity: normalize::text_or_empty(data.sleeper_capacity.as_ref()),
            standing_capacity: normalize::text_or_empty(data.standing_capacity.as_ref()),
            wheelbase: normalize::text_or_empty(data.wheelbase.as_ref()),
            unladen_weight: normalize::text_or_empty(data.unladen_weight.as_ref()),
            vehicle_category_description: normalize::text_or_empty(
                data.vehicle_category_description.as_ref(),
            ),
            pucc_number: normalize::text_or_empty(data.pucc_number.as_ref()),
            pucc_upto: normalize::parse_date(data.pucc_upto.as_deref()),
            permit_number: normalize::text_or_empty(data.permit_number.as_ref()),
            permit_issue_date: normalize::text_or_empty(data.permit_issue_date.as_ref()),
            permit_valid_from: normalize::text_or_empty(data.permit_valid_from.as_ref()),
            permit_valid_upto: normalize::text_or_empty(data.permit_valid_upto.as_ref()),
            permit_type: normalize::text_or_empty(data.permit_type.as_ref()),
            national_permit_number: normalize::text_or_empty(data.national_permit_number.as_ref()),
            national_permit_upto: normalize::parse_date(data.national_permit_upto.as_deref()),
            national_permit_issued_by: normalize::text_or_empty(
                data.national_permit_issued_by.as_ref(),
            ),
            non_use_status: normalize::coerce_int(data.non_use_status.as_ref()),
            non_use_from: normalize::parse_date(data.non_use_from.as_deref()),
            non_use_to: normalize::parse_date(data.non_use_to.as_deref()),
            blacklist_status: normalize::text_or_empty(data.blacklist_status.as_ref()),
            noc_details: normalize::text_or_empty(data.noc_details.as_ref()),
            owner_number: normalize::text_or_empty(data.owner_number.as_ref()),
            rc_status: normalize::text_or_empty(data.rc_status.as_ref()),
            masked_name: normalize::bool_flag(data.masked_name.as_ref()),
            variant: normalize::text_or_empty(data.variant.as_ref()),
            permanent_pincode: normalize::text_or_empty(data.permanent_pincode.as_ref()),
            is_luxury_mover: normalize::text_or_empty(data.is_luxury_mover.as_ref()),
            make_name: normalize::text_or_empty(data.make_name.as_ref()),
            model_name: normalize::text_or_empty(data.model_name.as_ref()),
            variant_name: normalize::text_or_empty(data.variant_name.as_ref()),
            status_as_on: normalize::text_or_empty(data.status_as_on.as_ref()),
            is_commercial: normalize::text_or_empty(data.is_commercial.as_ref()),
            manufacture_year: normalize::text_or_empty(data.manufacture_year.as_ref()),
            purchase_date: normalize::text_or_empty(data.purchase_date.as_ref()),
            rto_code: normalize::text_or_empty(data.rto_code.as_ref()),
            rto_name: normalize::text_or_empty(data.rto_name.as_ref()),
            reg_authority: normalize::text_or_empty(data.reg_authority.as_ref()),
            rc_standard_cap: normalize::text_or_empty(data.rc_standard_cap.as_ref()),
            blacklist_details: normalize::text_or_empty(data.blacklist_details.as_ref()),
            db_result: normalize::text_or_empty(data.db_result.as_ref()),
            result: normalize::text_or_empty(data.result.as_ref()),
            recommended_vehicle: normalize::text_or_empty(data.recommended_vehicle.as_ref()),
            car_variant: normalize::text_or_empty(data.car_variant.as_ref()),
            city_of_regitration: normalize::text_or_empty(data.city_of_regitration.as_ref()),
            city_of_regitration_id: normalize::text_or_empty(data.city_of_regitration_id.as_ref()),
            manufacture_month: normalize::text_or_empty(data.manufacture_month.as_ref()),
            expiry_duration: normalize::text_or_empty(data.expiry_duration.as_ref()),
            city: normalize::text_or_empty(data.city.as_ref()),
            year: normalize::text_or_empty(data.year.as_ref()),
            status: normalize::text_or_empty(data.status.as_ref()),
        })
    }
}

/// Response body for a successful RC insert.
#[derive(Debug, Serialize, Deserialize)]
pub struct VehicleRcInsertResponse {
    pub message: String,
    pub rc_number: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;

    fn minimal() -> VehicleRcData {
        VehicleRcData {
            rc_number: "DL01AB1234".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn minimal_payload_normalizes_without_error() {
        let row = VehicleRcRow::from_request(&minimal()).unwrap();
        assert_eq!(row.rc_number, "DL01AB1234");
        assert!(row.registration_date.is_none());
        assert_eq!(row.owner_name, "");
        assert_eq!(row.less_info, 0);
        assert_eq!(row.masked_name, 0);
        assert!(row.cubic_capacity.is_none());
        assert!(row.no_cylinders.is_none());
    }

    #[test]
    fn strict_registration_date_rejects_garbage() {
        let mut data = minimal();
        data.registration_date = Some("not-a-date".to_string());
        assert!(VehicleRcRow::from_request(&data).is_err());
    }

    #[test]
    fn lenient_dates_resolve_garbage_to_null() {
        let mut data = minimal();
        data.fit_up_to = Some("not-a-date".to_string());
        data.insurance_upto = Some("".to_string());
        let row = VehicleRcRow::from_request(&data).unwrap();
        assert!(row.fit_up_to.is_none());
        assert!(row.insurance_upto.is_none());
    }

    #[test]
    fn mixed_typed_fields_are_coerced() {
        let mut data = minimal();
        data.registration_date = Some("15/03/2024".to_string());
        data.cubic_capacity = Some(json!("1498.0"));
        data.vehicle_gross_weight = Some(json!(1850));
        data.no_cylinders = Some(json!("4"));
        data.seat_capacity = Some(json!(5));
        data.less_info = Some(json!("true"));
        data.masked_name = Some(json!(false));
        data.latest_by = Some("2024-03-15T10:00:00Z".to_string());

        let row = VehicleRcRow::from_request(&data).unwrap();
        assert_eq!(row.registration_date, NaiveDate::from_ymd_opt(2024, 3, 15));
        assert_eq!(row.cubic_capacity, Some(1498.0));
        assert_eq!(row.vehicle_gross_weight, Some(1850.0));
        assert_eq!(row.no_cylinders, Some(4));
        assert_eq!(row.seat_capacity, Some(5));
        assert_eq!(row.less_info, 1);
        assert_eq!(row.masked_name, 0);
        assert!(row.latest_by.is_some());
    }
}
