//! Database repository for schema-guard, duplicate-guard and insert operations.
//!
//! All queries use prepared statements with bound parameters; nothing is
//! string-interpolated into SQL.

use chrono::Utc;
use sqlx::{Row, SqlitePool};

use crate::errors::AppError;
use crate::models::{FastagRow, VehicleRcRow};

/// Database repository for all data operations.
#[derive(Clone)]
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    // ==================== SCHEMA GUARD ====================

    /// Ensure the `fastag_details` table exists. Safe to call on every
    /// request; an already-matching table is left untouched.
    pub async fn ensure_fastag_table(&self) -> Result<(), AppError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS fastag_details (
                TagId TEXT NOT NULL,
                VRN TEXT NOT NULL,
                Tag_Status TEXT NOT NULL,
                Vehicle_Class TEXT NOT NULL,
                Action TEXT NOT NULL,
                Issue_Date DATE,
                Issuer_Bank TEXT NOT NULL,
                Last_Update DATETIME,
                created_on DATETIME NOT NULL,
                updated_on DATETIME NOT NULL,
                is_current INTEGER NOT NULL,
                is_changed INTEGER NOT NULL,
                dwid TEXT
            );
            "#,
        )
        .execute(&self.pool)
        .await?;

        // Clustering key for lookups. Not UNIQUE: uniqueness is enforced by
        // the pre-insert existence check, and check-then-insert is not
        // transactional.
        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_fastag_details_tagid ON fastag_details(TagId)",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Ensure the `vehicle_rc_v10` table exists. Same contract as
    /// [`ensure_fastag_table`](Self::ensure_fastag_table).
    pub async fn ensure_rc_table(&self) -> Result<(), AppError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS vehicle_rc_v10 (
                rc_number TEXT NOT NULL,
                registration_date DATE,
                owner_name TEXT NOT NULL,
                father_name TEXT NOT NULL,
                present_address TEXT NOT NULL,
                permanent_address TEXT NOT NULL,
                mobile_number TEXT NOT NULL,
                vehicle_category TEXT NOT NULL,
                vehicle_chasi_number TEXT NOT NULL,
                vehicle_engine_number TEXT NOT NULL,
                maker_description TEXT NOT NULL,
                maker_model TEXT NOT NULL,
                body_type TEXT NOT NULL,
                fuel_type TEXT NOT NULL,
                color TEXT NOT NULL,
                norms_type TEXT NOT NULL,
                fit_up_to DATE,
                financer TEXT NOT NULL,
                financed TEXT NOT NULL,
                insurance_company TEXT NOT NULL,
                insurance_policy_number TEXT NOT NULL,
                insurance_upto DATE,
                manufacturing_date TEXT NOT NULL,
                manufacturing_date_formatted TEXT NOT NULL,
                registered_at TEXT NOT NULL,
                latest_by DATETIME,
                less_info INTEGER NOT NULL,
                tax_upto DATE,
                tax_paid_upto DATE,
                cubic_capacity REAL,
                vehicle_gross_weight REAL,
                no_cylinders INTEGER,
                seat_capacity INTEGER,
                sleeper_capacity TEXT NOT NULL,
                standing_capacity TEXT NOT NULL,
                wheelbase TEXT NOT NULL,
                unladen_weight TEXT NOT NULL,
                vehicle_category_description TEXT NOT NULL,
                pucc_number TEXT NOT NULL,
                pucc_upto DATE,
                permit_number TEXT NOT NULL,
                permit_issue_date TEXT NOT NULL,
                permit_valid_from TEXT NOT NULL,
                permit_valid_upto TEXT NOT NULL,
                permit_type TEXT NOT NULL,
                national_permit_number TEXT NOT NULL,
                national_permit_upto DATE,
                national_permit_issued_by TEXT NOT NULL,
                non_use_status INTEGER,
                non_use_from DATE,
                non_use_to DATE,
                blacklist_status TEXT NOT NULL,
                noc_details TEXT NOT NULL,
                owner_number TEXT NOT NULL,
                rc_status TEXT NOT NULL,
                masked_name INTEGER NOT NULL,
                variant TEXT NOT NULL,
                permanent_Pincode TEXT NOT NULL,
                is_luxuryMover TEXT NOT NULL,
                make_Name TEXT NOT NULL,
                model_Name TEXT NOT NULL,
                variant_Name TEXT NOT NULL,
                statusAsOn TEXT NOT NULL,
                isCommercial TEXT NOT NULL,
                manufacture_Year TEXT NOT NULL,
                purchase_Date TEXT NOT NULL,
                rto_Code TEXT NOT NULL,
                rto_Name TEXT NOT NULL,
                regAuthority TEXT NOT NULL,
                rcStandardCap TEXT NOT NULL,
                blacklistDetails TEXT NOT NULL,
                dbResult TEXT NOT NULL,
                result TEXT NOT NULL,
                recommended_Vehicle TEXT NOT NULL,
                carVariant TEXT NOT NULL,
                cityofRegitration TEXT NOT NULL,
                cityofRegitrationId TEXT NOT NULL,
                manufactureMonth TEXT NOT NULL,
                expiryDuration TEXT NOT NULL,
                city TEXT NOT NULL,
                year TEXT NOT NULL,
                status TEXT NOT NULL,
                created_on DATETIME NOT NULL,
                updated_on DATETIME NOT NULL
            );
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_vehicle_rc_v10_rc_number ON vehicle_rc_v10(rc_number)",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    // ==================== DUPLICATE GUARD ====================

    /// Check whether a FASTag row with this (TagId, VRN) pair already exists.
    pub async fn fastag_exists(&self, tag_id: &str, vrn: &str) -> Result<bool, AppError> {
        let row = sqlx::query("SELECT count(*) AS n FROM fastag_details WHERE TagId = ? AND VRN = ?")
            .bind(tag_id)
            .bind(vrn)
            .fetch_one(&self.pool)
            .await?;
        let n: i64 = row.get("n");
        Ok(n > 0)
    }

    /// Check whether an RC row with this rc_number already exists.
    pub async fn rc_exists(&self, rc_number: &str) -> Result<bool, AppError> {
        let row = sqlx::query("SELECT count(*) AS n FROM vehicle_rc_v10 WHERE rc_number = ?")
            .bind(rc_number)
            .fetch_one(&self.pool)
            .await?;
        let n: i64 = row.get("n");
        Ok(n > 0)
    }

    // ==================== INSERT EXECUTOR ====================

    /// Insert a single FASTag row, appending server-generated bookkeeping
    /// columns: created_on/updated_on are stamped now, is_current is fixed at
    /// 1, is_changed at 0, and the dwid linkage is null at insert time.
    pub async fn insert_fastag(&self, row: &FastagRow) -> Result<(), AppError> {
        let now = Utc::now();

        sqlx::query(
            r#"
            INSERT INTO fastag_details
                (TagId, VRN, Tag_Status, Vehicle_Class, Action, Issue_Date,
                 Issuer_Bank, Last_Update, created_on, updated_on,
                 is_current, is_changed, dwid)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&row.tag_id)
        .bind(&row.vrn)
        .bind(&row.tag_status)
        .bind(&row.vehicle_class)
        .bind(&row.action)
        .bind(row.issue_date)
        .bind(&row.issuer_bank)
        .bind(row.last_update)
        .bind(now)
        .bind(now)
        .bind(1_i64)
        .bind(0_i64)
        .bind(Option::<String>::None)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Insert a single RC row, stamping created_on/updated_on server-side.
    pub async fn insert_vehicle_rc(&self, row: &VehicleRcRow) -> Result<(), AppError> {
        let now = Utc::now();

        sqlx::query(
            r#"
            INSERT INTO vehicle_rc_v10
                (rc_number, registration_date, owner_name, father_name,
                 present_address, permanent_address, mobile_number,
                 vehicle_category, vehicle_chasi_number, vehicle_engine_number,
                 maker_description, maker_model, body_type, fuel_type, color,
                 norms_type, fit_up_to, financer, financed, insurance_company,
                 insurance_policy_number, insurance_upto, manufacturing_date,
                 manufacturing_date_formatted, registered_at, latest_by,
                 less_info, tax_upto, tax_paid_upto, cubic_capacity,
                 vehicle_gross_weight, no_cylinders, seat_capacity,
                 sleeper_capacity, standing_capacity, wheelbase, unladen_weight,
                 vehicle_category_description, pucc_number, pucc_upto,
                 permit_number, permit_issue_date, permit_valid_from,
                 permit_valid_upto, permit_type, national_permit_number,
                 national_permit_upto, national_permit_issued_by,
                 non_use_status, non_use_from, non_use_to, blacklist_status,
                 noc_details, owner_number, rc_status, masked_name, variant,
                 permanent_Pincode, is_luxuryMover, make_Name, model_Name,
                 variant_Name, statusAsOn, isCommercial, manufacture_Year,
                 purchase_Date, rto_Code, rto_Name, regAuthority,
                 rcStandardCap, blacklistDetails, dbResult, result,
                 recommended_Vehicle, carVariant, cityofRegitration,
                 cityofRegitrationId, manufactureMonth, expiryDuration,
                 city, year, status, created_on, updated_on)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?,
                    ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?,
                    ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?,
                    ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?,
                    ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&row.rc_number)
        .bind(row.registration_date)
        .bind(&row.owner_name)
        .bind(&row.father_name)
        .bind(&row.present_address)
        .bind(&row.permanent_address)
        .bind(&row.mobile_number)
        .bind(&row.vehicle_category)
        .bind(&row.vehicle_chasi_number)
        .bind(&row.vehicle_engine_number)
        .bind(&row.maker_description)
        .bind(&row.maker_model)
        .bind(&row.body_type)
        .bind(&row.fuel_type)
        .bind(&row.color)
        .bind(&row.norms_type)
        .bind(row.fit_up_to)
        .bind(&row.financer)
        .bind(&row.financed)
        .bind(&row.insurance_company)
        .bind(&row.insurance_policy_number)
        .bind(row.insurance_upto)
        .bind(&row.manufacturing_date)
        .bind(&row.manufacturing_date_formatted)
        .bind(&row.registered_at)
        .bind(row.latest_by)
        .bind(row.less_info as i64)
        .bind(row.tax_upto)
        .bind(row.tax_paid_upto)
        .bind(row.cubic_capacity)
        .bind(row.vehicle_gross_weight)
        .bind(row.no_cylinders)
        .bind(row.seat_capacity)
        .bind(&row.sleeper_capacity)
        .bind(&row.standing_capacity)
        .bind(&row.wheelbase)
        .bind(&row.unladen_weight)
        .bind(&row.vehicle_category_description)
        .bind(&row.pucc_number)
        .bind(row.pucc_upto)
        .bind(&row.permit_number)
        .bind(&row.permit_issue_date)
        .bind(&row.permit_valid_from)
        .bind(&row.permit_valid_upto)
        .bind(&row.permit_type)
        .bind(&row.national_permit_number)
        .bind(row.national_permit_upto)
        .bind(&row.national_permit_issued_by)
        .bind(row.non_use_status)
        .bind(row.non_use_from)
        .bind(row.non_use_to)
        .bind(&row.blacklist_status)
        .bind(&row.noc_details)
        .bind(&row.owner_number)
        .bind(&row.rc_status)
        .bind(row.masked_name as i64)
        .bind(&row.variant)
        .bind(&row.permanent_pincode)
        .bind(&row.is_luxury_mover)
        .bind(&row.make_name)
        .bind(&row.model_name)
        .bind(&row.variant_name)
        .bind(&row.status_as_on)
        .bind(&row.is_commercial)
        .bind(&row.manufacture_year)
        .bind(&row.purchase_date)
        .bind(&row.rto_code)
        .bind(&row.rto_name)
        .bind(&row.reg_authority)
        .bind(&row.rc_standard_cap)
        .bind(&row.blacklist_details)
        .bind(&row.db_result)
        .bind(&row.result)
        .bind(&row.recommended_vehicle)
        .bind(&row.car_variant)
        .bind(&row.city_of_regitration)
        .bind(&row.city_of_regitration_id)
        .bind(&row.manufacture_month)
        .bind(&row.expiry_duration)
        .bind(&row.city)
        .bind(&row.year)
        .bind(&row.status)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
