use anyhow::Result;
use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use typed_builder::TypedBuilder;

use crate::common::utils::like_pattern;
use crate::common::{AdminFilter, DonationId};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum DonationType {
    #[default]
    OneTime,
    Monthly,
}

impl DonationType {
    pub fn label(&self) -> &'static str {
        match self {
            DonationType::OneTime => "One Time",
            DonationType::Monthly => "Monthly",
        }
    }
}

impl std::fmt::Display for DonationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DonationType::OneTime => write!(f, "one_time"),
            DonationType::Monthly => write!(f, "monthly"),
        }
    }
}

impl std::str::FromStr for DonationType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "one_time" => Ok(DonationType::OneTime),
            "monthly" => Ok(DonationType::Monthly),
            _ => Err(anyhow::anyhow!("Invalid donation type: {}", s)),
        }
    }
}

/// Donation model - a pledge recorded when its payment intent is created.
///
/// Amount, type and donor fields never change after insert.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Donation {
    pub id: DonationId,
    pub amount: Decimal,
    pub donation_type: String,
    pub donor_name: String,
    pub donor_email: String,
    /// Payment intent id; blank if none was created
    pub stripe_payment_id: String,
    pub is_anonymous: bool,
    pub message: String,
    pub processed: bool,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, TypedBuilder)]
#[builder(field_defaults(setter(into)))]
pub struct CreateDonation {
    pub amount: Decimal,
    #[builder(default)]
    pub donation_type: DonationType,
    pub donor_name: String,
    pub donor_email: String,
    #[builder(default)]
    pub stripe_payment_id: String,
    #[builder(default = false)]
    pub is_anonymous: bool,
    #[builder(default)]
    pub message: String,
}

impl std::fmt::Display for Donation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "${} - {}", self.amount, self.donor_name)
    }
}

impl Donation {
    pub async fn find_by_id(id: DonationId, pool: &PgPool) -> Result<Option<Self>> {
        let donation = sqlx::query_as::<_, Self>("SELECT * FROM donations WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(donation)
    }

    /// Admin list: `flag` filters on `processed`, `kind` on `donation_type`
    pub async fn find_for_admin(filter: &AdminFilter, pool: &PgPool) -> Result<Vec<Self>> {
        let donations = sqlx::query_as::<_, Self>(
            r#"
            SELECT * FROM donations
            WHERE ($1::text IS NULL OR donor_name ILIKE $1 OR donor_email ILIKE $1
                   OR stripe_payment_id ILIKE $1)
              AND ($2::bool IS NULL OR is_active = $2)
              AND ($3::bool IS NULL OR processed = $3)
              AND ($4::text IS NULL OR donation_type = $4)
            ORDER BY created_at DESC
            "#,
        )
        .bind(like_pattern(filter.search.as_deref()))
        .bind(filter.is_active)
        .bind(filter.flag)
        .bind(filter.kind.as_deref())
        .fetch_all(pool)
        .await?;
        Ok(donations)
    }

    pub async fn create(input: CreateDonation, pool: &PgPool) -> Result<Self> {
        let donation = sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO donations (
                id, amount, donation_type, donor_name, donor_email,
                stripe_payment_id, is_anonymous, message
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(DonationId::new())
        .bind(input.amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
        .bind(input.donation_type.to_string())
        .bind(&input.donor_name)
        .bind(&input.donor_email)
        .bind(&input.stripe_payment_id)
        .bind(input.is_anonymous)
        .bind(&input.message)
        .fetch_one(pool)
        .await?;
        Ok(donation)
    }

    /// Mark whether the gift has been reconciled by staff
    pub async fn set_processed(id: DonationId, processed: bool, pool: &PgPool) -> Result<Self> {
        let donation = sqlx::query_as::<_, Self>(
            r#"
            UPDATE donations SET processed = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(processed)
        .fetch_one(pool)
        .await?;
        Ok(donation)
    }

    pub async fn delete(id: DonationId, pool: &PgPool) -> Result<bool> {
        let result = sqlx::query("DELETE FROM donations WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn donation_type_parses_stored_values() {
        assert_eq!(DonationType::from_str("monthly").unwrap(), DonationType::Monthly);
        assert_eq!(DonationType::OneTime.to_string(), "one_time");
        assert!(DonationType::from_str("weekly").is_err());
    }

    #[test]
    fn displays_amount_and_donor() {
        let donation = Donation {
            id: DonationId::new(),
            amount: Decimal::from_str("25.00").unwrap(),
            donation_type: "one_time".to_string(),
            donor_name: "Jane Doe".to_string(),
            donor_email: "jane@example.com".to_string(),
            stripe_payment_id: String::new(),
            is_anonymous: false,
            message: String::new(),
            processed: false,
            is_active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        assert_eq!(donation.to_string(), "$25.00 - Jane Doe");
    }
}
