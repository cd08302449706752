use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use validator::{Validate, ValidationError};

use crate::{
    db::affiliatedb::AffiliateOverview,
    models::{
        affiliatemodel::{Affiliate, AffiliateStatus, BankInfo},
        referralmodel::ReferralLink,
    },
    utils::currency::format_cents_as_euros,
};

#[derive(Validate, Debug, Default, Clone, Serialize, Deserialize)]
pub struct RegisterAffiliateDto {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[validate(
        length(min = 1, message = "Email is required"),
        email(message = "Email is invalid")
    )]
    pub email: String,

    #[validate(
        length(min = 1, message = "Password is required"),
        length(min = 6, message = "Password must be at least 6 characters")
    )]
    pub password: String,

    #[validate(
        length(min = 1, message = "Confirm Password is required"),
        must_match(other = "password", message = "passwords do not match")
    )]
    #[serde(rename = "passwordConfirm")]
    pub password_confirm: String,
}

#[derive(Validate, Debug, Default, Clone, Serialize, Deserialize)]
pub struct LoginAffiliateDto {
    #[validate(
        length(min = 1, message = "Email is required"),
        email(message = "Email is invalid")
    )]
    pub email: String,

    #[validate(
        length(min = 1, message = "Password is required"),
        length(min = 6, message = "Password must be at least 6 characters")
    )]
    pub password: String,
}

#[derive(Validate, Debug, Default, Clone, Serialize, Deserialize)]
pub struct UpdateBankInfoDto {
    #[validate(length(min = 2, max = 255, message = "Account holder is required"))]
    pub account_holder: String,

    #[validate(length(min = 15, max = 34, message = "IBAN must be between 15-34 characters"))]
    pub iban: String,

    #[validate(length(min = 8, max = 11, message = "BIC must be between 8-11 characters"))]
    pub bic: String,

    #[validate(length(min = 1, max = 255, message = "Bank name is required"))]
    pub bank_name: String,
}

impl UpdateBankInfoDto {
    pub fn validate_iban(&self) -> Result<(), ValidationError> {
        let iban_regex = regex::Regex::new(r"^[A-Z]{2}[0-9]{2}[A-Z0-9]{11,30}$")
            .map_err(|_| ValidationError::new("Invalid IBAN regex"))?;

        let normalized = self.iban.replace(' ', "").to_uppercase();
        if !iban_regex.is_match(&normalized) {
            let mut error = ValidationError::new("invalid_iban");
            error.message = Some(Cow::from(
                "IBAN must be in a valid international format (e.g., FR7630006000011234567890189)",
            ));
            return Err(error);
        }
        Ok(())
    }

    pub fn into_bank_info(self) -> BankInfo {
        BankInfo {
            account_holder: self.account_holder,
            iban: self.iban.replace(' ', "").to_uppercase(),
            bic: self.bic.to_uppercase(),
            bank_name: self.bank_name,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct UpdateAffiliateStatusDto {
    pub status: AffiliateStatus,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FilterAffiliateDto {
    pub id: String,
    pub name: String,
    pub email: String,
    pub status: String,
    pub bank_info: Option<BankInfo>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

impl FilterAffiliateDto {
    pub fn filter_affiliate(affiliate: &Affiliate) -> Self {
        FilterAffiliateDto {
            id: affiliate.id.to_string(),
            name: affiliate.name.to_owned(),
            email: affiliate.email.to_owned(),
            status: affiliate.status.to_str().to_owned(),
            bank_info: affiliate.bank_info.as_ref().map(|b| b.0.clone()),
            created_at: affiliate.created_at,
            updated_at: affiliate.updated_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ReferralLinkDto {
    pub code: String,
    pub url: String,
    pub clicks: i32,
}

impl ReferralLinkDto {
    pub fn from_link(link: &ReferralLink, base_url: &str) -> Self {
        ReferralLinkDto {
            code: link.code.to_owned(),
            url: crate::service::referral::generate_referral_link(base_url, &link.code),
            clicks: link.clicks,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AffiliateAccountData {
    pub affiliate: FilterAffiliateDto,
    pub referral_link: Option<ReferralLinkDto>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AffiliateResponseDto {
    pub status: String,
    pub data: AffiliateAccountData,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponseDto {
    pub status: String,
    pub token: String,
}

#[derive(Debug, Serialize)]
pub struct AffiliateOverviewDto {
    #[serde(flatten)]
    pub overview: AffiliateOverview,
    pub total_commission: String,
    pub unpaid_commission: String,
}

impl AffiliateOverviewDto {
    pub fn from_overview(overview: AffiliateOverview) -> Self {
        let total_commission = format_cents_as_euros(overview.total_commission_cents);
        let unpaid_commission = format_cents_as_euros(overview.unpaid_commission_cents);
        AffiliateOverviewDto {
            overview,
            total_commission,
            unpaid_commission,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AffiliateOverviewResponseDto {
    pub status: String,
    pub results: usize,
    pub affiliates: Vec<AffiliateOverviewDto>,
}
