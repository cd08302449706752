use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{
    db::prospectdb::ProspectWithAffiliate,
    models::prospectmodel::{Prospect, ProspectStatus},
};

#[derive(Validate, Debug, Default, Clone, Serialize, Deserialize)]
pub struct SubmitProspectDto {
    #[validate(length(min = 1, max = 255, message = "Name is required"))]
    pub name: String,

    #[validate(
        length(min = 1, message = "Email is required"),
        email(message = "Email is invalid")
    )]
    pub email: String,

    #[validate(length(min = 1, max = 255, message = "Company is required"))]
    pub company: String,

    #[validate(length(max = 2000, message = "Message must not exceed 2000 characters"))]
    pub message: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct UpdateProspectStatusDto {
    pub status: ProspectStatus,
}

#[derive(Debug, Serialize)]
pub struct SubmitProspectData {
    pub prospect: Prospect,
    /// Prefilled conversation the visitor is redirected to after submitting.
    pub whatsapp_url: String,
}

#[derive(Debug, Serialize)]
pub struct SubmitProspectResponseDto {
    pub status: String,
    pub data: SubmitProspectData,
}

#[derive(Debug, Serialize)]
pub struct ProspectResponseDto {
    pub status: String,
    pub prospect: Prospect,
}

#[derive(Debug, Serialize)]
pub struct ProspectListResponseDto {
    pub status: String,
    pub results: usize,
    pub prospects: Vec<Prospect>,
}

#[derive(Debug, Serialize)]
pub struct AdminProspectListResponseDto {
    pub status: String,
    pub results: usize,
    pub prospects: Vec<ProspectWithAffiliate>,
}

#[derive(Debug, Serialize)]
pub struct ReferralLandingDto {
    pub status: String,
    pub affiliate_name: String,
    pub code: String,
}
