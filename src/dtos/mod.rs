pub mod affiliatedtos;
pub mod invoicedtos;
pub mod prospectdtos;

use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Serialize)]
pub struct Response {
    pub status: &'static str,
    pub message: String,
}

#[derive(Serialize, Deserialize, Validate)]
pub struct RequestQueryDto {
    #[validate(range(min = 1))]
    pub page: Option<usize>,
    #[validate(range(min = 1, max = 50))]
    pub limit: Option<usize>,
}
