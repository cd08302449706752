pub mod error;
pub mod invoice_service;
pub mod referral;
