pub mod affiliatedb;
pub mod db;
pub mod invoicedb;
pub mod prospectdb;
pub mod referraldb;
