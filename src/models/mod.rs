pub mod affiliatemodel;
pub mod invoicemodel;
pub mod prospectmodel;
pub mod referralmodel;
