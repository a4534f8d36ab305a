pub(crate) mod by_date;
pub(crate) mod summary;
pub(crate) mod top_customers;
pub(crate) mod upload;
