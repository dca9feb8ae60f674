pub mod account;
pub mod customer;
