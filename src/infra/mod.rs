pub mod ai;
pub mod factory;
pub mod repositories;
pub mod storage;
