pub mod filtering;
pub mod growth;
pub mod session_service;
