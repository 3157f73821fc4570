pub mod cli;
pub mod database;
pub mod database_factory;
pub mod error;
pub mod filter;
pub mod report;
pub mod statistics;
pub mod statistics_service;
pub mod student;
