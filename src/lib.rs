pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod fasta;
pub mod output;
pub mod store;
pub mod summary;
