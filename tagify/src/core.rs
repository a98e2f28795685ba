// src/core.rs
pub mod aggregate;
pub mod error;
pub mod exclude;
pub mod scanner;
