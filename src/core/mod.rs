// src/core/mod.rs

pub mod classifier;
pub mod decimal;
pub mod engine;
pub mod patterns;
pub mod scanner;
pub mod types;
