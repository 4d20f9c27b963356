// src/services/mod.rs

pub mod catalog;
pub mod quiz;
pub mod scoring;

pub use catalog::Catalog;
pub use quiz::QuizService;
pub use scoring::ScoringService;
