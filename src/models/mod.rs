// src/models/mod.rs

pub mod answer;
pub mod question;
pub mod score;
pub mod user;
