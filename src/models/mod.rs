// Module exports for models

pub mod grid;
pub mod meeting;
