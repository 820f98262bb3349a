// Service module exports

pub mod generator;
pub mod schedule;
pub mod spreadsheet;
