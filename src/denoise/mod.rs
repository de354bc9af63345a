pub mod adaptive_median;
pub mod config;
pub mod filtering;
pub mod padding;
pub mod statistics;
pub mod window;
