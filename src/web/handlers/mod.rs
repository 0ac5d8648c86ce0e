pub mod health;
pub mod pages;

pub use health::health_check;
