pub mod health;
pub mod recommend;

pub use health::health_check;
pub use recommend::recommend;
