pub mod export;
pub mod health;
pub mod instruments;
pub mod score;
pub mod sessions;
