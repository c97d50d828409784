pub mod chat;
pub mod health;
pub mod prediction;
pub mod user_data;
