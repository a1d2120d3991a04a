pub mod advisory;
pub mod directory;
pub mod health;
