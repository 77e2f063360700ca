//! Record models matching the backend document schema.

pub mod user;
pub mod project;
pub mod message;
pub mod estimate;
pub mod audit;
pub mod credential;
