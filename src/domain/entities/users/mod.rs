pub mod user;

pub use user::{BusinessStage, User, UserType};
