pub mod activity_store;

pub use activity_store::{ActivityStore, SignupError, UnregisterError};
