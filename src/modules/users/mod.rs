pub mod model;
pub mod registry;
mod user_interface;

pub use model::User;
pub use registry::{create_user, find_user, UserError};
pub use user_interface::handle_user_creation;
