pub mod menu;
mod user_interface;

pub use menu::{render_menu, SessionState};
pub use user_interface::run_session;
