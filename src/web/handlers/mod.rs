//! HTML handlers for the admin panel.

mod backfill;
mod login;
mod logout;

pub use backfill::backfill_handler;
pub use login::{LoginForm, login_handler};
pub use logout::logout_handler;
