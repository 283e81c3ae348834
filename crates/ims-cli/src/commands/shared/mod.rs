pub mod handler;
pub mod session;

pub(crate) use handler::{CommandHandler, run};
