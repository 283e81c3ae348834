pub mod profile;
pub mod start;
pub mod stop;

pub use profile::ProfileCommands;
pub use start::StartCommands;
pub use stop::StopCommands;
