pub mod dispatch;
pub mod profile;
pub mod shared;
pub mod start;
pub mod stop;
