pub mod auth;
pub mod dispatch;
pub mod idea;
pub mod serve;
pub mod shared;
pub mod suggestion;
