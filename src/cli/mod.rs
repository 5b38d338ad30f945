pub mod about;
pub mod project;
pub mod quote;
pub mod session;
pub mod setup;
pub mod ui;
