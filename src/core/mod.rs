pub mod absent;
pub mod home;
pub mod log;
pub mod login;
pub mod reconcile;
pub mod roster;
pub mod submit;
pub mod substitute;
pub mod window;
