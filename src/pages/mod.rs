pub mod catalog;
pub mod home;
pub mod profile;
