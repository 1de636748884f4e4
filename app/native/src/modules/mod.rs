//! Homescreen components.

pub mod apps;
pub mod home;
pub mod notifications;
pub mod providers;
pub mod wallpaper;
