pub mod contact;
pub mod courses;
pub mod home;
pub mod not_found;
pub mod projects;
pub mod research;
