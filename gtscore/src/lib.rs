pub mod error;
pub mod institute;
pub mod kind;
pub mod person;
pub mod platform;
pub mod search;
pub mod status;
pub mod thesis;
pub mod university;
