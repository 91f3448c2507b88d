pub mod app;
pub mod component;
pub mod conf;
pub mod error;
pub mod form;
pub mod interrupt;
pub mod state;
pub mod view;
