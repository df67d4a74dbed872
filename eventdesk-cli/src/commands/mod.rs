pub mod config;
pub mod delete;
pub mod export;
pub mod form;
pub mod shell;
pub mod view;
