pub mod api;
pub mod catalog;
pub mod disclosure;
pub mod dto;
pub mod filter;
pub mod loader;
pub mod model;
pub mod screen;
pub mod view;
