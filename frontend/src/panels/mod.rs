pub mod api;
pub mod components;
pub mod forms;
pub mod state;
pub mod tabs;
