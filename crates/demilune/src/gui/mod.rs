pub mod app;
pub mod icon;
pub mod menu;
pub mod painter;
pub mod theme;
pub mod window;
