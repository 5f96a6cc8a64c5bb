// Frame loop, input and chrome around the carousel
pub mod keyboard_input;
pub mod main_ui;
pub mod statusbar;
pub mod theme;
