mod card;
mod carousel_view;
mod details;
mod dots;
mod main;
mod settings_dialog;
