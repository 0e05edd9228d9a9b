pub mod display_settings;
