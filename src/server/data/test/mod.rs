mod global_settings;
mod ping;
