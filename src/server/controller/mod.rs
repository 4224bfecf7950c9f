pub mod health;
pub mod interaction;
pub mod server_details;
