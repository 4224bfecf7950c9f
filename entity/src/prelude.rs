pub use super::direct_ping::Entity as DirectPing;
pub use super::global_settings::Entity as GlobalSettings;
pub use super::random_gif_ping::Entity as RandomGifPing;
pub use super::random_ping::Entity as RandomPing;
