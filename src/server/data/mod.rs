//! Database repository layer.
//!
//! Repositories use SeaORM entity models internally and return domain models from
//! `server::model`, parsing the string-encoded Discord ids at this boundary.

pub mod global_settings;
pub mod ping;

#[cfg(test)]
mod test;
