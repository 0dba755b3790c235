//! SeaORM entities backing the team hub key-value store.

pub mod prelude;

pub mod kv_store;
