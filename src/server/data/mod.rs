//! Repository layer over the key-value store.
//!
//! `kv` holds the generic JSON repository; every other module is a typed repository for one
//! record kind that also owns the index lists of that kind. Repositories are generic over
//! `ConnectionTrait` so services can run them on the pool or inside a transaction.

pub mod attendance;
pub mod credential;
pub mod event;
pub mod join_request;
pub mod kv;
pub mod member;
pub mod message;
pub mod session;
pub mod team;
pub mod user;

#[cfg(test)]
mod test;
