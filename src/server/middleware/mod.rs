//! Request authentication and access control.
//!
//! `token` extracts the bearer token from the `Authorization` header; `auth` resolves it to a
//! user through the session store and checks team permissions.

pub mod auth;
pub mod token;

#[cfg(test)]
mod test;
