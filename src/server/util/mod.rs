pub mod id;
pub mod validate;
