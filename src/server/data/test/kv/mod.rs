use crate::server::data::kv::KvRepository;
use sea_orm::DbErr;
use serde_json::{json, Value};
use test_utils::builder::TestBuilder;

mod get_by_prefix;
mod get_set;
mod list;
mod mget;
