pub use super::kv_store::Entity as KvStore;
