mod attendance;
mod kv;
mod team;
