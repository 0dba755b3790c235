//! HTTP backend and business logic.
//!
//! Every record lives as a JSON value in a single key-value table; the layers below turn
//! that flat store into teams, rosters, messages and schedules.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP handlers, access control and DTO conversion
//! - **Service Layer** (`service/`) - Business rules and multi-record transactions
//! - **Data Layer** (`data/`) - Key layout, JSON encoding and index lists over `kv_store`
//! - **Model Layer** (`model/`) - Domain records and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Bearer token extraction and the permission guard
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based settings
//! - **State** (`state`) - Shared handles passed to every handler
//! - **Startup** (`startup`) - Database connection, migrations and tracing
//! - **Router** (`router`) - Route table, CORS and OpenAPI documentation
//!
//! # Request Flow
//!
//! 1. **Router** dispatches the request to a controller
//! 2. **Middleware** resolves the bearer token to a user and checks team permissions
//! 3. **Controller** converts the DTO to validated params and calls a service
//! 4. **Service** applies business rules and reads or writes through repositories
//! 5. **Controller** converts the domain model back to a DTO

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
