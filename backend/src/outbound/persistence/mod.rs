//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Concrete implementations of the domain repository ports backed by
//! PostgreSQL through `diesel-async` and a `bb8` connection pool.
//!
//! - **Thin adapters**: repositories translate between Diesel rows and domain
//!   types. Business rules stay in the domain services.
//! - **Internal models**: row structs (`models.rs`) and table definitions
//!   (`schema.rs`) never leave this module.
//! - **Atomic writes**: reservations and inquiries run inside one
//!   transaction each.
//!
//! # Example
//!
//! ```ignore
//! use backend::outbound::persistence::{DbPool, DieselSlotRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/bookings")).await?;
//! let slots = DieselSlotRepository::new(pool);
//! ```

mod diesel_basic_error_mapping;
mod diesel_booking_repository;
mod diesel_call_log_repository;
mod diesel_customer_repository;
mod diesel_inquiry_repository;
mod diesel_slot_repository;
mod diesel_transaction;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_booking_repository::DieselBookingRepository;
pub use diesel_call_log_repository::DieselCallLogRepository;
pub use diesel_customer_repository::DieselCustomerRepository;
pub use diesel_inquiry_repository::DieselInquiryRepository;
pub use diesel_slot_repository::DieselSlotRepository;
pub use migrations::{MIGRATIONS, MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
