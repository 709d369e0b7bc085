//! PostgreSQL access: connection pool and the academic-records repository.
//!
//! All reads go through [`AcademicRepository`], which scopes one transaction
//! per call: begin at entry, commit only on full success. An early return
//! drops the transaction, rolling it back.

pub mod connection;
pub mod repository;

pub use connection::{connect_lazy, ping};
pub use repository::{AcademicRepository, KrsRow, Mahasiswa};
