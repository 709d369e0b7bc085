//! IPS (Indeks Prestasi Semester) computation.
//!
//! The grade scale is a closed set of letter grades with fixed quality-point
//! weights; the calculator reduces joined KRS rows into an SKS-weighted
//! average with a per-row breakdown.

pub mod calculator;
pub mod grade;

pub use calculator::{compute_ips, GradeLine, IpsReport};
pub use grade::Grade;
