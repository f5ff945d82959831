//! Domain model structs and query DTOs.

pub mod movie;
