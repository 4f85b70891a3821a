//! Core types and integer coercion for the sum API.
//!
//! Response bodies keep the wire shape of the original service:
//! `{"sum": n}` on success, `{"error": "..."}` on any validation failure.

mod coerce;
mod dto;

pub use coerce::*;
pub use dto::*;
