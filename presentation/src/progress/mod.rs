//! Progress display while a ticket is in flight

pub mod reporter;
