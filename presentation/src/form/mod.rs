//! Interactive ticket form

pub mod ticket_form;

pub use ticket_form::{FormError, TicketForm, parse_category_choice};
