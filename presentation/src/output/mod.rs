//! Output formatting for ticket responses

pub mod console;
