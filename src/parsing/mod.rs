//! Device grammars for WhatsApp text exports.
//!
//! This module contains the regex grammars and timestamp formats used by
//! [`LineParser`](crate::parser::LineParser) and the table builder.

pub mod whatsapp;

pub use whatsapp::{Grammar, ParsedFields};
