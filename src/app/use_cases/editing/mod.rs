//! Use-Case-Funktionen für das Plan-Editing.
//!
//! Aufgeteilt nach Operation:
//! - `add_handle` — Neues Handle anhängen (inkl. Deko-Neuaufbau)
//! - `clear_plan` — Gesamten Plan verwerfen

mod add_handle;
mod clear_plan;

pub use add_handle::add_handle_at_position;
pub use clear_plan::clear_plan;
