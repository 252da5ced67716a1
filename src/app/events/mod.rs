//! AppIntent- und AppCommand-Enums für den Pointer-Event-Datenfluss.

mod command;
mod intent;

pub use command::AppCommand;
pub use intent::AppIntent;
