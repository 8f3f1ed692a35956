//! Game core: board types, rules engine, and session state machine.

mod position;
pub mod rules;
mod session;
mod types;

pub use position::Position;
pub use session::GameSession;
pub use types::{Board, Cell, Line, Mark, Outcome};
