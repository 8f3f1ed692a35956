//! Pure rules engine: winner and draw detection over a board snapshot.
//!
//! Both checks are stateless and bounded (8 lines of 3 cells); the session
//! re-evaluates them after every accepted move.

mod draw;
mod win;

pub use draw::is_draw;
pub use win::{WIN_LINES, find_winner};
