mod latex;
mod prose;

pub use latex::{evaluation_rows, game_rows};
pub use prose::{Value, fraction, summary_line};
