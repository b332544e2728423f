mod evaluation;
pub mod pst;
pub mod scores;
pub mod values;

pub use evaluation::evaluate;
pub use scores::{Eval, NEG_INFINITY, POS_INFINITY};
pub use values::piece_value;
