//! Expression module split into submodules for clarity

mod ast;
mod display;
mod errors;
mod eval;

pub use ast::{Operation, Step};
pub use display::format_expression;
pub use errors::ExpressionError;
pub use eval::replay;
