mod check;
mod context;

pub use check::run_check;
