pub mod bmi;
pub mod category;
pub mod evaluate;
pub mod measurement;
pub mod parse;

pub use bmi::Bmi;
pub use category::Category;
pub use evaluate::{evaluate, Evaluation, EvaluationError};
pub use measurement::{Height, Weight};
