pub mod check;
pub mod evaluation;
pub mod locomo25;
pub mod standing;
pub mod subject;
pub mod two_step;
