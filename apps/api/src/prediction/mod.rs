// Prediction pipeline: validation, feature assembly, adjustment, handlers.
// Model inference itself lives behind the SalaryModel trait in artifacts/.

pub mod adjustment;
pub mod features;
pub mod handlers;
pub mod titles;
pub mod validation;
