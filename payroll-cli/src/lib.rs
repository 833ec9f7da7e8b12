pub mod logging;
pub mod report;
pub mod utils;

pub use report::{OutputFormat, ReportError, render};
pub use utils::{SalaryInputError, parse_salary, prompt_salary};
