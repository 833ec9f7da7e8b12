mod computation_result;
mod contribution_schedule;
mod tax_bracket;

pub use computation_result::ComputationResult;
pub use contribution_schedule::{CONTRIBUTION_SCHEDULE, ContributionSchedule};
pub use tax_bracket::{TaxBracketRow, UpperBound, WITHHOLDING_TAX_TABLE};
