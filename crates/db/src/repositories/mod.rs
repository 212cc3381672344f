//! Repository abstractions for data access.
//!
//! Repositories provide a clean interface for database operations,
//! hiding the `SeaORM` implementation details from the rest of the
//! application. Every repository is keyed by the table's integer identifier.

pub mod accountability_report;
pub mod budget_plan;
pub mod inventory;
pub mod letter;
pub mod proposal;
pub mod realization_report;
pub mod submission;
pub mod user;

pub use accountability_report::AccountabilityReportRepository;
pub use budget_plan::BudgetPlanRepository;
pub use inventory::{InventoryItemInput, InventoryRepository};
pub use letter::{LetterInput, LetterRepository};
pub use proposal::ProposalRepository;
pub use realization_report::RealizationReportRepository;
pub use submission::SubmissionInput;
pub use user::UserRepository;
