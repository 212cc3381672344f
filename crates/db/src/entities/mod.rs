//! `SeaORM` entity definitions.

pub mod accountability_reports;
pub mod budget_plans;
pub mod inventory_items;
pub mod letters;
pub mod proposals;
pub mod realization_reports;
pub mod users;
