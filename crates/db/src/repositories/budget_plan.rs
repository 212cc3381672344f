//! Budget plan repository for database operations.

use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
    Set,
};

use super::submission::SubmissionInput;
use crate::entities::budget_plans;

/// Budget plan repository for CRUD operations.
#[derive(Debug, Clone)]
pub struct BudgetPlanRepository {
    db: DatabaseConnection,
}

impl BudgetPlanRepository {
    /// Creates a new budget plan repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists all budget plans in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(&self) -> Result<Vec<budget_plans::Model>, DbErr> {
        budget_plans::Entity::find()
            .order_by_asc(budget_plans::Column::Id)
            .all(&self.db)
            .await
    }

    /// Finds a budget plan by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<budget_plans::Model>, DbErr> {
        budget_plans::Entity::find_by_id(id).one(&self.db).await
    }

    /// Inserts a new budget plan.
    ///
    /// # Errors
    ///
    /// Returns an error if the database insert fails.
    pub async fn create(&self, input: SubmissionInput) -> Result<budget_plans::Model, DbErr> {
        let row = budget_plans::ActiveModel {
            received_on: Set(input.received_on),
            department: Set(input.department),
            program_name: Set(input.program_name),
            treasurer: Set(input.officer),
            document_name: Set(input.document_name),
            document_data: Set(input.document_data),
            approved_on: Set(input.approved_on),
            ..Default::default()
        };

        row.insert(&self.db).await
    }

    /// Replaces every column of an existing budget plan. Returns `false` when
    /// no row matched the ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database update fails.
    pub async fn update(&self, id: i32, input: SubmissionInput) -> Result<bool, DbErr> {
        let result = budget_plans::Entity::update_many()
            .col_expr(
                budget_plans::Column::ReceivedOn,
                Expr::value(input.received_on),
            )
            .col_expr(
                budget_plans::Column::Department,
                Expr::value(input.department),
            )
            .col_expr(
                budget_plans::Column::ProgramName,
                Expr::value(input.program_name),
            )
            .col_expr(budget_plans::Column::Treasurer, Expr::value(input.officer))
            .col_expr(
                budget_plans::Column::DocumentName,
                Expr::value(input.document_name),
            )
            .col_expr(
                budget_plans::Column::DocumentData,
                Expr::value(input.document_data),
            )
            .col_expr(
                budget_plans::Column::ApprovedOn,
                Expr::value(input.approved_on),
            )
            .filter(budget_plans::Column::Id.eq(id))
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Deletes a budget plan. Returns `false` when no row matched the ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database delete fails.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = budget_plans::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected > 0)
    }
}
