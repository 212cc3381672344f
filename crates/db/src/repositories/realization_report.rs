//! Realization report repository for database operations.

use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
    Set,
};

use super::submission::SubmissionInput;
use crate::entities::realization_reports;

/// Realization report repository for CRUD operations.
#[derive(Debug, Clone)]
pub struct RealizationReportRepository {
    db: DatabaseConnection,
}

impl RealizationReportRepository {
    /// Creates a new realization report repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists all realization reports in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(&self) -> Result<Vec<realization_reports::Model>, DbErr> {
        realization_reports::Entity::find()
            .order_by_asc(realization_reports::Column::Id)
            .all(&self.db)
            .await
    }

    /// Finds a realization report by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<realization_reports::Model>, DbErr> {
        realization_reports::Entity::find_by_id(id)
            .one(&self.db)
            .await
    }

    /// Inserts a new realization report.
    ///
    /// # Errors
    ///
    /// Returns an error if the database insert fails.
    pub async fn create(
        &self,
        input: SubmissionInput,
    ) -> Result<realization_reports::Model, DbErr> {
        let row = realization_reports::ActiveModel {
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

    /// Replaces every column of an existing report. Returns `false` when no
    /// row matched the ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database update fails.
    pub async fn update(&self, id: i32, input: SubmissionInput) -> Result<bool, DbErr> {
        let result = realization_reports::Entity::update_many()
            .col_expr(
                realization_reports::Column::ReceivedOn,
                Expr::value(input.received_on),
            )
            .col_expr(
                realization_reports::Column::Department,
                Expr::value(input.department),
            )
            .col_expr(
                realization_reports::Column::ProgramName,
                Expr::value(input.program_name),
            )
            .col_expr(
                realization_reports::Column::Treasurer,
                Expr::value(input.officer),
            )
            .col_expr(
                realization_reports::Column::DocumentName,
                Expr::value(input.document_name),
            )
            .col_expr(
                realization_reports::Column::DocumentData,
                Expr::value(input.document_data),
            )
            .col_expr(
                realization_reports::Column::ApprovedOn,
                Expr::value(input.approved_on),
            )
            .filter(realization_reports::Column::Id.eq(id))
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Deletes a realization report. Returns `false` when no row matched the
    /// ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database delete fails.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = realization_reports::Entity::delete_by_id(id)
            .exec(&self.db)
            .await?;
        Ok(result.rows_affected > 0)
    }
}
