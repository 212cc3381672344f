//! Accountability report repository for database operations.

use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
    Set,
};

use super::submission::SubmissionInput;
use crate::entities::accountability_reports;

/// Accountability report repository for CRUD operations.
#[derive(Debug, Clone)]
pub struct AccountabilityReportRepository {
    db: DatabaseConnection,
}

impl AccountabilityReportRepository {
    /// Creates a new accountability report repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists all accountability reports in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(&self) -> Result<Vec<accountability_reports::Model>, DbErr> {
        accountability_reports::Entity::find()
            .order_by_asc(accountability_reports::Column::Id)
            .all(&self.db)
            .await
    }

    /// Finds an accountability report by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_id(
        &self,
        id: i32,
    ) -> Result<Option<accountability_reports::Model>, DbErr> {
        accountability_reports::Entity::find_by_id(id)
            .one(&self.db)
            .await
    }

    /// Inserts a new accountability report.
    ///
    /// # Errors
    ///
    /// Returns an error if the database insert fails.
    pub async fn create(
        &self,
        input: SubmissionInput,
    ) -> Result<accountability_reports::Model, DbErr> {
        let row = accountability_reports::ActiveModel {
            received_on: Set(input.received_on),
            department: Set(input.department),
            program_name: Set(input.program_name),
            secretary: Set(input.officer),
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
        let result = accountability_reports::Entity::update_many()
            .col_expr(
                accountability_reports::Column::ReceivedOn,
                Expr::value(input.received_on),
            )
            .col_expr(
                accountability_reports::Column::Department,
                Expr::value(input.department),
            )
            .col_expr(
                accountability_reports::Column::ProgramName,
                Expr::value(input.program_name),
            )
            .col_expr(
                accountability_reports::Column::Secretary,
                Expr::value(input.officer),
            )
            .col_expr(
                accountability_reports::Column::DocumentName,
                Expr::value(input.document_name),
            )
            .col_expr(
                accountability_reports::Column::DocumentData,
                Expr::value(input.document_data),
            )
            .col_expr(
                accountability_reports::Column::ApprovedOn,
                Expr::value(input.approved_on),
            )
            .filter(accountability_reports::Column::Id.eq(id))
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Deletes an accountability report. Returns `false` when no row matched
    /// the ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database delete fails.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = accountability_reports::Entity::delete_by_id(id)
            .exec(&self.db)
            .await?;
        Ok(result.rows_affected > 0)
    }
}
