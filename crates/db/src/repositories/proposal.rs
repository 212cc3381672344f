//! Proposal repository for database operations.

use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
    Set,
};

use super::submission::SubmissionInput;
use crate::entities::proposals;

/// Proposal repository for CRUD operations.
#[derive(Debug, Clone)]
pub struct ProposalRepository {
    db: DatabaseConnection,
}

impl ProposalRepository {
    /// Creates a new proposal repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists all proposals in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(&self) -> Result<Vec<proposals::Model>, DbErr> {
        proposals::Entity::find()
            .order_by_asc(proposals::Column::Id)
            .all(&self.db)
            .await
    }

    /// Finds a proposal by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<proposals::Model>, DbErr> {
        proposals::Entity::find_by_id(id).one(&self.db).await
    }

    /// Inserts a new proposal.
    ///
    /// # Errors
    ///
    /// Returns an error if the database insert fails.
    pub async fn create(&self, input: SubmissionInput) -> Result<proposals::Model, DbErr> {
        let row = proposals::ActiveModel {
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

    /// Replaces every column of an existing proposal. Returns `false` when no
    /// row matched the ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database update fails.
    pub async fn update(&self, id: i32, input: SubmissionInput) -> Result<bool, DbErr> {
        let result = proposals::Entity::update_many()
            .col_expr(proposals::Column::ReceivedOn, Expr::value(input.received_on))
            .col_expr(proposals::Column::Department, Expr::value(input.department))
            .col_expr(
                proposals::Column::ProgramName,
                Expr::value(input.program_name),
            )
            .col_expr(proposals::Column::Secretary, Expr::value(input.officer))
            .col_expr(
                proposals::Column::DocumentName,
                Expr::value(input.document_name),
            )
            .col_expr(
                proposals::Column::DocumentData,
                Expr::value(input.document_data),
            )
            .col_expr(proposals::Column::ApprovedOn, Expr::value(input.approved_on))
            .filter(proposals::Column::Id.eq(id))
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Deletes a proposal (its inline blob dies with the row). Returns
    /// `false` when no row matched the ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database delete fails.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = proposals::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected > 0)
    }
}
