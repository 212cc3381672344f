//! Letter repository for database operations.

use chrono::NaiveDate;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
    Set,
};

use crate::entities::letters;

/// Input for creating or replacing a letter row.
///
/// The activity file reference is managed separately: creates start without
/// one, updates pass the resolved filename alongside this input.
#[derive(Debug, Clone)]
pub struct LetterInput {
    /// Date the letter came in.
    pub received_on: NaiveDate,
    /// Kind of letter (invitation, request, ...).
    pub letter_type: String,
    /// Sender name.
    pub name: String,
    /// Sending agency or institution.
    pub agency: String,
    /// Approval date, unset until approved.
    pub approved_on: Option<NaiveDate>,
}

/// Letter repository for CRUD operations.
#[derive(Debug, Clone)]
pub struct LetterRepository {
    db: DatabaseConnection,
}

impl LetterRepository {
    /// Creates a new letter repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists all letters, newest received first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(&self) -> Result<Vec<letters::Model>, DbErr> {
        letters::Entity::find()
            .order_by_desc(letters::Column::ReceivedOn)
            .all(&self.db)
            .await
    }

    /// Finds a letter by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<letters::Model>, DbErr> {
        letters::Entity::find_by_id(id).one(&self.db).await
    }

    /// Inserts a new letter; the activity file reference starts empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the database insert fails.
    pub async fn create(&self, input: LetterInput) -> Result<letters::Model, DbErr> {
        let row = letters::ActiveModel {
            received_on: Set(input.received_on),
            letter_type: Set(input.letter_type),
            name: Set(input.name),
            agency: Set(input.agency),
            approved_on: Set(input.approved_on),
            activity_file: Set(None),
            ..Default::default()
        };

        row.insert(&self.db).await
    }

    /// Replaces an existing letter, including its activity file reference
    /// (already resolved by the caller from the tri-state intent). Returns
    /// `false` when no row matched the ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database update fails.
    pub async fn update(
        &self,
        id: i32,
        input: LetterInput,
        activity_file: Option<String>,
    ) -> Result<bool, DbErr> {
        let result = letters::Entity::update_many()
            .col_expr(letters::Column::ReceivedOn, Expr::value(input.received_on))
            .col_expr(letters::Column::LetterType, Expr::value(input.letter_type))
            .col_expr(letters::Column::Name, Expr::value(input.name))
            .col_expr(letters::Column::Agency, Expr::value(input.agency))
            .col_expr(letters::Column::ApprovedOn, Expr::value(input.approved_on))
            .col_expr(letters::Column::ActivityFile, Expr::value(activity_file))
            .filter(letters::Column::Id.eq(id))
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Deletes a letter row. The caller is responsible for discarding the
    /// backing activity file. Returns `false` when no row matched the ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database delete fails.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = letters::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected > 0)
    }
}
