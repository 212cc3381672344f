//! Inventory repository for database operations.

use chrono::NaiveDate;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
    Set,
};

use crate::entities::inventory_items;

/// Input for creating or replacing an inventory item.
#[derive(Debug, Clone)]
pub struct InventoryItemInput {
    /// Renter name.
    pub name: String,
    /// Renting agency or institution.
    pub agency: String,
    /// Date the rental request letter came in.
    pub letter_in_on: Option<NaiveDate>,
    /// Pickup date.
    pub pickup_on: Option<NaiveDate>,
    /// Return date.
    pub return_on: Option<NaiveDate>,
    /// Rental period label.
    pub rental_period: Option<String>,
    /// Down-payment / settled status label.
    pub payment_status: Option<String>,
    /// Payment receipt filename (paired with `receipt_data`).
    pub receipt_name: Option<String>,
    /// Payment receipt inline base64 text (paired with `receipt_name`).
    pub receipt_data: Option<String>,
}

/// Inventory repository for CRUD operations.
#[derive(Debug, Clone)]
pub struct InventoryRepository {
    db: DatabaseConnection,
}

impl InventoryRepository {
    /// Creates a new inventory repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists all inventory items in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(&self) -> Result<Vec<inventory_items::Model>, DbErr> {
        inventory_items::Entity::find()
            .order_by_asc(inventory_items::Column::Id)
            .all(&self.db)
            .await
    }

    /// Finds an inventory item by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<inventory_items::Model>, DbErr> {
        inventory_items::Entity::find_by_id(id).one(&self.db).await
    }

    /// Inserts a new inventory item; a missing receipt stores null.
    ///
    /// # Errors
    ///
    /// Returns an error if the database insert fails.
    pub async fn create(&self, input: InventoryItemInput) -> Result<inventory_items::Model, DbErr> {
        let row = inventory_items::ActiveModel {
            name: Set(input.name),
            agency: Set(input.agency),
            letter_in_on: Set(input.letter_in_on),
            pickup_on: Set(input.pickup_on),
            return_on: Set(input.return_on),
            rental_period: Set(input.rental_period),
            payment_status: Set(input.payment_status),
            receipt_name: Set(input.receipt_name),
            receipt_data: Set(input.receipt_data),
            ..Default::default()
        };

        row.insert(&self.db).await
    }

    /// Replaces every column of an existing inventory item. Returns `false`
    /// when no row matched the ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database update fails.
    pub async fn update(&self, id: i32, input: InventoryItemInput) -> Result<bool, DbErr> {
        let result = inventory_items::Entity::update_many()
            .col_expr(inventory_items::Column::Name, Expr::value(input.name))
            .col_expr(inventory_items::Column::Agency, Expr::value(input.agency))
            .col_expr(
                inventory_items::Column::LetterInOn,
                Expr::value(input.letter_in_on),
            )
            .col_expr(inventory_items::Column::PickupOn, Expr::value(input.pickup_on))
            .col_expr(inventory_items::Column::ReturnOn, Expr::value(input.return_on))
            .col_expr(
                inventory_items::Column::RentalPeriod,
                Expr::value(input.rental_period),
            )
            .col_expr(
                inventory_items::Column::PaymentStatus,
                Expr::value(input.payment_status),
            )
            .col_expr(
                inventory_items::Column::ReceiptName,
                Expr::value(input.receipt_name),
            )
            .col_expr(
                inventory_items::Column::ReceiptData,
                Expr::value(input.receipt_data),
            )
            .filter(inventory_items::Column::Id.eq(id))
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Deletes an inventory item (its inline receipt dies with the row).
    /// Returns `false` when no row matched the ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database delete fails.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = inventory_items::Entity::delete_by_id(id)
            .exec(&self.db)
            .await?;
        Ok(result.rows_affected > 0)
    }
}
