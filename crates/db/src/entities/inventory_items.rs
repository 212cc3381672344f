//! `SeaORM` Entity for the inventory_items table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A rented inventory item. The payment receipt is an optional inline
/// attachment (name + base64 text); a row without one is legal.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "inventory_items")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub agency: String,
    pub letter_in_on: Option<Date>,
    pub pickup_on: Option<Date>,
    pub return_on: Option<Date>,
    pub rental_period: Option<String>,
    pub payment_status: Option<String>,
    pub receipt_name: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub receipt_data: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
