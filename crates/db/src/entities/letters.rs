//! `SeaORM` Entity for the letters table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// An incoming-letter log row. `activity_file` is a weak reference to a file
/// under the upload root, not the bytes themselves.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "letters")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub received_on: Date,
    pub letter_type: String,
    pub name: String,
    pub agency: String,
    pub approved_on: Option<Date>,
    pub activity_file: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
