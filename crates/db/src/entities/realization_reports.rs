//! `SeaORM` Entity for the realization_reports table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A budget realization report with its inline document blob.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "realization_reports")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub received_on: Date,
    pub department: String,
    pub program_name: String,
    pub treasurer: String,
    pub document_name: String,
    #[sea_orm(column_type = "Text")]
    pub document_data: String,
    pub approved_on: Option<Date>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
