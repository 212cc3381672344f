//! Initial schema: users plus the six independent resource tables.
//!
//! The four submission tables (proposals, accountability reports, budget
//! plans, realization reports) share one shape and carry their document as
//! inline base64 text. Letters reference an uploaded file by sanitized name;
//! inventory items carry an optional inline payment receipt.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(INITIAL_SQL).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(
            "DROP TABLE IF EXISTS inventory_items, letters, realization_reports, \
             budget_plans, accountability_reports, proposals, users CASCADE;",
        )
        .await?;
        Ok(())
    }
}

const INITIAL_SQL: &str = r"
-- Users for the minimal credential check
CREATE TABLE users (
    id SERIAL PRIMARY KEY,
    username VARCHAR(64) NOT NULL UNIQUE,
    email VARCHAR(255) NOT NULL,
    password_hash TEXT NOT NULL
);

-- Program proposals (inline base64 document, required)
CREATE TABLE proposals (
    id SERIAL PRIMARY KEY,
    received_on DATE NOT NULL,
    department VARCHAR(128) NOT NULL,
    program_name VARCHAR(255) NOT NULL,
    secretary VARCHAR(128) NOT NULL,
    document_name VARCHAR(255) NOT NULL,
    document_data TEXT NOT NULL,
    approved_on DATE
);

-- Accountability reports, same shape as proposals
CREATE TABLE accountability_reports (
    id SERIAL PRIMARY KEY,
    received_on DATE NOT NULL,
    department VARCHAR(128) NOT NULL,
    program_name VARCHAR(255) NOT NULL,
    secretary VARCHAR(128) NOT NULL,
    document_name VARCHAR(255) NOT NULL,
    document_data TEXT NOT NULL,
    approved_on DATE
);

-- Budget plans, submitted by the treasurer
CREATE TABLE budget_plans (
    id SERIAL PRIMARY KEY,
    received_on DATE NOT NULL,
    department VARCHAR(128) NOT NULL,
    program_name VARCHAR(255) NOT NULL,
    treasurer VARCHAR(128) NOT NULL,
    document_name VARCHAR(255) NOT NULL,
    document_data TEXT NOT NULL,
    approved_on DATE
);

-- Budget realization reports, same shape as budget plans
CREATE TABLE realization_reports (
    id SERIAL PRIMARY KEY,
    received_on DATE NOT NULL,
    department VARCHAR(128) NOT NULL,
    program_name VARCHAR(255) NOT NULL,
    treasurer VARCHAR(128) NOT NULL,
    document_name VARCHAR(255) NOT NULL,
    document_data TEXT NOT NULL,
    approved_on DATE
);

-- Incoming-letter log; activity_file references a file under the upload root
CREATE TABLE letters (
    id SERIAL PRIMARY KEY,
    received_on DATE NOT NULL,
    letter_type VARCHAR(128) NOT NULL,
    name VARCHAR(255) NOT NULL,
    agency VARCHAR(255) NOT NULL,
    approved_on DATE,
    activity_file VARCHAR(255)
);

-- Listing is newest-first by received date
CREATE INDEX idx_letters_received ON letters(received_on DESC);

-- Inventory rentals; receipt columns are both set or both null
CREATE TABLE inventory_items (
    id SERIAL PRIMARY KEY,
    name VARCHAR(255) NOT NULL,
    agency VARCHAR(255) NOT NULL,
    letter_in_on DATE,
    pickup_on DATE,
    return_on DATE,
    rental_period VARCHAR(64),
    payment_status VARCHAR(64),
    receipt_name VARCHAR(255),
    receipt_data TEXT,
    CONSTRAINT chk_receipt_pair CHECK ((receipt_name IS NULL) = (receipt_data IS NULL))
);
";
