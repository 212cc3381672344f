//! Database migration runner for Arsiva.
//!
//! Wraps the sea-orm-migration CLI: `migrator up` applies pending
//! migrations, `down` rolls back the last one, `status` lists them, and
//! `fresh` drops everything and reapplies from scratch.

use arsiva_db::migration::Migrator;
use sea_orm_migration::prelude::*;

#[tokio::main]
async fn main() {
    // Pick up DATABASE_URL from .env if present
    dotenvy::dotenv().ok();

    cli::run_cli(Migrator).await;
}
