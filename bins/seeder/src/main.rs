//! Database seeder for Arsiva development and testing.
//!
//! Seeds a test user plus one sample row per resource table so the frontend
//! has something to render against a fresh database.
//!
//! Usage: cargo run --bin seeder

use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    Set,
};

use arsiva_core::auth::hash_password;
use arsiva_db::entities::{inventory_items, letters, proposals, users};

/// Seed username for development logins.
const TEST_USERNAME: &str = "pengurus";

// "%PDF-1.4\n" - enough for a download smoke test.
const SAMPLE_PDF_B64: &str = "data:application/pdf;base64,JVBERi0xLjQK";

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let database_url =
        std::env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");

    println!("Connecting to database...");
    let db = arsiva_db::connect(&database_url)
        .await
        .expect("Failed to connect to database");

    println!("Seeding test user...");
    seed_test_user(&db).await;

    println!("Seeding sample proposal...");
    seed_sample_proposal(&db).await;

    println!("Seeding sample letter...");
    seed_sample_letter(&db).await;

    println!("Seeding sample inventory item...");
    seed_sample_inventory(&db).await;

    println!("Seeding complete!");
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid seed date")
}

/// Seeds a test user for development.
async fn seed_test_user(db: &DatabaseConnection) {
    let existing = users::Entity::find()
        .filter(users::Column::Username.eq(TEST_USERNAME))
        .one(db)
        .await
        .expect("Failed to query users");

    if existing.is_some() {
        println!("  Test user already exists, skipping...");
        return;
    }

    let password_hash = hash_password("rahasia123").expect("Failed to hash seed password");

    let user = users::ActiveModel {
        username: Set(TEST_USERNAME.to_string()),
        email: Set("pengurus@example.org".to_string()),
        password_hash: Set(password_hash),
        ..Default::default()
    };
    user.insert(db).await.expect("Failed to seed test user");
}

/// Seeds one sample proposal with an inline PDF document.
async fn seed_sample_proposal(db: &DatabaseConnection) {
    let count = proposals::Entity::find()
        .count(db)
        .await
        .expect("Failed to count proposals");

    if count > 0 {
        println!("  Proposals already present, skipping...");
        return;
    }

    let proposal = proposals::ActiveModel {
        received_on: Set(date(2026, 1, 12)),
        department: Set("Dakwah".to_string()),
        program_name: Set("Kajian Rutin".to_string()),
        secretary: Set("Aisyah".to_string()),
        document_name: Set("proposal-kajian.pdf".to_string()),
        document_data: Set(SAMPLE_PDF_B64.to_string()),
        approved_on: Set(None),
        ..Default::default()
    };
    proposal
        .insert(db)
        .await
        .expect("Failed to seed sample proposal");
}

/// Seeds one sample incoming letter (no activity file yet).
async fn seed_sample_letter(db: &DatabaseConnection) {
    let count = letters::Entity::find()
        .count(db)
        .await
        .expect("Failed to count letters");

    if count > 0 {
        println!("  Letters already present, skipping...");
        return;
    }

    let letter = letters::ActiveModel {
        received_on: Set(date(2026, 1, 20)),
        letter_type: Set("Undangan".to_string()),
        name: Set("Budi".to_string()),
        agency: Set("BEM Fakultas".to_string()),
        approved_on: Set(None),
        activity_file: Set(None),
        ..Default::default()
    };
    letter.insert(db).await.expect("Failed to seed sample letter");
}

/// Seeds one sample inventory rental without a receipt.
async fn seed_sample_inventory(db: &DatabaseConnection) {
    let count = inventory_items::Entity::find()
        .count(db)
        .await
        .expect("Failed to count inventory items");

    if count > 0 {
        println!("  Inventory items already present, skipping...");
        return;
    }

    let item = inventory_items::ActiveModel {
        name: Set("Tenda".to_string()),
        agency: Set("UKM Pramuka".to_string()),
        letter_in_on: Set(Some(date(2026, 2, 1))),
        pickup_on: Set(Some(date(2026, 2, 5))),
        return_on: Set(None),
        rental_period: Set(Some("3 hari".to_string())),
        payment_status: Set(Some("DP".to_string())),
        receipt_name: Set(None),
        receipt_data: Set(None),
        ..Default::default()
    };
    item.insert(db)
        .await
        .expect("Failed to seed sample inventory item");
}
