#![allow(dead_code)]

use std::env;

use fake::Fake;
use fake::faker::company::en::CompanyName;
use serde_json::{Value, json};
use sqlx::PgPool;

use compensation::config::Config;
use compensation::database::init_database;

/// Database-backed test context.
///
/// Tests using it are marked `#[ignore = "requires TEST_DATABASE_URL"]` and
/// run with `cargo test -- --ignored` against the PostgreSQL database named
/// by `TEST_DATABASE_URL`.
pub struct TestContext {
    pub pool: PgPool,
    pub config: Config,
}

impl TestContext {
    pub async fn new() -> Self {
        setup_test_env();

        let database_url = env::var("TEST_DATABASE_URL")
            .expect("TEST_DATABASE_URL must point at a PostgreSQL database");

        let pool = init_database(&database_url, 2)
            .await
            .expect("Failed to initialise test database");
        reset_database(&pool).await;

        let config = Config {
            database_url,
            database_max_connections: 2,
            host: "127.0.0.1".to_string(),
            port: 0,
            environment: "test".to_string(),
        };

        TestContext { pool, config }
    }
}

pub async fn reset_database(pool: &PgPool) {
    sqlx::query(
        r#"
        TRUNCATE
            employee_component_values,
            employees_compensation,
            compensation_components,
            salary_structures
        RESTART IDENTITY CASCADE
        "#,
    )
    .execute(pool)
    .await
    .expect("Failed to reset test database");
}

pub fn setup_test_env() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// Mock data generators
pub struct MockData;

impl MockData {
    pub fn employee_id() -> String {
        format!("EMP-{}", (1000..9999).fake::<u32>())
    }

    pub fn structure_name() -> String {
        format!("{} Standard", CompanyName().fake::<String>())
    }

    pub fn uae_basic() -> Value {
        json!({
            "name": "UAE Basic",
            "country": "UAE",
            "components": [
                {"name": "Basic", "type": "earning"},
                {"name": "Tax", "type": "deduction"}
            ]
        })
    }

    pub fn structure(country: &str, components: &[(&str, &str, Option<&str>)]) -> Value {
        let components: Vec<Value> = components
            .iter()
            .map(|(name, component_type, rule_type)| {
                json!({"name": name, "type": component_type, "rule_type": rule_type})
            })
            .collect();

        json!({
            "name": Self::structure_name(),
            "country": country,
            "components": components
        })
    }

    pub fn compensation(
        employee_id: &str,
        structure_id: i64,
        effective_from: &str,
        values: &[(i64, f64)],
    ) -> Value {
        let component_values: Vec<Value> = values
            .iter()
            .map(|(component_id, value)| json!({"component_id": component_id, "value": value}))
            .collect();

        json!({
            "employee_id": employee_id,
            "structure_id": structure_id,
            "effective_from": effective_from,
            "component_values": component_values
        })
    }
}

pub fn component_ids(structure: &Value) -> Vec<i64> {
    structure["components"]
        .as_array()
        .expect("structure has components")
        .iter()
        .map(|component| component["id"].as_i64().expect("component id"))
        .collect()
}

pub async fn count_rows(pool: &PgPool, table: &str) -> i64 {
    let query = format!("SELECT COUNT(*) FROM {}", table);
    sqlx::query_scalar::<_, i64>(&query)
        .fetch_one(pool)
        .await
        .expect("Failed to count records")
}
