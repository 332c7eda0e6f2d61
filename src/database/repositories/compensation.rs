use chrono::NaiveDate;
use sqlx::{Postgres, Transaction};

use crate::database::{
    models::{EmployeeCompensation, EmployeeComponentValue, EmployeeComponentValueInput},
    utils::sql,
};

pub async fn insert_compensation(
    tx: &mut Transaction<'_, Postgres>,
    employee_id: &str,
    structure_id: i32,
    effective_from: NaiveDate,
) -> Result<EmployeeCompensation, sqlx::Error> {
    let compensation = sqlx::query_as::<_, EmployeeCompensation>(&sql(r#"
        INSERT INTO
            employees_compensation (employee_id, structure_id, effective_from)
        VALUES
            (?, ?, ?)
        RETURNING
            id,
            employee_id,
            structure_id,
            effective_from,
            created_at,
            updated_at
    "#))
    .bind(employee_id)
    .bind(structure_id)
    .bind(effective_from)
    .fetch_one(&mut **tx)
    .await?;

    Ok(compensation)
}

pub async fn find_by_employee(
    tx: &mut Transaction<'_, Postgres>,
    employee_id: &str,
) -> Result<Vec<EmployeeCompensation>, sqlx::Error> {
    let records = sqlx::query_as::<_, EmployeeCompensation>(&sql(r#"
        SELECT
            id,
            employee_id,
            structure_id,
            effective_from,
            created_at,
            updated_at
        FROM
            employees_compensation
        WHERE
            employee_id = ?
        ORDER BY
            id
    "#))
    .bind(employee_id)
    .fetch_all(&mut **tx)
    .await?;

    Ok(records)
}

/// The employee's current record: the one with the latest `effective_from`.
/// Ties go to the most recently inserted row.
pub async fn find_latest_for_employee(
    tx: &mut Transaction<'_, Postgres>,
    employee_id: &str,
) -> Result<Option<EmployeeCompensation>, sqlx::Error> {
    let record = sqlx::query_as::<_, EmployeeCompensation>(&sql(r#"
        SELECT
            id,
            employee_id,
            structure_id,
            effective_from,
            created_at,
            updated_at
        FROM
            employees_compensation
        WHERE
            employee_id = ?
        ORDER BY
            effective_from DESC,
            id DESC
        LIMIT 1
    "#))
    .bind(employee_id)
    .fetch_optional(&mut **tx)
    .await?;

    Ok(record)
}

pub async fn update_compensation(
    tx: &mut Transaction<'_, Postgres>,
    compensation_id: i32,
    structure_id: i32,
    effective_from: NaiveDate,
) -> Result<EmployeeCompensation, sqlx::Error> {
    let record = sqlx::query_as::<_, EmployeeCompensation>(&sql(r#"
        UPDATE
            employees_compensation
        SET
            structure_id = ?,
            effective_from = ?,
            updated_at = now()
        WHERE
            id = ?
        RETURNING
            id,
            employee_id,
            structure_id,
            effective_from,
            created_at,
            updated_at
    "#))
    .bind(structure_id)
    .bind(effective_from)
    .bind(compensation_id)
    .fetch_one(&mut **tx)
    .await?;

    Ok(record)
}

pub async fn insert_component_value(
    tx: &mut Transaction<'_, Postgres>,
    compensation_id: i32,
    input: &EmployeeComponentValueInput,
) -> Result<EmployeeComponentValue, sqlx::Error> {
    let value = sqlx::query_as::<_, EmployeeComponentValue>(&sql(r#"
        INSERT INTO
            employee_component_values (employee_compensation_id, component_id, value)
        VALUES
            (?, ?, ?)
        RETURNING
            id,
            employee_compensation_id,
            component_id,
            value
    "#))
    .bind(compensation_id)
    .bind(input.component_id)
    .bind(&input.value)
    .fetch_one(&mut **tx)
    .await?;

    Ok(value)
}

pub async fn get_values_for_compensations(
    tx: &mut Transaction<'_, Postgres>,
    compensation_ids: &[i32],
) -> Result<Vec<EmployeeComponentValue>, sqlx::Error> {
    let values = sqlx::query_as::<_, EmployeeComponentValue>(&sql(r#"
        SELECT
            id,
            employee_compensation_id,
            component_id,
            value
        FROM
            employee_component_values
        WHERE
            employee_compensation_id = ANY(?)
        ORDER BY
            employee_compensation_id,
            id
    "#))
    .bind(compensation_ids)
    .fetch_all(&mut **tx)
    .await?;

    Ok(values)
}

pub async fn delete_values_for_compensation(
    tx: &mut Transaction<'_, Postgres>,
    compensation_id: i32,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(&sql(
        "DELETE FROM employee_component_values WHERE employee_compensation_id = ?",
    ))
    .bind(compensation_id)
    .execute(&mut **tx)
    .await?;

    Ok(result.rows_affected())
}
