use sqlx::{Postgres, Transaction};

use crate::database::{
    models::{CompensationComponent, CompensationComponentInput, Country, SalaryStructure},
    utils::sql,
};

pub async fn insert_structure(
    tx: &mut Transaction<'_, Postgres>,
    name: &str,
    country: Country,
) -> Result<SalaryStructure, sqlx::Error> {
    let structure = sqlx::query_as::<_, SalaryStructure>(&sql(r#"
        INSERT INTO
            salary_structures (name, country)
        VALUES
            (?, ?)
        RETURNING
            id,
            name,
            country,
            created_at,
            updated_at
    "#))
    .bind(name)
    .bind(country)
    .fetch_one(&mut **tx)
    .await?;

    Ok(structure)
}

/// Insert one component row per input, in input order.
pub async fn insert_components(
    tx: &mut Transaction<'_, Postgres>,
    structure_id: i32,
    components: &[CompensationComponentInput],
) -> Result<Vec<CompensationComponent>, sqlx::Error> {
    let mut inserted = Vec::with_capacity(components.len());

    for component in components {
        let row = sqlx::query_as::<_, CompensationComponent>(&sql(r#"
            INSERT INTO
                compensation_components (structure_id, name, type, rule_type)
            VALUES
                (?, ?, ?, ?)
            RETURNING
                id,
                structure_id,
                name,
                type,
                rule_type
        "#))
        .bind(structure_id)
        .bind(&component.name)
        .bind(component.component_type)
        .bind(component.rule_type)
        .fetch_one(&mut **tx)
        .await?;

        inserted.push(row);
    }

    Ok(inserted)
}

pub async fn find_structure_by_id(
    tx: &mut Transaction<'_, Postgres>,
    structure_id: i32,
) -> Result<Option<SalaryStructure>, sqlx::Error> {
    let structure = sqlx::query_as::<_, SalaryStructure>(&sql(r#"
        SELECT
            id,
            name,
            country,
            created_at,
            updated_at
        FROM
            salary_structures
        WHERE
            id = ?
    "#))
    .bind(structure_id)
    .fetch_optional(&mut **tx)
    .await?;

    Ok(structure)
}

pub async fn structure_exists(
    tx: &mut Transaction<'_, Postgres>,
    structure_id: i32,
) -> Result<bool, sqlx::Error> {
    let exists = sqlx::query_scalar::<_, bool>(&sql(
        "SELECT EXISTS (SELECT 1 FROM salary_structures WHERE id = ?)",
    ))
    .bind(structure_id)
    .fetch_one(&mut **tx)
    .await?;

    Ok(exists)
}

pub async fn get_all_structures(
    tx: &mut Transaction<'_, Postgres>,
) -> Result<Vec<SalaryStructure>, sqlx::Error> {
    let structures = sqlx::query_as::<_, SalaryStructure>(&sql(r#"
        SELECT
            id,
            name,
            country,
            created_at,
            updated_at
        FROM
            salary_structures
        ORDER BY
            id
    "#))
    .fetch_all(&mut **tx)
    .await?;

    Ok(structures)
}

pub async fn get_components_for_structure(
    tx: &mut Transaction<'_, Postgres>,
    structure_id: i32,
) -> Result<Vec<CompensationComponent>, sqlx::Error> {
    let components = sqlx::query_as::<_, CompensationComponent>(&sql(r#"
        SELECT
            id,
            structure_id,
            name,
            type,
            rule_type
        FROM
            compensation_components
        WHERE
            structure_id = ?
        ORDER BY
            id
    "#))
    .bind(structure_id)
    .fetch_all(&mut **tx)
    .await?;

    Ok(components)
}

pub async fn get_components_for_structures(
    tx: &mut Transaction<'_, Postgres>,
    structure_ids: &[i32],
) -> Result<Vec<CompensationComponent>, sqlx::Error> {
    let components = sqlx::query_as::<_, CompensationComponent>(&sql(r#"
        SELECT
            id,
            structure_id,
            name,
            type,
            rule_type
        FROM
            compensation_components
        WHERE
            structure_id = ANY(?)
        ORDER BY
            structure_id,
            id
    "#))
    .bind(structure_ids)
    .fetch_all(&mut **tx)
    .await?;

    Ok(components)
}

pub async fn update_structure(
    tx: &mut Transaction<'_, Postgres>,
    structure_id: i32,
    name: &str,
    country: Country,
) -> Result<Option<SalaryStructure>, sqlx::Error> {
    let structure = sqlx::query_as::<_, SalaryStructure>(&sql(r#"
        UPDATE
            salary_structures
        SET
            name = ?,
            country = ?,
            updated_at = now()
        WHERE
            id = ?
        RETURNING
            id,
            name,
            country,
            created_at,
            updated_at
    "#))
    .bind(name)
    .bind(country)
    .bind(structure_id)
    .fetch_optional(&mut **tx)
    .await?;

    Ok(structure)
}

pub async fn delete_components_for_structure(
    tx: &mut Transaction<'_, Postgres>,
    structure_id: i32,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(&sql(
        "DELETE FROM compensation_components WHERE structure_id = ?",
    ))
    .bind(structure_id)
    .execute(&mut **tx)
    .await?;

    Ok(result.rows_affected())
}

/// Components go with the structure through `ON DELETE CASCADE`.
pub async fn delete_structure(
    tx: &mut Transaction<'_, Postgres>,
    structure_id: i32,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(&sql("DELETE FROM salary_structures WHERE id = ?"))
        .bind(structure_id)
        .execute(&mut **tx)
        .await?;

    Ok(result.rows_affected() > 0)
}
