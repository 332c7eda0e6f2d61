use std::collections::{HashMap, HashSet};

use sqlx::PgPool;

use crate::database::{
    models::{
        EmployeeComponentValue, EmployeeComponentValueInput, EmployeeCompensationInput,
        EmployeeCompensationWithValues,
    },
    repositories::{compensation as compensation_repo, structure as structure_repo},
    transaction::DatabaseTransaction,
};
use crate::error::AppError;

/// Fails with `BadRequest` when `component_id` is not one of the structure's
/// components.
pub fn ensure_component_belongs(
    valid_component_ids: &HashSet<i32>,
    structure_id: i32,
    component_id: i32,
) -> Result<(), AppError> {
    if valid_component_ids.contains(&component_id) {
        Ok(())
    } else {
        Err(AppError::bad_request(format!(
            "Component ID {} does not belong to Structure ID {}",
            component_id, structure_id
        )))
    }
}

/// Checks every submitted value, stopping at the first foreign component.
pub fn validate_component_values(
    valid_component_ids: &HashSet<i32>,
    structure_id: i32,
    values: &[EmployeeComponentValueInput],
) -> Result<(), AppError> {
    values.iter().try_for_each(|value| {
        ensure_component_belongs(valid_component_ids, structure_id, value.component_id)
    })
}

/// Employee compensation records and the component values attached to them.
#[derive(Clone)]
pub struct EmployeeCompensationService {
    pool: PgPool,
}

impl EmployeeCompensationService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Record a new compensation assignment for `path_employee_id`.
    ///
    /// The compensation row is committed before its values are validated, so
    /// a rejected value leaves the record in place without any values.
    pub async fn assign(
        &self,
        path_employee_id: &str,
        input: EmployeeCompensationInput,
    ) -> Result<EmployeeCompensationWithValues, AppError> {
        let EmployeeCompensationInput {
            employee_id,
            structure_id,
            effective_from,
            component_values,
        } = input;
        let path_employee_id = path_employee_id.to_string();

        let compensation = DatabaseTransaction::run(&self.pool, |tx| {
            Box::pin(async move {
                if !structure_repo::structure_exists(tx, structure_id).await? {
                    return Err(AppError::not_found("Salary structure not found"));
                }

                if path_employee_id != employee_id {
                    return Err(AppError::bad_request("Employee ID mismatch"));
                }

                let compensation = compensation_repo::insert_compensation(
                    tx,
                    &employee_id,
                    structure_id,
                    effective_from,
                )
                .await?;

                Ok(compensation)
            })
        })
        .await?;

        let compensation_id = compensation.id;
        let values = DatabaseTransaction::run(&self.pool, |tx| {
            Box::pin(async move {
                let valid_component_ids: HashSet<i32> =
                    structure_repo::get_components_for_structure(tx, structure_id)
                        .await?
                        .into_iter()
                        .map(|component| component.id)
                        .collect();

                let mut values = Vec::with_capacity(component_values.len());
                for value in &component_values {
                    ensure_component_belongs(
                        &valid_component_ids,
                        structure_id,
                        value.component_id,
                    )?;
                    values.push(
                        compensation_repo::insert_component_value(tx, compensation_id, value)
                            .await?,
                    );
                }

                Ok(values)
            })
        })
        .await
        .inspect_err(|e| {
            log::warn!(
                "Compensation record {} kept without component values: {}",
                compensation_id,
                e
            );
        })?;

        log::info!(
            "Assigned structure {} to employee {} effective {} ({} values)",
            structure_id,
            compensation.employee_id,
            compensation.effective_from,
            values.len()
        );

        Ok(EmployeeCompensationWithValues::new(compensation, values))
    }

    /// All compensation records for an employee, oldest row first.
    pub async fn get(
        &self,
        employee_id: &str,
    ) -> Result<Vec<EmployeeCompensationWithValues>, AppError> {
        let employee_id = employee_id.to_string();

        DatabaseTransaction::run(&self.pool, |tx| {
            Box::pin(async move {
                let records = compensation_repo::find_by_employee(tx, &employee_id).await?;
                if records.is_empty() {
                    return Err(AppError::not_found(
                        "Compensation details not found for this employee",
                    ));
                }

                let ids: Vec<i32> = records.iter().map(|r| r.id).collect();
                let mut values_by_record: HashMap<i32, Vec<EmployeeComponentValue>> =
                    HashMap::new();
                for value in compensation_repo::get_values_for_compensations(tx, &ids).await? {
                    values_by_record
                        .entry(value.employee_compensation_id)
                        .or_default()
                        .push(value);
                }

                Ok(records
                    .into_iter()
                    .map(|record| {
                        let values = values_by_record.remove(&record.id).unwrap_or_default();
                        EmployeeCompensationWithValues::new(record, values)
                    })
                    .collect())
            })
        })
        .await
    }

    /// Rewrite the employee's current record in place and replace its values.
    ///
    /// The current record is the one with the latest `effective_from`; no new
    /// dated record is created. Nothing is committed if any check fails.
    pub async fn update_latest(
        &self,
        employee_id: &str,
        input: EmployeeCompensationInput,
    ) -> Result<EmployeeCompensationWithValues, AppError> {
        let employee_id = employee_id.to_string();
        let EmployeeCompensationInput {
            structure_id,
            effective_from,
            component_values,
            ..
        } = input;

        let updated = DatabaseTransaction::run(&self.pool, |tx| {
            Box::pin(async move {
                let latest = compensation_repo::find_latest_for_employee(tx, &employee_id)
                    .await?
                    .ok_or_else(|| {
                        AppError::not_found("No existing compensation record found to update")
                    })?;

                let compensation = compensation_repo::update_compensation(
                    tx,
                    latest.id,
                    structure_id,
                    effective_from,
                )
                .await?;

                if !structure_repo::structure_exists(tx, structure_id).await? {
                    return Err(AppError::not_found("Salary structure not found"));
                }

                let valid_component_ids: HashSet<i32> =
                    structure_repo::get_components_for_structure(tx, structure_id)
                        .await?
                        .into_iter()
                        .map(|component| component.id)
                        .collect();
                validate_component_values(&valid_component_ids, structure_id, &component_values)?;

                compensation_repo::delete_values_for_compensation(tx, compensation.id).await?;

                let mut values = Vec::with_capacity(component_values.len());
                for value in &component_values {
                    values.push(
                        compensation_repo::insert_component_value(tx, compensation.id, value)
                            .await?,
                    );
                }

                Ok(EmployeeCompensationWithValues::new(compensation, values))
            })
        })
        .await?;

        log::info!(
            "Updated compensation record {} for employee {} (effective {})",
            updated.compensation.id,
            updated.compensation.employee_id,
            updated.compensation.effective_from
        );

        Ok(updated)
    }
}
