use std::collections::HashMap;

use sqlx::PgPool;

use crate::database::{
    models::{CompensationComponent, SalaryStructureInput, SalaryStructureWithComponents},
    repositories::structure as structure_repo,
    transaction::DatabaseTransaction,
};
use crate::error::AppError;

const STRUCTURE_NOT_FOUND: &str = "Salary structure not found";

/// Salary structures and their nested component lists.
#[derive(Clone)]
pub struct SalaryStructureService {
    pool: PgPool,
}

impl SalaryStructureService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        input: SalaryStructureInput,
    ) -> Result<SalaryStructureWithComponents, AppError> {
        let created = DatabaseTransaction::run(&self.pool, |tx| {
            Box::pin(async move {
                let structure =
                    structure_repo::insert_structure(tx, &input.name, input.country).await?;
                let components =
                    structure_repo::insert_components(tx, structure.id, &input.components)
                        .await?;

                Ok(SalaryStructureWithComponents::new(structure, components))
            })
        })
        .await?;

        log::info!(
            "Created salary structure {} ('{}') with {} components",
            created.structure.id,
            created.structure.name,
            created.components.len()
        );

        Ok(created)
    }

    /// Every structure with its components.
    ///
    /// An empty store is reported as `NotFound` rather than an empty list.
    pub async fn list_all(&self) -> Result<Vec<SalaryStructureWithComponents>, AppError> {
        DatabaseTransaction::run(&self.pool, |tx| {
            Box::pin(async move {
                let structures = structure_repo::get_all_structures(tx).await?;
                if structures.is_empty() {
                    return Err(AppError::not_found("No salary structures found"));
                }

                let ids: Vec<i32> = structures.iter().map(|s| s.id).collect();
                let mut components_by_structure: HashMap<i32, Vec<CompensationComponent>> =
                    HashMap::new();
                for component in structure_repo::get_components_for_structures(tx, &ids).await? {
                    components_by_structure
                        .entry(component.structure_id)
                        .or_default()
                        .push(component);
                }

                Ok(structures
                    .into_iter()
                    .map(|structure| {
                        let components = components_by_structure
                            .remove(&structure.id)
                            .unwrap_or_default();
                        SalaryStructureWithComponents::new(structure, components)
                    })
                    .collect())
            })
        })
        .await
    }

    pub async fn get_by_id(
        &self,
        structure_id: i32,
    ) -> Result<SalaryStructureWithComponents, AppError> {
        DatabaseTransaction::run(&self.pool, |tx| {
            Box::pin(async move {
                let structure = structure_repo::find_structure_by_id(tx, structure_id)
                    .await?
                    .ok_or_else(|| AppError::not_found(STRUCTURE_NOT_FOUND))?;
                let components =
                    structure_repo::get_components_for_structure(tx, structure_id).await?;

                Ok(SalaryStructureWithComponents::new(structure, components))
            })
        })
        .await
    }

    /// Overwrite name and country, then replace the whole component list.
    ///
    /// Replacement components get fresh ids; values recorded against the old
    /// ids are left untouched.
    pub async fn update(
        &self,
        structure_id: i32,
        input: SalaryStructureInput,
    ) -> Result<SalaryStructureWithComponents, AppError> {
        let updated = DatabaseTransaction::run(&self.pool, |tx| {
            Box::pin(async move {
                let structure =
                    structure_repo::update_structure(tx, structure_id, &input.name, input.country)
                        .await?
                        .ok_or_else(|| AppError::not_found(STRUCTURE_NOT_FOUND))?;

                let removed =
                    structure_repo::delete_components_for_structure(tx, structure_id).await?;
                log::debug!(
                    "Removed {} components from salary structure {}",
                    removed,
                    structure_id
                );

                let components =
                    structure_repo::insert_components(tx, structure_id, &input.components)
                        .await?;

                Ok(SalaryStructureWithComponents::new(structure, components))
            })
        })
        .await?;

        log::info!(
            "Updated salary structure {} with {} components",
            structure_id,
            updated.components.len()
        );

        Ok(updated)
    }

    pub async fn delete(&self, structure_id: i32) -> Result<(), AppError> {
        DatabaseTransaction::run(&self.pool, |tx| {
            Box::pin(async move {
                if !structure_repo::delete_structure(tx, structure_id).await? {
                    return Err(AppError::not_found(STRUCTURE_NOT_FOUND));
                }
                Ok(())
            })
        })
        .await?;

        log::info!("Deleted salary structure {}", structure_id);

        Ok(())
    }
}
