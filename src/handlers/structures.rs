use actix_web::{
    HttpRequest, HttpResponse, Result,
    web::{Data, Json, Path},
};

use crate::{
    database::models::SalaryStructureInput, middleware::RequestIdExt,
    services::SalaryStructureService,
};

pub async fn create_structure(
    req: HttpRequest,
    service: Data<SalaryStructureService>,
    input: Json<SalaryStructureInput>,
) -> Result<HttpResponse> {
    let structure = service.create(input.into_inner()).await?;
    log::info!(
        "[{}] Created salary structure {}",
        req.correlation_id(),
        structure.structure.id
    );
    Ok(HttpResponse::Created().json(structure))
}

pub async fn get_structures(service: Data<SalaryStructureService>) -> Result<HttpResponse> {
    let structures = service.list_all().await?;
    Ok(HttpResponse::Ok().json(structures))
}

pub async fn get_structure(
    service: Data<SalaryStructureService>,
    path: Path<i32>,
) -> Result<HttpResponse> {
    let structure = service.get_by_id(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(structure))
}

pub async fn update_structure(
    req: HttpRequest,
    service: Data<SalaryStructureService>,
    path: Path<i32>,
    input: Json<SalaryStructureInput>,
) -> Result<HttpResponse> {
    let structure = service
        .update(path.into_inner(), input.into_inner())
        .await?;
    log::info!(
        "[{}] Updated salary structure {}",
        req.correlation_id(),
        structure.structure.id
    );
    Ok(HttpResponse::Ok().json(structure))
}

pub async fn delete_structure(
    req: HttpRequest,
    service: Data<SalaryStructureService>,
    path: Path<i32>,
) -> Result<HttpResponse> {
    let id = path.into_inner();
    service.delete(id).await?;
    log::info!("[{}] Deleted salary structure {}", req.correlation_id(), id);
    Ok(HttpResponse::NoContent().finish())
}
