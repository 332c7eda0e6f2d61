use actix_web::{
    HttpRequest, HttpResponse, Result,
    web::{Data, Json, Path},
};

use crate::{
    database::models::EmployeeCompensationInput, middleware::RequestIdExt,
    services::EmployeeCompensationService,
};

pub async fn assign_compensation(
    req: HttpRequest,
    service: Data<EmployeeCompensationService>,
    path: Path<String>,
    input: Json<EmployeeCompensationInput>,
) -> Result<HttpResponse> {
    let employee_id = path.into_inner();
    let compensation = service.assign(&employee_id, input.into_inner()).await?;
    log::info!(
        "[{}] Assigned compensation record {} to employee {}",
        req.correlation_id(),
        compensation.compensation.id,
        employee_id
    );
    Ok(HttpResponse::Created().json(compensation))
}

pub async fn get_compensation(
    service: Data<EmployeeCompensationService>,
    path: Path<String>,
) -> Result<HttpResponse> {
    let employee_id = path.into_inner();
    let records = service.get(&employee_id).await?;
    Ok(HttpResponse::Ok().json(records))
}

pub async fn update_compensation(
    req: HttpRequest,
    service: Data<EmployeeCompensationService>,
    path: Path<String>,
    input: Json<EmployeeCompensationInput>,
) -> Result<HttpResponse> {
    let employee_id = path.into_inner();
    let compensation = service
        .update_latest(&employee_id, input.into_inner())
        .await?;
    log::info!(
        "[{}] Updated compensation record {} for employee {}",
        req.correlation_id(),
        compensation.compensation.id,
        employee_id
    );
    Ok(HttpResponse::Ok().json(compensation))
}
