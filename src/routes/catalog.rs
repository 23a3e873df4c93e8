use actix_web::{web, HttpResponse};
use mongodb::bson::oid::ObjectId;
use serde::Serialize;

use crate::error::ApiError;
use crate::models::catalog::{CatalogParams, Listable};
use crate::services::catalog_service::CatalogController;
use crate::state::AppState;

const MAX_PAGE_SIZE: usize = 50;

pub(crate) fn parse_object_id(raw: &str) -> Result<ObjectId, ApiError> {
    ObjectId::parse_str(raw).map_err(|_| ApiError::BadRequest("Invalid ID".to_string()))
}

fn render_page<T>(
    state: &AppState,
    items: Vec<T>,
    params: &CatalogParams,
) -> Result<HttpResponse, ApiError>
where
    T: Listable + Clone + Serialize,
{
    let query = params
        .to_query()
        .map_err(|err| ApiError::BadRequest(err.to_string()))?;

    let controller = match params.page_size {
        Some(size) => CatalogController::new(size.min(MAX_PAGE_SIZE)),
        None => state.catalog,
    };

    Ok(HttpResponse::Ok().json(controller.visible_page(&items, &query)))
}

fn found<T: Serialize>(item: Option<T>, what: &str) -> Result<HttpResponse, ApiError> {
    match item {
        Some(item) => Ok(HttpResponse::Ok().json(item)),
        None => Err(ApiError::NotFound(format!("{} not found", what))),
    }
}

/*
    /api/destinations
*/
pub async fn get_destinations(
    state: web::Data<AppState>,
    params: web::Query<CatalogParams>,
) -> Result<HttpResponse, ApiError> {
    let items = state.store.destinations().await?;
    render_page(&state, items, &params)
}

/*
    /api/destinations/{id}
*/
pub async fn get_destination(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = parse_object_id(&path)?;
    found(state.store.destination(id).await?, "Destination")
}

/*
    /api/accommodations
*/
pub async fn get_accommodations(
    state: web::Data<AppState>,
    params: web::Query<CatalogParams>,
) -> Result<HttpResponse, ApiError> {
    let items = state.store.accommodations().await?;
    render_page(&state, items, &params)
}

/*
    /api/accommodations/{id}
*/
pub async fn get_accommodation(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = parse_object_id(&path)?;
    found(state.store.accommodation(id).await?, "Accommodation")
}

/*
    /api/vehicles
*/
pub async fn get_vehicles(
    state: web::Data<AppState>,
    params: web::Query<CatalogParams>,
) -> Result<HttpResponse, ApiError> {
    let items = state.store.vehicles().await?;
    render_page(&state, items, &params)
}

/*
    /api/vehicles/{id}
*/
pub async fn get_vehicle(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = parse_object_id(&path)?;
    found(state.store.vehicle(id).await?, "Vehicle")
}

/*
    /api/guides
*/
pub async fn get_tour_guides(
    state: web::Data<AppState>,
    params: web::Query<CatalogParams>,
) -> Result<HttpResponse, ApiError> {
    let items = state.store.tour_guides().await?;
    render_page(&state, items, &params)
}

/*
    /api/guides/{id}
*/
pub async fn get_tour_guide(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = parse_object_id(&path)?;
    found(state.store.tour_guide(id).await?, "Tour guide")
}
