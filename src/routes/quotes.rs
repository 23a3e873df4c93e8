use actix_web::{web, HttpResponse};

use crate::error::ApiError;
use crate::models::bookings::{DateRange, QuoteInput};
use crate::routes::catalog::parse_object_id;
use crate::state::AppState;

/*
    POST /api/quotes
*/
pub async fn create_quote(
    state: web::Data<AppState>,
    input: web::Json<QuoteInput>,
) -> Result<HttpResponse, ApiError> {
    let input = input.into_inner();
    let id = parse_object_id(&input.item_id)?;

    let item = state
        .store
        .find_bookable(input.kind, id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("{} not found", input.kind)))?;

    let range = DateRange::from_parts(input.start, input.end);
    let quote = state.pricing.quote(&item, range, input.quantity)?;

    Ok(HttpResponse::Ok().json(quote))
}
