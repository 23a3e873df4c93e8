use actix_web::{web, HttpResponse};
use chrono::Utc;
use uuid::Uuid;

use crate::error::ApiError;
use crate::middleware::auth_context::SessionContext;
use crate::models::bookings::{BookingInput, BookingRecord, BookingStatus, DateRange};
use crate::routes::catalog::parse_object_id;
use crate::state::AppState;

/// Largest difference tolerated between the client's total and ours.
const TOTAL_TOLERANCE: f64 = 0.01;

/*
    POST /api/bookings
*/
pub async fn create_booking(
    state: web::Data<AppState>,
    input: web::Json<BookingInput>,
    session: SessionContext,
) -> Result<HttpResponse, ApiError> {
    let input = input.into_inner();
    let item_id = parse_object_id(&input.item_id)?;

    let item = state
        .store
        .find_bookable(input.kind, item_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("{} not found", input.kind)))?;

    // The client computes the same total; ours is the one that counts.
    let range = DateRange::new(input.start, input.end);
    let quote = state.pricing.quote(&item, Some(range), input.quantity)?;

    if !input.total.is_finite() || (input.total - quote.total).abs() > TOTAL_TOLERANCE {
        log::warn!(
            "Booking total mismatch for user {}: submitted {}, quoted {}",
            session.user_id,
            input.total,
            quote.total
        );
        return Err(ApiError::TotalMismatch {
            submitted: input.total,
            quoted: quote.total,
        });
    }

    let booking = BookingRecord {
        id: None,
        reference: Uuid::new_v4().to_string(),
        user_id: session.user_id.clone(),
        item_id,
        kind: input.kind,
        start: input.start,
        end: input.end,
        quantity: quote.quantity,
        unit_rate: quote.unit_rate,
        total: quote.total,
        status: BookingStatus::Pending,
        created_at: Some(Utc::now()),
    };

    let booking = state.store.insert_booking(booking).await?;
    log::info!(
        "Booking {} created for user {} ({} {})",
        booking.reference,
        session.user_id,
        booking.kind,
        booking.item_id
    );

    Ok(HttpResponse::Created().json(booking))
}

/*
    GET /api/account/bookings
*/
pub async fn get_my_bookings(
    state: web::Data<AppState>,
    session: SessionContext,
) -> Result<HttpResponse, ApiError> {
    let bookings = state.store.bookings_for_user(&session.user_id).await?;
    Ok(HttpResponse::Ok().json(bookings))
}
