use std::future::{ready, Ready};

use actix_web::{
    dev::Payload, error::ErrorUnauthorized, Error, FromRequest, HttpMessage, HttpRequest,
};

use crate::middleware::auth::Claims;
use crate::models::account::Role;

/// Identity of the caller, injected into handlers that need it.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionContext {
    pub user_id: String,
    pub email: String,
    pub role: Role,
}

impl From<Claims> for SessionContext {
    fn from(claims: Claims) -> Self {
        Self {
            role: Role::from_claim(claims.role.as_deref()),
            user_id: claims.user_id,
            email: claims.sub,
        }
    }
}

impl FromRequest for SessionContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        if let Some(session) = req.extensions().get::<SessionContext>() {
            ready(Ok(session.clone()))
        } else {
            ready(Err(ErrorUnauthorized("User not authenticated")))
        }
    }
}
