use super::*;
use actix_web::FromRequest;
use actix_web::HttpMessage;
use actix_web::HttpRequest;
use actix_web::HttpResponse;
use actix_web::ResponseError;
use actix_web::body::EitherBody;
use actix_web::body::MessageBody;
use actix_web::dev::Payload;
use actix_web::dev::ServiceRequest;
use actix_web::dev::ServiceResponse;
use actix_web::http::StatusCode;
use actix_web::middleware::Next;
use actix_web::web;
use std::future::Ready;

impl<'a> Inbound<'a> {
    /// Token sources of an actix request whose body has already been buffered.
    pub fn of(req: &'a HttpRequest, body: &'a [u8]) -> Self {
        Self::new(
            body,
            req.query_string(),
            req.headers()
                .get(actix_web::http::header::AUTHORIZATION)
                .and_then(|h| h.to_str().ok()),
        )
    }
}

impl ResponseError for AuthError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Signing(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::UNAUTHORIZED,
        }
    }
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .json(serde_json::json!({ "message": self.message() }))
    }
}

/// Required-auth gate for a scope, used with `actix_web::middleware::from_fn`.
///
/// Rejected calls get a 401 and never reach the handler. Accepted calls
/// carry an [`Identity`] in request extensions, readable through [`Auth`].
/// The body is buffered to look for a token and handed back intact.
pub async fn guard<B>(
    mut req: ServiceRequest,
    next: Next<B>,
) -> Result<ServiceResponse<EitherBody<B>>, actix_web::Error>
where
    B: MessageBody + 'static,
{
    let crypto = req
        .app_data::<web::Data<Crypto>>()
        .cloned()
        .ok_or_else(|| actix_web::error::ErrorInternalServerError("token service not configured"))?;
    let body = req.extract::<web::Bytes>().await?;
    let outcome = crypto
        .authenticate(&Inbound::of(req.request(), &body[..]), OnFailure::Reject)
        .and_then(|identity| identity.ok_or(AuthError::Missing));
    match outcome {
        Err(e) => {
            log::debug!("rejected {} {}: {}", req.method(), req.path(), e);
            let response = e.error_response();
            Ok(req.into_response(response).map_into_right_body())
        }
        Ok(identity) => {
            log::debug!("authenticated {} for {}", identity.username(), req.path());
            let (_, mut payload) = actix_http::h1::Payload::create(true);
            payload.unread_data(body);
            req.set_payload(payload.into());
            req.extensions_mut().insert(identity);
            next.call(req).await.map(ServiceResponse::map_into_left_body)
        }
    }
}

/// Identity attached by [`guard`]. Outside a guarded scope it fails with 401.
pub struct Auth(pub Identity);

impl Auth {
    pub fn identity(&self) -> &Identity {
        &self.0
    }
}

impl FromRequest for Auth {
    type Error = AuthError;
    type Future = Ready<Result<Self, Self::Error>>;
    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        std::future::ready(
            req.extensions()
                .get::<Identity>()
                .cloned()
                .map(Auth)
                .ok_or(AuthError::Missing),
        )
    }
}
