//! Query-style entry point.
//!
//! Every call proceeds whether or not its credential verifies: the context
//! builder degrades bad tokens to an anonymous caller, and each resolver
//! decides what an anonymous caller may do. Replies are always HTTP 200
//! with `data` and `errors`, except for bodies that do not parse.
use super::*;
use bks_auth::Context;
use bks_auth::Crypto;
use bks_auth::Inbound;
use bks_auth::LoginRequest;
use bks_auth::RegisterRequest;
use bks_library::Book;
use bks_library::Library;
use actix_web::HttpRequest;
use actix_web::HttpResponse;
use actix_web::web;
use serde::Deserialize;
use serde::Serialize;

mod resolvers;

/// One operation per call. Unknown envelope keys such as `token` are ignored.
#[derive(Debug, Deserialize)]
#[serde(tag = "operation", content = "variables", rename_all = "camelCase")]
pub enum Operation {
    Me,
    Login(LoginRequest),
    AddUser(RegisterRequest),
    #[serde(rename_all = "camelCase")]
    SaveBook {
        book_data: Book,
    },
    #[serde(rename_all = "camelCase")]
    RemoveBook {
        book_id: String,
    },
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Me => "me",
            Self::Login(_) => "login",
            Self::AddUser(_) => "addUser",
            Self::SaveBook { .. } => "saveBook",
            Self::RemoveBook { .. } => "removeBook",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Reply {
    data: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    errors: Vec<Problem>,
}

#[derive(Debug, Serialize)]
struct Problem {
    message: String,
    extensions: Extensions,
}

#[derive(Debug, Serialize)]
struct Extensions {
    code: &'static str,
}

impl Reply {
    fn success(name: &str, value: serde_json::Value) -> Self {
        Self {
            data: Some(serde_json::Value::Object(serde_json::Map::from_iter([(
                name.to_string(),
                value,
            )]))),
            errors: Vec::new(),
        }
    }
    fn failure(fault: &Fault) -> Self {
        Self {
            data: None,
            errors: vec![Problem {
                message: fault.message(),
                extensions: Extensions { code: fault.code() },
            }],
        }
    }
}

pub async fn execute(
    req: HttpRequest,
    body: web::Bytes,
    crypto: web::Data<Crypto>,
    library: web::Data<Library>,
) -> HttpResponse {
    let context = Context::build(&crypto, &Inbound::of(&req, &body[..]));
    let operation = match serde_json::from_slice::<Operation>(&body) {
        Ok(operation) => operation,
        Err(e) => return HttpResponse::BadRequest().json(Reply::failure(&Fault::from(e))),
    };
    let name = operation.name();
    match resolvers::resolve(operation, &context, &library, &crypto).await {
        Ok(value) => HttpResponse::Ok().json(Reply::success(name, value)),
        Err(fault) => {
            log::debug!("{} failed: {}", name, fault);
            HttpResponse::Ok().json(Reply::failure(&fault))
        }
    }
}
