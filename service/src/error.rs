use rocket::response::Responder;
use rocket::serde::{Deserialize, Serialize};
use rocket_okapi::gen::OpenApiGenerator;
use rocket_okapi::okapi::openapi3::Responses;
use rocket_okapi::okapi::schemars;
use rocket_okapi::okapi::schemars::{JsonSchema, Map};
use rocket_okapi::response::OpenApiResponderInner;

#[derive(Serialize, Deserialize, JsonSchema, Debug, Responder)]
pub enum GenericError {
    #[response(status = 502)]
    SgtUnavailable(&'static str),
    #[response(status = 502)]
    SgtMalformed(&'static str),
    #[response(status = 401)]
    SgtAuthFailed(&'static str),
    #[response(status = 500)]
    NotConfigured(&'static str),
    #[response(status = 500)]
    UnknownError(&'static str),
    #[response(status = 404)]
    NotFound(&'static str),
    #[response(status = 400)]
    BadRequest(&'static str),
}

impl GenericError {
    pub fn message(&self) -> &'static str {
        match self {
            Self::SgtUnavailable(m)
            | Self::SgtMalformed(m)
            | Self::SgtAuthFailed(m)
            | Self::NotConfigured(m)
            | Self::UnknownError(m)
            | Self::NotFound(m)
            | Self::BadRequest(m) => m,
        }
    }
}

impl OpenApiResponderInner for GenericError {
    fn responses(_: &mut OpenApiGenerator) -> rocket_okapi::Result<Responses> {
        use rocket_okapi::okapi::openapi3::{RefOr, Response as OpenApiResponse};

        let mut responses = Map::new();
        responses.insert(
            "400".to_string(),
            RefOr::Object(OpenApiResponse {
                description: "\
                # [400 Bad Request](https://developer.mozilla.org/en-US/docs/Web/HTTP/Status/400)\n\
                The request given is wrongly formatted or data asked could not be fulfilled. \
                "
                .to_string(),
                ..Default::default()
            }),
        );
        responses.insert(
            "404".to_string(),
            RefOr::Object(OpenApiResponse {
                description: "\
                # [404 Not Found](https://developer.mozilla.org/en-US/docs/Web/HTTP/Status/404)\n\
                This response is given when you request a page that does not exists.\
                "
                .to_string(),
                ..Default::default()
            }),
        );
        responses.insert(
            "500".to_string(),
            RefOr::Object(OpenApiResponse {
                description: "\
                # [500 Internal Server Error](https://developer.mozilla.org/en-US/docs/Web/HTTP/Status/500)\n\
                This response is given when something wend wrong on the server. \
                ".to_string(),
                ..Default::default()
            }),
        );
        responses.insert(
            "502".to_string(),
            RefOr::Object(OpenApiResponse {
                description: "\
                # [502 Bad Gateway](https://developer.mozilla.org/en-US/docs/Web/HTTP/Status/502)\n\
                This response is given when the upstream SGT API could not be reached or \
                returned something unusable. \
                ".to_string(),
                ..Default::default()
            }),
        );
        Ok(Responses {
            responses,
            ..Default::default()
        })
    }
}
