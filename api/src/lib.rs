mod mutation;
mod query;

use rocket_okapi::openapi_get_routes;

#[macro_use]
extern crate rocket;

use dotenvy::dotenv;
use mutation::*;
use query::*;
use rocket::{Build, Rocket};
use rocket_cors::{AllowedOrigins, CorsOptions};

use rocket_okapi::rapidoc::{make_rapidoc, GeneralConfig, HideShowConfig, RapiDocConfig};
use rocket_okapi::settings::UrlObject;
use rocket_okapi::swagger_ui::{make_swagger_ui, SwaggerUIConfig};
use service::SgtClient;

#[catch(404)]
fn general_not_found() -> &'static str {
    "Api endpoint not found"
}

pub fn routes() -> Vec<rocket::Route> {
    openapi_get_routes![sgt_action, trigger_sync, sync_history]
}

pub async fn launch() -> Rocket<Build> {
    dotenv().ok();

    let db =
        sea_orm::Database::connect(std::env::var("DATABASE_URL").expect("DATABASE_URL not set"))
            .await
            .unwrap();
    let sgt = SgtClient::from_env().expect("SGT credentials not configured");

    // The dashboard is served from its own origin.
    let cors = CorsOptions {
        allowed_origins: AllowedOrigins::all(),
        ..Default::default()
    }
    .to_cors()
    .expect("valid cors configuration");

    rocket::build()
        .manage(db)
        .manage(sgt)
        .attach(cors)
        .mount("/api", routes())
        .mount(
            "/api/swagger",
            make_swagger_ui(&SwaggerUIConfig {
                url: "../openapi.json".to_owned(),
                ..Default::default()
            }),
        )
        .mount(
            "/api/",
            make_rapidoc(&RapiDocConfig {
                general: GeneralConfig {
                    spec_urls: vec![UrlObject::new("General", "./openapi.json")],
                    ..Default::default()
                },
                hide_show: HideShowConfig {
                    allow_spec_url_load: false,
                    allow_spec_file_load: false,
                    ..Default::default()
                },
                ..Default::default()
            }),
        )
        .register("/api", catchers![general_not_found])
}
