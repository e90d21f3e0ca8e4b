use std::sync::Arc;

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::middleware::Logger;
use actix_web::web::{Data, JsonConfig};
use actix_web::{App, Error, web};

use crate::{handlers, service};

pub fn create_app(
    coach_service: Arc<service::CoachService>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    App::new()
        .wrap(Logger::default())
        .app_data(Data::from(coach_service))
        .app_data(JsonConfig::default().error_handler(handlers::json_error_handler))
        .route("/", web::get().to(handlers::index))
        .route("/health", web::get().to(handlers::health))
        .route("/ready", web::get().to(handlers::ready))
        .service(
            web::scope("/api")
                .route("/subjects", web::get().to(handlers::subjects))
                .route("/chat", web::post().to(handlers::chat)),
        )
        .default_service(web::to(handlers::not_found))
}
