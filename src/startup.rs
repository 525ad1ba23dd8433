use std::net::TcpListener;

use actix_files::Files;
use actix_web::{dev::Server, middleware::Logger, web, App, HttpServer};

use crate::{
    routes::{api_route, default_route, search_route},
    services::TavilyClient,
};

pub fn run(listener: TcpListener, tavily_client: TavilyClient) -> Result<Server, std::io::Error> {
    let tavily_client = web::Data::new(tavily_client);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .service(Files::new("/static", "./templates/static").prefer_utf8(true))
            .service(default_route::default)
            .service(search_route::search_page)
            .service(search_route::search)
            .service(web::scope("/api").service(api_route::company_info))
            .app_data(tavily_client.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
