use actix_web::{get, web, HttpResponse};
use serde::Deserialize;
use serde_json::json;

use crate::{
    routes::search_route::SEARCH_UNAVAILABLE,
    services::{get_company_info, TavilyClient},
};

#[derive(Deserialize)]
struct CompanyInfoQuery {
    company_name: String,
    business_number: String,
}

#[get("/company")]
async fn company_info(
    tavily_client: web::Data<TavilyClient>,
    query: web::Query<CompanyInfoQuery>,
) -> HttpResponse {
    match get_company_info(&tavily_client, &query.company_name, &query.business_number).await {
        Ok(company_info) => HttpResponse::Ok().json(company_info),
        Err(e) => {
            log::error!(
                "Company lookup failed for {} ({}): {}",
                query.company_name,
                query.business_number,
                e
            );
            HttpResponse::BadGateway().json(json!({ "error": SEARCH_UNAVAILABLE }))
        }
    }
}
