use actix_web::{get, http::header::ContentType, post, web, HttpResponse};
use askama::Template;
use serde::Deserialize;
use url::Url;

use crate::{
    domain::{CompanyInfo, InputError},
    services::{lookup_company, LookupError, TavilyClient},
};

pub const SEARCH_UNAVAILABLE: &str = "검색 서비스를 사용할 수 없습니다. 잠시 후 다시 시도해주세요.";

#[derive(Template, Default)]
#[template(path = "search.html")]
struct SearchTemplate {
    user_input: String,
    warning: Option<String>,
    error: Option<String>,
    company: Option<CompanyView>,
}

struct CompanyView {
    company_name: String,
    business_number: String,
    website: String,
    homepage_link: Option<String>,
    description_lines: Vec<String>,
}

impl From<CompanyInfo> for CompanyView {
    fn from(value: CompanyInfo) -> Self {
        Self {
            homepage_link: homepage_link(&value.website),
            description_lines: value.description.lines().map(|l| l.to_string()).collect(),
            company_name: value.company_name,
            business_number: value.business_number,
            website: value.website,
        }
    }
}

/// Only http(s) URLs are rendered as links, the sentinel and prose stay text.
fn homepage_link(website: &str) -> Option<String> {
    match Url::parse(website) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => Some(website.to_string()),
        _ => None,
    }
}

fn render(template: SearchTemplate) -> HttpResponse {
    match template.render() {
        Ok(html) => HttpResponse::Ok()
            .content_type(ContentType::html())
            .body(html),
        Err(e) => {
            log::error!("Failed to render search page: {:?}", e);
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[derive(Deserialize)]
struct SearchForm {
    #[serde(default)]
    user_input: String,
}

#[get("/search")]
async fn search_page() -> HttpResponse {
    render(SearchTemplate::default())
}

#[post("/search")]
async fn search(
    tavily_client: web::Data<TavilyClient>,
    form: web::Form<SearchForm>,
) -> HttpResponse {
    let user_input = form.into_inner().user_input;

    let mut template = SearchTemplate {
        user_input: user_input.clone(),
        ..Default::default()
    };

    match lookup_company(&tavily_client, &user_input).await {
        Ok(company_info) => template.company = Some(company_info.into()),
        Err(LookupError::Input(e @ InputError::Empty)) => template.warning = Some(e.to_string()),
        Err(LookupError::Input(e)) => template.error = Some(e.to_string()),
        Err(LookupError::Search(e)) => {
            log::error!("Company lookup failed for {:?}: {}", user_input, e);
            template.error = Some(SEARCH_UNAVAILABLE.to_string());
        }
    }

    render(template)
}
