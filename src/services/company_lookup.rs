use thiserror::Error;

use crate::domain::{build_search_query, extract_company_info, CompanyInfo, CompanyQuery, InputError};

use super::{SearchError, TavilyClient};

#[derive(Debug, Error)]
pub enum LookupError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Search(#[from] SearchError),
}

pub async fn get_company_info(
    tavily_client: &TavilyClient,
    company_name: &str,
    business_number: &str,
) -> Result<CompanyInfo, SearchError> {
    let query = build_search_query(company_name, business_number);
    let response = tavily_client.search(&query).await?;

    Ok(extract_company_info(
        &response,
        company_name,
        business_number,
    ))
}

/// Parses the raw `name<TAB>number` input and looks the company up.
pub async fn lookup_company(
    tavily_client: &TavilyClient,
    user_input: &str,
) -> Result<CompanyInfo, LookupError> {
    let query = CompanyQuery::parse(user_input)?;

    let company_info =
        get_company_info(tavily_client, &query.company_name, &query.business_number).await?;

    Ok(company_info)
}
