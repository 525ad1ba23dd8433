use thiserror::Error;

/// Separates company name from business number in the single input field.
/// Matches what a spreadsheet copy of two adjacent cells produces.
pub const INPUT_DELIMITER: char = '\t';

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("기업명과 사업자번호를 입력해주세요.")]
    Empty,
    #[error("입력 형식이 올바르지 않습니다. 기업명과 사업자번호를 탭으로 구분하여 입력해주세요.")]
    Malformed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyQuery {
    pub company_name: String,
    pub business_number: String,
}

impl CompanyQuery {
    pub fn new(company_name: &str, business_number: &str) -> Self {
        CompanyQuery {
            company_name: company_name.to_string(),
            business_number: business_number.to_string(),
        }
    }

    /// Both parts are kept verbatim, whitespace included.
    pub fn parse(input: &str) -> Result<Self, InputError> {
        if input.is_empty() {
            return Err(InputError::Empty);
        }

        let mut parts = input.split(INPUT_DELIMITER);
        match (parts.next(), parts.next(), parts.next()) {
            (Some(company_name), Some(business_number), None) => {
                Ok(CompanyQuery::new(company_name, business_number))
            }
            _ => Err(InputError::Malformed),
        }
    }
}

pub fn build_search_query(company_name: &str, business_number: &str) -> String {
    format!(
        r#""{}{}{}"에 대한 기업의 최대한 상세한 설명(핵심 사업, 제품, 주력상품, 고객층, 미션, 비전, 포트폴리오, 최근 중요 홍보기사내용)과 홈페이지 URL. 설명은 description 키에, 홈페이지 URL은 url 키에 담아 json format으로 정리할 것."#,
        company_name, INPUT_DELIMITER, business_number
    )
}
