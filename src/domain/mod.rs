pub mod company_info;
pub mod company_query;
pub mod search_response;

pub use company_info::*;
pub use company_query::*;
pub use search_response::*;
