pub mod company_lookup;
pub mod tavily_client;

pub use company_lookup::*;
pub use tavily_client::*;
