pub mod api_route;
pub mod default_route;
pub mod search_route;
