pub mod get_portfolio;

pub use get_portfolio::{get_portfolio_handler, get_portfolio_page_handler};
