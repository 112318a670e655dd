pub mod catalog;
pub mod featured;
pub mod filter;
pub mod llm;

pub use catalog::Catalog;
pub use featured::{featured_agencies, DEFAULT_FEATURED_LIMIT};
pub use filter::filter_agencies;
pub use llm::{agency_json_schema, llm_agency_response};
