//! REST resource layer: the resource trait, attribute storage, query
//! construction, and hypermedia links.

mod data;
mod links;
mod query;
mod resource;
pub mod resources;

pub use data::DataBag;
pub use links::{Link, Links};
pub use query::{build_query, Filters, Pagination};
pub use resource::ApiResource;
