//! Minimal client for the DatoCMS Content Delivery API.
//!
//! Only what the integrations marketplace page needs: one GraphQL query, the
//! fragments it is composed of and the records it returns.

mod client;
pub mod models;
pub mod query;

pub use client::{
    Client, ClientError, ClientResult, Credentials, GraphQLErrorMessage, GraphQLResponse,
    DEFAULT_ENDPOINT, PREVIEW_ENDPOINT,
};
pub use models::IntegrationsPageQuery;
pub use query::{integrations_page_query, QueryDocument};
