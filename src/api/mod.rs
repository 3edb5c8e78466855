// REST API access - independent of UI

pub mod client;
pub mod error;
pub mod types;
pub mod worker;

pub use client::ApiClient;
pub use error::ApiError;
pub use types::{Article, ArticleUpdate, Credentials, NewArticle};
pub use worker::{ApiMessage, ApiRequest, ApiWorker};
