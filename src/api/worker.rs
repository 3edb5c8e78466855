// Background request runner: one short-lived thread per request

use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex};
use std::thread;
use tracing::{debug, info_span};

use super::{ApiClient, ApiError, Article, ArticleUpdate, Credentials, NewArticle};

/// A single outbound call, built by the UI from form values and the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiRequest {
    Login(Credentials),
    Register(Credentials),
    LoadArticles,
    CreateArticle {
        token: Option<String>,
        article: NewArticle,
    },
    UpdateArticle {
        token: Option<String>,
        id: String,
        update: ArticleUpdate,
    },
    DeleteArticle {
        token: Option<String>,
        id: String,
    },
}

impl ApiRequest {
    pub fn name(&self) -> &'static str {
        match self {
            ApiRequest::Login(_) => "login",
            ApiRequest::Register(_) => "register",
            ApiRequest::LoadArticles => "load_articles",
            ApiRequest::CreateArticle { .. } => "create_article",
            ApiRequest::UpdateArticle { .. } => "update_article",
            ApiRequest::DeleteArticle { .. } => "delete_article",
        }
    }
}

/// Completion posted back to the UI thread
#[derive(Debug)]
pub enum ApiMessage {
    LoggedIn(Result<String, ApiError>),
    Registered(Result<(), ApiError>),
    ArticlesLoaded(Result<Vec<Article>, ApiError>),
    ArticleCreated(Result<Article, ApiError>),
    ArticleUpdated {
        id: String,
        result: Result<Article, ApiError>,
    },
    ArticleDeleted {
        id: String,
        result: Result<(), ApiError>,
    },
}

/// Run a request to completion on the current thread
pub fn execute(client: &ApiClient, request: ApiRequest) -> ApiMessage {
    match request {
        ApiRequest::Login(credentials) => ApiMessage::LoggedIn(client.login(&credentials)),
        ApiRequest::Register(credentials) => {
            ApiMessage::Registered(client.register(&credentials))
        }
        ApiRequest::LoadArticles => ApiMessage::ArticlesLoaded(client.list_articles()),
        ApiRequest::CreateArticle { token, article } => {
            ApiMessage::ArticleCreated(client.create_article(token.as_deref(), &article))
        }
        ApiRequest::UpdateArticle { token, id, update } => {
            let result = client.update_article(token.as_deref(), &id, &update);
            ApiMessage::ArticleUpdated { id, result }
        }
        ApiRequest::DeleteArticle { token, id } => {
            let result = client.delete_article(token.as_deref(), &id);
            ApiMessage::ArticleDeleted { id, result }
        }
    }
}

/// Dispatches requests to worker threads and collects their completions
pub struct ApiWorker {
    client: ApiClient,
    tx: Sender<ApiMessage>,
    rx: Receiver<ApiMessage>,
    in_flight: Arc<Mutex<usize>>,
}

impl ApiWorker {
    pub fn new(client: ApiClient) -> Self {
        let (tx, rx) = mpsc::channel();

        Self {
            client,
            tx,
            rx,
            in_flight: Arc::new(Mutex::new(0)),
        }
    }

    /// Get the receiver for completed requests
    pub fn receiver(&self) -> &Receiver<ApiMessage> {
        &self.rx
    }

    /// Start a request in the background. Never blocks on the network.
    pub fn submit(&self, request: ApiRequest) {
        let client = self.client.clone();
        let tx = self.tx.clone();
        let in_flight = self.in_flight.clone();

        {
            let mut count = in_flight.lock().unwrap_or_else(|e| e.into_inner());
            *count += 1;
        }

        thread::spawn(move || {
            let span = info_span!("api_request", kind = request.name());
            let _guard = span.enter();

            let message = execute(&client, request);
            debug!("request finished");

            {
                let mut count = in_flight.lock().unwrap_or_else(|e| e.into_inner());
                *count = count.saturating_sub(1);
            }

            // Receiver gone means the UI is shutting down
            let _ = tx.send(message);
        });
    }

    /// Number of requests still waiting on the server
    pub fn in_flight(&self) -> usize {
        *self.in_flight.lock().unwrap_or_else(|e| e.into_inner())
    }
}
