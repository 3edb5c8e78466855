// Application state management

use crate::api::{ApiRequest, Article, ArticleUpdate, NewArticle};
use crate::articles::ArticleList;
use crate::session::Session;
use crate::ui::focus::{ArticleFocus, LoginFocus, RegisterFocus};
use crate::ui::form::{TextField, validate_all};
use ratatui::widgets::ListState;
use std::time::{Duration, Instant};
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Register,
    List,
}

impl Screen {
    pub fn route(&self) -> &'static str {
        match self {
            Self::Login => "/",
            Self::Register => "/register",
            Self::List => "/list",
        }
    }

    pub fn from_route(route: &str) -> Option<Self> {
        match route.trim() {
            "/" | "" => Some(Self::Login),
            "/register" => Some(Self::Register),
            "/list" => Some(Self::List),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// Transient toast shown over the current screen
#[derive(Debug, Clone)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
    pub shown_at: Instant,
}

impl Notification {
    pub fn is_expired(&self, now: Instant, ttl: Duration) -> bool {
        now.duration_since(self.shown_at) >= ttl
    }
}

pub struct LoginState {
    pub username: TextField,
    pub password: TextField,
    pub focus: LoginFocus,
    pub submitting: bool, // Login request in flight
}

impl Default for LoginState {
    fn default() -> Self {
        Self {
            username: TextField::new("Username", "Username")
                .required("Please enter your username!"),
            password: TextField::new("Password", "Password")
                .masked()
                .required("Please enter your password!"),
            focus: LoginFocus::default(),
            submitting: false,
        }
    }
}

impl LoginState {
    pub fn validate(&mut self) -> bool {
        validate_all(&mut [&mut self.username, &mut self.password])
    }
}

pub struct RegisterState {
    pub username: TextField,
    pub password: TextField,
    pub confirm_password: TextField,
    pub focus: RegisterFocus,
    pub submitting: bool,
}

impl Default for RegisterState {
    fn default() -> Self {
        Self {
            username: TextField::new("Username", "Username")
                .required("Please enter your username!"),
            password: TextField::new("Password", "Enter password")
                .masked()
                .required("Please enter your password!"),
            confirm_password: TextField::new("Confirm password", "Confirm your password")
                .masked()
                .required("Please confirm your password!"),
            focus: RegisterFocus::default(),
            submitting: false,
        }
    }
}

pub const PASSWORD_MISMATCH: &str = "The two passwords do not match!";

impl RegisterState {
    /// Required fields first, then the confirmation must match the password
    pub fn validate(&mut self) -> bool {
        let mut ok = validate_all(&mut [
            &mut self.username,
            &mut self.password,
            &mut self.confirm_password,
        ]);

        if !self.confirm_password.value.is_empty()
            && self.confirm_password.value != self.password.value
        {
            self.confirm_password.error = Some(PASSWORD_MISMATCH.to_string());
            ok = false;
        }

        ok
    }
}

/// Values of the create/edit modal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleForm {
    pub title: TextField,
    pub author: Option<TextField>, // Only collected on create
    pub content: TextField,
    pub focus: ArticleFocus,
    pub submitting: bool,
}

fn title_field() -> TextField {
    TextField::new("Article Title", "Enter article title")
        .required("Please enter the article title")
}

fn content_field() -> TextField {
    TextField::new("Article Content", "Enter article content")
        .multiline()
        .required("Please enter the article content")
}

impl ArticleForm {
    pub fn create() -> Self {
        Self {
            title: title_field(),
            author: Some(
                TextField::new("Author", "Enter author name")
                    .required("Please enter the author name"),
            ),
            content: content_field(),
            focus: ArticleFocus::Title,
            submitting: false,
        }
    }

    /// Edit form pre-filled with the article's title and content
    pub fn edit(article: &Article) -> Self {
        Self {
            title: title_field().with_value(&article.title),
            author: None,
            content: content_field().with_value(&article.content),
            focus: ArticleFocus::Title,
            submitting: false,
        }
    }

    pub fn has_author(&self) -> bool {
        self.author.is_some()
    }

    pub fn focused_field(&mut self) -> Option<&mut TextField> {
        match self.focus {
            ArticleFocus::Title => Some(&mut self.title),
            ArticleFocus::Author => self.author.as_mut(),
            ArticleFocus::Content => Some(&mut self.content),
            ArticleFocus::SubmitButton | ArticleFocus::CancelButton => None,
        }
    }

    pub fn validate(&mut self) -> bool {
        let mut fields: Vec<&mut TextField> = vec![&mut self.title];
        if let Some(author) = self.author.as_mut() {
            fields.push(author);
        }
        fields.push(&mut self.content);
        validate_all(&mut fields)
    }

    pub fn new_article(&self) -> NewArticle {
        NewArticle {
            title: self.title.value.clone(),
            content: self.content.value.clone(),
            author: self
                .author
                .as_ref()
                .map(|a| a.value.clone())
                .unwrap_or_default(),
        }
    }

    pub fn update(&self) -> ArticleUpdate {
        ArticleUpdate {
            title: self.title.value.clone(),
            content: self.content.value.clone(),
        }
    }
}

/// What overlays the article list
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Modal {
    #[default]
    Closed,
    Creating(ArticleForm),
    Editing { id: String, form: ArticleForm },
    ConfirmDelete { id: String, title: String },
}

impl Modal {
    pub fn is_closed(&self) -> bool {
        matches!(self, Modal::Closed)
    }

    pub fn form_mut(&mut self) -> Option<&mut ArticleForm> {
        match self {
            Modal::Creating(form) | Modal::Editing { form, .. } => Some(form),
            _ => None,
        }
    }
}

#[derive(Default)]
pub struct ArticlesState {
    pub articles: ArticleList,
    pub list_state: ListState,
    pub modal: Modal,
    pub loading: bool,
}

impl ArticlesState {
    pub fn selected_article(&self) -> Option<&Article> {
        self.list_state
            .selected()
            .and_then(|index| self.articles.get(index))
    }

    pub fn select_next(&mut self) {
        let count = self.articles.len();
        if count == 0 {
            return;
        }
        let next = match self.list_state.selected() {
            Some(i) if i + 1 < count => i + 1,
            Some(i) => i,
            None => 0,
        };
        self.list_state.select(Some(next));
    }

    pub fn select_previous(&mut self) {
        if let Some(i) = self.list_state.selected() {
            if i > 0 {
                self.list_state.select(Some(i - 1));
            }
        }
    }

    /// Keep the selection inside the list after it shrinks or grows
    pub fn clamp_selection(&mut self) {
        let count = self.articles.len();
        if count == 0 {
            self.list_state.select(None);
        } else {
            let current = self.list_state.selected().unwrap_or(0);
            self.list_state.select(Some(current.min(count - 1)));
        }
    }
}

pub struct AppState {
    pub current_screen: Screen,
    pub session: Session,
    pub login: LoginState,
    pub register: RegisterState,
    pub list: ArticlesState,
    pub notification: Option<Notification>,
    pub notification_ttl: Duration,
    pub outbox: Vec<ApiRequest>, // Requests waiting to be handed to the worker
    pub in_flight: usize,
}

impl AppState {
    pub fn new(session: Session) -> Self {
        Self {
            current_screen: Screen::Login,
            session,
            login: LoginState::default(),
            register: RegisterState::default(),
            list: ArticlesState::default(),
            notification: None,
            notification_ttl: Duration::from_secs(3),
            outbox: Vec::new(),
            in_flight: 0,
        }
    }

    pub fn with_notification_ttl(mut self, ttl: Duration) -> Self {
        self.notification_ttl = ttl;
        self
    }

    /// Queue a request for the worker
    pub fn dispatch(&mut self, request: ApiRequest) {
        debug!(kind = request.name(), "queueing request");
        self.outbox.push(request);
    }

    pub fn take_requests(&mut self) -> Vec<ApiRequest> {
        std::mem::take(&mut self.outbox)
    }

    /// Switch screens. Entering the list mounts it fresh and loads articles.
    pub fn navigate(&mut self, screen: Screen) {
        info!(from = self.current_screen.route(), to = screen.route(), "navigate");
        self.current_screen = screen;

        if screen == Screen::List {
            self.list = ArticlesState {
                loading: true,
                ..ArticlesState::default()
            };
            self.dispatch(ApiRequest::LoadArticles);
        }
    }

    /// Reload without clearing what is already shown
    pub fn reload_articles(&mut self) {
        if self.list.loading {
            return;
        }
        self.list.loading = true;
        self.dispatch(ApiRequest::LoadArticles);
    }

    /// Bearer token for authenticated requests, read from the session context
    pub fn bearer_token(&self) -> Option<String> {
        self.session.token().map(str::to_string)
    }

    pub fn notify_success(&mut self, message: impl Into<String>) {
        self.notify(NotificationKind::Success, message.into());
    }

    pub fn notify_error(&mut self, message: impl Into<String>) {
        self.notify(NotificationKind::Error, message.into());
    }

    fn notify(&mut self, kind: NotificationKind, message: String) {
        self.notification = Some(Notification {
            kind,
            message,
            shown_at: Instant::now(),
        });
    }

    pub fn expire_notification(&mut self, now: Instant) {
        let ttl = self.notification_ttl;
        if self
            .notification
            .as_ref()
            .is_some_and(|n| n.is_expired(now, ttl))
        {
            self.notification = None;
        }
    }
}
