// In-memory article list with the patch operations applied after successful calls

use crate::api::Article;

/// Client-side copy of the server's article list.
///
/// Holds the last loaded server state plus patches from mutations that the
/// server confirmed. Never reconciled against other clients.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleList {
    items: Vec<Article>,
}

impl ArticleList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whole-list replace after a load
    pub fn replace_all(&mut self, articles: Vec<Article>) {
        self.items = articles;
    }

    /// Add a newly created article. An entry with the same id is replaced in
    /// place so the article never shows up twice.
    pub fn append(&mut self, article: Article) {
        match self.position(&article.id) {
            Some(index) => self.items[index] = article,
            None => self.items.push(article),
        }
    }

    /// Swap the entry with `id` for the server's updated copy.
    /// Returns false when nothing matched.
    pub fn replace(&mut self, id: &str, article: Article) -> bool {
        match self.position(id) {
            Some(index) => {
                self.items[index] = article;
                true
            }
            None => false,
        }
    }

    /// Drop every entry with `id`. Returns false when nothing matched.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|article| article.id != id);
        self.items.len() != before
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|article| article.id == id)
    }

    pub fn find(&self, id: &str) -> Option<&Article> {
        self.items.iter().find(|article| article.id == id)
    }

    pub fn get(&self, index: usize) -> Option<&Article> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Article> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[Article] {
        &self.items
    }
}

impl From<Vec<Article>> for ArticleList {
    fn from(items: Vec<Article>) -> Self {
        Self { items }
    }
}
