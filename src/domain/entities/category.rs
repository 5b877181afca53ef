//! Category entities: genres and formats.

/// A genre. Genres form a hierarchy through their optional broader genre.
#[derive(Debug, Clone, PartialEq)]
pub struct Genre {
    pub id: String,
    pub title: String,
    pub url_key: String,
    pub broader: Option<Box<Genre>>,
    pub has_topic_page: bool,
    pub same_as: Option<String>,
}

impl Genre {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        url_key: impl Into<String>,
        broader: Option<Genre>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            url_key: url_key.into(),
            broader: broader.map(Box::new),
            has_topic_page: false,
            same_as: None,
        }
    }

    pub fn with_topic_page(mut self, has_topic_page: bool) -> Self {
        self.has_topic_page = has_topic_page;
        self
    }

    pub fn with_same_as(mut self, same_as: impl Into<String>) -> Self {
        self.same_as = Some(same_as.into());
        self
    }

    /// Iterates over this genre's ancestors, nearest first.
    pub fn ancestry(&self) -> impl Iterator<Item = &Genre> {
        std::iter::successors(self.broader.as_deref(), |g| g.broader.as_deref())
    }
}

/// A programme format (e.g. "Quizzes"). Formats are flat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Format {
    pub id: String,
    pub title: String,
    pub url_key: String,
}

impl Format {
    pub fn new(id: impl Into<String>, title: impl Into<String>, url_key: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            url_key: url_key.into(),
        }
    }
}
