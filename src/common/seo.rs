//! Document title and meta tags for search engines and link previews.

/// What a page wants the document head to say about it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageMeta {
    pub title: &'static str,
    pub description: Option<&'static str>,
    pub keywords: Option<&'static str>,
}

impl PageMeta {
    /// The tags `apply` will upsert, in order.
    pub fn tags(&self) -> Vec<(MetaKey, &'static str)> {
        let mut tags = Vec::with_capacity(5);

        if let Some(description) = self.description {
            tags.push((MetaKey::Name("description"), description));
            tags.push((MetaKey::Property("og:description"), description));
            tags.push((MetaKey::Name("twitter:description"), description));
        }

        if let Some(keywords) = self.keywords {
            tags.push((MetaKey::Name("keywords"), keywords));
        }

        tags.push((MetaKey::Property("og:title"), self.title));
        tags
    }
}

/// How a `<meta>` element is identified: `name=` or `property=`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetaKey {
    Name(&'static str),
    Property(&'static str),
}

impl MetaKey {
    pub fn attribute(&self) -> &'static str {
        match self {
            Self::Name(_) => "name",
            Self::Property(_) => "property",
        }
    }

    pub fn value(&self) -> &'static str {
        match self {
            Self::Name(v) | Self::Property(v) => v,
        }
    }

    pub fn selector(&self) -> String {
        format!("meta[{}='{}']", self.attribute(), self.value())
    }
}

/// The slice of a document the metadata service touches.
pub trait MetaDocument {
    type Error;

    fn set_title(&mut self, title: &str) -> Result<(), Self::Error>;

    /// Finds the tag identified by `key`, creating and appending it to the head if it's
    /// missing, then sets its content.
    fn upsert_meta(&mut self, key: MetaKey, content: &str) -> Result<(), Self::Error>;
}

pub struct MetadataService<D> {
    document: D,
}

impl<D: MetaDocument> MetadataService<D> {
    pub fn new(document: D) -> Self {
        Self { document }
    }

    /// Idempotent: applying the same meta again leaves the document unchanged.
    pub fn apply(&mut self, meta: &PageMeta) -> Result<(), D::Error> {
        self.document.set_title(meta.title)?;

        for (key, content) in meta.tags() {
            self.document.upsert_meta(key, content)?;
        }

        tracing::debug!(title = meta.title, "page metadata applied");
        Ok(())
    }

    pub fn document(&self) -> &D {
        &self.document
    }
}
