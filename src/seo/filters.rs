//! Extension points.
//!
//! Three filter points, each a chain of callbacks run in registration order:
//!
//! - `schema_article`: the Article object plus the document id
//! - `schema_home`: the WebSite object
//! - `meta_box_post_types`: post types that get the meta box
//!
//! `[schema.article]` and `[schema.home]` from `seomark.toml` are installed as
//! merge filters by [`Filters::from_config`].

use crate::config::SiteConfig;
use crate::store::DocId;
use serde_json::{Map, Value};

type ArticleFilter = Box<dyn Fn(Value, DocId) -> Value>;
type HomeFilter = Box<dyn Fn(Value) -> Value>;
type PostTypesFilter = Box<dyn Fn(Vec<String>) -> Vec<String>>;

/// Registry of filter callbacks.
#[derive(Default)]
pub struct Filters {
    schema_article: Vec<ArticleFilter>,
    schema_home: Vec<HomeFilter>,
    meta_box_post_types: Vec<PostTypesFilter>,
}

impl Filters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Filters configured in `seomark.toml`.
    pub fn from_config(config: &SiteConfig) -> Self {
        let mut filters = Self::new();

        if let Some(extra) = table_to_object(&config.schema.article) {
            filters.on_schema_article(move |value, _| merge(value, &extra));
        }
        if let Some(extra) = table_to_object(&config.schema.home) {
            filters.on_schema_home(move |value| merge(value, &extra));
        }

        filters
    }

    pub fn on_schema_article(
        &mut self,
        filter: impl Fn(Value, DocId) -> Value + 'static,
    ) -> &mut Self {
        self.schema_article.push(Box::new(filter));
        self
    }

    pub fn on_schema_home(&mut self, filter: impl Fn(Value) -> Value + 'static) -> &mut Self {
        self.schema_home.push(Box::new(filter));
        self
    }

    #[allow(dead_code)]
    pub fn on_meta_box_post_types(
        &mut self,
        filter: impl Fn(Vec<String>) -> Vec<String> + 'static,
    ) -> &mut Self {
        self.meta_box_post_types.push(Box::new(filter));
        self
    }

    pub fn apply_schema_article(&self, value: Value, doc: DocId) -> Value {
        self.schema_article.iter().fold(value, |v, f| f(v, doc))
    }

    pub fn apply_schema_home(&self, value: Value) -> Value {
        self.schema_home.iter().fold(value, |v, f| f(v))
    }

    pub fn apply_meta_box_post_types(&self, post_types: Vec<String>) -> Vec<String> {
        self.meta_box_post_types.iter().fold(post_types, |v, f| f(v))
    }
}

/// Convert a TOML table to a JSON object. Empty tables yield `None`.
fn table_to_object(table: &toml::Table) -> Option<Map<String, Value>> {
    if table.is_empty() {
        return None;
    }
    match serde_json::to_value(table) {
        Ok(Value::Object(map)) => Some(map),
        Ok(_) => None,
        Err(e) => {
            crate::log!("schema"; "ignoring extra schema properties: {}", e);
            None
        }
    }
}

/// Shallow merge: `extra` keys overwrite or append.
fn merge(mut value: Value, extra: &Map<String, Value>) -> Value {
    if let Value::Object(map) = &mut value {
        for (key, v) in extra {
            map.insert(key.clone(), v.clone());
        }
    }
    value
}
