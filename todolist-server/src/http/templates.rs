//! Askama templates
//!
//! Template structs for rendering HTML pages.

use askama::Template;
use askama_web::WebTemplate;

use crate::db::{Item, List};

/// Home page: a single form that starts a new list.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate;

/// One list and its items, oldest first.
#[derive(Template, WebTemplate)]
#[template(path = "list.html")]
pub struct ListTemplate {
    pub list: List,
    pub items: Vec<Item>,
}
