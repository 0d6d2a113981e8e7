use handlebars::{ Handlebars, RenderError };
use serde::Serialize;
use serde_json::{ json, Value };

use crate::{ config::ConfigError, dto::PostForm, models::{ Flash, Post } };

const LAYOUT: &str = include_str!("../../templates/layout.hbs");
const INDEX: &str = include_str!("../../templates/index.hbs");
const CREATE: &str = include_str!("../../templates/create.hbs");
const EDIT: &str = include_str!("../../templates/edit.hbs");
const NOT_FOUND: &str = include_str!("../../templates/not_found.hbs");

const CREATED_FORMAT: &str = "%Y-%m-%d %H:%M";

/// A page the handlers can ask to have rendered.
#[derive(Debug, Clone, PartialEq)]
pub enum Page {
    Index {
        posts: Vec<Post>,
    },
    Create {
        form: PostForm,
    },
    Edit {
        post: Post,
        form: PostForm,
    },
    NotFound {
        message: String,
    },
}

#[derive(Serialize)]
struct PostView<'a> {
    id: i64,
    title: &'a str,
    content: &'a str,
    created: String,
}

impl<'a> From<&'a Post> for PostView<'a> {
    fn from(post: &'a Post) -> Self {
        Self {
            id: post.id,
            title: &post.title,
            content: &post.content,
            created: post.created.format(CREATED_FORMAT).to_string(),
        }
    }
}

impl Page {
    pub fn template_name(&self) -> &'static str {
        match self {
            Page::Index { .. } => "index",
            Page::Create { .. } => "create",
            Page::Edit { .. } => "edit",
            Page::NotFound { .. } => "not_found",
        }
    }

    fn context(&self, flashes: &[Flash]) -> Value {
        match self {
            Page::Index { posts } => {
                let posts: Vec<PostView<'_>> = posts.iter().map(PostView::from).collect();
                json!({ "title": "Posts", "flashes": flashes, "posts": posts })
            }
            Page::Create { form } => {
                json!({ "title": "Create a New Post", "flashes": flashes, "form": form })
            }
            Page::Edit { post, form } => {
                json!({
                    "title": format!("Edit {}", post.title),
                    "flashes": flashes,
                    "post": PostView::from(post),
                    "form": form,
                })
            }
            Page::NotFound { message } => {
                json!({ "title": "Not Found", "flashes": flashes, "message": message })
            }
        }
    }
}

/// The compiled page templates, built once at startup and shared by every request.
pub struct Templates {
    registry: Handlebars<'static>,
}

impl Templates {
    pub fn new() -> Result<Self, ConfigError> {
        let mut registry = Handlebars::new();
        registry.register_partial("layout", LAYOUT)?;
        registry.register_template_string("index", INDEX)?;
        registry.register_template_string("create", CREATE)?;
        registry.register_template_string("edit", EDIT)?;
        registry.register_template_string("not_found", NOT_FOUND)?;

        Ok(Self { registry })
    }

    pub fn render(&self, page: &Page, flashes: &[Flash]) -> Result<String, RenderError> {
        self.registry.render(page.template_name(), &page.context(flashes))
    }
}
