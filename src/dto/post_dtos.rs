use serde::{ Deserialize, Serialize };
use validator::Validate;

use crate::models::{ NewPost, Post, UpdatePost };

/// Submitted create/edit form. Missing fields arrive as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize, Validate)]
pub struct PostForm {
    #[serde(default)]
    #[validate(length(min = 1, message = "Title is required!"))]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

impl PostForm {
    /// Pre-fills the edit form from the stored post.
    pub fn from_post(post: &Post) -> Self {
        Self {
            title: post.title.clone(),
            content: post.content.clone(),
        }
    }

    pub fn into_new_post(self) -> NewPost {
        NewPost {
            title: self.title,
            content: self.content,
        }
    }

    pub fn into_update(self) -> UpdatePost {
        UpdatePost {
            title: self.title,
            content: self.content,
        }
    }
}
