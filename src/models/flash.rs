use serde::{ Deserialize, Serialize };

/// Longest post title quoted back in a status message, in characters.
pub const MAX_QUOTED_TITLE_CHARS: usize = 80;

/// Category of a status message, rendered as the `flash-<level>` CSS class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashLevel {
    Success,
    Error,
}

/// A transient, single-use status message shown on the next rendered page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flash {
    pub level: FlashLevel,
    pub message: String,
}

impl Flash {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Error,
            message: message.into(),
        }
    }

    pub fn post_created() -> Self {
        Self::success("Post created successfully!")
    }

    pub fn post_updated() -> Self {
        Self::success("Post updated successfully!")
    }

    pub fn post_deleted(title: &str) -> Self {
        Self::success(format!("Post '{}' deleted successfully!", quoted_title(title)))
    }
}

fn quoted_title(title: &str) -> String {
    match title.char_indices().nth(MAX_QUOTED_TITLE_CHARS) {
        Some((cut, _)) => format!("{}…", &title[..cut]),
        None => title.to_string(),
    }
}
