pub mod post_dtos;

pub use post_dtos::PostForm;
