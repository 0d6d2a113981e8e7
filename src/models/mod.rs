// import modules
mod post;
mod flash;

// export modules
pub use post::*;
pub use flash::*;
