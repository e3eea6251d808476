pub mod envelope;
pub mod post;
pub mod user;

pub use envelope::ApiResponse;
pub use post::{Comment, CommentRequest, Post, PostRequest};
pub use user::{LoginRequest, User};
