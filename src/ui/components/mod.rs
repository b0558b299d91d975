pub mod comment;
pub mod comment_form;
pub mod post;
