pub mod fixture;
pub mod post;

pub use fixture::{load_post, parse_post, sample_post, FixtureError};
pub use post::{Author, ContentBlock, ContentKind, PostData};
