pub mod builder;
pub mod error;
pub mod fetch;
pub mod http;

pub use builder::Builder;
pub use fetch::{
    AbortHandle,
    FetchGroup,
};
pub use http::HttpPlatform;
