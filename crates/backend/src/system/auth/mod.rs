pub mod cookie;
pub mod extractor;
pub mod middleware;
pub mod session;
