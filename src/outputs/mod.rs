//! Feed output generation.
//!
//! One submodule per output format. The only format today is RSS 2.0:
//!
//! - [`rss`]: Serializes a channel plus its articles to an indented,
//!   blank-line-free RSS 2.0 document and writes it to disk.

pub mod rss;
