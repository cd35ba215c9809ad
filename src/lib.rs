//! Incremental HTTP/1.x request line and header parser.
//!
//! Bytes are fed as they arrive from a connection, no full request buffering
//! required:
//!
//! ```rust
//! use suzu::{Parser, Request};
//!
//! let mut parser = Parser::new();
//! let mut req = Request::new();
//!
//! let (status, read) = parser.parse(&mut req, b"GET /users/all HT");
//! assert!(status.is_indeterminate());
//! assert_eq!(read, 17);
//!
//! let (status, _) = parser.parse(&mut req, b"TP/1.1\r\nHost: localhost\r\n\r\n");
//! assert!(status.is_good());
//!
//! assert_eq!(req.method, "GET");
//! assert_eq!(req.handler_path, "/users");
//! assert_eq!(req.file_path, "/all");
//! assert_eq!(req.headers.get("host"), Some("localhost"));
//! ```
#![warn(missing_debug_implementations)]

mod log;
mod matches;

pub mod headers;
mod parser;
mod request;
mod status;
mod version;

pub use headers::{Header, Headers};
pub use parser::{Parser, TargetSplit};
pub use request::Request;
pub use status::Status;
pub use version::Version;
