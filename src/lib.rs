#![forbid(unsafe_code)]

//! `hbml` - HergBot Markup Language element trees and an HBML file logger.
//!
//! The core is [`Element`]: a labeled node with an optional value, uniquely named
//! attributes, and uniquely labeled children, rendered to indented nested-tag text.
//! On top of it sits a small logger that writes one `LogEntry` element per record.
//!
//! # Example
//!
//! ```
//! use hbml::Element;
//!
//! let mut entry = Element::with_label("LogEntry");
//! entry.add_element("Type", "INFO");
//! entry.add_element("Message", "started");
//! assert!(!entry.add_element("Type", "ERROR"));
//!
//! assert_eq!(
//!     entry.render(),
//!     "<LogEntry>\n    <Type>INFO</Type>\n    <Message>started</Message>\n</LogEntry>"
//! );
//! ```
//!
//! # Features
//!
//! - `cli` (default): enables the `hbml` command-line binary

pub mod config;
pub mod element;
mod error;
pub mod internal;
pub mod level;
pub mod logger;
pub mod message;
pub mod output;

#[cfg(feature = "cli")]
pub mod cli;

pub use config::Config;
pub use element::{Element, INDENT_WIDTH, UniqueMap};
pub use error::Error;
pub use level::Level;
pub use logger::{Logger, LoggerBuilder};
pub use message::{HbmlLogMessageGenerator, LogMessageGenerator, PlainLogMessageGenerator};
pub use output::{FileOutput, LogRecord, Output, TerminalOutput};
