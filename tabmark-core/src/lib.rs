//! Markdown formatting and tab-organization engine
//!
//!     This crate turns a snapshot of browser tabs and tab groups into
//!     Markdown text: link lists, title lists, URL lists, task lists, and
//!     structured render input for user-authored templates.
//!
//!     This is a pure lib, that is, it powers the tabmark CLI but is shell
//!     agnostic: no code here supposes a shell environment, be it std print,
//!     env vars, clipboard access or browser APIs. Hosts query tabs, read
//!     templates and write the clipboard; the engine only transforms values.
//!
//!     The file structure:
//!     .
//!     ├── error.rs                # ExportError
//!     ├── markdown
//!     │   ├── escape.rs           # link text escaping, bracket balance scan
//!     │   ├── list.rs             # nested list rendering (ListNode)
//!     │   ├── url.rs              # selective percent-decoding of URLs
//!     │   └── mod.rs              # Markdown formatter and its options
//!     ├── tabs.rs                 # Tab / TabGroup / TabList, contiguous-run grouping
//!     ├── export.rs               # built-in formats (link / title / url lists)
//!     ├── custom_format.rs        # render input + template rendering
//!     └── lib.rs
//!
//! Core Algorithms
//!
//!     The non-obvious parts are escaping arbitrary page titles into valid
//!     Markdown inline text (unbalanced brackets must be escaped, balanced
//!     ones left alone), grouping an ordered tab sequence into contiguous
//!     same-group runs (a group split by foreign tabs stays split, mirroring
//!     physical tab order), and producing numbering that is stable at the
//!     top level while restarting inside each group. These live in
//!     `markdown::escape`, `tabs` and `custom_format` respectively and are
//!     unit tested in isolation.
//!
//! Configuration
//!
//!     All knobs (bracket escaping, list marker, indentation, URL decoding)
//!     are plain fields on [`Markdown`], threaded in by the caller. There is
//!     no global configuration state; refresh-on-change belongs to whatever
//!     host embeds the engine. See the tabmark-config crate for the layered
//!     TOML loader used by the CLI.

pub mod custom_format;
pub mod error;
pub mod export;
pub mod markdown;
pub mod tabs;

pub use custom_format::{
    make_render_input, Context, CustomFormat, RenderInput, RenderInputEntry, RenderInputLink,
};
pub use error::ExportError;
pub use export::{render_built_in, ListType, TabExportFormat};
pub use markdown::{IndentationStyle, ListNode, Markdown, UnorderedListMarker};
pub use tabs::{Tab, TabGroup, TabList, TabListGrouper};
