//! Filehead: file header comment checking with auto-fix.
//!
//! The [`check`] module holds the rule itself: a pure function from a file's
//! text and a compiled [`check::HeaderRule`] to at most one
//! [`check::Diagnostic`]. Everything else supports the `filehead` CLI.
//!
//! ```
//! use filehead::check::{Fix, HeaderRule};
//!
//! let rule = HeaderRule::new(r"Copyright \d{4}", Some("Copyright 2017".to_string()))?;
//! let diag = rule.check("console.log(1);").unwrap();
//!
//! assert_eq!(diag.message, "missing file header");
//! assert_eq!(
//!     diag.fix,
//!     Some(Fix::insertion(0, "/*\n * Copyright 2017\n */\n\n"))
//! );
//! # Ok::<(), filehead::error::FileheadError>(())
//! ```

pub mod check;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod fs;
