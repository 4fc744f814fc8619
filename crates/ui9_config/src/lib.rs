//! 9DE Configuration
//!
//! Every surface resolves its settings through the same chain, in the same
//! order, on boot and on every reload:
//!
//! 1. [`ConfigSnapshot::reset_to_defaults`]
//! 2. [`ConfigSnapshot::merge_from_file`] (`$home/lib/9de/config.rc`)
//! 3. [`ConfigSnapshot::merge_from_environment`]
//!
//! The file is plain `key=value` text. `#` starts a comment, values may be
//! quoted and list values may be wrapped in parentheses. Malformed values
//! never fail a load: unknown keys are skipped, bad colors read as unset
//! and bad integers read as `0`.
//!
//! # Example
//!
//! ```rust
//! use ui9_config::{ConfigSnapshot, MapEnv};
//!
//! let mut cfg = ConfigSnapshot::default();
//! cfg.merge_from_str("ui_style=dark\nui_alpha=150 # glass strength\n");
//! cfg.merge_from_environment(&MapEnv::new().with("ui_alpha", "200"));
//!
//! assert_eq!(cfg.appearance.style.as_deref(), Some("dark"));
//! assert_eq!(cfg.appearance.alpha, Some(200));
//! ```
//!
//! Rewrites go through [`ConfigWriter`], which preserves unrelated lines and
//! replaces the file atomically with one backup.

pub mod env;
pub mod error;
pub mod keys;
pub mod paths;
pub mod snapshot;
pub mod value;
pub mod writer;

pub use env::{Environment, MapEnv, ProcessEnv};
pub use error::{ConfigError, Result};
pub use paths::{config_path, home_dir};
pub use snapshot::{
    AppearanceConfig, ConfigSnapshot, GradientConfig, Origin, PanelConfig, Placement,
    SessionConfig, SessionMode, TestLayout,
};
pub use value::{clean_value, normalize_value, parse_assignment, parse_int, split_words, truthy};
pub use writer::{quote_list, set_key, write_atomic, ConfigWriter, HEADER};
