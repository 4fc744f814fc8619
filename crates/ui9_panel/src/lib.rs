//! 9DE Panel
//!
//! The shell surfaces built on [`ui9_app`]:
//!
//! - [`Panel`]: the top bar. Module stacks from `panel_left` /
//!   `panel_right`, topbar and mini-bar gradients, control-event driven
//!   indicators, hover expansion into a window list.
//! - [`Dashboard`]: the wide dashboard opened from the panel menu.
//! - [`Settings`]: the control form that rewrites `config.rc` and asks
//!   the shell to reload.
//!
//! Window lists come through the [`WindowSource`] capability so the panel
//! runs the same against a rio-style `/dev/wsys` tree and a fixed list.

pub mod dash;
pub mod layout;
pub mod model;
pub mod modules;
pub mod panel;
pub mod settings;
pub mod windows;

pub use dash::{DashLayout, Dashboard};
pub use model::PanelModel;
pub use modules::{ellipsize, parse_modules, PanelModule};
pub use panel::{Launch, Panel, CLOCK_TICK, REDRAW_PULSE, WINDOW_POLL};
pub use settings::{Field, LayoutPreset, Settings, SettingsForm, SettingsLayout};
pub use windows::{parse_wctl, StaticWindows, WindowEntry, WindowSource, WsysWindows};
