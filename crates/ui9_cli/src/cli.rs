//! `9de` command line

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "9de")]
#[command(about = "9DE control client")]
#[command(version)]
pub struct Cli {
    /// Control socket (default: $XDG_RUNTIME_DIR/9de.sock, else /tmp/9de.sock)
    #[arg(long, global = true)]
    pub socket: Option<PathBuf>,

    /// Config file (default: $home/lib/9de/config.rc)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Send a control command: ping, reload, apply, setpreset <style>,
    /// panel <placement>
    Ctl {
        #[arg(required = true, num_args = 1.., trailing_var_arg = true)]
        words: Vec<String>,
    },

    /// Print the current preset and panel placement
    Status {
        /// Render as JSON
        #[arg(long)]
        json: bool,
    },

    /// Follow the event stream until the service goes away
    Events,

    /// Read or rewrite the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the resolved value of a key
    Get { key: String },

    /// Rewrite a key in the config file, then ask running surfaces to reload
    Set {
        key: String,
        value: String,

        /// Skip the reload request
        #[arg(long)]
        no_reload: bool,
    },

    /// Print the whole resolved config as JSON
    Show,

    /// Print the config file path
    Path,
}
