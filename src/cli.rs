//! CLI argument parsing via clap.

use clap::{Args as ClapArgs, Parser, Subcommand};

/// Run or debug the file under the editor's cursor in the adjacent tmux pane.
#[derive(Debug, Parser)]
#[command(name = "vimdemux", version)]
pub struct Args {
    /// Path to config file (default: ~/.config/vimdemux/vimdemux.toml).
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<String>,

    /// Editor's own tmux pane id (default: $TMUX_PANE, then tmux's active pane).
    #[arg(long = "pane", value_name = "PANE", global = true)]
    pub pane: Option<String>,

    /// Print the result as JSON.
    #[arg(long = "json", global = true)]
    pub json: bool,

    /// Build and print the command without sending it anywhere.
    #[arg(long = "dry-run", global = true)]
    pub dry_run: bool,

    /// Disable color output.
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the file (or the test under the cursor).
    Run(LocationArgs),
    /// Persist a breakpoint at the cursor and start the debugger.
    Debug(LocationArgs),
    /// Write a commented default config if none exists.
    Init,
}

/// Cursor position reported by the editor.
#[derive(Debug, ClapArgs)]
pub struct LocationArgs {
    /// Absolute path of the current file.
    pub path: String,

    /// 1-based line of the cursor.
    #[arg(allow_negative_numbers = true)]
    pub line: i64,
}

#[cfg(test)]
mod tests {
    use super::{Args, Command};
    use clap::Parser;

    #[test]
    fn run_parses_path_and_line() {
        let args = Args::parse_from(["vimdemux", "run", "/a/b/test_x.py", "10"]);
        match args.command {
            Command::Run(loc) => {
                assert_eq!(loc.path, "/a/b/test_x.py");
                assert_eq!(loc.line, 10);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn negative_line_reaches_the_builder() {
        let args = Args::parse_from(["vimdemux", "debug", "/a/b/test_x.py", "-5"]);
        match args.command {
            Command::Debug(loc) => assert_eq!(loc.line, -5),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn global_flags_follow_subcommand() {
        let args = Args::parse_from([
            "vimdemux",
            "run",
            "/a.py",
            "1",
            "--pane",
            "%3",
            "--json",
            "-c",
            "/tmp/v.toml",
        ]);
        assert_eq!(args.pane.as_deref(), Some("%3"));
        assert!(args.json);
        assert_eq!(args.config.as_deref(), Some("/tmp/v.toml"));
    }

    #[test]
    fn init_takes_no_location() {
        let args = Args::parse_from(["vimdemux", "init"]);
        assert!(matches!(args.command, Command::Init));
    }
}
