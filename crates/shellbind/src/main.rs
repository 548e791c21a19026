// Only `init` runs off Windows, so the other argument structs go unread there.
#![cfg_attr(not(windows), allow(dead_code))]

mod commands;

use clap::{Args, Parser, Subcommand};

use shellbind_core::{BalloonKind, ShowCommand, config, log};

#[derive(Parser)]
#[command(
    name = "shellbind",
    version,
    about = "Folder dialogs, drag-and-drop, ShellExecute, icons, and tray balloons from the command line"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the default configuration file
    Init,
    /// Open a file, URL, or program through the shell
    Open(OpenArgs),
    /// Show the folder picker and print the chosen path
    Browse(BrowseArgs),
    /// Extract an icon from an executable, DLL, or .ico file
    Icon(IconArgs),
    /// Open a window and print the files dropped onto it
    Drop(DropArgs),
    /// Show a balloon notification from a tray icon
    Notify(NotifyArgs),
}

#[derive(Args)]
pub struct OpenArgs {
    /// File, URL, or program to open
    pub file: String,
    /// Verb such as "open", "edit", "print", or "runas"
    #[arg(long, default_value = "")]
    pub verb: String,
    /// Arguments passed to a program
    #[arg(long, default_value = "")]
    pub params: String,
    /// Working directory
    #[arg(long, default_value = "")]
    pub dir: String,
    /// Window show state, e.g. "normal", "maximized", "show-na"
    #[arg(long, value_parser = parse_show)]
    pub show: Option<ShowCommand>,
}

#[derive(Args)]
pub struct BrowseArgs {
    /// Text shown above the folder tree
    #[arg(long)]
    pub title: Option<String>,
    /// List files as well as folders
    #[arg(long)]
    pub include_files: bool,
}

#[derive(Args)]
pub struct IconArgs {
    /// Executable, DLL, or .ico file
    pub path: String,
    /// Zero-based icon index
    #[arg(long, default_value_t = 0)]
    pub index: u32,
}

#[derive(Args)]
pub struct DropArgs {
    /// Print the drop as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct NotifyArgs {
    /// Balloon text
    pub message: String,
    /// Balloon title
    #[arg(long, default_value = "shellbind")]
    pub title: String,
    /// Balloon icon: none, info, warning, error, user
    #[arg(long, value_parser = parse_kind)]
    pub kind: Option<BalloonKind>,
    /// Tray icon tooltip
    #[arg(long)]
    pub tip: Option<String>,
}

fn parse_show(s: &str) -> Result<ShowCommand, String> {
    ShowCommand::from_name(s).ok_or_else(|| format!("unknown show command: {s}"))
}

fn parse_kind(s: &str) -> Result<BalloonKind, String> {
    BalloonKind::from_name(s).ok_or_else(|| format!("unknown balloon kind: {s}"))
}

fn main() {
    let cli = Cli::parse();

    if let Commands::Init = cli.command {
        commands::init::execute();
        return;
    }

    let config = config::load();
    log::init(&config.log);

    run(cli.command, &config);
}

#[cfg(windows)]
fn run(command: Commands, config: &config::Config) {
    match command {
        Commands::Init => commands::init::execute(),
        Commands::Open(args) => commands::open::execute(&args, config),
        Commands::Browse(args) => commands::browse::execute(&args, config),
        Commands::Icon(args) => commands::icon::execute(&args),
        Commands::Drop(args) => commands::drop::execute(&args),
        Commands::Notify(args) => commands::notify::execute(&args, config),
    }
}

#[cfg(not(windows))]
fn run(_command: Commands, _config: &config::Config) {
    eprintln!("Error: this command needs the Windows shell.");
    std::process::exit(1);
}
