use std::io;
use std::path::PathBuf;
use std::sync::mpsc;

use clap::Parser;
use zside::kernel::services::adapters::{ensure_settings_file, load_settings, load_settings_from};
use zside::kernel::services::ports::{DocumentRegistry, Settings};
use zside::kernel::{ActionContext, ActionError, OpenDocuments, Outcome, Sidebar, SidebarCommand};

mod logging;
mod terminal_host;

use terminal_host::TerminalHost;

#[derive(Parser, Debug)]
#[command(name = "zside", version, about = "Sidebar file actions from the terminal")]
struct Args {
    /// new_file, new_folder, rename, duplicate, move, delete, copy_name,
    /// copy_relative_path or copy_absolute_path
    #[arg(value_parser = parse_command)]
    command: SidebarCommand,

    /// Selected sidebar entries
    paths: Vec<PathBuf>,

    /// Workspace root (repeatable)
    #[arg(long = "root", value_name = "DIR")]
    roots: Vec<PathBuf>,

    /// Document open in the window (repeatable)
    #[arg(long = "open", value_name = "FILE")]
    open: Vec<PathBuf>,

    /// Active document, used when no path is selected
    #[arg(long, value_name = "FILE")]
    active: Option<PathBuf>,

    /// Settings file instead of the default location
    #[arg(long, value_name = "PATH")]
    settings: Option<PathBuf>,

    /// Skip delete confirmation
    #[arg(short, long)]
    yes: bool,
}

fn parse_command(value: &str) -> Result<SidebarCommand, String> {
    SidebarCommand::from_name(value).ok_or_else(|| {
        let known: Vec<&str> = SidebarCommand::ALL.iter().map(|cmd| cmd.name()).collect();
        format!("unknown command `{}` (expected one of: {})", value, known.join(", "))
    })
}

fn read_settings(path: Option<&PathBuf>) -> Settings {
    match path {
        Some(path) => load_settings_from(path).unwrap_or_default(),
        None => {
            if let Err(e) = ensure_settings_file() {
                eprintln!("zside: cannot write default settings: {}", e);
            }
            load_settings()
        }
    }
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    let settings = read_settings(args.settings.as_ref());

    let logging = logging::init(&settings.log_filter);
    if let Some(logging) = logging.as_ref() {
        tracing::debug!(log_dir = %logging.log_dir().display(), command = args.command.name(), "zside start");
    }

    let (tx, rx) = mpsc::channel();
    let mut sidebar = Sidebar::new(settings, tx)?;

    let mut documents = OpenDocuments::new();
    let window = documents.open_window();
    for path in &args.open {
        documents.open(window, Some(path.clone()));
    }

    let stdin = io::stdin();
    let mut host = TerminalHost::new(
        stdin.lock(),
        io::stderr(),
        args.roots.clone(),
        args.active.clone(),
        args.yes,
    );

    let result = {
        let mut cx = ActionContext::new(&mut host, &mut documents);
        match sidebar.run(&mut cx, args.command, &args.paths) {
            Ok(Outcome::Submitted(task)) => match rx.recv() {
                Ok(msg) => {
                    tracing::debug!(task = %msg.task(), submitted = %task, "fs task finished");
                    sidebar.handle_message(&mut cx, msg)
                }
                Err(_) => Err(ActionError::Unknown(format!("task {} never reported", task))),
            },
            other => other,
        }
    };

    for path in host.take_opened() {
        documents.open(window, Some(path));
    }
    for doc in documents.documents() {
        match doc.path {
            Some(path) => println!("{}", path.display()),
            None => println!("untitled"),
        }
    }

    match result {
        Ok(outcome) => {
            tracing::info!(command = args.command.name(), outcome = ?outcome, "command finished");
            Ok(())
        }
        Err(e) => Err(io::Error::other(e)),
    }
}
