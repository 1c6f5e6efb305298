use std::io::IsTerminal;
use std::path::PathBuf;
use std::sync::mpsc;
use std::time::Instant;

use clap::Parser;
use color_eyre::Result;
use color_eyre::eyre::eyre;
use ratatui::DefaultTerminal;

use chisha::ai::AiState;
use chisha::ai::provider::AiProvider;
use chisha::ai::worker::spawn_worker;
use chisha::app::App;
use chisha::cli;
use chisha::config;
use chisha::menu::{JsonFileStore, MenuStore, storage_path};
use chisha::sound::{SilentSink, SoundService, SoundSink, TerminalBell};

/// 今天吃啥呀: spin the menu or ask the AI chef
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Config file (default ~/.config/chisha/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Storage file (default ~/.config/chisha/storage.json)
    #[arg(long, value_name = "PATH")]
    storage: Option<PathBuf>,

    /// Start muted
    #[arg(long)]
    mute: bool,

    /// Print the menu and exit
    #[arg(long, conflicts_with_all = ["pick", "reset"])]
    list: bool,

    /// Print one random enabled dish and exit
    #[arg(long, conflicts_with = "reset")]
    pick: bool,

    /// Restore the default menu (requires --yes)
    #[arg(long)]
    reset: bool,

    /// Confirm --reset
    #[arg(long, requires = "reset")]
    yes: bool,
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    #[cfg(debug_assertions)]
    init_logging();

    let args = Args::parse();
    let config_result = config::load_config(args.config.as_deref());
    let config = config_result.config;

    let storage = args
        .storage
        .clone()
        .or_else(|| config.storage.path.clone())
        .or_else(storage_path)
        .ok_or_else(|| eyre!("Cannot determine storage location; pass --storage"))?;
    log::debug!("Using storage {}", storage.display());
    let mut menu = MenuStore::load(Box::new(JsonFileStore::new(storage)));

    if args.list {
        print!("{}", cli::list_menu(&menu));
        return Ok(());
    }
    if args.pick {
        match cli::pick(&menu, &mut rand::thread_rng()) {
            Ok(name) => {
                println!("{}", name);
                return Ok(());
            }
            Err(e) => {
                eprintln!("{}", e);
                std::process::exit(1);
            }
        }
    }
    if args.reset {
        cli::reset(&mut menu, args.yes)?;
        println!("Menu reset to {} default dishes", menu.len());
        return Ok(());
    }

    let sink: Box<dyn SoundSink> = if std::io::stdout().is_terminal() {
        Box::new(TerminalBell::stdout())
    } else {
        Box::new(SilentSink)
    };
    let sound = SoundService::new(sink, args.mute || config.sound.muted, config.sound.ambience);

    let ai_config = config.ai.clone().with_env_api_key();
    let mut ai = AiState::new(AiProvider::from_config(&ai_config).is_ok());
    if ai_config.enabled {
        let (request_tx, request_rx) = mpsc::channel();
        let (response_tx, response_rx) = mpsc::channel();
        spawn_worker(&ai_config, request_rx, response_tx);
        ai.connect(request_tx, response_rx);
    }

    let mut app = App::new(menu, sound, ai);
    if let Some(warning) = config_result.warning {
        app.notification.warn(warning, Instant::now());
    }

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();

    let result = run(terminal, &mut app);

    // Restore terminal (automatic cleanup)
    ratatui::restore();
    app.shutdown();

    result
}

fn run(mut terminal: DefaultTerminal, app: &mut App) -> Result<()> {
    loop {
        app.on_frame(Instant::now());
        terminal.draw(|frame| app.render(frame))?;

        app.handle_events(app.next_timeout(Instant::now()))?;

        if app.should_quit() {
            break;
        }
    }
    Ok(())
}

#[cfg(debug_assertions)]
fn init_logging() {
    use std::fs::{self, OpenOptions};
    use std::io::Write;

    let Some(dir) = config::config_dir() else {
        return;
    };
    if fs::create_dir_all(&dir).is_err() {
        return;
    }
    let Ok(file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join("chisha.log"))
    else {
        return;
    };

    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] {}: {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init();
}
