use std::io;
use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use indoc::indoc;

use invest_desk::app::App;
use invest_desk::drivers::{ConsoleInputDriver, ConsoleOutputDriver, InputDriver, OutputDriver};
use invest_desk::event_loop::{ControlFlow, EventLoop};
use invest_desk::nav::Mode;
use invest_desk::theme::{ThemeMode, ThemeStore};
use invest_desk::tracing_sub;

#[derive(Parser)]
#[command(
    name = "invest-desk",
    version,
    about = "Floating-window market dashboard for the terminal",
    after_long_help = indoc! {"
        Keys:
          1-5        open a section menu (chart, events, SNS, news, community)
          Tab        focus next window
          Enter      open the selected item's detail view
          Esc        leave a detail view / dismiss the menu
          t          toggle light/dark theme
          m          toggle general/pro mode
          w          close the focused window
          Ctrl+Q     quit

        Windows are dragged by their header and resized by the bottom-right
        grip. In pro mode, hovering a section tab previews its menu.
    "}
)]
struct Cli {
    /// Navigation mode to start in. Pro mode carries the section menus.
    #[arg(long, value_enum, default_value_t = ModeArg::Pro)]
    mode: ModeArg,
    /// Override the persisted theme for this session.
    #[arg(long, value_enum)]
    theme: Option<ThemeArg>,
    /// Write debug logs to this file (logs are discarded otherwise).
    #[arg(long)]
    log_file: Option<PathBuf>,
    /// Input poll interval in milliseconds.
    #[arg(long, default_value_t = 16)]
    poll_ms: u64,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModeArg {
    General,
    Pro,
}

impl From<ModeArg> for Mode {
    fn from(value: ModeArg) -> Self {
        match value {
            ModeArg::General => Mode::General,
            ModeArg::Pro => Mode::Pro,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ThemeArg {
    Dark,
    Light,
}

impl From<ThemeArg> for ThemeMode {
    fn from(value: ThemeArg) -> Self {
        match value {
            ThemeArg::Dark => ThemeMode::Dark,
            ThemeArg::Light => ThemeMode::Light,
        }
    }
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();
    tracing_sub::init(cli.log_file.as_deref())?;

    let theme_store = ThemeStore::default_location();
    let theme_mode = match cli.theme {
        Some(theme) => theme.into(),
        None => theme_store.load().unwrap_or_else(|err| {
            tracing::warn!(%err, "ignoring unreadable theme store");
            ThemeMode::default()
        }),
    };

    let mut app = App::new(theme_store, theme_mode);
    app.initial_mode(cli.mode.into());

    let mut output = ConsoleOutputDriver::new()?;
    output.enter()?;
    let mut input = ConsoleInputDriver::new();
    input.set_mouse_capture(true)?;

    let mut event_loop = EventLoop::new(input, Duration::from_millis(cli.poll_ms));
    let result = event_loop.run(|_, event| {
        if let ControlFlow::Quit = app.handle_event(event.as_ref()) {
            return Ok(ControlFlow::Quit);
        }
        output.draw(|mut frame| app.render(&mut frame))?;
        Ok(ControlFlow::Continue)
    });

    output.exit()?;
    result
}
