use clap::Parser;
use iced::keyboard::{self, key, Key, Modifiers};
use iced::widget::canvas;
use iced::time::Instant;
use iced::{window, Element, Length, Subscription, Task, Theme};
use std::process::ExitCode;
use std::time::Duration;
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

mod cli;
mod error;
mod fit;
mod media;
mod state;
mod ui;

use error::SlideshowError;
use state::data::{Display, Slide};
use state::library::{self, ImageList};
use state::picker::{Picker, TICK_INTERVAL};
use ui::canvas::SlideCanvas;
use ui::fade::{Fade, FRAME_INTERVAL};

/// Main application state
struct Slideshow {
    /// Paths discovered so far by the background scan
    images: ImageList,
    /// Random selection, one generator for the process lifetime
    picker: Picker,
    /// What is on screen
    display: Display,
    /// A decode is in flight; ticks are skipped until it lands
    loading: bool,
    /// Fade-in of the current slide
    fade: Option<Fade>,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// The rotation timer fired
    Tick,
    /// Background decode finished
    SlideLoaded(Result<Slide, SlideshowError>),
    /// Animation frame while a slide fades in
    Animate(Instant),
    /// Escape pressed or run time elapsed
    Exit,
}

impl Slideshow {
    /// Create the application around an already running scan
    fn new(images: ImageList, run_time: Option<Duration>) -> (Self, Task<Message>) {
        let fullscreen = window::get_oldest()
            .and_then(|id| window::change_mode(id, window::Mode::Fullscreen));

        let deadline = match run_time {
            Some(run_time) => Task::perform(tokio::time::sleep(run_time), |_| Message::Exit),
            None => Task::none(),
        };

        (
            Slideshow {
                images,
                picker: Picker::default(),
                display: Display::Loading,
                loading: false,
                fade: None,
            },
            Task::batch([fullscreen, deadline]),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Tick => {
                if self.loading {
                    debug!("previous slide still decoding, skipping tick");
                    return Task::none();
                }
                if self.images.is_empty() {
                    debug!("no images discovered yet");
                    return Task::none();
                }

                match self.picker.pick(&self.images) {
                    Some(path) => {
                        self.loading = true;
                        Task::perform(media::loader::load_slide(path), Message::SlideLoaded)
                    }
                    None => Task::none(),
                }
            }
            Message::SlideLoaded(result) => {
                self.loading = false;
                match result {
                    Ok(slide) => {
                        info!(
                            "🖼️  Showing {} ({} images known)",
                            slide.path.display(),
                            self.images.len()
                        );
                        self.display.show(slide);
                        self.fade = Some(Fade::start(Instant::now()));
                    }
                    // Keep whatever is on screen and try another pick next tick
                    Err(e) => warn!("⚠️  {}", e),
                }
                Task::none()
            }
            Message::Animate(now) => {
                if let Some(fade) = &mut self.fade {
                    fade.advance(now);
                }
                Task::none()
            }
            Message::Exit => {
                info!("👋 Exiting slideshow");
                iced::exit()
            }
        }
    }

    /// Opacity of the current slide
    fn opacity(&self) -> f32 {
        self.fade.map_or(1.0, |fade| fade.opacity())
    }

    fn is_fading(&self) -> bool {
        self.fade.is_some_and(|fade| fade.is_running())
    }

    /// Build the user interface
    fn view(&self) -> Element<'_, Message> {
        canvas(SlideCanvas::new(self.display.slide(), self.opacity()))
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn subscription(&self) -> Subscription<Message> {
        let animation = if self.is_fading() {
            iced::time::every(FRAME_INTERVAL).map(Message::Animate)
        } else {
            Subscription::none()
        };

        Subscription::batch([
            iced::time::every(TICK_INTERVAL).map(|_| Message::Tick),
            keyboard::on_key_press(exit_key),
            animation,
        ])
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

/// Escape or `q` closes the borderless window
fn exit_key(key: Key, _modifiers: Modifiers) -> Option<Message> {
    match key.as_ref() {
        Key::Named(key::Named::Escape) | Key::Character("q") => Some(Message::Exit),
        _ => None,
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("slideshow=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn run(args: cli::Cli) -> error::Result<()> {
    info!("🎨 Slideshow starting in {}", args.dir.display());
    if let Some(run_time) = args.run_time() {
        info!("⏱️  Will exit after {}s", run_time.as_secs());
    }

    let images = ImageList::new();
    // The scan thread is detached; it finishes on its own and logs a summary
    library::spawn_scan(args.dir.clone(), images.clone())
        .map_err(|e| SlideshowError::Thread(e.into()))?;

    let run_time = args.run_time();

    iced::application("Slideshow", Slideshow::update, Slideshow::view)
        .subscription(Slideshow::subscription)
        .theme(Slideshow::theme)
        .window(window::Settings {
            decorations: false,
            level: window::Level::AlwaysOnTop,
            ..window::Settings::default()
        })
        .run_with(move || Slideshow::new(images, run_time))?;

    Ok(())
}

fn main() -> ExitCode {
    // Usage errors print clap's message and exit with status 2
    let args = cli::Cli::parse();
    init_logging();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("❌ {}", e);
            ExitCode::FAILURE
        }
    }
}
