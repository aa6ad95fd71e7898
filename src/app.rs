// SPDX-License-Identifier: MPL-2.0
//! Demo application showing the toast queue in an Iced window.
//!
//! Buttons enqueue toasts of each kind; the overlay in the bottom-right
//! corner displays the current one. Pressing a toast holds it on screen.

use crate::config::{self, Config};
use crate::queue::{ToastIcon, ToastQueue, ToastRequest};
use crate::ui::design_tokens::spacing;
use crate::ui::toast::{self, Toast};
use iced::widget::{button, Column, Container, Row, Stack, Text};
use iced::{alignment, window, Element, Length, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

pub const WINDOW_DEFAULT_WIDTH: u32 = 640;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 420;

/// Runtime flags passed in from the CLI.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Overrides the configured default display duration.
    pub duration_ms: Option<u64>,
    /// Overrides the configured tick interval.
    pub tick_ms: Option<u64>,
    /// Reads settings from this file instead of the platform config dir.
    pub config_path: Option<PathBuf>,
}

/// Kinds of toast the demo can enqueue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Plain,
    Success,
    Info,
    Warning,
    Error,
}

impl Kind {
    const ALL: [Kind; 5] = [
        Kind::Plain,
        Kind::Success,
        Kind::Info,
        Kind::Warning,
        Kind::Error,
    ];

    fn label(self) -> &'static str {
        match self {
            Kind::Plain => "Plain",
            Kind::Success => "Success",
            Kind::Info => "Info",
            Kind::Warning => "Warning",
            Kind::Error => "Error",
        }
    }

    fn icon(self) -> Option<ToastIcon> {
        match self {
            Kind::Plain => None,
            Kind::Success => Some(ToastIcon::Success),
            Kind::Info => Some(ToastIcon::Info),
            Kind::Warning => Some(ToastIcon::Warning),
            Kind::Error => Some(ToastIcon::Error),
        }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    Add(Kind),
    /// Enqueues a toast that stays twice as long as the default.
    AddLong,
    Clear,
    Toast(toast::Message),
}

pub struct App {
    queue: ToastQueue,
    /// Number of toasts created, used to label them.
    created: u32,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("queue", &self.queue)
            .field("created", &self.created)
            .finish()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    iced::application(move || App::new(flags.clone()), App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window::Settings {
            size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
            ..window::Settings::default()
        })
        .subscription(App::subscription)
        .run()
}

/// Merges CLI overrides into the loaded configuration.
fn resolve_config(flags: &Flags) -> Config {
    let loaded = match &flags.config_path {
        Some(path) => config::load_from_path(path),
        None => config::load(),
    };
    let mut config = loaded.unwrap_or_else(|err| {
        log::warn!("Falling back to default settings: {}", err);
        Config::default()
    });

    if flags.duration_ms.is_some() {
        config.default_duration_ms = flags.duration_ms;
    }
    if flags.tick_ms.is_some() {
        config.tick_interval_ms = flags.tick_ms;
    }
    config
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let queue_config = resolve_config(&flags).queue_config();
        log::info!(
            "Starting with {} ms toasts, {} ms ticks",
            queue_config.default_duration.as_millis(),
            queue_config.tick_interval.as_millis()
        );

        let app = App {
            queue: ToastQueue::new(queue_config),
            created: 0,
        };
        (app, Task::none())
    }

    fn title(&self) -> String {
        String::from("Iced Toast")
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Add(kind) => {
                self.created += 1;
                let mut request =
                    ToastRequest::new(format!("{} toast #{}", kind.label(), self.created));
                if let Some(icon) = kind.icon() {
                    request = request.icon(icon);
                }
                self.queue.add_with(request);
            }
            Message::AddLong => {
                self.created += 1;
                let duration: Duration = self.queue.config().default_duration.as_duration() * 2;
                self.queue.add_with(
                    ToastRequest::new(format!("Long toast #{}", self.created))
                        .icon(ToastIcon::Named("⏳".to_string()))
                        .duration(duration),
                );
            }
            Message::Clear => self.queue.clear(),
            Message::Toast(message) => toast::update(&mut self.queue, &message),
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        let buttons = Kind::ALL.iter().fold(
            Row::new().spacing(spacing::XS),
            |row, kind| row.push(button(Text::new(kind.label())).on_press(Message::Add(*kind))),
        );
        let buttons = buttons
            .push(button(Text::new("Long")).on_press(Message::AddLong))
            .push(button(Text::new("Clear")).on_press(Message::Clear));

        let status = Text::new(format!(
            "{:?} - {} waiting",
            self.queue.state(),
            self.queue.backlog_len()
        ));

        let controls = Container::new(
            Column::new()
                .spacing(spacing::MD)
                .align_x(alignment::Horizontal::Center)
                .push(buttons)
                .push(status),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

        Stack::new()
            .push(controls)
            .push(Toast::view_overlay(&self.queue).map(Message::Toast))
            .into()
    }

    fn subscription(&self) -> Subscription<Message> {
        toast::subscription(&self.queue).map(Message::Toast)
    }
}
