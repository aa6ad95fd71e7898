// SPDX-License-Identifier: MPL-2.0
//! Toast widget rendering the queue's current item.
//!
//! The widget shows the current toast as a card with an icon glyph, the
//! description, a dismiss button and a countdown bar. Pressing the card
//! pauses the timer; releasing it or dragging the pointer off the card
//! resumes. The dismiss button removes the toast early.

use super::design_tokens::{
    border, opacity, palette, radius, shadow, sizing, spacing, typography,
};
use crate::queue::{TimerId, ToastIcon, ToastItem, ToastQueue};
use iced::widget::{button, container, mouse_area, text, Column, Container, Row, Text};
use iced::{alignment, time, Color, Element, Length, Subscription, Theme};

/// Resolution of the countdown bar.
const PROGRESS_STEPS: u16 = 1000;

/// Messages produced by the toast widget and its timer subscription.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Pointer pressed on the toast.
    Pause,
    /// Pointer released, or left the toast.
    Resume,
    /// Dismiss button pressed.
    Dismiss,
    /// Periodic tick from the timer with the given id.
    Tick(TimerId),
}

/// Applies a widget message to the queue.
pub fn update(queue: &mut ToastQueue, message: &Message) {
    match message {
        Message::Pause => queue.pause(),
        Message::Resume => queue.resume(),
        Message::Dismiss => {
            queue.dismiss();
        }
        Message::Tick(timer) => {
            queue.tick(*timer);
        }
    }
}

/// Ticks for the queue's active timer, or nothing while idle or paused.
///
/// The subscription is keyed by the timer id, so a restarted timer gets a
/// fresh stream and ticks from the previous one stop.
pub fn subscription(queue: &ToastQueue) -> Subscription<Message> {
    match queue.active_timer() {
        Some(timer) => time::every(queue.config().tick_interval.as_duration())
            .with(timer)
            .map(|(timer, _)| Message::Tick(timer)),
        None => Subscription::none(),
    }
}

/// Toast widget.
pub struct Toast;

impl Toast {
    /// Renders a single toast.
    pub fn view(item: &ToastItem) -> Element<'_, Message> {
        let accent_color = accent_color(item.icon());

        let message_widget = Text::new(item.description())
            .size(typography::BODY)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.palette().text),
            });

        let dismiss_button = button(Text::new("✕").size(typography::BODY))
            .on_press(Message::Dismiss)
            .padding(spacing::XXS)
            .style(dismiss_button_style);

        // Layout: [icon] [message] [dismiss]
        let mut content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center);
        if let Some(icon) = item.icon() {
            content = content.push(
                Container::new(
                    Text::new(icon_glyph(icon))
                        .size(typography::BODY_LG)
                        .color(accent_color),
                )
                .padding(spacing::XXS),
            );
        }
        let content = content
            .push(
                Container::new(message_widget)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Left),
            )
            .push(dismiss_button);

        let card = Column::new()
            .spacing(spacing::XS)
            .push(content)
            .push(progress_bar(item.progress(), accent_color));

        let card = Container::new(card)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| toast_container_style(theme, accent_color));

        // A release outside the card never reaches the area, so leaving it
        // resumes too. Resume is a no-op when not paused.
        mouse_area(card)
            .on_press(Message::Pause)
            .on_release(Message::Resume)
            .on_exit(Message::Resume)
            .into()
    }

    /// Renders the overlay holding the current toast, if any.
    ///
    /// Positions the toast in the bottom-right corner.
    pub fn view_overlay(queue: &ToastQueue) -> Element<'_, Message> {
        match queue.current() {
            None => Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into(),
            Some(item) => Container::new(Self::view(item))
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(alignment::Horizontal::Right)
                .align_y(alignment::Vertical::Bottom)
                .padding(spacing::MD)
                .into(),
        }
    }
}

/// Accent color for an icon; toasts without one use the brand color.
#[must_use]
pub fn accent_color(icon: Option<&ToastIcon>) -> Color {
    match icon {
        Some(ToastIcon::Success) => palette::SUCCESS_500,
        Some(ToastIcon::Info) => palette::INFO_500,
        Some(ToastIcon::Warning) => palette::WARNING_500,
        Some(ToastIcon::Error) => palette::ERROR_500,
        Some(ToastIcon::Named(_)) | None => palette::PRIMARY_500,
    }
}

fn icon_glyph(icon: &ToastIcon) -> &str {
    match icon {
        ToastIcon::Success => "✓",
        ToastIcon::Info => "ℹ",
        ToastIcon::Warning | ToastIcon::Error => "⚠",
        ToastIcon::Named(name) => name,
    }
}

/// Splits `progress` into filled and remaining portions of the bar.
fn progress_portions(progress: f32) -> (u16, u16) {
    let filled = (progress.clamp(0.0, 1.0) * f32::from(PROGRESS_STEPS)).round() as u16;
    (filled, PROGRESS_STEPS - filled)
}

/// Countdown bar: a filled segment followed by a faded remainder.
fn progress_bar<'a>(progress: f32, accent_color: Color) -> Element<'a, Message> {
    let (filled, remaining) = progress_portions(progress);
    let segment = |portion: u16, alpha: f32| -> Container<'a, Message> {
        Container::new(Row::new())
            .width(Length::FillPortion(portion))
            .height(Length::Fixed(sizing::PROGRESS_HEIGHT))
            .style(move |_theme: &Theme| container::Style {
                background: Some(iced::Background::Color(Color {
                    a: alpha,
                    ..accent_color
                })),
                border: iced::Border {
                    radius: radius::SM.into(),
                    ..Default::default()
                },
                ..Default::default()
            })
    };

    let mut bar = Row::new().width(Length::Fill);
    if filled > 0 {
        bar = bar.push(segment(filled, opacity::OPAQUE));
    }
    if remaining > 0 {
        bar = bar.push(segment(remaining, opacity::OVERLAY_SUBTLE));
    }
    bar.into()
}

/// Style function for the toast container.
fn toast_container_style(theme: &Theme, accent_color: Color) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(iced::Background::Color(bg_color)),
        border: iced::Border {
            color: accent_color,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

/// Style function for the dismiss button.
fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;
    let hover_radius = iced::Border {
        radius: radius::SM.into(),
        ..Default::default()
    };

    match status {
        button::Status::Active => button::Style {
            background: None,
            text_color: base.text,
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(iced::Background::Color(Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::GRAY_400
            })),
            text_color: base.text,
            border: hover_radius,
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Pressed => button::Style {
            background: Some(iced::Background::Color(Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::GRAY_400
            })),
            text_color: base.text,
            border: hover_radius,
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: None,
            text_color: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..base.text
            },
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
    }
}
