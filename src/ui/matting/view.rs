// SPDX-License-Identifier: MPL-2.0
//! View rendering for the matting widget.
//!
//! Exactly one of the three screens renders per frame, derived from the
//! processing context. The preview area doubles as the drop target; its
//! border lights up while a file hovers over the window.

use super::component::{Message, State};
use super::samples::SAMPLE_IMAGES;
use super::view_state::ViewState;
use crate::i18n::fluent::I18n;
use crate::matting::Context;
use crate::ui::components::checkerboard;
use crate::ui::design_tokens::{opacity, palette, radius, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::widgets::AnimatedSpinner;
use iced::widget::{button, image, Column, Container, Row, Stack, Text};
use iced::{alignment, Color, Element, Length};

/// Environment information required to render the widget.
pub struct ViewEnv<'a> {
    pub i18n: &'a I18n,
    pub context: &'a Context,
}

/// Renders the matting widget.
pub fn view<'a>(state: &'a State, env: &ViewEnv<'a>) -> Element<'a, Message> {
    let view_state = ViewState::from_flags(
        env.context.is_processing(),
        env.context.has_processed_image(),
    );

    let mut column = Column::new()
        .spacing(spacing::MD)
        .padding(spacing::LG)
        .width(Length::Fill)
        .height(Length::Fill);

    if matches!(view_state, ViewState::Result { .. }) {
        column = column.push(new_image_button(env.i18n));
    }

    let preview_content: Element<'a, Message> = match view_state {
        ViewState::Upload => upload_controls(env.i18n),
        ViewState::Processing => processing_overlay(state, env),
        ViewState::Result { reprocessing } => result_view(state, env, reprocessing),
    };

    let preview = Container::new(preview_content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::XS)
        .style(styles::container::drop_zone(state.is_dragging()));

    column = column.push(preview);

    if view_state.shows_upload_screen() {
        column = column.push(samples_strip(state, env.i18n));
    }

    column.into()
}

/// "New Image" back action shown above the preview once a result exists.
fn new_image_button(i18n: &I18n) -> Element<'_, Message> {
    let content = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(icons::sized(icons::chevron_left(), sizing::ICON_SM))
        .push(Text::new(i18n.tr("result-new-image")).size(typography::BODY));

    Row::new()
        .push(
            button(content)
                .padding([spacing::XXS, spacing::SM])
                .style(styles::button::ghost)
                .on_press(Message::NewImageRequested),
        )
        .into()
}

/// Upload screen: icon, upload button, and the drop hint.
fn upload_controls(i18n: &I18n) -> Element<'_, Message> {
    let icon = icons::sized(
        icons::tinted(icons::upload(), palette::GRAY_400),
        sizing::ICON_XL,
    );

    let upload_button = button(Text::new(i18n.tr("upload-button")))
        .padding([spacing::SM, spacing::LG])
        .style(styles::button::primary)
        .on_press(Message::UploadRequested);

    let filetype_notice = Text::new(i18n.tr("upload-filetype-notice"))
        .size(typography::CAPTION)
        .color(palette::GRAY_400);

    let drop_hint = Text::new(i18n.tr("upload-drop-hint"))
        .size(typography::CAPTION)
        .color(Color {
            a: 0.5,
            ..palette::GRAY_400
        });

    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(icon)
        .push(upload_button)
        .push(filetype_notice)
        .push(drop_hint);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

/// Processing screen: the original photograph dimmed under a scrim with the
/// spinner, stage message, and stopwatch.
fn processing_overlay<'a>(state: &'a State, env: &ViewEnv<'a>) -> Element<'a, Message> {
    let mut stack = Stack::new().width(Length::Fill).height(Length::Fill);

    if let Some(original) = env.context.original_image() {
        stack = stack.push(
            Container::new(
                image::Image::new(original.handle.clone())
                    .opacity(opacity::DIMMED_RESULT)
                    .width(Length::Fill)
                    .height(Length::Fill),
            )
            .width(Length::Fill)
            .height(Length::Fill),
        );
    }

    if let Some(message_key) = env.context.process_message() {
        stack = stack.push(scrim(state, env, message_key));
    }

    stack.into()
}

/// The translucent overlay with spinner, message, and elapsed/estimated time.
fn scrim<'a>(state: &'a State, env: &ViewEnv<'a>, message_key: &'static str) -> Element<'a, Message> {
    let spinner =
        AnimatedSpinner::new(palette::WHITE, state.spinner_rotation()).into_element::<Message>();

    let message = Text::new(env.i18n.tr(message_key)).size(typography::BODY);

    let status = Text::new(state.stopwatch.display(env.context.inference_time()))
        .size(typography::CAPTION)
        .color(palette::GRAY_200);

    let content = Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(spinner)
        .push(message)
        .push(status);

    let panel = Container::new(content)
        .padding(spacing::LG)
        .style(styles::overlay::panel(radius::LG));

    Container::new(panel)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::overlay::scrim)
        .into()
}

/// Result screen: the cut-out over a checkerboard with a download action.
/// Dimmed under a fresh scrim while re-processing.
fn result_view<'a>(state: &'a State, env: &ViewEnv<'a>, reprocessing: bool) -> Element<'a, Message> {
    let Some(processed) = env.context.processed_image() else {
        // Unreachable by construction: Result implies a processed image.
        return Container::new(Text::new("")).into();
    };

    let cutout_opacity = if reprocessing {
        opacity::DIMMED_RESULT
    } else {
        opacity::OPAQUE
    };

    let cutout = Container::new(
        image::Image::new(processed.handle.clone())
            .opacity(cutout_opacity)
            .width(Length::Fill)
            .height(Length::Fill),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center);

    let mut stack = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(checkerboard::wrap(cutout));

    if reprocessing {
        if let Some(message_key) = env.context.process_message() {
            stack = stack.push(scrim(state, env, message_key));
        }
    }

    let download_button = button(
        Row::new()
            .spacing(spacing::XS)
            .align_y(alignment::Vertical::Center)
            .push(icons::sized(
                icons::tinted(icons::download(), palette::WHITE),
                sizing::ICON_SM,
            ))
            .push(Text::new(env.i18n.tr("result-download"))),
    )
    .padding([spacing::SM, spacing::LG])
    .style(styles::button::primary)
    .on_press(Message::DownloadRequested);

    Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(Container::new(stack).width(Length::Fill).height(Length::Fill))
        .push(download_button)
        .into()
}

/// Sample strip shown under the upload screen.
fn samples_strip<'a>(state: &'a State, i18n: &I18n) -> Element<'a, Message> {
    let caption = Text::new(i18n.tr("samples-caption"))
        .size(typography::BODY)
        .color(palette::GRAY_400);

    let mut row = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center);

    for (index, sample) in SAMPLE_IMAGES.iter().enumerate() {
        let thumb: Element<'a, Message> = match state.thumbnails.get(index) {
            Some(handle) => image::Image::new(handle.clone())
                .content_fit(iced::ContentFit::Cover)
                .width(Length::Fixed(sizing::SAMPLE_THUMB))
                .height(Length::Fixed(sizing::SAMPLE_THUMB))
                .into(),
            None => Container::new(
                Text::new(sample.alt)
                    .size(typography::CAPTION)
                    .color(palette::GRAY_400),
            )
            .width(Length::Fixed(sizing::SAMPLE_THUMB))
            .height(Length::Fixed(sizing::SAMPLE_THUMB))
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .into(),
        };

        row = row.push(
            button(thumb)
                .padding(spacing::XXS)
                .style(styles::button::sample)
                .on_press(Message::SampleSelected(index)),
        );
    }

    Column::new()
        .spacing(spacing::XS)
        .push(caption)
        .push(row)
        .into()
}
