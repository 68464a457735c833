// SPDX-License-Identifier: MPL-2.0
//! Settings screen: language and theme selection.
//!
//! Both choices persist to `settings.toml` immediately; there is no
//! apply/cancel flow.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::widget::{button, Column, Container, Row, Text};
use iced::{alignment, Element, Length, Theme};
use unic_langid::LanguageIdentifier;

/// Picks the toggle-group style for a selected/unselected button.
fn toggle_style(selected: bool) -> fn(&Theme, button::Status) -> button::Style {
    if selected {
        styles::button::selected
    } else {
        styles::button::unselected
    }
}

/// Messages emitted by the settings screen.
#[derive(Debug, Clone)]
pub enum Message {
    LanguageSelected(LanguageIdentifier),
    ThemeModeSelected(ThemeMode),
    BackRequested,
}

/// Context required to render the settings screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub theme_mode: ThemeMode,
}

/// Renders the settings screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let back_button = button(
        Row::new()
            .spacing(spacing::XS)
            .align_y(alignment::Vertical::Center)
            .push(icons::sized(icons::chevron_left(), sizing::ICON_SM))
            .push(Text::new(ctx.i18n.tr("settings-back")).size(typography::BODY)),
    )
    .padding([spacing::XXS, spacing::SM])
    .style(styles::button::ghost)
    .on_press(Message::BackRequested);

    let title = Text::new(ctx.i18n.tr("settings-title")).size(typography::TITLE_LG);

    let language_label = Text::new(ctx.i18n.tr("settings-language")).size(typography::BODY);
    let mut language_row = Row::new().spacing(spacing::XS);
    for locale in &ctx.i18n.available_locales {
        let selected = locale == ctx.i18n.current_locale();
        language_row = language_row.push(
            button(Text::new(locale.to_string()).size(typography::BODY))
                .padding([spacing::XXS, spacing::SM])
                .style(toggle_style(selected))
                .on_press(Message::LanguageSelected(locale.clone())),
        );
    }

    let theme_label = Text::new(ctx.i18n.tr("settings-theme")).size(typography::BODY);
    let mut theme_row = Row::new().spacing(spacing::XS);
    for mode in ThemeMode::ALL {
        let selected = mode == ctx.theme_mode;
        theme_row = theme_row.push(
            button(Text::new(ctx.i18n.tr(mode.i18n_key())).size(typography::BODY))
                .padding([spacing::XXS, spacing::SM])
                .style(toggle_style(selected))
                .on_press(Message::ThemeModeSelected(mode)),
        );
    }

    let content = Column::new()
        .spacing(spacing::LG)
        .max_width(480.0)
        .push(back_button)
        .push(title)
        .push(
            Column::new()
                .spacing(spacing::XS)
                .push(language_label)
                .push(language_row),
        )
        .push(
            Column::new()
                .spacing(spacing::XS)
                .push(theme_label)
                .push(theme_row),
        );

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::XL)
        .align_x(alignment::Horizontal::Center)
        .into()
}
