// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::{App, Message, Screen};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::matting::view as matting_view;
use crate::ui::notifications::Toast;
use crate::ui::settings;
use crate::ui::styles;
use iced::widget::{button, Column, Row, Space, Stack, Text};
use iced::{alignment, Element, Length};

/// Renders the current application view based on the active screen.
pub fn view(app: &App) -> Element<'_, Message> {
    let screen: Element<'_, Message> = match app.screen {
        Screen::Matting => view_matting(app),
        Screen::Settings => settings::view(settings::ViewContext {
            i18n: &app.i18n,
            theme_mode: app.theme_mode,
        })
        .map(Message::Settings),
    };

    // Toasts float above whatever screen is active.
    let toasts = Toast::view_overlay(&app.notifications, &app.i18n).map(Message::Notification);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(screen)
        .push(toasts)
        .into()
}

fn view_matting(app: &App) -> Element<'_, Message> {
    let header = Row::new()
        .align_y(alignment::Vertical::Center)
        .padding([spacing::XS, spacing::LG])
        .push(Text::new(app.i18n.tr("window-title")).size(typography::TITLE_MD))
        .push(Space::new().width(Length::Fill))
        .push(
            button(icons::sized(icons::cog(), sizing::ICON_MD))
                .padding(spacing::XXS)
                .style(styles::button::ghost)
                .on_press(Message::SwitchScreen(Screen::Settings)),
        );

    let env = matting_view::ViewEnv {
        i18n: &app.i18n,
        context: &app.context,
    };
    let widget = matting_view::view(&app.widget, &env).map(Message::Matting);

    Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(header)
        .push(widget)
        .into()
}
