// SPDX-License-Identifier: MPL-2.0
//! Application root state.
//!
//! `App` wires configuration, localization, the Roku client and the UI
//! components together and turns component events into side effects
//! (network requests, notifications).

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::i18n::I18n;
use crate::roku::RokuClient;
use crate::ui::brand_icon::{BrandIcon, DisplayIcon};
use crate::ui::notifications;
use crate::ui::page;
use crate::ui::quick_controls::QuickControls;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    /// Resolved once at startup; `System` asks the OS only then.
    theme: Theme,
    user_name: String,
    quick_controls: QuickControls,
    roku: Option<RokuClient>,
    volume_steps: u32,
    poll_interval: Duration,
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("locale", &self.i18n.current_locale().to_string())
            .field("quick_controls_open", &self.quick_controls.is_open())
            .field("roku", &self.roku.as_ref().map(RokuClient::base_url))
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: f32 = 960.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 600.0;
pub const MIN_WINDOW_WIDTH: f32 = 640.0;
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;

pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        icon: crate::icon::load_window_icon(),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    // iced 0.14 wants an `Fn` boot closure.
    let boot = move || App::new(flags.clone());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads settings, resolves the TV address and builds the initial state.
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) =
            config::load_with_override(flags.config_dir.as_deref().map(PathBuf::from));
        let env_address = config::roku_address_from_env();
        let mut app = Self::from_config(
            &config,
            flags.lang,
            flags.roku_ip.as_deref(),
            env_address.as_deref(),
        );

        if let Some(key) = config_warning {
            app.notifications.push(notifications::Notification::warning(key));
        }

        (app, Task::none())
    }

    /// Builds state from an already loaded configuration. `cli_roku_ip` and
    /// `env_roku_ip` are the `--roku-ip` and `ROKU_IP` values.
    pub fn from_config(
        config: &Config,
        lang: Option<String>,
        cli_roku_ip: Option<&str>,
        env_roku_ip: Option<&str>,
    ) -> Self {
        let i18n = I18n::new(lang, config);
        let address = config::resolve_roku_address(cli_roku_ip, env_roku_ip, &config.roku);

        let roku = address.and_then(|address| {
            match RokuClient::new(&address, config.roku.request_timeout()) {
                Ok(client) => {
                    tracing::info!(url = client.base_url(), "TV quick controls enabled");
                    Some(client)
                }
                Err(err) => {
                    tracing::warn!(%address, error = %err, "invalid TV address");
                    None
                }
            }
        });
        if roku.is_none() {
            tracing::info!("no TV address configured, quick controls show a hint");
        }

        Self {
            i18n,
            theme: config.general.theme_mode.to_theme(),
            user_name: config.general.user_name().to_string(),
            quick_controls: QuickControls::new(roku.is_some()),
            roku,
            volume_steps: config.roku.volume_steps(),
            poll_interval: config.roku.poll_interval(),
            notifications: notifications::Manager::new(),
        }
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription(self.quick_controls.is_open());
        let tick_sub =
            subscription::create_tick_subscription(self.notifications.has_notifications());
        let poll_sub = subscription::create_poll_subscription(
            self.quick_controls.wants_polling(),
            self.poll_interval,
        );

        Subscription::batch([event_sub, tick_sub, poll_sub])
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &self.i18n,
            quick_controls: &mut self.quick_controls,
            notifications: &mut self.notifications,
            roku: self.roku.as_ref(),
            volume_steps: self.volume_steps,
        };

        match message {
            Message::QuickControls(quick_controls_message) => {
                update::handle_quick_controls(&mut ctx, quick_controls_message)
            }
            Message::Notification(notification_message) => {
                update::handle_notification(&mut ctx, &notification_message)
            }
            Message::Tick(_) => update::handle_tick(&mut ctx),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            user_name: &self.user_name,
            quick_controls: &self.quick_controls,
            notifications: &self.notifications,
        })
    }

    /// Greeting shown at the top of the page.
    #[must_use]
    pub fn heading(&self) -> String {
        page::heading(&self.i18n, &self.user_name)
    }

    /// Brand icons in page order.
    #[must_use]
    pub fn brand_icons(&self) -> Vec<DisplayIcon> {
        BrandIcon::ALL.iter().map(|brand| brand.display_icon()).collect()
    }

    #[must_use]
    pub fn trigger_label(&self) -> String {
        page::trigger_label(&self.i18n)
    }

    #[must_use]
    pub fn quick_controls(&self) -> &QuickControls {
        &self.quick_controls
    }

    /// Title of the mounted sheet, `None` while closed.
    #[must_use]
    pub fn overlay_title(&self) -> Option<String> {
        self.quick_controls.title(&self.i18n)
    }

    #[must_use]
    pub fn notifications(&self) -> &notifications::Manager {
        &self.notifications
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theming::ThemeMode;

    fn app_with_theme(theme_mode: ThemeMode) -> App {
        let mut config = Config::default();
        config.general.theme_mode = theme_mode;
        App::from_config(&config, Some("en-US".to_string()), None, None)
    }

    #[test]
    fn explicit_theme_modes_are_resolved_at_startup() {
        assert_eq!(app_with_theme(ThemeMode::Light).theme(), Theme::Light);
        assert_eq!(app_with_theme(ThemeMode::Dark).theme(), Theme::Dark);
    }

    #[test]
    fn system_theme_is_stable_across_calls() {
        let app = app_with_theme(ThemeMode::System);
        let first = app.theme();
        assert!(first == Theme::Light || first == Theme::Dark);
        assert_eq!(app.theme(), first);
    }

    #[test]
    fn env_address_enables_controls_when_no_cli_value() {
        let app = App::from_config(&Config::default(), None, None, Some("10.0.0.9"));
        assert!(app.quick_controls().has_device());
        assert_eq!(app.roku.as_ref().map(RokuClient::base_url), Some("http://10.0.0.9:8060"));
    }

    #[test]
    fn no_address_disables_controls() {
        let app = App::from_config(&Config::default(), None, None, None);
        assert!(!app.quick_controls().has_device());
    }
}
