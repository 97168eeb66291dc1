//! The actual configuration: groups, keybindings, layouts, bar widgets
//! and rules, declared in source and validated on every build.
//!
//! The host runtime links tatami as a library and picks these tables up
//! at startup; running this binary directly performs a config check,
//! validating the tables and dry-running the placement and fallback
//! policy against an in-memory runtime.
//!
//! The comments are a tour through how a configuration is put together.

use std::error::Error;

use tracing::{info, Level};
use tracing_subscriber::fmt as logger;

use tatami::bindings::{BindAction, Keybinds, Keymap};
use tatami::config::{no_checks, BarPosition, BarSpec, LayoutKind, LayoutSpec, MatchRule, Widget};
use tatami::core::{Group, GroupRoster, WindowAttrs};
use tatami::hooks::RawEvent;
use tatami::runtime::{DummyRuntime, GroupState};
use tatami::types::Color;
use tatami::types::Direction::*;
use tatami::{Callbacks, Config};

use BindAction::*;

//* defining keybinds and their associated actions
fn keybinds() -> Vec<(&'static str, BindAction)> {
    vec![
        ("M-Return", Spawn("alacritty".into())),
        ("M-r", Spawn("dmenu_run -b".into())),
        ("M-q", KillFocused),
        ("M-t", ToggleFloat),
        ("M-S-q", Quit),

        ("M-k", CycleFocus(Forward)),
        ("M-j", CycleFocus(Backward)),

        ("M-Left", CycleGroup(Backward)),
        ("M-Right", CycleGroup(Forward)),
        ("M-Tab", CycleLayout(Forward)),

        ("M-1", GotoGroup("term".into())),
        ("M-2", GotoGroup("web".into())),
        ("M-3", GotoGroup("chat".into())),
        ("M-4", GotoGroup("media".into())),

        ("M-S-1", SendToGroup("term".into())),
        ("M-S-2", SendToGroup("web".into())),
        ("M-S-3", SendToGroup("chat".into())),
        ("M-S-4", SendToGroup("media".into())),
    ]
}

//* groups, in the order fallback and placement walk them
fn groups() -> GroupRoster {
    let tiled = || vec![String::from("tall"), String::from("max")];

    GroupRoster::new(vec![
        Group::new("term", 0, tiled()),
        Group::new("web", 0, tiled()).with_rules([MatchRule::class("firefox")]),
        Group::new("chat", 1, tiled()).with_rules([
            MatchRule::class("discord"),
            MatchRule::class("TelegramDesktop"),
        ]),
        Group::new("media", 1, vec![String::from("max")])
            .with_rules([MatchRule::class("mpv"), MatchRule::class("Spotify")]),
    ])
}

pub fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    // set up the logger
    logger::fmt()
        // log all events up to DEBUG
        .with_max_level(Level::DEBUG)
        // don't use timestamps
        .without_time()
        // don't show source filename
        .with_file(false)
        // don't show source code line
        .with_line_number(false)
        // register as global
        .try_init()?;

    //* 1: parse the keybind table
    let keymap = Keymap::new();
    let mut binds = Keybinds::new();
    for (kb, action) in keybinds() {
        binds.insert(keymap.parse_keybinding(kb)?, action);
    }

    //* 2: assemble and validate the configuration
    let config = Config::builder()
        .groups(groups())
        .layouts(vec![
            LayoutSpec::new("tall", LayoutKind::DTiled)
                .ratio(0.55)
                .gap_px(8),
            LayoutSpec::new("max", LayoutKind::Max),
            LayoutSpec::new("floating", LayoutKind::Floating),
        ])
        .keybinds(binds)
        .bar(BarSpec::new(
            BarPosition::Top,
            24,
            vec![
                Widget::GroupBox {
                    highlight: Color::from(0x88aadd),
                },
                Widget::CurrentLayout,
                Widget::WindowName,
                Widget::Spacer,
                Widget::Systray,
                Widget::Battery { low_threshold: 15 },
                Widget::Clock {
                    format: String::from("%a %d %b %H:%M"),
                },
            ],
        ))
        .float_rules(vec![
            MatchRule::transient(),
            MatchRule::class("Pavucontrol"),
            MatchRule::instance("pinentry"),
        ])
        .autostart(["picom", "nm-applet"])
        .border_px(2)
        .focused(Color::from(0xdddddd))
        .unfocused(Color::from(0x555555))
        .urgent(Color::from(0xee0000))
        .finish(no_checks)?;

    info!(
        "configuration valid: {} groups, {} keybinds, {} layouts",
        config.groups().len(),
        config.keybinds().len(),
        config.layouts().len(),
    );

    //* 3: dry-run the placement and fallback policy against an
    //*    in-memory runtime, the way the host would invoke it
    let mut rt = DummyRuntime::new(config.groups().iter().map(|g| GroupState::new(g.name())));
    let mut callbacks: Callbacks<'_, DummyRuntime> = Callbacks::new(&config);

    callbacks.dispatch(
        &mut rt,
        RawEvent::WindowCreated {
            window: Some(1),
            attrs: Some(WindowAttrs::new("Navigator", "firefox")),
        },
    )?;

    if let Some((group, _remaining)) = rt.kill_window(1) {
        callbacks.dispatch(
            &mut rt,
            RawEvent::WindowKilled {
                window: Some(1),
                group: Some(group),
            },
        )?;
    }

    for command in rt.commands() {
        info!("would issue: {:?}", command);
    }

    Ok(())
}
