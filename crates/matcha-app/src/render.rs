//! Plain-text rendering of the derived view.
//!
//! Stands in for the real renderer: one string per frame describing the
//! surfaces the view selection asks for, including overlay and app
//! content. Nothing here mutates state.

use std::fmt::Write;

use matcha_shell::Shell;
use matcha_shell::apps::assistant::ChatRole;
use matcha_shell::controlcenter::QuickToggle;
use matcha_shell::homescreen;
use matcha_shell::lockscreen::PIN_LEN;
use matcha_shell::session::Overlay;
use matcha_shell::view::{MobileSurface, ViewSelection};
use matcha_types::app::AppId;

/// Render the current frame as text.
pub fn render(shell: &Shell) -> String {
    let mut out = String::new();
    match shell.view() {
        ViewSelection::Mobile {
            surface,
            status_bar,
            overlay,
            wallpaper,
        } => {
            if status_bar {
                let _ = writeln!(
                    out,
                    "[status] {}  {}",
                    shell.status().clock(),
                    shell.status().date()
                );
            }
            if wallpaper.blurred {
                out.push_str("[wallpaper] blurred\n");
            }
            match surface {
                MobileSurface::Lock => render_lock(shell, &mut out),
                MobileSurface::Home => render_home(&mut out),
                MobileSurface::App(app) => render_app(shell, app, &mut out),
            }
            if let Some(overlay) = overlay {
                render_overlay(shell, overlay, &mut out);
            }
        },
        ViewSelection::Desktop {
            windows,
            taskbar,
            overlay,
            ..
        } => {
            out.push_str("[desktop] home backdrop\n");
            for w in &windows {
                let marker = if w.focused { "*" } else { " " };
                let _ = writeln!(out, "  window{marker} {}", w.app.label());
                if w.focused {
                    render_app(shell, w.app, &mut out);
                }
            }
            let pins: Vec<String> = taskbar
                .entries
                .iter()
                .map(|e| {
                    let mut tag = e.app.token().to_string();
                    if e.focused {
                        tag.push('*');
                    } else if e.open {
                        tag.push('+');
                    }
                    tag
                })
                .collect();
            let _ = writeln!(out, "[taskbar] {}  {}", pins.join(" "), taskbar.clock);
            if let Some(overlay) = overlay {
                render_overlay(shell, overlay, &mut out);
            }
        },
    }
    out
}

fn render_lock(shell: &Shell, out: &mut String) {
    let lock = shell.lock_screen();
    let dots: String = (0..PIN_LEN)
        .map(|i| if i < lock.entered_len() { 'o' } else { '.' })
        .collect();
    let _ = writeln!(
        out,
        "[lock] {}  pin {dots}{}",
        shell.status().clock(),
        if lock.is_rejected() { "  (wrong pin)" } else { "" }
    );
}

fn render_home(out: &mut String) {
    let _ = writeln!(out, "[home] {}", homescreen::GLANCE.headline);
    let row = |apps: &[AppId]| {
        apps.iter()
            .map(|a| a.label())
            .collect::<Vec<_>>()
            .join("  ")
    };
    let _ = writeln!(out, "  favorites: {}", row(homescreen::favorites()));
    let _ = writeln!(out, "  dock: {}", row(homescreen::dock()));
}

fn render_app(shell: &Shell, app: AppId, out: &mut String) {
    match app {
        AppId::Settings => {
            if let Some(settings) = shell.apps().settings() {
                let _ = writeln!(out, "[settings] search: \"{}\"", settings.query());
                for item in settings.matches() {
                    let _ = writeln!(out, "  {} -- {}", item.label, item.detail);
                }
            }
        },
        AppId::Camera => {
            if let Some(cam) = shell.apps().camera() {
                let _ = writeln!(out, "[camera] zoom {}  mode {}", cam.zoom(), cam.mode());
            }
        },
        AppId::Browser => {
            if let Some(browser) = shell.apps().browser() {
                let _ = writeln!(
                    out,
                    "[browser] {}{}",
                    browser.current_url(),
                    if browser.is_loading() { "  (loading)" } else { "" }
                );
            }
        },
        AppId::Assistant => {
            if let Some(assistant) = shell.apps().assistant() {
                out.push_str("[assistant]\n");
                for msg in assistant.transcript() {
                    let who = match msg.role {
                        ChatRole::User => "you",
                        ChatRole::Assistant => "ai",
                    };
                    let _ = writeln!(out, "  {who}> {}", msg.content);
                }
                if assistant.is_loading() {
                    out.push_str("  ai> ...\n");
                }
            }
        },
        other => {
            let _ = writeln!(out, "[{}] (empty surface)", other.token());
        },
    }
}

fn render_overlay(shell: &Shell, overlay: Overlay, out: &mut String) {
    match overlay {
        Overlay::ControlCenter => {
            let cc = shell.control_center();
            let _ = writeln!(out, "[control-center] brightness {}%", cc.brightness());
            for tile in QuickToggle::ALL {
                let state = if cc.is_on(*tile) { "on" } else { "off" };
                let _ = writeln!(out, "  {} {state}", tile.label());
            }
        },
        Overlay::Launcher => {
            let launcher = shell.launcher();
            let apps: Vec<&str> = launcher.grid().iter().map(|a| a.label()).collect();
            let _ = writeln!(
                out,
                "[launcher] \"{}\": {}",
                launcher.query(),
                apps.join("  ")
            );
        },
    }
}
