//! Command interpreter for the driver.
//!
//! Each stdin line maps onto one shell operation (or a small burst, for
//! PIN entry). Output is returned as text so tests can assert on it.

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use matcha_net::TextGenService;
use matcha_shell::Shell;
use matcha_shell::controlcenter::QuickToggle;
use matcha_shell::lockscreen::KeypadOutcome;
use matcha_shell::session::Overlay;
use matcha_types::app::AppId;

/// How long `wait` polls for an assistant reply before giving up.
const WAIT_BUDGET: Duration = Duration::from_secs(60);

/// Result of one interpreted line.
#[derive(Debug, PartialEq, Eq)]
pub enum CommandResult {
    Output(String),
    Quit,
}

const HELP: &str = "\
commands:
  pin <digits>        enter lock screen digits
  backspace | dismiss pin pad editing
  open <app>          open or refocus an app
  close <app>         close an app
  focus <app>         focus an open window (desktop)
  layout              toggle mobile/desktop
  cc | launcher       toggle an overlay
  search <text>       launcher or settings search
  brightness <0-100>  control center slider
  tile <name>         flip a quick toggle (internet, bluetooth, dnd,
                      flashlight, rotate, saver, zen, night)
  zoom <stop>         camera zoom (.5x 1x 2x 5x)
  mode <name>         camera mode (Selfie Portrait Photo Night Panorama)
  go <url or text>    browser navigate
  loaded | reload | pageback
  say <text>          ask the assistant
  wait                block until the assistant replies
  quit";

/// Interpret one line against the shell.
pub fn execute(
    shell: &mut Shell,
    service: &Arc<dyn TextGenService>,
    line: &str,
) -> CommandResult {
    let line = line.trim();
    let (cmd, rest) = match line.split_once(char::is_whitespace) {
        Some((c, r)) => (c, r.trim()),
        None => (line, ""),
    };

    let output = match cmd {
        "" => String::new(),
        "help" => HELP.to_string(),
        "quit" | "exit" => return CommandResult::Quit,

        "pin" => enter_pin(shell, rest),
        "backspace" => {
            shell.pin_backspace();
            String::new()
        },
        "dismiss" => {
            shell.dismiss_pin_error();
            String::new()
        },

        "open" | "close" | "focus" => match rest.parse::<AppId>() {
            Ok(id) => {
                match cmd {
                    "open" => shell.open_app(id),
                    "close" => shell.close_app(id),
                    _ => {
                        if !shell.focus_app(id) {
                            return CommandResult::Output(format!("{id} is not open"));
                        }
                    },
                }
                String::new()
            },
            Err(e) => e.to_string(),
        },

        "layout" => {
            shell.toggle_layout();
            String::new()
        },
        "cc" => {
            shell.toggle_overlay(Overlay::ControlCenter);
            String::new()
        },
        "launcher" => {
            shell.toggle_overlay(Overlay::Launcher);
            String::new()
        },

        "search" => search(shell, rest),
        "brightness" => match rest.parse::<u8>() {
            Ok(v) => {
                shell.control_center_mut().set_brightness(v);
                String::new()
            },
            Err(_) => "brightness wants a number 0-100".to_string(),
        },
        "tile" => match quick_toggle(rest) {
            Some(tile) => {
                let on = shell.control_center_mut().toggle(tile);
                format!("{} {}", tile.label(), if on { "on" } else { "off" })
            },
            None => format!("unknown tile: {rest}"),
        },

        "zoom" => with_camera(shell, |cam| {
            if cam.select_zoom(rest) {
                String::new()
            } else {
                format!("unknown zoom stop: {rest}")
            }
        }),
        "mode" => with_camera(shell, |cam| {
            if cam.select_mode(rest) {
                String::new()
            } else {
                format!("unknown mode: {rest}")
            }
        }),

        "go" => with_browser(shell, |browser| {
            browser.set_address(rest);
            if browser.navigate() {
                String::new()
            } else {
                "nothing to navigate to".to_string()
            }
        }),
        "loaded" => with_browser(shell, |browser| {
            browser.load_complete();
            String::new()
        }),
        "reload" => with_browser(shell, |browser| {
            browser.reload();
            String::new()
        }),
        "pageback" => with_browser(shell, |browser| {
            if browser.back() {
                String::new()
            } else {
                "no history".to_string()
            }
        }),

        "say" => {
            match shell.apps_mut().assistant_mut() {
                Some(assistant) => assistant.set_input(rest),
                None => return CommandResult::Output("the assistant is not open".to_string()),
            }
            if shell.submit_assistant(service) {
                String::new()
            } else {
                "nothing sent (empty input or still thinking)".to_string()
            }
        },
        "wait" => wait_for_assistant(shell),

        other => format!("unknown command: {other} (try 'help')"),
    };
    CommandResult::Output(output)
}

fn enter_pin(shell: &mut Shell, digits: &str) -> String {
    for d in digits.chars() {
        match shell.press_pin_key(d) {
            KeypadOutcome::Unlocked => return "unlocked".to_string(),
            KeypadOutcome::Rejected => return "wrong pin".to_string(),
            KeypadOutcome::Pending => {},
        }
    }
    String::new()
}

/// Route a search query to whichever surface is taking input.
fn search(shell: &mut Shell, query: &str) -> String {
    if shell.session().overlay_open(Overlay::Launcher) {
        shell.launcher_mut().set_query(query);
        return String::new();
    }
    if let Some(settings) = shell.apps_mut().settings_mut() {
        settings.set_query(query);
        return String::new();
    }
    "nothing to search (open the launcher or settings)".to_string()
}

fn quick_toggle(token: &str) -> Option<QuickToggle> {
    match token {
        "internet" => Some(QuickToggle::Internet),
        "bluetooth" => Some(QuickToggle::Bluetooth),
        "dnd" => Some(QuickToggle::DoNotDisturb),
        "flashlight" => Some(QuickToggle::Flashlight),
        "rotate" => Some(QuickToggle::AutoRotate),
        "saver" => Some(QuickToggle::BatterySaver),
        "zen" => Some(QuickToggle::ZenMode),
        "night" => Some(QuickToggle::NightLight),
        _ => None,
    }
}

fn with_camera(
    shell: &mut Shell,
    f: impl FnOnce(&mut matcha_shell::apps::CameraState) -> String,
) -> String {
    match shell.apps_mut().camera_mut() {
        Some(cam) => f(cam),
        None => "the camera is not open".to_string(),
    }
}

fn with_browser(
    shell: &mut Shell,
    f: impl FnOnce(&mut matcha_shell::apps::BrowserState) -> String,
) -> String {
    match shell.apps_mut().browser_mut() {
        Some(browser) => f(browser),
        None => "the browser is not open".to_string(),
    }
}

fn wait_for_assistant(shell: &mut Shell) -> String {
    match shell.apps().assistant() {
        Some(a) if a.is_loading() => {},
        Some(_) => return "nothing in flight".to_string(),
        None => return "the assistant is not open".to_string(),
    }
    let deadline = std::time::Instant::now() + WAIT_BUDGET;
    while std::time::Instant::now() < deadline {
        if shell.poll_assistant() {
            return String::new();
        }
        thread::sleep(Duration::from_millis(25));
    }
    "still thinking; try 'wait' again".to_string()
}
