//! Transition parameters consumed by the external animation collaborator.
//!
//! Pure data: per-surface enter/exit keyframes and the motion (spring or
//! timed curve) that drives them. The shell never plays animations; it
//! hands these specs over alongside the derived view.

/// Spring motion parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    pub damping: f32,
    pub stiffness: f32,
    pub mass: f32,
}

/// Timed cubic-bezier motion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ease {
    /// Control points (x1, y1, x2, y2).
    pub curve: [f32; 4],
    pub duration_ms: u32,
}

/// How a transition moves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Motion {
    Spring(Spring),
    Ease(Ease),
}

/// Soft spring used for the lock and home surfaces.
pub const SOFT_SPRING: Spring = Spring {
    damping: 30.0,
    stiffness: 300.0,
    mass: 0.8,
};

/// Heavier spring for the fullscreen app sheet.
pub const SHEET_SPRING: Spring = Spring {
    damping: 35.0,
    stiffness: 300.0,
    mass: 1.0,
};

/// Loose spring for the control-center drop.
pub const DROP_SPRING: Spring = Spring {
    damping: 25.0,
    stiffness: 200.0,
    mass: 1.0,
};

/// Slow ease for wallpaper zoom/blur changes.
pub const WALLPAPER_EASE: Ease = Ease {
    curve: [0.22, 1.0, 0.36, 1.0],
    duration_ms: 1500,
};

/// One end state of a surface transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Keyframe {
    pub opacity: f32,
    pub scale: f32,
    /// Vertical offset as a percentage of the surface height.
    pub y_percent: i16,
    pub blur_px: u8,
}

impl Keyframe {
    /// The settled on-screen state.
    pub const REST: Keyframe = Keyframe {
        opacity: 1.0,
        scale: 1.0,
        y_percent: 0,
        blur_px: 0,
    };

    const fn faded(scale: f32) -> Self {
        Keyframe {
            opacity: 0.0,
            scale,
            y_percent: 0,
            blur_px: 0,
        }
    }
}

/// Enter-from / exit-to keyframes plus the motion between them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionSpec {
    pub enter_from: Keyframe,
    pub exit_to: Keyframe,
    pub motion: Motion,
}

/// Animatable shell surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    Lock,
    Home,
    /// Mobile fullscreen app sheet.
    AppSheet,
    /// Desktop app window.
    Window,
    ControlCenter,
    Launcher,
}

/// Transition spec for mounting/unmounting a surface.
pub fn spec_for(surface: Surface) -> TransitionSpec {
    match surface {
        Surface::Lock => TransitionSpec {
            enter_from: Keyframe::faded(1.0),
            exit_to: Keyframe {
                opacity: 0.0,
                scale: 1.0,
                y_percent: -100,
                blur_px: 20,
            },
            motion: Motion::Spring(SOFT_SPRING),
        },
        Surface::Home => TransitionSpec {
            enter_from: Keyframe::faded(0.95),
            exit_to: Keyframe::faded(1.05),
            motion: Motion::Spring(SOFT_SPRING),
        },
        Surface::AppSheet => TransitionSpec {
            enter_from: Keyframe {
                opacity: 0.0,
                scale: 1.0,
                y_percent: 100,
                blur_px: 0,
            },
            exit_to: Keyframe {
                opacity: 0.0,
                scale: 1.0,
                y_percent: 100,
                blur_px: 0,
            },
            motion: Motion::Spring(SHEET_SPRING),
        },
        Surface::Window => TransitionSpec {
            enter_from: Keyframe::faded(0.95),
            exit_to: Keyframe::faded(0.95),
            motion: Motion::Spring(SOFT_SPRING),
        },
        Surface::ControlCenter => TransitionSpec {
            enter_from: Keyframe {
                opacity: 1.0,
                scale: 1.0,
                y_percent: -100,
                blur_px: 0,
            },
            exit_to: Keyframe {
                opacity: 1.0,
                scale: 1.0,
                y_percent: -100,
                blur_px: 0,
            },
            motion: Motion::Spring(DROP_SPRING),
        },
        Surface::Launcher => TransitionSpec {
            enter_from: Keyframe {
                opacity: 0.0,
                scale: 0.9,
                y_percent: 0,
                blur_px: 20,
            },
            exit_to: Keyframe {
                opacity: 0.0,
                scale: 1.1,
                y_percent: 0,
                blur_px: 20,
            },
            motion: Motion::Spring(SOFT_SPRING),
        },
    }
}
