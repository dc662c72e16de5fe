//! Camera app: zoom stops and the shooting-mode carousel.

/// Zoom stops in display order.
pub const ZOOM_STOPS: &[&str] = &[".5x", "1x", "2x", "5x"];

/// Shooting modes in carousel order.
pub const MODES: &[&str] = &["Selfie", "Portrait", "Photo", "Night", "Panorama"];

/// Runtime state of the camera viewfinder chrome.
#[derive(Debug)]
pub struct CameraState {
    zoom: usize,
    mode: usize,
}

impl CameraState {
    pub fn new() -> Self {
        Self {
            // 1x, Photo.
            zoom: 1,
            mode: 2,
        }
    }

    pub fn zoom(&self) -> &'static str {
        ZOOM_STOPS[self.zoom]
    }

    pub fn mode(&self) -> &'static str {
        MODES[self.mode]
    }

    /// Select a zoom stop by label. Unknown labels are ignored.
    pub fn select_zoom(&mut self, label: &str) -> bool {
        match ZOOM_STOPS.iter().position(|z| *z == label) {
            Some(i) => {
                self.zoom = i;
                true
            },
            None => false,
        }
    }

    /// Select a shooting mode by label. Unknown labels are ignored.
    pub fn select_mode(&mut self, label: &str) -> bool {
        match MODES.iter().position(|m| *m == label) {
            Some(i) => {
                self.mode = i;
                true
            },
            None => false,
        }
    }
}

impl Default for CameraState {
    fn default() -> Self {
        Self::new()
    }
}
