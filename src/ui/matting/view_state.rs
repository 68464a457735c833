// SPDX-License-Identifier: MPL-2.0
//! Derived view state of the matting widget.

/// Which of the three mutually exclusive screens is showing.
///
/// Derived from the processing context on every render, never stored. The
/// explicit variant (instead of two raw booleans) gives `match` exhaustiveness
/// over all reachable screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    /// Upload controls and the sample strip.
    Upload,
    /// First-run processing overlay, no previous result.
    Processing,
    /// A cut-out is displayed; `reprocessing` dims it while a new run is in
    /// flight.
    Result { reprocessing: bool },
}

impl ViewState {
    /// Derives the screen from the context flags.
    #[must_use]
    pub fn from_flags(is_processing: bool, has_processed_image: bool) -> Self {
        match (is_processing, has_processed_image) {
            (false, false) => ViewState::Upload,
            (true, false) => ViewState::Processing,
            (reprocessing, true) => ViewState::Result { reprocessing },
        }
    }

    /// Whether the upload screen is showing. Drag-and-drop and sample
    /// selection are only live on this screen.
    #[must_use]
    pub fn shows_upload_screen(self) -> bool {
        matches!(self, ViewState::Upload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_without_result_shows_upload() {
        assert_eq!(ViewState::from_flags(false, false), ViewState::Upload);
    }

    #[test]
    fn processing_without_result_shows_processing() {
        assert_eq!(ViewState::from_flags(true, false), ViewState::Processing);
    }

    #[test]
    fn result_shows_result_dimmed_only_while_reprocessing() {
        assert_eq!(
            ViewState::from_flags(false, true),
            ViewState::Result {
                reprocessing: false
            }
        );
        assert_eq!(
            ViewState::from_flags(true, true),
            ViewState::Result { reprocessing: true }
        );
    }

    #[test]
    fn every_flag_pair_yields_exactly_one_screen() {
        for is_processing in [false, true] {
            for has_processed in [false, true] {
                let state = ViewState::from_flags(is_processing, has_processed);
                let is_upload = state == ViewState::Upload;
                let is_proc = state == ViewState::Processing;
                let is_result = matches!(state, ViewState::Result { .. });
                assert_eq!(
                    [is_upload, is_proc, is_result]
                        .iter()
                        .filter(|b| **b)
                        .count(),
                    1
                );
            }
        }
    }

    #[test]
    fn only_upload_accepts_drops() {
        assert!(ViewState::Upload.shows_upload_screen());
        assert!(!ViewState::Processing.shows_upload_screen());
        assert!(!ViewState::Result { reprocessing: false }.shows_upload_screen());
        assert!(!ViewState::Result { reprocessing: true }.shows_upload_screen());
    }
}
