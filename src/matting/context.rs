// SPDX-License-Identifier: MPL-2.0
//! Processing context consumed by the matting widget.
//!
//! Holds the business state the widget renders from: the original and
//! processed images, the processing flag, the current stage message, and the
//! inference-time estimate. The widget owns none of this; it only reads the
//! flags and requests `process_image` / `reset_state`.

use crate::matting::Source;
use crate::media::ImageData;

/// Stage message keys, in pipeline order.
pub const MSG_FETCHING: &str = "process-fetching-image";
pub const MSG_DOWNLOADING_MODEL: &str = "process-downloading-model";
pub const MSG_RUNNING_INFERENCE: &str = "process-running-inference";

/// Background-removal state shared between the app and the widget.
#[derive(Debug, Clone, Default)]
pub struct Context {
    original: Option<ImageData>,
    processed: Option<ImageData>,
    is_processing: bool,
    process_message: Option<&'static str>,
    /// Seconds the most recent successful inference took; 0.0 until known.
    inference_time: f32,
    current_source: Option<Source>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts processing the given source.
    ///
    /// Returns `false` without touching any state when a run is already in
    /// flight; overlapping runs would race on the shared engine.
    pub fn process_image(&mut self, source: Source) -> bool {
        if self.is_processing {
            return false;
        }
        self.is_processing = true;
        self.process_message = Some(MSG_FETCHING);
        self.current_source = Some(source);
        true
    }

    /// Records the fetched and decoded source photograph.
    pub fn source_fetched(&mut self, image: ImageData) {
        self.original = Some(image);
    }

    /// Advances the stage message to model download.
    pub fn stage_downloading_model(&mut self) {
        if self.is_processing {
            self.process_message = Some(MSG_DOWNLOADING_MODEL);
        }
    }

    /// Advances the stage message to inference.
    pub fn stage_running_inference(&mut self) {
        if self.is_processing {
            self.process_message = Some(MSG_RUNNING_INFERENCE);
        }
    }

    /// Completes the run with a cut-out and the measured inference seconds.
    pub fn finish(&mut self, cutout: ImageData, inference_secs: f32) {
        self.processed = Some(cutout);
        self.is_processing = false;
        self.process_message = None;
        self.current_source = None;
        if inference_secs > 0.0 {
            self.inference_time = inference_secs;
        }
    }

    /// Aborts the run, keeping whatever result was shown before.
    pub fn fail(&mut self) {
        self.is_processing = false;
        self.process_message = None;
        self.current_source = None;
    }

    /// Clears the result and returns to the upload screen.
    ///
    /// The inference-time estimate survives: it describes the model, not the
    /// image, and seeds the elapsed/estimated display of the next run.
    pub fn reset_state(&mut self) {
        self.original = None;
        self.processed = None;
        self.is_processing = false;
        self.process_message = None;
        self.current_source = None;
    }

    pub fn is_processing(&self) -> bool {
        self.is_processing
    }

    pub fn has_processed_image(&self) -> bool {
        self.processed.is_some()
    }

    pub fn process_message(&self) -> Option<&'static str> {
        self.process_message
    }

    pub fn inference_time(&self) -> f32 {
        self.inference_time
    }

    pub fn original_image(&self) -> Option<&ImageData> {
        self.original.as_ref()
    }

    pub fn processed_image(&self) -> Option<&ImageData> {
        self.processed.as_ref()
    }

    pub fn current_source(&self) -> Option<&Source> {
        self.current_source.as_ref()
    }
}
