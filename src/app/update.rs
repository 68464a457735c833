// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! The processing pipeline runs in three asynchronous stages, each reported
//! back as a message: source fetch, model download (first run only), and
//! inference. The context's stage message advances with them so the
//! processing overlay always names what is happening.

use super::{App, MattingOutcome, Message, Screen};
use crate::config;
use crate::error::MattingError;
use crate::matting::{engine, Source};
use crate::media::{self, ImageData};
use crate::ui::matting::component::{self, Effect};
use crate::ui::matting::ViewState;
use crate::ui::notifications::Notification;
use crate::ui::settings;
use iced::Task;
use std::path::PathBuf;

/// Handles matting widget messages.
pub fn handle_widget_message(app: &mut App, message: component::Message) -> Task<Message> {
    let view = ViewState::from_flags(
        app.context.is_processing(),
        app.context.has_processed_image(),
    );

    match app.widget.handle_message(message, view) {
        Effect::None => Task::none(),
        Effect::Process(source) => start_processing(app, source),
        Effect::Reset => {
            app.context.reset_state();
            app.widget.stop_stopwatch();
            Task::none()
        }
        Effect::OpenUploadDialog => open_upload_dialog(app.persisted.last_open_directory.clone()),
        Effect::OpenSaveDialog => open_save_dialog(app.persisted.last_save_directory.clone()),
        Effect::ShowWarningNotification { key } => {
            app.notifications.push(Notification::warning(key));
            Task::none()
        }
    }
}

/// Starts the processing pipeline for a source reference.
///
/// A second request while one is in flight is rejected by the context and
/// produces no task.
pub fn start_processing(app: &mut App, source: Source) -> Task<Message> {
    if !app.context.process_image(source.clone()) {
        return Task::none();
    }

    Task::perform(
        async move {
            let bytes = match &source {
                Source::Path(path) => {
                    std::fs::read(path).map_err(|e| MattingError::Io(e.to_string()))?
                }
                Source::Url(url) => media::fetch_url(url).await?,
            };
            media::decode_bytes(&bytes)
        },
        Message::SourceFetched,
    )
}

/// Handles the fetched source photograph: records it and moves on to the
/// model download or straight to inference.
pub fn handle_source_fetched(
    app: &mut App,
    result: Result<ImageData, MattingError>,
) -> Task<Message> {
    if !app.context.is_processing() {
        // The run was torn down while the fetch was in flight.
        return Task::none();
    }

    match result {
        Ok(image) => {
            app.context.source_fetched(image);
            if engine::is_model_downloaded() {
                begin_inference(app)
            } else {
                begin_model_download(app)
            }
        }
        Err(err) => fail_processing(app, err.i18n_key()),
    }
}

/// Downloads the model, streaming progress messages while it runs.
fn begin_model_download(app: &mut App) -> Task<Message> {
    use iced::futures::channel::{mpsc, oneshot};
    use iced::futures::stream;
    use iced::futures::StreamExt;

    app.context.stage_downloading_model();
    app.model_status = engine::ModelStatus::Downloading { progress: 0.0 };

    let url = app.config.matting.url().to_string();
    let checksum = app.config.matting.model_checksum.clone();

    // Channels for progress and result
    let (progress_tx, progress_rx) = mpsc::channel::<f32>(100);
    let (result_tx, result_rx) = oneshot::channel::<Result<(), String>>();

    // Spawn the download task
    tokio::spawn(async move {
        let mut progress_tx = progress_tx;
        let download_result = engine::download_model(&url, |progress| {
            let _ = progress_tx.try_send(progress);
        })
        .await;

        let verified = match download_result {
            Ok(_bytes) => match checksum {
                Some(expected) => engine::verify_checksum(&expected).map_err(|e| e.to_string()),
                None => Ok(()),
            },
            Err(e) => Err(e.to_string()),
        };

        // Send the result through the oneshot channel
        let _ = result_tx.send(verified);
        // progress_tx is dropped here, closing the channel
    });

    // State for the stream
    #[allow(clippy::items_after_statements)]
    enum DownloadPhase {
        ReceivingProgress {
            progress_rx: mpsc::Receiver<f32>,
            result_rx: oneshot::Receiver<Result<(), String>>,
        },
        WaitingForResult {
            result_rx: oneshot::Receiver<Result<(), String>>,
        },
        Completed,
    }

    let download_stream = stream::unfold(
        DownloadPhase::ReceivingProgress {
            progress_rx,
            result_rx,
        },
        |phase| async move {
            match phase {
                DownloadPhase::ReceivingProgress {
                    mut progress_rx,
                    result_rx,
                } => match progress_rx.next().await {
                    Some(progress) => Some((
                        Message::ModelDownloadProgress(progress),
                        DownloadPhase::ReceivingProgress {
                            progress_rx,
                            result_rx,
                        },
                    )),
                    None => {
                        // Progress channel closed, wait for the result
                        Some((
                            Message::ModelDownloadProgress(1.0),
                            DownloadPhase::WaitingForResult { result_rx },
                        ))
                    }
                },
                DownloadPhase::WaitingForResult { result_rx } => match result_rx.await {
                    Ok(result) => Some((
                        Message::ModelDownloadCompleted(result),
                        DownloadPhase::Completed,
                    )),
                    Err(_) => Some((
                        Message::ModelDownloadCompleted(Err(
                            "Download task cancelled".to_string()
                        )),
                        DownloadPhase::Completed,
                    )),
                },
                DownloadPhase::Completed => None, // Terminate the stream
            }
        },
    );

    Task::stream(download_stream)
}

/// Handles the model download result.
pub fn handle_model_download_completed(
    app: &mut App,
    result: Result<(), String>,
) -> Task<Message> {
    match result {
        Ok(()) => {
            app.model_status = engine::ModelStatus::Ready;
            if app.context.is_processing() {
                begin_inference(app)
            } else {
                Task::none()
            }
        }
        Err(e) => {
            app.model_status = engine::ModelStatus::Error(e);
            fail_processing(app, "notification-process-error")
        }
    }
}

/// Runs the matting inference in a blocking task so the UI stays responsive.
fn begin_inference(app: &mut App) -> Task<Message> {
    app.context.stage_running_inference();

    let source_image = app.context.original_image().cloned();
    let Some(source_image) = source_image else {
        return fail_processing(app, "notification-process-error");
    };
    let manager = app.engine.clone();

    Task::perform(
        async move {
            tokio::task::spawn_blocking(move || {
                let mut manager = manager.blocking_lock();
                manager.load_session()?;

                let input = source_image.to_dynamic();
                let started = std::time::Instant::now();
                let cutout = manager.remove_background(&input)?;
                let inference_secs = started.elapsed().as_secs_f32();

                let rgba = cutout.to_rgba8();
                let (width, height) = rgba.dimensions();
                Ok(MattingOutcome {
                    cutout: ImageData::from_rgba(width, height, rgba.into_vec()),
                    inference_secs,
                })
            })
            .await
            .map_err(|e| MattingError::InferenceFailed(e.to_string()))?
        },
        |result: Result<MattingOutcome, MattingError>| match result {
            Ok(outcome) => Message::MattingCompleted(Ok(outcome)),
            Err(e) => Message::MattingCompleted(Err(e.to_string())),
        },
    )
}

/// Handles the inference result.
pub fn handle_matting_completed(
    app: &mut App,
    result: Result<MattingOutcome, String>,
) -> Task<Message> {
    match result {
        Ok(outcome) => {
            app.context.finish(outcome.cutout, outcome.inference_secs);
            app.widget.stop_stopwatch();
            app.notifications.clear_process_errors();
            Task::none()
        }
        Err(_) => fail_processing(app, "notification-process-error"),
    }
}

/// Aborts the current run and surfaces the failure as a toast.
fn fail_processing(app: &mut App, key: &'static str) -> Task<Message> {
    app.context.fail();
    app.widget.stop_stopwatch();
    app.notifications.push(Notification::error(key));
    Task::none()
}

/// Opens the file-picker dialog, starting in the last used directory.
fn open_upload_dialog(last_open_directory: Option<PathBuf>) -> Task<Message> {
    Task::perform(
        async move {
            let mut dialog =
                rfd::AsyncFileDialog::new().add_filter("Images", &media::SUPPORTED_EXTENSIONS);

            if let Some(dir) = last_open_directory {
                if dir.exists() {
                    dialog = dialog.set_directory(&dir);
                }
            }

            dialog.pick_file().await.map(|h| h.path().to_path_buf())
        },
        Message::UploadDialogResult,
    )
}

/// Opens the save dialog for the cut-out.
fn open_save_dialog(last_save_directory: Option<PathBuf>) -> Task<Message> {
    Task::perform(
        async move {
            let mut dialog = rfd::AsyncFileDialog::new()
                .set_file_name("cutout.png")
                .add_filter("PNG Image", &["png"]);

            if let Some(dir) = last_save_directory {
                if dir.exists() {
                    dialog = dialog.set_directory(&dir);
                }
            }

            dialog.save_file().await.map(|h| h.path().to_path_buf())
        },
        Message::SaveDialogResult,
    )
}

/// Handles the picked upload file.
pub fn handle_upload_dialog_result(app: &mut App, path: Option<PathBuf>) -> Task<Message> {
    let Some(path) = path else {
        // User cancelled the dialog
        return Task::none();
    };

    app.persisted.set_last_open_directory_from_file(&path);
    if let Some(key) = app.persisted.save() {
        app.notifications.push(Notification::warning(key));
    }

    start_processing(app, Source::Path(path))
}

/// Handles the chosen save location.
pub fn handle_save_dialog_result(app: &mut App, path: Option<PathBuf>) -> Task<Message> {
    let Some(path) = path else {
        return Task::none();
    };
    let Some(cutout) = app.context.processed_image() else {
        return Task::none();
    };

    match media::save_png(cutout, &path) {
        Ok(()) => {
            app.notifications
                .push(Notification::success("notification-save-success"));

            app.persisted.set_last_save_directory_from_file(&path);
            if let Some(key) = app.persisted.save() {
                app.notifications.push(Notification::warning(key));
            }
        }
        Err(_err) => {
            app.notifications
                .push(Notification::error("notification-save-error"));
        }
    }
    Task::none()
}

/// Handles settings screen messages.
pub fn handle_settings_message(app: &mut App, message: settings::Message) -> Task<Message> {
    match message {
        settings::Message::LanguageSelected(locale) => {
            app.i18n.set_locale(locale.clone());
            app.config.general.language = Some(locale.to_string());
            persist_config(app);
        }
        settings::Message::ThemeModeSelected(mode) => {
            app.theme_mode = mode;
            app.config.general.theme_mode = mode;
            persist_config(app);
        }
        settings::Message::BackRequested => {
            app.screen = Screen::Matting;
        }
    }
    Task::none()
}

fn persist_config(app: &mut App) {
    if config::save(&app.config).is_err() {
        app.notifications
            .push(Notification::warning("notification-config-save-error"));
    }
}

/// Fetches the sample thumbnails in the background. Failures leave the
/// alt-text buttons in place and are not reported.
pub fn fetch_sample_thumbnails() -> Task<Message> {
    use crate::ui::matting::samples::SAMPLE_IMAGES;

    let tasks = SAMPLE_IMAGES.iter().enumerate().map(|(index, sample)| {
        let url = sample.url;
        Task::perform(
            async move {
                let bytes = media::fetch_url(url).await.ok()?;
                // Reject bytes that will not decode before the GPU cache sees them.
                media::decode_bytes(&bytes).ok()?;
                Some(iced::widget::image::Handle::from_bytes(bytes))
            },
            move |handle| {
                Message::Matting(component::Message::ThumbnailFetched { index, handle })
            },
        )
    });

    Task::batch(tasks)
}
