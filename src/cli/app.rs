//! Main app runner for the interactive recorder

use std::env;
use std::process::ExitCode;
use std::time::Duration as StdDuration;

use tokio::time::timeout;

use crate::application::ports::config::ConfigStore;
use crate::application::RecordUploadUseCase;
use crate::domain::capture::{CaptureState, Elapsed};
use crate::domain::config::AppConfig;
use crate::infrastructure::{CpalCapture, HttpUploader, XdgConfigStore};

use super::args::RecordOptions;
use super::controls::{ControlChannel, ControlSignal};
use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// How often the capture loop wakes up to refresh the elapsed display
/// and check the auto-stop limit. Sub-second so the rendered MM:SS
/// string advances exactly once per second.
const DISPLAY_POLL_MS: u64 = 200;

/// Load and merge configuration from file, env, and CLI
pub async fn load_merged_config(cli_config: AppConfig) -> AppConfig {
    let store = XdgConfigStore::new();
    let file_config = store.load().await.unwrap_or_else(|_| AppConfig::empty());

    // Build env config
    let env_config = AppConfig {
        endpoint: env::var("VOICEDROP_ENDPOINT").ok().filter(|s| !s.is_empty()),
        ..Default::default()
    };

    // Merge: defaults < file < env < cli
    AppConfig::defaults()
        .merge(file_config)
        .merge(env_config)
        .merge(cli_config)
}

/// Run the interactive record-and-upload loop
pub async fn run_recorder(options: RecordOptions) -> ExitCode {
    let mut presenter = Presenter::new();

    // Create adapters
    let capture = CpalCapture::new();
    let uploader = HttpUploader::new(options.endpoint.clone());

    // Create use case
    let use_case = RecordUploadUseCase::new(capture, uploader);

    // User controls: Enter toggles, Ctrl-C quits
    let (mut controls, _control_tx) = match ControlChannel::new() {
        Ok(c) => c,
        Err(e) => {
            presenter.error(&format!("Failed to set up controls: {}", e));
            return ExitCode::from(EXIT_ERROR);
        }
    };

    presenter.info(&format!("Uploading to {}", options.endpoint));
    presenter.info("Press Enter to start recording (Ctrl-C to quit)");

    let max_duration_ms = options.max_duration.map(|d| d.as_millis());

    loop {
        let state = use_case.state().await;

        // While capturing, wake up regularly to tick the display
        let signal = if state == CaptureState::Capturing {
            match timeout(StdDuration::from_millis(DISPLAY_POLL_MS), controls.recv()).await {
                Ok(sig) => sig,
                Err(_) => {
                    let elapsed_ms = use_case.elapsed_ms();
                    presenter.update_recording(Elapsed::from_millis(elapsed_ms));

                    match max_duration_ms {
                        Some(max) if elapsed_ms >= max => {
                            presenter.warn("Max duration reached, stopping");
                            Some(ControlSignal::Toggle)
                        }
                        _ => continue,
                    }
                }
            }
        } else {
            controls.recv().await
        };

        match signal {
            Some(ControlSignal::Toggle) => {
                let current_state = use_case.state().await;
                match current_state {
                    CaptureState::Idle => match use_case.start_capture().await {
                        Ok(()) => presenter.show_recording(),
                        Err(e) => {
                            // Denied permission or missing device; still idle
                            presenter.error(&e.to_string());
                            presenter.info("Press Enter to try again (Ctrl-C to quit)");
                        }
                    },
                    CaptureState::Capturing => {
                        let cycle_ok = finish_cycle(&use_case, &mut presenter).await;

                        if options.once {
                            return if cycle_ok {
                                ExitCode::from(EXIT_SUCCESS)
                            } else {
                                ExitCode::from(EXIT_ERROR)
                            };
                        }
                        presenter.info("Press Enter to start recording (Ctrl-C to quit)");
                    }
                    CaptureState::Uploading => {
                        presenter.warn("Upload in progress, please wait");
                    }
                }
            }
            Some(ControlSignal::Shutdown) => {
                if use_case.state().await == CaptureState::Capturing {
                    presenter.stop_spinner();
                    let _ = use_case.cancel().await;
                    presenter.info("Recording discarded");
                }
                return ExitCode::from(EXIT_SUCCESS);
            }
            None => {
                // Channel closed
                return ExitCode::from(EXIT_ERROR);
            }
        }
    }
}

/// Stop the capture, upload the payload, and report the outcome.
/// Returns whether the whole cycle succeeded.
async fn finish_cycle<M, U>(
    use_case: &RecordUploadUseCase<M, U>,
    presenter: &mut Presenter,
) -> bool
where
    M: crate::application::ports::MicrophoneCapture,
    U: crate::application::ports::Uploader,
{
    let elapsed = Elapsed::from_millis(use_case.elapsed_ms());

    match use_case.stop_capture().await {
        Ok(payload) => {
            presenter.spinner_success(&format!(
                "Recorded {} ({})",
                elapsed,
                payload.human_readable_size()
            ));

            presenter.start_spinner("Uploading...");
            match use_case.upload_payload(payload).await {
                Ok(message) => {
                    presenter.spinner_success("Upload complete");
                    // The server's acknowledgement, verbatim
                    presenter.output(&message);
                    true
                }
                Err(e) => {
                    presenter.spinner_fail(&e.to_string());
                    false
                }
            }
        }
        Err(e) => {
            presenter.stop_spinner();
            presenter.error(&e.to_string());
            false
        }
    }
}
