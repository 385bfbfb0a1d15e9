//! User controls for the interactive recorder
//!
//! Enter on stdin is the record/stop control; SIGINT and SIGTERM end
//! the program. Everything funnels into one mpsc channel so the app
//! loop handles all transitions sequentially.

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::signal::unix::{signal, SignalKind};
use tokio::sync::mpsc;

/// Control signals driving the recorder loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlSignal {
    /// Toggle recording (start if idle, stop if capturing)
    Toggle,
    /// Quit (SIGINT/SIGTERM or stdin closed)
    Shutdown,
}

/// Receives user controls from stdin and OS signals.
pub struct ControlChannel {
    receiver: mpsc::Receiver<ControlSignal>,
}

impl ControlChannel {
    /// Start listening on stdin and for shutdown signals.
    ///
    /// Returns the channel and a sender other sources may use to
    /// inject controls.
    pub fn new() -> Result<(Self, mpsc::Sender<ControlSignal>), std::io::Error> {
        let (tx, rx) = mpsc::channel(10);

        // SIGINT (Ctrl-C)
        let tx_int = tx.clone();
        let mut sigint = signal(SignalKind::interrupt())?;
        tokio::spawn(async move {
            sigint.recv().await;
            let _ = tx_int.send(ControlSignal::Shutdown).await;
        });

        // SIGTERM
        let tx_term = tx.clone();
        let mut sigterm = signal(SignalKind::terminate())?;
        tokio::spawn(async move {
            sigterm.recv().await;
            let _ = tx_term.send(ControlSignal::Shutdown).await;
        });

        // Every line on stdin is one press of the record/stop control
        let tx_stdin = tx.clone();
        tokio::spawn(async move {
            let mut lines = BufReader::new(tokio::io::stdin()).lines();
            loop {
                match lines.next_line().await {
                    Ok(Some(_)) => {
                        if tx_stdin.send(ControlSignal::Toggle).await.is_err() {
                            break;
                        }
                    }
                    // EOF or read failure both mean no more controls
                    Ok(None) | Err(_) => {
                        let _ = tx_stdin.send(ControlSignal::Shutdown).await;
                        break;
                    }
                }
            }
        });

        Ok((Self { receiver: rx }, tx))
    }

    /// Wait for the next control
    pub async fn recv(&mut self) -> Option<ControlSignal> {
        self.receiver.recv().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signal_equality() {
        assert_eq!(ControlSignal::Toggle, ControlSignal::Toggle);
        assert_ne!(ControlSignal::Toggle, ControlSignal::Shutdown);
    }

    #[tokio::test]
    async fn injected_controls_are_delivered_in_order() {
        let (mut controls, tx) = ControlChannel::new().unwrap();

        tx.send(ControlSignal::Toggle).await.unwrap();
        tx.send(ControlSignal::Shutdown).await.unwrap();

        assert_eq!(controls.recv().await, Some(ControlSignal::Toggle));
        assert_eq!(controls.recv().await, Some(ControlSignal::Shutdown));
    }
}
