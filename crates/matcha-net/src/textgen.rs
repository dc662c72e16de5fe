//! Text-generation service boundary and asynchronous completion plumbing.
//!
//! A request is dispatched on a worker thread and its completion delivered
//! through a channel the event loop polls. The receiving end is owned by
//! the assistant panel's runtime state: dropping it cancels delivery, so a
//! reply that lands after the panel closed dies in the channel instead of
//! mutating a detached transcript.

use std::sync::Arc;
use std::sync::mpsc::{Receiver, TryRecvError, channel};
use std::thread;

use matcha_types::error::{MatchaError, Result};

/// A collaborator that turns one user-authored string into a reply string.
///
/// Each call is stateless from the collaborator's point of view: no
/// conversation history crosses this boundary, only the latest turn. The
/// persona and sampling parameters belong to the implementation.
pub trait TextGenService: Send + Sync {
    fn generate(&self, prompt: &str) -> Result<String>;
}

/// Receiving end of one in-flight generation request.
pub struct ReplyRx {
    rx: Receiver<Result<String>>,
}

impl ReplyRx {
    /// Non-blocking poll. `None` while the request is still in flight.
    pub fn try_reply(&self) -> Option<Result<String>> {
        match self.rx.try_recv() {
            Ok(reply) => Some(reply),
            Err(TryRecvError::Empty) => None,
            // Worker died without sending. Surface as a call failure.
            Err(TryRecvError::Disconnected) => {
                Some(Err(MatchaError::TextGen("worker exited early".into())))
            },
        }
    }
}

/// Dispatch `prompt` to `service` on a worker thread.
///
/// The send into the channel is allowed to fail silently: that only
/// happens when the receiver was dropped, i.e. the caller cancelled.
pub fn spawn_generate(service: Arc<dyn TextGenService>, prompt: String) -> ReplyRx {
    let (tx, rx) = channel();
    thread::spawn(move || {
        let reply = service.generate(&prompt);
        if tx.send(reply).is_err() {
            log::debug!("text-gen reply discarded: requester is gone");
        }
    });
    ReplyRx { rx }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use std::sync::mpsc::Sender;
    use std::time::Duration;

    /// Echoes the prompt back immediately.
    struct EchoService;

    impl TextGenService for EchoService {
        fn generate(&self, prompt: &str) -> Result<String> {
            Ok(format!("echo: {prompt}"))
        }
    }

    /// Blocks until released through a channel, then fails.
    struct GatedFailure {
        gate: Mutex<Receiver<()>>,
    }

    impl TextGenService for GatedFailure {
        fn generate(&self, _prompt: &str) -> Result<String> {
            let _ = self.gate.lock().unwrap().recv();
            Err(MatchaError::TextGen("simulated outage".into()))
        }
    }

    fn gated() -> (Arc<GatedFailure>, Sender<()>) {
        let (tx, rx) = channel();
        (
            Arc::new(GatedFailure {
                gate: Mutex::new(rx),
            }),
            tx,
        )
    }

    fn wait_for_reply(rx: &ReplyRx) -> Result<String> {
        for _ in 0..200 {
            if let Some(reply) = rx.try_reply() {
                return reply;
            }
            thread::sleep(Duration::from_millis(5));
        }
        panic!("no reply within a second");
    }

    #[test]
    fn reply_arrives_via_poll() {
        let rx = spawn_generate(Arc::new(EchoService), "hello".into());
        assert_eq!(wait_for_reply(&rx).unwrap(), "echo: hello");
    }

    #[test]
    fn in_flight_request_polls_none() {
        let (service, release) = gated();
        let rx = spawn_generate(service, "hello".into());
        assert!(rx.try_reply().is_none());
        release.send(()).unwrap();
        assert!(wait_for_reply(&rx).is_err());
    }

    #[test]
    fn dropping_receiver_discards_late_reply() {
        let (service, release) = gated();
        let rx = spawn_generate(service, "hello".into());
        drop(rx);
        // The worker's send fails silently; nothing to observe but
        // the absence of a panic once it completes.
        release.send(()).unwrap();
        thread::sleep(Duration::from_millis(20));
    }

    #[test]
    fn failure_is_delivered_as_err() {
        let (service, release) = gated();
        let rx = spawn_generate(service, "hi".into());
        release.send(()).unwrap();
        let err = wait_for_reply(&rx).unwrap_err();
        assert!(format!("{err}").contains("simulated outage"));
    }
}
