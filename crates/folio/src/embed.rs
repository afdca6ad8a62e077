//! The embedded demo surface.
//!
//! The preview controller only drives lifecycle: mount with a URL when a
//! preview opens, unmount when it closes. Nothing flows back into the
//! controller; whatever the surface learns about the page is presentation
//! detail for the modal's status line.

use std::sync::LazyLock;
use std::sync::mpsc::{Receiver, TryRecvError, channel};

use regex::Regex;

static PAGE_TITLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<title[^>]*>(.*?)</title>").expect("valid title pattern"));

pub trait EmbedSurface {
    fn mount(&mut self, url: &str);
    fn unmount(&mut self);
}

/// What the frame currently knows about the embedded page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameStatus {
    Idle,
    Loading,
    Ready {
        http_status: u16,
        page_title: Option<String>,
    },
    Unreachable {
        reason: String,
    },
}

/// Production surface: probes the demo URL on a background thread and holds
/// the outcome for the modal to draw.
///
/// An in-flight probe whose receiver has been dropped sends into the void
/// and its thread exits; a closed preview therefore keeps no page state and
/// receives no further updates.
pub struct DemoFrame {
    url: Option<String>,
    status: FrameStatus,
    pending: Option<Receiver<Result<(u16, Option<String>), String>>>,
}

impl DemoFrame {
    pub fn new() -> Self {
        Self {
            url: None,
            status: FrameStatus::Idle,
            pending: None,
        }
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn status(&self) -> &FrameStatus {
        &self.status
    }

    /// Drain the probe result, if one arrived. Called once per frame.
    pub fn poll(&mut self) {
        let Some(rx) = &self.pending else { return };
        match rx.try_recv() {
            Ok(Ok((http_status, page_title))) => {
                self.status = FrameStatus::Ready {
                    http_status,
                    page_title,
                };
                self.pending = None;
            }
            Ok(Err(reason)) => {
                self.status = FrameStatus::Unreachable { reason };
                self.pending = None;
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => {
                self.status = FrameStatus::Unreachable {
                    reason: "probe thread died".to_string(),
                };
                self.pending = None;
            }
        }
    }
}

impl Default for DemoFrame {
    fn default() -> Self {
        Self::new()
    }
}

impl EmbedSurface for DemoFrame {
    fn mount(&mut self, url: &str) {
        // Replacing the selection drops any probe still in flight.
        self.pending = None;
        self.url = Some(url.to_string());
        self.status = FrameStatus::Loading;

        let (tx, rx) = channel();
        let url = url.to_string();
        std::thread::spawn(move || {
            let _ = tx.send(probe(&url));
        });
        self.pending = Some(rx);
    }

    fn unmount(&mut self) {
        self.pending = None;
        self.url = None;
        self.status = FrameStatus::Idle;
    }
}

fn probe(url: &str) -> Result<(u16, Option<String>), String> {
    let mut response = ureq::get(url).call().map_err(|e| e.to_string())?;
    let http_status = response.status().as_u16();
    let page_title = response
        .body_mut()
        .read_to_string()
        .ok()
        .and_then(|body| extract_title(&body));
    Ok((http_status, page_title))
}

fn extract_title(body: &str) -> Option<String> {
    let captured = PAGE_TITLE.captures(body)?.get(1)?.as_str();
    let title = captured.split_whitespace().collect::<Vec<_>>().join(" ");
    if title.is_empty() { None } else { Some(title) }
}

#[cfg(test)]
pub mod recording {
    use super::EmbedSurface;

    /// Test fake that records the mount/unmount protocol.
    #[derive(Default)]
    pub struct RecordingSurface {
        pub mounted: Option<String>,
        pub log: Vec<String>,
    }

    impl EmbedSurface for RecordingSurface {
        fn mount(&mut self, url: &str) {
            self.mounted = Some(url.to_string());
            self.log.push(format!("mount {url}"));
        }

        fn unmount(&mut self) {
            self.mounted = None;
            self.log.push("unmount".to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unmount_clears_all_frame_state() {
        let mut frame = DemoFrame::new();
        frame.mount("https://wordle-xi-one.vercel.app/");
        assert_eq!(frame.url(), Some("https://wordle-xi-one.vercel.app/"));
        assert_eq!(*frame.status(), FrameStatus::Loading);

        frame.unmount();
        assert_eq!(frame.url(), None);
        assert_eq!(*frame.status(), FrameStatus::Idle);
        assert!(frame.pending.is_none());
    }

    #[test]
    fn remount_replaces_the_url() {
        let mut frame = DemoFrame::new();
        frame.mount("https://one.example/");
        frame.mount("https://two.example/");
        assert_eq!(frame.url(), Some("https://two.example/"));
        assert_eq!(*frame.status(), FrameStatus::Loading);
    }

    #[test]
    fn extracts_page_title() {
        let body = "<html><head><TITLE>\n  Wordle\n  Clone </TITLE></head></html>";
        assert_eq!(extract_title(body).as_deref(), Some("Wordle Clone"));
        assert_eq!(extract_title("<html><head></head></html>"), None);
        assert_eq!(extract_title("<title></title>"), None);
    }
}
