//! Preview selection state.
//!
//! "Which project is open" and "is it fullscreen" are one enum, not two
//! flags, so a fullscreen preview with no selection cannot be represented.
//! All transitions run synchronously inside the UI event that caused them;
//! the embed surface is mounted and unmounted as a side effect of the
//! transitions that open and close the preview.

use crate::content::Portfolio;
use crate::embed::EmbedSurface;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewState {
    Closed,
    Open { project: usize },
    Fullscreen { project: usize },
}

impl PreviewState {
    pub fn selected(self) -> Option<usize> {
        match self {
            PreviewState::Closed => None,
            PreviewState::Open { project } | PreviewState::Fullscreen { project } => Some(project),
        }
    }

    pub fn is_fullscreen(self) -> bool {
        matches!(self, PreviewState::Fullscreen { .. })
    }
}

pub struct PreviewController {
    state: PreviewState,
}

impl PreviewController {
    pub fn new() -> Self {
        Self {
            state: PreviewState::Closed,
        }
    }

    pub fn state(&self) -> PreviewState {
        self.state
    }

    pub fn selected(&self) -> Option<usize> {
        self.state.selected()
    }

    pub fn is_open(&self) -> bool {
        self.state != PreviewState::Closed
    }

    /// Open the preview on a catalog entry, replacing any current selection.
    /// A new selection always starts windowed.
    ///
    /// The index must come from the catalog; anything else is a caller bug,
    /// not a runtime condition, since the catalog is fixed at startup.
    pub fn open(&mut self, index: usize, catalog: &Portfolio, surface: &mut dyn EmbedSurface) {
        assert!(
            index < catalog.projects.len(),
            "project index {index} is not in the catalog ({} entries)",
            catalog.projects.len()
        );
        self.state = PreviewState::Open { project: index };
        surface.mount(&catalog.projects[index].demo_url);
    }

    /// Flip between windowed and fullscreen. Meaningless while closed, so a
    /// no-op there.
    pub fn toggle_fullscreen(&mut self) {
        self.state = match self.state {
            PreviewState::Closed => PreviewState::Closed,
            PreviewState::Open { project } => PreviewState::Fullscreen { project },
            PreviewState::Fullscreen { project } => PreviewState::Open { project },
        };
    }

    /// Close the preview and tear down the embedded surface.
    pub fn close(&mut self, surface: &mut dyn EmbedSurface) {
        if self.state != PreviewState::Closed {
            self.state = PreviewState::Closed;
            surface.unmount();
        }
    }
}

impl Default for PreviewController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embed::recording::RecordingSurface;

    fn catalog() -> Portfolio {
        Portfolio::builtin()
    }

    #[test]
    fn starts_closed() {
        let controller = PreviewController::new();
        assert_eq!(controller.state(), PreviewState::Closed);
        assert_eq!(controller.selected(), None);
    }

    #[test]
    fn open_selects_and_mounts_the_demo_url() {
        let catalog = catalog();
        let wordle = catalog.index_of("Wordle Game").unwrap();
        let mut controller = PreviewController::new();
        let mut surface = RecordingSurface::default();

        controller.open(wordle, &catalog, &mut surface);
        assert_eq!(controller.state(), PreviewState::Open { project: wordle });
        assert_eq!(
            surface.mounted.as_deref(),
            Some("https://wordle-xi-one.vercel.app/")
        );
    }

    #[test]
    fn fullscreen_round_trips() {
        let catalog = catalog();
        let wordle = catalog.index_of("Wordle Game").unwrap();
        let mut controller = PreviewController::new();
        let mut surface = RecordingSurface::default();

        controller.open(wordle, &catalog, &mut surface);
        controller.toggle_fullscreen();
        assert_eq!(
            controller.state(),
            PreviewState::Fullscreen { project: wordle }
        );
        controller.toggle_fullscreen();
        assert_eq!(controller.state(), PreviewState::Open { project: wordle });
    }

    #[test]
    fn close_from_fullscreen_unmounts_and_forgets_fullscreen() {
        let catalog = catalog();
        let mut controller = PreviewController::new();
        let mut surface = RecordingSurface::default();

        controller.open(0, &catalog, &mut surface);
        controller.toggle_fullscreen();
        controller.close(&mut surface);
        assert_eq!(controller.state(), PreviewState::Closed);
        assert_eq!(surface.mounted, None);

        // Fullscreen must not leak into the next open.
        controller.open(0, &catalog, &mut surface);
        assert_eq!(controller.state(), PreviewState::Open { project: 0 });
        assert!(!controller.state().is_fullscreen());
    }

    #[test]
    fn replacing_the_selection_does_not_require_closing() {
        let catalog = catalog();
        let mut controller = PreviewController::new();
        let mut surface = RecordingSurface::default();

        controller.open(0, &catalog, &mut surface);
        controller.open(1, &catalog, &mut surface);
        assert_eq!(controller.state(), PreviewState::Open { project: 1 });
        assert_eq!(
            surface.mounted.as_deref(),
            Some(catalog.projects[1].demo_url.as_str())
        );
    }

    #[test]
    fn fullscreen_while_closed_is_a_no_op() {
        let mut controller = PreviewController::new();
        controller.toggle_fullscreen();
        assert_eq!(controller.state(), PreviewState::Closed);
    }

    #[test]
    fn fullscreen_always_implies_a_selection() {
        // Walk an arbitrary transition sequence and check the invariant
        // after every step.
        enum Action {
            Open(usize),
            ToggleFullscreen,
            Close,
        }
        use Action::*;

        let catalog = catalog();
        let mut controller = PreviewController::new();
        let mut surface = RecordingSurface::default();

        let sequence = [
            ToggleFullscreen,
            Open(0),
            ToggleFullscreen,
            Open(2),
            ToggleFullscreen,
            ToggleFullscreen,
            Close,
            ToggleFullscreen,
            Open(1),
            Close,
        ];

        for action in sequence {
            match action {
                Open(i) => controller.open(i, &catalog, &mut surface),
                ToggleFullscreen => controller.toggle_fullscreen(),
                Close => controller.close(&mut surface),
            }
            let state = controller.state();
            assert!(
                !state.is_fullscreen() || state.selected().is_some(),
                "fullscreen without a selection after a step"
            );
        }
    }

    #[test]
    #[should_panic(expected = "not in the catalog")]
    fn opening_an_unknown_project_panics() {
        let catalog = catalog();
        let mut controller = PreviewController::new();
        let mut surface = RecordingSurface::default();
        controller.open(catalog.projects.len(), &catalog, &mut surface);
    }
}
