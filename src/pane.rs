//! Adjacent-pane discovery.
//!
//! With exactly two panes in the window the target is simply the other one.
//! With more, [`PaneSelection`] decides:
//!
//! - `MostRecent` ranks the non-current panes by tmux's recency flags. A pane
//!   that is the window's active pane (the editor isn't focused) ranks
//!   first, then the window's last-active pane. If no pane carries either
//!   flag the choice is ambiguous.
//! - `Strict` treats any window with more than two panes as ambiguous.

use crate::config::PaneSelection;
use crate::error::PaneError;
use crate::mux::{Multiplexer, PaneId, PaneInfo};

/// Finds the pane commands should go to.
pub struct PaneLocator<'a, M: ?Sized> {
    mux: &'a M,
    selection: PaneSelection,
}

impl<'a, M: Multiplexer + ?Sized> PaneLocator<'a, M> {
    pub fn new(mux: &'a M, selection: PaneSelection) -> Self {
        Self { mux, selection }
    }

    /// Resolve the pane adjacent to `current` in `current`'s window.
    pub async fn find_adjacent_pane(&self, current: &PaneId) -> Result<PaneId, PaneError> {
        let panes = self.mux.list_panes(current).await?;
        tracing::debug!(
            current = %current,
            panes = panes.len(),
            selection = ?self.selection,
            "listed panes"
        );
        select_adjacent(&panes, current, self.selection)
    }
}

/// Pick the adjacent pane out of a window listing.
pub fn select_adjacent(
    panes: &[PaneInfo],
    current: &PaneId,
    selection: PaneSelection,
) -> Result<PaneId, PaneError> {
    let count = panes.len();
    if count < 2 {
        return Err(PaneError::NoPane { count });
    }
    let others: Vec<&PaneInfo> = panes.iter().filter(|pane| &pane.id != current).collect();
    if others.is_empty() {
        // Every listed pane claims the caller's id; nothing to target.
        return Err(PaneError::NoPane { count });
    }
    if count == 2 {
        if let [other] = others.as_slice() {
            return Ok(other.id.clone());
        }
    }

    match selection {
        PaneSelection::Strict => Err(PaneError::AmbiguousPane { count }),
        PaneSelection::MostRecent => others
            .iter()
            .find(|pane| pane.active)
            .or_else(|| others.iter().find(|pane| pane.last))
            .map(|pane| pane.id.clone())
            .ok_or(PaneError::AmbiguousPane { count }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testsupport::FakeMux;

    fn pane(id: &str, active: bool, last: bool) -> PaneInfo {
        PaneInfo {
            id: PaneId::new(id),
            active,
            last,
        }
    }

    #[test]
    fn zero_or_one_pane_is_no_pane() {
        let current = PaneId::new("%0");
        assert_eq!(
            select_adjacent(&[], &current, PaneSelection::MostRecent),
            Err(PaneError::NoPane { count: 0 })
        );
        assert_eq!(
            select_adjacent(&[pane("%0", true, false)], &current, PaneSelection::MostRecent),
            Err(PaneError::NoPane { count: 1 })
        );
    }

    #[test]
    fn two_panes_pick_the_other_regardless_of_order() {
        let current = PaneId::new("%5");
        let listings = [
            vec![pane("%5", true, false), pane("%2", false, true)],
            vec![pane("%2", false, true), pane("%5", true, false)],
        ];
        for listing in &listings {
            for selection in [PaneSelection::MostRecent, PaneSelection::Strict] {
                assert_eq!(
                    select_adjacent(listing, &current, selection),
                    Ok(PaneId::new("%2"))
                );
            }
        }
    }

    #[test]
    fn two_panes_without_flags_still_resolve() {
        let current = PaneId::new("%1");
        let listing = [pane("%1", false, false), pane("%3", false, false)];
        assert_eq!(
            select_adjacent(&listing, &current, PaneSelection::MostRecent),
            Ok(PaneId::new("%3"))
        );
    }

    #[test]
    fn more_than_two_prefers_last_active_pane() {
        let current = PaneId::new("%0");
        let listing = [
            pane("%0", true, false),
            pane("%1", false, false),
            pane("%2", false, true),
        ];
        assert_eq!(
            select_adjacent(&listing, &current, PaneSelection::MostRecent),
            Ok(PaneId::new("%2"))
        );
    }

    #[test]
    fn more_than_two_prefers_active_pane_when_editor_is_unfocused() {
        let current = PaneId::new("%0");
        let listing = [
            pane("%0", false, true),
            pane("%1", false, false),
            pane("%2", true, false),
        ];
        assert_eq!(
            select_adjacent(&listing, &current, PaneSelection::MostRecent),
            Ok(PaneId::new("%2"))
        );
    }

    #[test]
    fn more_than_two_without_recency_is_ambiguous() {
        let current = PaneId::new("%0");
        let listing = [
            pane("%0", true, false),
            pane("%1", false, false),
            pane("%2", false, false),
        ];
        assert_eq!(
            select_adjacent(&listing, &current, PaneSelection::MostRecent),
            Err(PaneError::AmbiguousPane { count: 3 })
        );
    }

    #[test]
    fn strict_refuses_more_than_two() {
        let current = PaneId::new("%0");
        let listing = [
            pane("%0", true, false),
            pane("%1", false, true),
            pane("%2", false, false),
        ];
        assert_eq!(
            select_adjacent(&listing, &current, PaneSelection::Strict),
            Err(PaneError::AmbiguousPane { count: 3 })
        );
    }

    #[tokio::test]
    async fn locator_queries_the_current_window() {
        let mux = FakeMux::with_panes("%4", &["%4", "%9"]);
        let locator = PaneLocator::new(&mux, PaneSelection::MostRecent);
        let found = locator
            .find_adjacent_pane(&PaneId::new("%4"))
            .await
            .expect("adjacent pane");
        assert_eq!(found, PaneId::new("%9"));
        assert_eq!(mux.calls(), vec!["list-panes %4".to_string()]);
    }

    #[tokio::test]
    async fn locator_wraps_listing_failures() {
        let mux = FakeMux::with_panes("%4", &["%4", "%9"]).failing_list("no server running");
        let locator = PaneLocator::new(&mux, PaneSelection::MostRecent);
        let err = locator
            .find_adjacent_pane(&PaneId::new("%4"))
            .await
            .unwrap_err();
        assert!(matches!(err, PaneError::Query(_)), "got: {err}");
    }
}
