//! Runtime tests driven by the scripted driver.
//!
//! Exercises the full loop: events in, preferences to the downlink policy,
//! views to the renderer.

use videogrid_core::{
    CallEvent, GridConfig, GridEvent, Roster, RosterAttendee, Runtime, TargetDisplaySize,
    TileEvent, VideoGrid, VideoSource, ViewMode,
};
use videogrid_harness::{GridSnapshot, InvariantRegistry, RecordingPolicy, ScriptDriver};

fn roster(ids: &[&str]) -> GridEvent {
    let roster: Roster =
        ids.iter().map(|id| ((*id).into(), RosterAttendee::named(id.to_uppercase()))).collect();
    GridEvent::UpdateRoster { roster }
}

fn sources(ids: &[&str]) -> GridEvent {
    GridEvent::UpdateVideoSources { sources: ids.iter().copied().map(VideoSource::new).collect() }
}

fn runtime(events: Vec<CallEvent>) -> Runtime<ScriptDriver, RecordingPolicy> {
    Runtime::new(ScriptDriver::with_events(events), RecordingPolicy::new(), VideoGrid::default())
}

#[test]
fn call_session_renders_every_transition() {
    let mut runtime = runtime(vec![
        roster(&["a", "b", "c"]).into(),
        sources(&["c", "a"]).into(),
        TileEvent::Bound { tile_id: 1, attendee_id: "a".into() }.into(),
        TileEvent::WillBePaused { tile_id: 1 }.into(),
        GridEvent::ZoomIn.into(),
        GridEvent::NextPage.into(),
        CallEvent::Quit,
    ]);

    assert!(runtime.run().is_ok());

    let renders: Vec<String> =
        runtime.driver().renders().iter().map(ToString::to_string).collect();
    insta::assert_snapshot!(renders.join("\n"), @r"
    gallery page=1 level=0 tiles=[]
    gallery page=1 level=0 tiles=[]
    gallery page=1 level=2 tiles=[a, c]
    gallery page=1 level=2 tiles=[a(paused), c]
    gallery page=1 level=1 tiles=[a(paused)]
    gallery page=2 level=1 tiles=[c]
    ");
    assert!(runtime.driver().is_stopped());
}

#[test]
fn policy_receives_each_preference_set() {
    let mut runtime = runtime(vec![
        sources(&["a", "b", "c", "d", "e", "f", "g"]).into(),
        sources(&["a", "b", "c", "d", "e", "f", "g", "h"]).into(),
        GridEvent::ZoomIn.into(),
    ]);

    assert!(runtime.run().is_ok());

    let sizes: Vec<(usize, TargetDisplaySize)> = runtime
        .policy()
        .submissions()
        .iter()
        .map(|prefs| {
            let size = prefs.iter().next().map_or(TargetDisplaySize::High, |p| p.target_size);
            (prefs.len(), size)
        })
        .collect();
    assert_eq!(sizes, [
        (7, TargetDisplaySize::High),
        (8, TargetDisplaySize::Low),
        (4, TargetDisplaySize::High),
    ]);
}

#[test]
fn rejected_commands_neither_render_nor_submit() {
    let mut runtime = runtime(vec![
        sources(&["a"]).into(),
        GridEvent::ZoomIn.into(),
        GridEvent::ZoomOut.into(),
        GridEvent::PrevPage.into(),
        GridEvent::NextPage.into(),
    ]);

    assert!(runtime.run().is_ok());

    // Initial render plus the source update
    assert_eq!(runtime.driver().renders().len(), 2);
    assert_eq!(runtime.policy().submissions().len(), 1);
}

#[test]
fn unbound_tile_notifications_are_dropped() {
    let mut runtime = runtime(vec![
        sources(&["a"]).into(),
        TileEvent::WillBePaused { tile_id: 9 }.into(),
        TileEvent::Bound { tile_id: 9, attendee_id: "a".into() }.into(),
        TileEvent::Unbound { tile_id: 9 }.into(),
        TileEvent::WillBePaused { tile_id: 9 }.into(),
    ]);

    assert!(runtime.run().is_ok());

    assert_eq!(runtime.grid().state().attendee("a").map(|r| r.bandwidth_constrained), Some(false));
    assert_eq!(runtime.driver().renders().len(), 2);
}

#[test]
fn content_share_switches_view_through_runtime() {
    let mut runtime = runtime(vec![
        sources(&["a", "b"]).into(),
        GridEvent::UpdateActiveSpeakers { attendee_ids: vec!["b".into()] }.into(),
        GridEvent::UpdateContentShare { sharing_attendee_id: Some("a".into()) }.into(),
    ]);

    assert!(runtime.run().is_ok());

    let last = runtime.driver().last_render();
    assert_eq!(last.map(|view| view.view_mode), Some(ViewMode::FeaturedView));
    assert_eq!(last.map(|view| view.attendee_ids()), Some(vec!["b"]));
    assert_eq!(last.map(|view| view.can_next_page), Some(false));
}

#[test]
fn render_failure_stops_the_loop() {
    let driver =
        ScriptDriver::with_events([sources(&["a"]), sources(&["a", "b"])]).fail_render_after(1);
    let mut runtime = Runtime::new(driver, RecordingPolicy::new(), VideoGrid::default());

    let result = runtime.run();

    assert!(result.is_err());
    assert!(runtime.driver().has_pending());
    assert!(!runtime.driver().is_stopped());
    // Preferences went out before the failed render
    assert_eq!(runtime.policy().submissions().len(), 1);
}

#[test]
fn custom_config_flows_through_runtime() {
    let config = GridConfig { featured_tile_limit: 2, ..GridConfig::default() };
    let grid = VideoGrid::new(config).unwrap_or_default();
    let speakers = ["d", "c", "b", "a"].into_iter().map(Into::into).collect();
    let driver = ScriptDriver::with_events([
        sources(&["a", "b", "c", "d"]),
        GridEvent::UpdateActiveSpeakers { attendee_ids: speakers },
        GridEvent::UpdateViewMode { mode: ViewMode::FeaturedView },
    ]);
    let mut runtime = Runtime::new(driver, RecordingPolicy::new(), grid);

    assert!(runtime.run().is_ok());

    let chosen = runtime.policy().last().map(|prefs| prefs.len());
    assert_eq!(chosen, Some(2));
    InvariantRegistry::standard()
        .assert_all(&GridSnapshot::from_grid(runtime.grid()), "after featured switch");
}
