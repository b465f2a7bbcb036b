use glam::Vec2;

use pulse_grid::Session;
use pulse_grid::platform::{InputEvent, Key, ScriptedInput};
use pulse_grid::renderer::{DrawCommand, DrawList, colors};
use pulse_grid::sim::{CellPos, Entity, Flow, GameState};

const DT: f32 = 1.0 / 60.0;

fn session(script: ScriptedInput) -> Session<ScriptedInput, DrawList> {
    Session::new(script, DrawList::new())
}

fn pulse_circles(list: &DrawList) -> usize {
    list.last_frame()
        .iter()
        .filter(|c| matches!(c, DrawCommand::Circle { color, .. } if *color == colors::PULSE))
        .count()
}

#[test]
fn test_place_next_to_node_and_play() {
    let mut script = ScriptedInput::new();
    script
        .press_keys(&[Key::Down, Key::Right, Key::Right, Key::Space, Key::Enter])
        .idle(180);
    let mut session = session(script);

    for _ in 0..185 {
        assert_eq!(session.frame(DT), Flow::Continue);
    }

    let state = &session.state;
    assert!(state.playing);
    assert_eq!(state.pulse_positions(), &[CellPos::new(1, 2)]);
    // One cell away is exactly the activation radius, which is not enough
    assert_eq!(state.grid.active_node_count(), 0);
    assert_eq!(pulse_circles(session.surface()), 1);
}

#[test]
fn test_placing_on_node_is_rejected() {
    let mut script = ScriptedInput::new();
    script.press_keys(&[Key::Down, Key::Right, Key::Space]);
    let mut session = session(script);
    for _ in 0..3 {
        session.frame(DT);
    }

    assert!(session.state.pulse_positions().is_empty());
    assert!(matches!(
        session.state.grid.get(CellPos::new(1, 1)),
        Some(Entity::Node(_))
    ));
}

#[test]
fn test_reset_mid_game_matches_fresh_state() {
    let mut script = ScriptedInput::new();
    script
        .press_keys(&[Key::Space, Key::Right, Key::Space, Key::Enter])
        .idle(30)
        .press_keys(&[Key::R]);
    let mut session = session(script);
    for _ in 0..35 {
        session.frame(DT);
    }

    assert_eq!(session.state, GameState::new());
}

#[test]
fn test_paused_frames_still_render() {
    let mut script = ScriptedInput::new();
    script.press_keys(&[Key::Space]).idle(10);
    let mut session = session(script);
    for _ in 0..11 {
        session.frame(DT);
    }

    assert!(!session.state.playing);
    assert_eq!(session.state.clock.phase(), 0.0);
    assert_eq!(session.surface().frames_presented(), 11);
    assert_eq!(pulse_circles(session.surface()), 1);
}

#[test]
fn test_pulse_stops_drawing_after_lifetime() {
    let mut script = ScriptedInput::new();
    script.press_keys(&[Key::Space, Key::Enter]);
    let mut session = session(script);

    session.frame(DT);
    session.frame(DT);
    assert_eq!(pulse_circles(session.surface()), 1);

    // 6 seconds more
    for _ in 0..360 {
        session.frame(DT);
    }
    assert_eq!(pulse_circles(session.surface()), 0);
    // Still on the board and still in the list
    assert!(session.state.grid.get(CellPos::new(0, 0)).is_some());
    assert_eq!(session.state.pulse_positions().len(), 1);
}

#[test]
fn test_escape_and_close_both_quit() {
    for event in [InputEvent::KeyPressed(Key::Escape), InputEvent::WindowClosed] {
        let mut script = ScriptedInput::new();
        script.idle(2).push_frame([event]);
        let mut session = session(script);

        assert_eq!(session.frame(DT), Flow::Continue);
        assert_eq!(session.frame(DT), Flow::Continue);
        assert_eq!(session.frame(DT), Flow::Exit);
    }
}

#[test]
fn test_cursor_outline_drawn_at_cursor() {
    let mut script = ScriptedInput::new();
    script.push_frame([
        InputEvent::KeyPressed(Key::Down),
        InputEvent::KeyPressed(Key::Down),
        InputEvent::KeyPressed(Key::Left),
    ]);
    let mut session = session(script);
    session.frame(DT);

    assert_eq!(session.state.cursor, CellPos::new(2, 0));
    assert!(session.surface().last_frame().iter().any(|c| matches!(
        c,
        DrawCommand::RectOutline { min, .. } if *min == Vec2::new(250.0, 250.0)
    )));
}
