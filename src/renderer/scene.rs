//! Scene composition: game state to display list

use glam::Vec2;

use super::DrawList;
use crate::consts::{CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::palette;
use crate::sim::{Aabb, GamePhase, GameState};

const CENTER: Vec2 = Vec2::new(CANVAS_WIDTH / 2.0, CANVAS_HEIGHT / 2.0);

fn full_canvas() -> Aabb {
    Aabb::new(Vec2::ZERO, Vec2::new(CANVAS_WIDTH, CANVAS_HEIGHT))
}

/// Build the frame for the current phase
pub fn compose(state: &GameState, list: &mut DrawList) {
    list.clear();
    match state.phase {
        GamePhase::Idle => draw_welcome(list),
        GamePhase::Running => draw_playfield(state, list),
        GamePhase::Paused => {
            draw_playfield(state, list);
            draw_pause_overlay(list);
        }
        GamePhase::GameOver => {
            draw_playfield(state, list);
            draw_final_message(list, "GAME OVER", palette::GAME_OVER_TEXT, state.score);
        }
        GamePhase::Won => {
            draw_playfield(state, list);
            draw_final_message(list, "YOU WIN!", palette::WIN_TEXT, state.score);
        }
    }
}

fn draw_welcome(list: &mut DrawList) {
    list.fill_rect(full_canvas(), palette::WELCOME_BACKGROUND);
    list.text(
        "Brick Attack",
        CENTER - Vec2::new(0.0, 30.0),
        36,
        palette::TEXT,
    );
    list.text(
        "Press Start to Play",
        CENTER + Vec2::new(0.0, 20.0),
        20,
        palette::TEXT,
    );
}

/// Bricks, then paddle, then ball
fn draw_playfield(state: &GameState, list: &mut DrawList) {
    list.push(super::DrawCmd::Clear);

    for (_, brick) in state.bricks.iter().filter(|(_, b)| b.is_active()) {
        list.fill_rect(brick.bounds(), brick.color);
        list.stroke_rect(brick.bounds(), palette::BRICK_OUTLINE);
    }

    list.fill_rect(state.paddle.bounds(), state.paddle.color);
    list.fill_circle(state.ball.pos, state.ball.radius, state.ball.color);
}

fn draw_pause_overlay(list: &mut DrawList) {
    list.fill_rect(full_canvas(), palette::PAUSE_SHADE);
    list.text("GAME PAUSED", CENTER, 48, palette::TEXT);
    list.text(
        "Click Resume to continue",
        CENTER + Vec2::new(0.0, 40.0),
        24,
        palette::TEXT,
    );
}

fn draw_final_message(list: &mut DrawList, headline: &str, color: palette::Color, score: u64) {
    list.text(headline, CENTER, 48, color);
    list.text(
        format!("Final Score: {score}"),
        CENTER + Vec2::new(0.0, 40.0),
        24,
        palette::TEXT,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::DrawCmd;
    use crate::sim::BrickStatus;
    use crate::tuning::Tuning;

    fn frame(state: &GameState) -> DrawList {
        let mut list = DrawList::new();
        compose(state, &mut list);
        list
    }

    #[test]
    fn test_welcome_screen() {
        let state = GameState::new(1, Tuning::default());
        let list = frame(&state);
        assert_eq!(
            list.texts().collect::<Vec<_>>(),
            vec!["Brick Attack", "Press Start to Play"]
        );
        assert_eq!(
            list.cmds()[0],
            DrawCmd::FillRect {
                rect: full_canvas(),
                color: palette::WELCOME_BACKGROUND
            }
        );
        match &list.cmds()[1] {
            DrawCmd::FillText { pos, size, .. } => {
                assert_eq!(*pos, Vec2::new(400.0, 270.0));
                assert_eq!(*size, 36);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_all_text_is_centered_on_canvas() {
        let mut state = GameState::new(1, Tuning::default());
        let mut lists = vec![frame(&state)];
        state.start();
        state.toggle_pause();
        lists.push(frame(&state));
        state.phase = GamePhase::GameOver;
        lists.push(frame(&state));
        state.phase = GamePhase::Won;
        lists.push(frame(&state));

        for list in &lists {
            for cmd in list.cmds() {
                if let DrawCmd::FillText { pos, .. } = cmd {
                    assert_eq!(pos.x, CANVAS_WIDTH / 2.0);
                }
            }
        }
    }

    #[test]
    fn test_playfield_primitives() {
        let mut state = GameState::new(1, Tuning::default());
        state.start();
        state.bricks.get_mut(0, 0).unwrap().status = BrickStatus::Destroyed;

        let list = frame(&state);
        assert_eq!(list.cmds()[0], DrawCmd::Clear);

        // 44 bricks, each filled and outlined, then paddle and ball
        assert_eq!(list.len(), 1 + 44 * 2 + 2);
        assert!(matches!(
            list.cmds()[1],
            DrawCmd::FillRect { color, .. } if color == palette::brick_color(1)
        ));
        assert!(matches!(
            list.cmds()[2],
            DrawCmd::StrokeRect { color, .. } if color == palette::BRICK_OUTLINE
        ));
        assert_eq!(
            list.cmds()[list.len() - 1],
            DrawCmd::FillCircle {
                center: Vec2::new(400.0, 300.0),
                radius: 10.0,
                color: palette::BALL
            }
        );
        assert_eq!(list.texts().count(), 0);
    }

    #[test]
    fn test_pause_overlay_on_top() {
        let mut state = GameState::new(1, Tuning::default());
        state.start();
        state.toggle_pause();

        let list = frame(&state);
        assert_eq!(
            list.texts().collect::<Vec<_>>(),
            vec!["GAME PAUSED", "Click Resume to continue"]
        );
        assert!(list.cmds().contains(&DrawCmd::FillRect {
            rect: full_canvas(),
            color: palette::PAUSE_SHADE
        }));
    }

    #[test]
    fn test_end_messages() {
        let mut state = GameState::new(1, Tuning::default());
        state.start();
        state.score = 230;

        state.phase = GamePhase::GameOver;
        let list = frame(&state);
        assert_eq!(
            list.texts().collect::<Vec<_>>(),
            vec!["GAME OVER", "Final Score: 230"]
        );

        state.phase = GamePhase::Won;
        let list = frame(&state);
        assert_eq!(
            list.texts().collect::<Vec<_>>(),
            vec!["YOU WIN!", "Final Score: 230"]
        );
        assert!(list.cmds().iter().any(|cmd| matches!(
            cmd,
            DrawCmd::FillText { color, size: 48, .. } if *color == palette::WIN_TEXT
        )));
    }
}
