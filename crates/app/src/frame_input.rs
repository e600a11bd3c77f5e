//! Keyboard and mouse input collection for one rendered frame.

use cave_viewer::app_loop::ViewerInput;
use cave_viewer::navigation::Direction;
use cave_viewer::params::ParamAction;
use macroquad::prelude::{KeyCode, is_key_pressed, mouse_wheel};

const ACTION_KEYS: [(KeyCode, ParamAction); 6] = [
    (KeyCode::Up, ParamAction::MoreIterations),
    (KeyCode::Down, ParamAction::FewerIterations),
    (KeyCode::Right, ParamAction::MoreDensity),
    (KeyCode::Left, ParamAction::LessDensity),
    (KeyCode::R, ParamAction::Reseed),
    (KeyCode::Backspace, ParamAction::Reset),
];

const MOVE_KEYS: [(KeyCode, Direction); 4] = [
    (KeyCode::W, Direction::North),
    (KeyCode::S, Direction::South),
    (KeyCode::A, Direction::West),
    (KeyCode::D, Direction::East),
];

pub fn capture_frame_input() -> ViewerInput {
    let mut actions = Vec::with_capacity(ACTION_KEYS.len() + 1);

    let (_, wheel_y) = mouse_wheel();
    if wheel_y > 0.0 {
        actions.push(ParamAction::MoreIterations);
    } else if wheel_y < 0.0 {
        actions.push(ParamAction::FewerIterations);
    }

    for (key, action) in ACTION_KEYS {
        if is_key_pressed(key) {
            actions.push(action);
        }
    }

    let moves = MOVE_KEYS
        .iter()
        .filter(|(key, _)| is_key_pressed(*key))
        .map(|&(_, direction)| direction)
        .collect();

    ViewerInput { actions, moves }
}
