mod frame_input;
mod layout;
mod render;
mod window_config;

use std::env;

use cave_viewer::app_loop::ViewerState;
use cave_viewer::params::clamp_density;
use cave_viewer::seed::{generate_runtime_seed, parse_launch_args};
use cave_viewer::viewer_settings::ViewerSettings;
use macroquad::prelude::*;
use macroquad::window::Conf;
use taffy::TaffyTree;
use tracing_subscriber::EnvFilter;

use crate::frame_input::capture_frame_input;
use crate::layout::{compute_frame_layout, setup_layout};
use crate::render::draw_frame;

fn window_conf() -> Conf {
    window_config::build_window_conf()
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[macroquad::main(window_conf)]
async fn main() {
    init_logging();

    let args: Vec<String> = env::args().collect();
    let launch = match parse_launch_args(&args, generate_runtime_seed()) {
        Ok(launch) => launch,
        Err(message) => {
            tracing::error!("{message}");
            return;
        }
    };

    let settings_path = ViewerSettings::get_default_path();
    let mut settings = settings_path
        .as_deref()
        .map(ViewerSettings::load_or_default)
        .unwrap_or_default();
    if let Some(density) = launch.density {
        settings.density = clamp_density(density);
    }
    if let Some(iterations) = launch.iterations {
        settings.iterations = iterations;
    }
    let settings = settings.sanitized();

    let mut state = match ViewerState::new(launch.seed.value(), settings.generation_parameters()) {
        Ok(state) => state,
        Err(err) => {
            tracing::error!(error = %err, "could not generate the initial cave");
            return;
        }
    };

    let mut taffy = TaffyTree::new();
    let nodes = setup_layout(&mut taffy);

    loop {
        let input = capture_frame_input();
        let outcome = state.tick(&input, generate_runtime_seed);
        if outcome.parameters_changed
            && let Some(path) = settings_path.as_deref()
        {
            let params = state.params();
            let updated =
                ViewerSettings { density: params.density, iterations: params.iterations, ..settings.clone() };
            if let Err(err) = updated.write_atomic(path) {
                tracing::warn!(error = %err, "failed to save viewer settings");
            }
        }

        clear_background(DARKGRAY);
        let layout = compute_frame_layout(&mut taffy, &nodes, screen_width(), screen_height());
        draw_frame(&state, &layout, settings.tile_size);

        next_frame().await
    }
}
