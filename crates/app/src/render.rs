//! Tile rendering for the cave and the status bar.

use crate::layout::{FrameLayout, PanelRect};
use cave_viewer::app_loop::{ViewerState, status_line};
use cavegen::{Cell, Pos};
use macroquad::prelude::*;

const BORDER_COLOR: Color = Color { r: 0.2, g: 0.2, b: 0.2, a: 1.0 };
const PLAYER_COLOR: Color = RED;
const STATUS_FONT_SIZE: f32 = 20.0;

pub fn draw_frame(state: &ViewerState, layout: &FrameLayout, tile_size: f32) {
    draw_rectangle_lines(
        layout.map.x,
        layout.map.y,
        layout.map.width,
        layout.map.height,
        1.0,
        BORDER_COLOR,
    );
    draw_cave(state, layout.map, tile_size);
    draw_text(
        &status_line(state),
        layout.status.x,
        layout.status.y + STATUS_FONT_SIZE,
        STATUS_FONT_SIZE,
        LIGHTGRAY,
    );
}

fn draw_cave(state: &ViewerState, panel: PanelRect, tile_size: f32) {
    let grid = state.grid();
    let (origin_x, origin_y) =
        map_origin(panel, grid.width(), grid.height(), tile_size, state.player());

    for (row, cells) in grid.rows().enumerate() {
        let y = origin_y + row as f32 * tile_size;
        if y + tile_size < panel.y || y > panel.y + panel.height {
            continue;
        }
        for (col, &cell) in cells.iter().enumerate() {
            let x = origin_x + col as f32 * tile_size;
            if x + tile_size < panel.x || x > panel.x + panel.width {
                continue;
            }
            draw_rectangle(x, y, tile_size, tile_size, cell_color(cell));
        }
    }

    if let Some(player) = state.player() {
        let half = tile_size / 2.0;
        draw_circle(
            origin_x + player.col as f32 * tile_size + half,
            origin_y + player.row as f32 * tile_size + half,
            half * 0.7,
            PLAYER_COLOR,
        );
    }
}

fn cell_color(cell: Cell) -> Color {
    match cell {
        Cell::Wall => BLACK,
        Cell::Floor => WHITE,
    }
}

/// Screen position of the grid's top-left corner. Maps that fit the panel are
/// centered; larger ones scroll to keep the player centered, clamped so no
/// space opens up past the map edges.
fn map_origin(
    panel: PanelRect,
    width: usize,
    height: usize,
    tile_size: f32,
    player: Option<Pos>,
) -> (f32, f32) {
    let focus = player.map(|pos| (pos.col as f32, pos.row as f32));
    let x = axis_origin(panel.x, panel.width, width as f32 * tile_size, tile_size, focus.map(|f| f.0));
    let y =
        axis_origin(panel.y, panel.height, height as f32 * tile_size, tile_size, focus.map(|f| f.1));
    (x, y)
}

fn axis_origin(start: f32, span: f32, extent: f32, tile_size: f32, focus: Option<f32>) -> f32 {
    if extent <= span {
        return start + (span - extent) / 2.0;
    }
    let Some(focus) = focus else {
        return start;
    };
    let centered = start + span / 2.0 - (focus + 0.5) * tile_size;
    centered.clamp(start + span - extent, start)
}
