//! Layout model for the viewer's status bar and map panel.

use taffy::TaffyTree;
use taffy::prelude::*;

pub struct LayoutNodes {
    root: NodeId,
    status: NodeId,
    map: NodeId,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanelRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

pub struct FrameLayout {
    pub status: PanelRect,
    pub map: PanelRect,
}

pub fn setup_layout(taffy: &mut TaffyTree<()>) -> LayoutNodes {
    let status = taffy
        .new_leaf(Style {
            size: Size { width: percent(1.0), height: length(32.0) },
            margin: taffy::Rect { left: zero(), right: zero(), top: zero(), bottom: length(12.0) },
            ..Default::default()
        })
        .expect("status node");
    let map = taffy.new_leaf(Style { flex_grow: 1.0, ..Default::default() }).expect("map node");
    let root = taffy
        .new_with_children(
            Style {
                display: Display::Flex,
                flex_direction: FlexDirection::Column,
                size: Size { width: percent(1.0), height: percent(1.0) },
                padding: taffy::Rect {
                    left: length(16.0),
                    right: length(16.0),
                    top: length(16.0),
                    bottom: length(16.0),
                },
                ..Default::default()
            },
            &[status, map],
        )
        .expect("root node");
    LayoutNodes { root, status, map }
}

pub fn compute_frame_layout(
    taffy: &mut TaffyTree<()>,
    nodes: &LayoutNodes,
    viewport_width: f32,
    viewport_height: f32,
) -> FrameLayout {
    let available_size = Size {
        width: AvailableSpace::Definite(viewport_width),
        height: AvailableSpace::Definite(viewport_height),
    };
    taffy.compute_layout(nodes.root, available_size).expect("compute layout");

    let l_root = taffy.layout(nodes.root).expect("root layout");
    let l_status = taffy.layout(nodes.status).expect("status layout");
    let l_map = taffy.layout(nodes.map).expect("map layout");

    FrameLayout { status: panel_rect(l_status, &[l_root]), map: panel_rect(l_map, &[l_root]) }
}

fn panel_rect(layout: &taffy::Layout, parents: &[&taffy::Layout]) -> PanelRect {
    let mut x = layout.location.x;
    let mut y = layout.location.y;
    for parent in parents {
        x += parent.location.x;
        y += parent.location.y;
    }

    PanelRect { x, y, width: layout.size.width, height: layout.size.height }
}
