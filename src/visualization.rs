//! Interactive game window using kiss3d.
//!
//! Tiles are drawn as flat boxes in the XY plane, one world unit per grid
//! cell. Pictures are never decoded: each tile is tinted by its home cell so
//! the solved board forms a smooth gradient, with the hue of the blue channel
//! picked from the picture source name. A small notch marks each tile's top
//! edge so turns are visible.

use std::time::Instant;

use anyhow::Result;
use kiss3d::prelude::*;
use tracing::info;

use tileswap::render::{RenderModel, TileView};
use tileswap::session::{Dialog, Session, SessionConfig, SessionEvent};

/// Edge length of a drawn tile, leaving a visible gap between cells.
const TILE_SIZE: f32 = 0.92;
/// Thickness of a tile box.
const TILE_DEPTH: f32 = 0.1;
/// How far a selected tile is lifted towards the camera.
const SELECTED_LIFT: f32 = 0.3;
/// Distance of the top-edge notch from the tile center.
const NOTCH_OFFSET: f32 = 0.36;
const NOTCH_SIZE: f32 = 0.14;

/// Grid cell the keyboard cursor is on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct Cursor {
    column: usize,
    row: usize,
}

impl Cursor {
    fn clamp(self, columns: usize, rows: usize) -> Self {
        Self {
            column: self.column.min(columns.saturating_sub(1)),
            row: self.row.min(rows.saturating_sub(1)),
        }
    }
}

/// Stable 0..1 tint derived from a picture source name.
fn picture_tint(source: &str) -> f32 {
    let hash = source
        .bytes()
        .fold(0u32, |acc, b| acc.wrapping_mul(31).wrapping_add(b as u32));
    (hash % 1000) as f32 / 1000.0
}

/// Color of a tile, fixed by its home cell so the solved board is a gradient.
fn tile_color(view: &TileView, model: &RenderModel, tint: f32) -> Color {
    let home = view.id.original_index();
    let column = (home % model.columns) as f32;
    let row = (home / model.columns) as f32;
    let red = column / (model.columns.saturating_sub(1).max(1)) as f32;
    let green = row / (model.rows.saturating_sub(1).max(1)) as f32;
    Color::new(0.15 + 0.8 * red, 0.15 + 0.8 * green, 0.3 + 0.6 * tint, 1.0)
}

/// World position of the center of a grid cell, with the board centered.
fn cell_center(column: usize, row: usize, model: &RenderModel) -> Vec3 {
    Vec3::new(
        column as f32 - (model.columns as f32 - 1.0) / 2.0,
        (model.rows as f32 - 1.0) / 2.0 - row as f32,
        0.0,
    )
}

/// Offset of the notch showing which edge of the tile is currently on top.
fn notch_offset(rotation_degrees: u32) -> Vec3 {
    match rotation_degrees {
        0 => Vec3::new(0.0, NOTCH_OFFSET, 0.0),
        90 => Vec3::new(NOTCH_OFFSET, 0.0, 0.0),
        180 => Vec3::new(0.0, -NOTCH_OFFSET, 0.0),
        _ => Vec3::new(-NOTCH_OFFSET, 0.0, 0.0),
    }
}

/// Adds the board to the scene and returns every node created.
fn build_scene(scene: &mut SceneNode3d, session: &Session, cursor: Cursor) -> Vec<SceneNode3d> {
    let model = session.render_model();
    let tint = picture_tint(session.image());
    let mut nodes = Vec::with_capacity(model.tiles.len() * 2 + 1);

    // cursor frame sits behind the tile so only its border shows
    let frame = scene
        .add_cube(1.0, 1.0, TILE_DEPTH)
        .set_color(Color::new(1.0, 1.0, 1.0, 1.0))
        .set_position(cell_center(cursor.column, cursor.row, &model) - Vec3::new(0.0, 0.0, TILE_DEPTH));
    nodes.push(frame);

    for view in &model.tiles {
        let lift = if view.selected { SELECTED_LIFT } else { 0.0 };
        let center = cell_center(view.column, view.row, &model) + Vec3::new(0.0, 0.0, lift);

        let tile = scene
            .add_cube(TILE_SIZE, TILE_SIZE, TILE_DEPTH)
            .set_color(tile_color(view, &model, tint))
            .set_position(center);
        nodes.push(tile);

        let notch = scene
            .add_cube(NOTCH_SIZE, NOTCH_SIZE, TILE_DEPTH)
            .set_color(Color::new(0.05, 0.05, 0.05, 1.0))
            .set_position(
                center + notch_offset(view.rotation_degrees) + Vec3::new(0.0, 0.0, TILE_DEPTH),
            );
        nodes.push(notch);
    }

    nodes
}

fn window_title(session: &Session) -> String {
    match session.dialog() {
        Some(Dialog::Rules) => "Rules: select a tile, click it again to turn it, click another \
                                to swap. Restore the picture. [Enter] start"
            .to_owned(),
        Some(Dialog::Congratulations) => format!(
            "Solved in {}! [Enter] next puzzle",
            session.formatted_elapsed()
        ),
        None => format!(
            "Tile Swap {} - {} tiles left - [Arrows] move, [Space] click, [R] reshuffle",
            session.formatted_elapsed(),
            session.puzzle().misplaced_count()
        ),
    }
}

/// Runs the game until the window is closed.
pub fn play(config: SessionConfig) -> Result<()> {
    pollster::block_on(play_async(config))
}

async fn play_async(config: SessionConfig) -> Result<()> {
    let mut session = Session::new(config);
    let mut cursor = Cursor::default();

    let mut window = Window::new(&window_title(&session)).await;
    let mut camera = OrbitCamera3d::default();
    camera.set_dist(14.0);

    let mut scene = SceneNode3d::empty();
    scene
        .add_light(Light::point(100.0))
        .set_position(Vec3::new(0.0, 0.0, 12.0));

    let mut nodes = build_scene(&mut scene, &session, cursor);
    let mut title = window_title(&session);
    let mut needs_rebuild = false;

    loop {
        let now = Instant::now();

        for event in window.events().iter() {
            use kiss3d::event::{Action, Key, WindowEvent};
            match event.value {
                WindowEvent::FramebufferSize(width, height) => {
                    session.resize(width as f64, height as f64);
                    let layout = session.layout();
                    cursor = cursor.clamp(layout.columns, layout.rows);
                    needs_rebuild = true;
                }
                WindowEvent::Key(key, Action::Press, _) => {
                    let (columns, rows) = (session.layout().columns, session.layout().rows);
                    match key {
                        Key::Left => cursor.column = cursor.column.saturating_sub(1),
                        Key::Right => cursor.column += 1,
                        Key::Up => cursor.row = cursor.row.saturating_sub(1),
                        Key::Down => cursor.row += 1,
                        Key::Space => {
                            let model = session.render_model();
                            if let Some(view) = model.tile_at_cell(cursor.column, cursor.row) {
                                if let Some(SessionEvent::Solved { elapsed_secs }) =
                                    session.click(view.id, now)
                                {
                                    info!(elapsed_secs, "congratulations");
                                }
                            }
                        }
                        Key::Return => match session.dialog() {
                            Some(Dialog::Rules) => session.dismiss_rules(now),
                            Some(Dialog::Congratulations) => session.next_puzzle(now),
                            None => {}
                        },
                        Key::R => session.next_puzzle(now),
                        _ => {}
                    }
                    cursor = cursor.clamp(columns, rows);
                    needs_rebuild = true;
                }
                _ => {}
            }
        }

        session.tick(now);

        if needs_rebuild {
            for mut node in nodes.drain(..) {
                node.remove();
            }
            nodes = build_scene(&mut scene, &session, cursor);
            needs_rebuild = false;
        }

        let next_title = window_title(&session);
        if next_title != title {
            window.set_title(&next_title);
            title = next_title;
        }

        if !window.render_3d(&mut scene, &mut camera).await {
            break;
        }
    }

    Ok(())
}
