//! ExoCycle Viewer - Bevy scatter plots for temperature sweeps
//!
//! Opens a window with two side-by-side panels (efficiency vs power, and
//! power vs efficiency) and blocks until it is closed.

pub mod layout;

use bevy::prelude::*;
use exocycle_logic::sweep::SweepPoint;

use crate::layout::{side_by_side, Extent, PanelLayout};

const WINDOW_SIZE: Vec2 = Vec2::new(1280.0, 640.0);
const MARKER_RADIUS: f32 = 5.0;

#[derive(Resource)]
struct ScatterPanels([PanelLayout; 2]);

/// Show the sweep and block until the window is dismissed.
///
/// Returns the app's exit code, 0 on a normal close.
pub fn show(points: Vec<SweepPoint>, planet: &str) -> u8 {
    log::info!("plotting {} sweep points for {}", points.len(), planet);
    let panels = side_by_side(&points, WINDOW_SIZE);

    let exit = App::new()
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: format!("ExoCycle - {} sweep", planet),
                        resolution: (WINDOW_SIZE.x, WINDOW_SIZE.y).into(),
                        present_mode: bevy::window::PresentMode::AutoVsync,
                        ..default()
                    }),
                    ..default()
                })
                // The binary installs its own subscriber.
                .disable::<bevy::log::LogPlugin>(),
        )
        .insert_resource(ClearColor(Color::srgb(0.08, 0.08, 0.1)))
        .insert_resource(ScatterPanels(panels))
        .add_systems(Startup, setup)
        .add_systems(Update, (render_axes, render_markers))
        .run();

    match exit {
        AppExit::Success => 0,
        AppExit::Error(code) => code.get(),
    }
}

fn setup(mut commands: Commands, panels: Res<ScatterPanels>) {
    commands.spawn(Camera2d::default());

    for panel in &panels.0 {
        let origin = panel.origin();
        let top = panel.center.y + panel.size.y / 2.0;

        spawn_label(&mut commands, &panel.title, Vec2::new(panel.center.x, top + 30.0), 20.0);

        // Axis names
        spawn_label(
            &mut commands,
            panel.x.label(),
            Vec2::new(panel.center.x, origin.y - 45.0),
            15.0,
        );
        commands.spawn((
            Text2d::new(panel.y.label()),
            TextFont {
                font_size: 15.0,
                ..default()
            },
            TextColor(Color::srgb(0.85, 0.85, 0.85)),
            Transform::from_xyz(origin.x - 70.0, panel.center.y, 0.0)
                .with_rotation(Quat::from_rotation_z(std::f32::consts::FRAC_PI_2)),
        ));

        // Min/max ticks
        spawn_label(
            &mut commands,
            &tick(panel.x_extent.min),
            Vec2::new(origin.x, origin.y - 18.0),
            12.0,
        );
        spawn_label(
            &mut commands,
            &tick(panel.x_extent.max),
            Vec2::new(origin.x + panel.size.x, origin.y - 18.0),
            12.0,
        );
        spawn_label(
            &mut commands,
            &tick(panel.y_extent.min),
            Vec2::new(origin.x - 32.0, origin.y),
            12.0,
        );
        spawn_label(
            &mut commands,
            &tick(panel.y_extent.max),
            Vec2::new(origin.x - 32.0, top),
            12.0,
        );
    }
}

fn spawn_label(commands: &mut Commands, text: &str, at: Vec2, font_size: f32) {
    commands.spawn((
        Text2d::new(text),
        TextFont {
            font_size,
            ..default()
        },
        TextColor(Color::srgb(0.85, 0.85, 0.85)),
        Transform::from_xyz(at.x, at.y, 0.0),
    ));
}

fn tick(v: f64) -> String {
    format!("{:.3}", v)
}

fn render_axes(panels: Res<ScatterPanels>, mut gizmos: Gizmos) {
    let axis_color = Color::srgb(0.7, 0.7, 0.7);
    let grid_color = Color::srgba(0.5, 0.5, 0.5, 0.2);

    for panel in &panels.0 {
        let origin = panel.origin();

        // Frame and quarter grid lines
        gizmos.rect_2d(
            Isometry2d::from_translation(panel.center),
            panel.size,
            grid_color,
        );
        for i in 1..4 {
            let f = i as f32 / 4.0;
            gizmos.line_2d(
                origin + Vec2::new(panel.size.x * f, 0.0),
                origin + Vec2::new(panel.size.x * f, panel.size.y),
                grid_color,
            );
            gizmos.line_2d(
                origin + Vec2::new(0.0, panel.size.y * f),
                origin + Vec2::new(panel.size.x, panel.size.y * f),
                grid_color,
            );
        }

        gizmos.line_2d(origin, origin + Vec2::new(panel.size.x, 0.0), axis_color);
        gizmos.line_2d(origin, origin + Vec2::new(0.0, panel.size.y), axis_color);

        // Zero lines when the data straddles zero (negative efficiencies).
        draw_zero_line(&mut gizmos, panel, panel.x_extent, true);
        draw_zero_line(&mut gizmos, panel, panel.y_extent, false);
    }
}

fn draw_zero_line(gizmos: &mut Gizmos, panel: &PanelLayout, extent: Extent, vertical: bool) {
    if extent.min >= 0.0 || extent.max <= 0.0 {
        return;
    }
    let origin = panel.origin();
    let f = extent.normalize(0.0) as f32;
    let color = Color::srgb(0.8, 0.4, 0.3);
    if vertical {
        let x = origin.x + panel.size.x * f;
        gizmos.line_2d(Vec2::new(x, origin.y), Vec2::new(x, origin.y + panel.size.y), color);
    } else {
        let y = origin.y + panel.size.y * f;
        gizmos.line_2d(Vec2::new(origin.x, y), Vec2::new(origin.x + panel.size.x, y), color);
    }
}

fn render_markers(panels: Res<ScatterPanels>, mut gizmos: Gizmos) {
    for panel in &panels.0 {
        for marker in &panel.markers {
            // Cool blue for the lowest hot reservoir, warm orange for the highest.
            let color = Color::srgb(
                0.3 + 0.65 * marker.shade,
                0.55,
                0.95 - 0.7 * marker.shade,
            );
            gizmos.circle_2d(
                Isometry2d::from_translation(marker.position),
                MARKER_RADIUS,
                color,
            );
        }
    }
}
