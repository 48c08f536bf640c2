use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use bevy::window::{PrimaryWindow, WindowCloseRequested};
use perching_boids::{FrameOutcome, InputEvent};

use crate::resources::*;

pub fn setup(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    mut gizmo_config: ResMut<GizmoConfigStore>,
    sim: Res<FlockSim>,
    viewport: Res<Viewport>,
) {
    commands.spawn(Camera2dBundle::default());

    let flock = sim.0.flock();
    let (gizmos, _) = gizmo_config.config_mut::<DefaultGizmoConfigGroup>();
    gizmos.line_width = flock.config().outline_thickness;

    for (boid, appearance) in flock.boids().iter().zip(flock.appearances()) {
        // Shape vertices are y-down; the mesh lives in bevy's y-up space.
        let [a, b, c] = appearance.shape.vertices.map(|v| Vec2::new(v.x, -v.y));
        let mesh = meshes.add(Triangle2d::new(a, b, c));
        let fill = appearance.fill;
        let material = materials.add(ColorMaterial::from(Color::srgb_u8(fill.r, fill.g, fill.b)));
        let position = viewport.to_world(boid.position());

        commands.spawn((
            MaterialMesh2dBundle {
                mesh: Mesh2dHandle(mesh),
                material,
                transform: Transform::from_xyz(position.x, position.y, 0.0),
                ..default()
            },
            BoidSprite(boid.id()),
        ));
    }

    info!("spawned {} boid meshes", flock.len());
}

pub fn collect_input(
    mouse: Res<ButtonInput<MouseButton>>,
    window_query: Query<&Window, With<PrimaryWindow>>,
    mut close_requests: EventReader<WindowCloseRequested>,
    mut pending: ResMut<PendingInput>,
) {
    if close_requests.read().next().is_some() {
        pending.0.push_back(InputEvent::Close);
    }

    if mouse.just_pressed(MouseButton::Left) {
        let Ok(window) = window_query.get_single() else {
            return;
        };
        if let Some(cursor) = window.cursor_position() {
            pending.0.push_back(InputEvent::LeftClick {
                x: cursor.x as i32,
                y: cursor.y as i32,
            });
        }
    }
}

pub fn step_simulation(
    mut sim: ResMut<FlockSim>,
    mut pending: ResMut<PendingInput>,
    mut draws: ResMut<FrameDraws>,
    mut exit: EventWriter<AppExit>,
) {
    if sim.0.frame(&mut pending.0, &mut draws.0) == FrameOutcome::Stop {
        exit.send(AppExit::Success);
    }
}

/// Move each mesh to its recorded pose and outline it.
pub fn apply_poses(
    draws: Res<FrameDraws>,
    viewport: Res<Viewport>,
    mut query: Query<(&BoidSprite, &mut Transform)>,
    mut gizmos: Gizmos,
) {
    let calls = draws.0.calls();

    for (sprite, mut transform) in query.iter_mut() {
        let Some(call) = calls.get(sprite.0.index()) else {
            continue;
        };
        let position = viewport.to_world(call.pose.position);
        transform.translation = position.extend(transform.translation.z);
        // Clockwise in y-down viewport space is clockwise on screen.
        transform.rotation = Quat::from_rotation_z(-call.pose.rotation_degrees.to_radians());

        let rotation = Vec2::from_angle(call.pose.rotation_degrees.to_radians());
        let outline = call.appearance.outline;
        let corners = call
            .appearance
            .shape
            .vertices
            .map(|v| viewport.to_world(call.pose.position + rotation.rotate(v)));
        gizmos.linestrip_2d(
            [corners[0], corners[1], corners[2], corners[0]],
            Color::srgb_u8(outline.r, outline.g, outline.b),
        );
    }
}

pub fn toggle_debug_mode(
    keyboard_input: Res<ButtonInput<KeyCode>>,
    mut debug_mode: ResMut<DebugMode>,
) {
    if keyboard_input.just_pressed(KeyCode::KeyD) {
        debug_mode.0 = !debug_mode.0;
        info!("Debug mode: {}", if debug_mode.0 { "ON" } else { "OFF" });
    }
}

/// Safety and perceptual radii around every boid, the ground line, and the target.
pub fn draw_debug_overlay(
    sim: Res<FlockSim>,
    viewport: Res<Viewport>,
    debug_mode: Res<DebugMode>,
    mut gizmos: Gizmos,
) {
    if !debug_mode.0 {
        return;
    }

    let flock = sim.0.flock();
    let config = flock.config();

    for boid in flock.boids() {
        let position = viewport.to_world(boid.position());
        gizmos.circle_2d(position, config.safety_distance, Color::srgba(1.0, 0.2, 0.2, 0.2));
        gizmos.circle_2d(position, config.perceptual_distance, Color::srgba(0.0, 1.0, 0.0, 0.05));
    }

    let ground_left = viewport.to_world(Vec2::new(0.0, config.ground_level()));
    let ground_right = viewport.to_world(Vec2::new(config.width, config.ground_level()));
    gizmos.line_2d(ground_left, ground_right, Color::srgba(0.6, 0.4, 0.2, 0.8));

    let target = viewport.to_world(flock.target());
    gizmos.circle_2d(target, 4.0, Color::srgb(1.0, 1.0, 0.0));
}
