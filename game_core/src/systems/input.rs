use hecs::World;
use tracing::debug;

use crate::camera::Camera;
use crate::components::*;
use crate::resources::*;

use super::player_pos;

/// Apply queued input events: key flags, pointer tracking, charge start and shot release
pub fn ingest_inputs(
    world: &mut World,
    inputs: &mut InputQueue,
    pointer: &mut Pointer,
    camera: &Camera,
    events: &mut Events,
) {
    for event in inputs.drain() {
        match event {
            InputEvent::KeyDown(key) => set_key(world, key, true),
            InputEvent::KeyUp(key) => set_key(world, key, false),
            InputEvent::PointerMoved(screen) => pointer.screen = screen,
            InputEvent::PointerDown => {
                for (_entity, ball) in world.query_mut::<&mut Ball>() {
                    if ball.start_charging() {
                        debug!("charging shot");
                    }
                }
            }
            InputEvent::PointerUp => {
                let Some(player) = player_pos(world) else {
                    continue;
                };
                let dir = aim_direction(player, camera.screen_to_world(pointer.screen));

                for (_entity, ball) in world.query_mut::<&mut Ball>() {
                    let power = ball.shoot_power;
                    if let Some(vel) = ball.shoot(dir) {
                        debug!(power, vx = vel.x, vy = vel.y, "shot released");
                        events.shot_fired = Some(vel);
                        events.possession_changed = Some(Owner::None);
                    }
                }
            }
        }
    }
}

fn set_key(world: &mut World, key: Key, held: bool) {
    for (_entity, control) in world.query_mut::<&mut PlayerControl>() {
        match key {
            Key::Up => control.up = held,
            Key::Down => control.down = held,
            Key::Left => control.left = held,
            Key::Right => control.right = held,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_player, Config};
    use glam::Vec2;

    fn setup() -> (World, Config, Camera, Pointer, Events, InputQueue) {
        let config = Config::new();
        let mut world = World::new();
        create_player(&mut world, &config, Vec2::ZERO);
        create_ball(&mut world, &config, Vec2::new(30.0, 0.0));
        let camera = Camera::new(Vec2::new(800.0, 600.0), 0.1);
        (
            world,
            config,
            camera,
            Pointer::default(),
            Events::new(),
            InputQueue::new(),
        )
    }

    fn control(world: &World) -> PlayerControl {
        *world.query::<&PlayerControl>().iter().next().unwrap().1
    }

    fn ball(world: &World) -> Ball {
        *world.query::<&Ball>().iter().next().unwrap().1
    }

    fn set_owner(world: &mut World, owner: Owner) {
        for (_e, ball) in world.query_mut::<&mut Ball>() {
            ball.owner = owner;
        }
    }

    #[test]
    fn test_key_down_and_up_toggle_flags() {
        let (mut world, _config, camera, mut pointer, mut events, mut queue) = setup();
        queue.push(InputEvent::KeyDown(Key::Right));
        queue.push(InputEvent::KeyDown(Key::Up));
        ingest_inputs(&mut world, &mut queue, &mut pointer, &camera, &mut events);

        let held = control(&world);
        assert!(held.right && held.up);
        assert!(!held.left && !held.down);

        queue.push(InputEvent::KeyUp(Key::Right));
        ingest_inputs(&mut world, &mut queue, &mut pointer, &camera, &mut events);
        assert!(!control(&world).right);
        assert!(queue.is_empty(), "queue is drained");
    }

    #[test]
    fn test_pointer_moved_updates_pointer() {
        let (mut world, _config, camera, mut pointer, mut events, mut queue) = setup();
        queue.push(InputEvent::PointerMoved(Vec2::new(10.0, 20.0)));
        ingest_inputs(&mut world, &mut queue, &mut pointer, &camera, &mut events);
        assert_eq!(pointer.screen, Vec2::new(10.0, 20.0));
    }

    #[test]
    fn test_pointer_down_without_ball_does_not_charge() {
        let (mut world, _config, camera, mut pointer, mut events, mut queue) = setup();
        queue.push(InputEvent::PointerDown);
        ingest_inputs(&mut world, &mut queue, &mut pointer, &camera, &mut events);
        assert!(!ball(&world).charging);
    }

    #[test]
    fn test_pointer_down_with_ball_starts_charge() {
        let (mut world, _config, camera, mut pointer, mut events, mut queue) = setup();
        set_owner(&mut world, Owner::Player);
        queue.push(InputEvent::PointerDown);
        ingest_inputs(&mut world, &mut queue, &mut pointer, &camera, &mut events);

        let ball = ball(&world);
        assert!(ball.charging);
        assert_eq!(ball.shoot_power, 0.0);
    }

    #[test]
    fn test_pointer_up_shoots_toward_world_pointer() {
        let (mut world, _config, mut camera, mut pointer, mut events, mut queue) = setup();
        set_owner(&mut world, Owner::Player);
        for (_e, ball) in world.query_mut::<&mut Ball>() {
            ball.charging = true;
            ball.shoot_power = 10.0;
        }
        // Pointer in the screen centre maps to world (0, 100): straight down
        camera.offset = Vec2::new(-400.0, -200.0);
        queue.push(InputEvent::PointerMoved(Vec2::new(400.0, 300.0)));
        queue.push(InputEvent::PointerUp);
        ingest_inputs(&mut world, &mut queue, &mut pointer, &camera, &mut events);

        let ball = ball(&world);
        assert_eq!(ball.owner, Owner::None);
        assert!(!ball.charging);
        assert_eq!(ball.shoot_power, 0.0);
        assert!((ball.vel - Vec2::new(0.0, 10.0)).length() < 1e-4);
        assert!(events.shot_fired.is_some());
        assert_eq!(events.possession_changed, Some(Owner::None));
    }

    #[test]
    fn test_pointer_up_without_ball_is_ignored() {
        let (mut world, _config, camera, mut pointer, mut events, mut queue) = setup();
        set_owner(&mut world, Owner::Enemy);
        queue.push(InputEvent::PointerUp);
        ingest_inputs(&mut world, &mut queue, &mut pointer, &camera, &mut events);

        assert_eq!(ball(&world).owner, Owner::Enemy);
        assert_eq!(events.shot_fired, None);
    }
}
