//! Physics simulation using `Rapier3D`.

use parking_lot::Mutex;
use rapier3d::prelude::*;
use std::fmt;

/// Fixed timestep for physics simulation (60Hz).
pub const PHYSICS_DT: f32 = 1.0 / 60.0;

/// Maximum number of fixed steps consumed in a single frame. A frame that
/// takes longer than `MAX_CATCHUP_STEPS * PHYSICS_DT` of real time drops the
/// excess instead of spiraling.
pub const MAX_CATCHUP_STEPS: u32 = 3;

/// Friction applied to every surface pair.
pub const SURFACE_FRICTION: f32 = 0.1;

/// Restitution applied to every surface pair.
pub const SURFACE_RESTITUTION: f32 = 0.7;

/// Half-extents of the floor collider. The floor is a 5m x 5m slab, 0.1m
/// thick, centered so its top face sits at y = 0.
pub const FLOOR_HALF_EXTENTS: [f32; 3] = [2.5, 0.05, 2.5];

/// Center of the floor slab.
pub const FLOOR_CENTER_Y: f32 = -0.05;

/// Default gravity vector (downward, in m/s²).
pub fn default_gravity() -> Vector {
    Vector::new(0.0, -9.82, 0.0)
}

/// A started contact, resolved to the closing speed along the contact normal.
#[derive(Debug, Clone, Copy)]
pub struct ContactImpact {
    pub collider1: ColliderHandle,
    pub collider2: ColliderHandle,
    pub impact_speed: f32,
}

/// Physics world containing all `Rapier3D` components.
pub struct PhysicsWorld {
    pub rigid_body_set: RigidBodySet,
    pub collider_set: ColliderSet,
    pub integration_parameters: IntegrationParameters,
    pub physics_pipeline: PhysicsPipeline,
    pub island_manager: IslandManager,
    pub broad_phase: DefaultBroadPhase,
    pub narrow_phase: NarrowPhase,
    pub impulse_joint_set: ImpulseJointSet,
    pub multibody_joint_set: MultibodyJointSet,
    pub ccd_solver: CCDSolver,
    pub gravity: Vector,
    pub frame: u64,
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for PhysicsWorld {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PhysicsWorld")
            .field("frame", &self.frame)
            .field("rigid_body_count", &self.rigid_body_set.len())
            .field("collider_count", &self.collider_set.len())
            .field("gravity", &self.gravity)
            .finish_non_exhaustive()
    }
}

impl PhysicsWorld {
    /// Creates a new physics world with default settings.
    pub fn new() -> Self {
        Self::with_gravity(default_gravity())
    }

    /// Creates a new physics world with custom gravity.
    pub fn with_gravity(gravity: Vector) -> Self {
        let integration_parameters = IntegrationParameters {
            dt: PHYSICS_DT,
            ..Default::default()
        };

        Self {
            rigid_body_set: RigidBodySet::new(),
            collider_set: ColliderSet::new(),
            integration_parameters,
            physics_pipeline: PhysicsPipeline::new(),
            island_manager: IslandManager::new(),
            broad_phase: DefaultBroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            impulse_joint_set: ImpulseJointSet::new(),
            multibody_joint_set: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
            gravity,
            frame: 0,
        }
    }

    /// Advances the simulation by one fixed timestep and returns the contacts
    /// that started during the step, with their impact speeds.
    pub fn step(&mut self) -> Vec<ContactImpact> {
        let collector = ImpactCollector::default();
        self.physics_pipeline.step(
            self.gravity,
            &self.integration_parameters,
            &mut self.island_manager,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.rigid_body_set,
            &mut self.collider_set,
            &mut self.impulse_joint_set,
            &mut self.multibody_joint_set,
            &mut self.ccd_solver,
            &(),
            &collector,
        );
        self.frame += 1;
        collector.impacts.into_inner()
    }

    /// Advances the simulation by multiple steps, discarding impact events.
    pub fn step_n(&mut self, n: u32) {
        for _ in 0..n {
            self.step();
        }
    }

    /// Adds a rigid body to the world and returns its handle.
    pub fn add_rigid_body(&mut self, rigid_body: RigidBody) -> RigidBodyHandle {
        self.rigid_body_set.insert(rigid_body)
    }

    /// Adds a collider attached to a rigid body.
    pub fn add_collider(
        &mut self,
        collider: Collider,
        parent: RigidBodyHandle,
    ) -> ColliderHandle {
        self.collider_set
            .insert_with_parent(collider, parent, &mut self.rigid_body_set)
    }

    /// Removes a rigid body and its attached colliders.
    pub fn remove_rigid_body(&mut self, handle: RigidBodyHandle) {
        self.rigid_body_set.remove(
            handle,
            &mut self.island_manager,
            &mut self.collider_set,
            &mut self.impulse_joint_set,
            &mut self.multibody_joint_set,
            true,
        );
    }

    /// Gets an immutable reference to a rigid body.
    pub fn get_rigid_body(&self, handle: RigidBodyHandle) -> Option<&RigidBody> {
        self.rigid_body_set.get(handle)
    }

    /// Number of dynamic (non-fixed) bodies currently in the world.
    pub fn dynamic_body_count(&self) -> usize {
        self.rigid_body_set
            .iter()
            .filter(|(_, body)| body.is_dynamic())
            .count()
    }

    /// Returns the current simulation frame number.
    pub fn current_frame(&self) -> u64 {
        self.frame
    }
}

/// Builds the dynamic body + collider pair for one ball.
///
/// Mass is fixed at 1 regardless of radius, matching the visual-radius-only
/// variation of spawned balls. Sleeping stays enabled so settled balls drop
/// out of active integration.
pub fn ball_body(radius: f32, position: Vector) -> (RigidBody, Collider) {
    let body = RigidBodyBuilder::dynamic().translation(position).build();
    let collider = ColliderBuilder::ball(radius)
        .mass(1.0)
        .friction(SURFACE_FRICTION)
        .restitution(SURFACE_RESTITUTION)
        .active_events(ActiveEvents::COLLISION_EVENTS)
        .build();
    (body, collider)
}

/// Builds the static body + collider pair for the floor slab.
pub fn floor_body() -> (RigidBody, Collider) {
    let body = RigidBodyBuilder::fixed()
        .translation(Vector::new(0.0, FLOOR_CENTER_Y, 0.0))
        .build();
    let collider = ColliderBuilder::cuboid(
        FLOOR_HALF_EXTENTS[0],
        FLOOR_HALF_EXTENTS[1],
        FLOOR_HALF_EXTENTS[2],
    )
    .friction(SURFACE_FRICTION)
    .restitution(SURFACE_RESTITUTION)
    .build();
    (body, collider)
}

// ============================================================================
// Impact collection
// ============================================================================

/// `EventHandler` that resolves started contacts to impact speeds.
///
/// The pipeline takes the handler by shared reference, so the buffer sits
/// behind a `Mutex` even though stepping is not reentrant here.
#[derive(Default)]
struct ImpactCollector {
    impacts: Mutex<Vec<ContactImpact>>,
}

impl EventHandler for ImpactCollector {
    fn handle_collision_event(
        &self,
        bodies: &RigidBodySet,
        colliders: &ColliderSet,
        event: CollisionEvent,
        contact_pair: Option<&ContactPair>,
    ) {
        let CollisionEvent::Started(collider1, collider2, _) = event else {
            return;
        };
        let Some(pair) = contact_pair else {
            return;
        };
        let impact_speed = impact_speed_along_normal(bodies, colliders, pair);
        self.impacts.lock().push(ContactImpact {
            collider1,
            collider2,
            impact_speed,
        });
    }

    fn handle_contact_force_event(
        &self,
        _dt: Real,
        _bodies: &RigidBodySet,
        _colliders: &ColliderSet,
        _contact_pair: &ContactPair,
        _total_force_magnitude: Real,
    ) {
    }
}

/// Closing speed of the two bodies of a contact pair, projected on the
/// contact normal. Fixed bodies (and orphan colliders) contribute zero
/// velocity.
fn impact_speed_along_normal(
    bodies: &RigidBodySet,
    colliders: &ColliderSet,
    pair: &ContactPair,
) -> f32 {
    let Some(manifold) = pair.manifolds.first() else {
        return 0.0;
    };
    let v1 = collider_velocity(bodies, colliders, pair.collider1);
    let v2 = collider_velocity(bodies, colliders, pair.collider2);
    (v1 - v2).dot(manifold.data.normal).abs()
}

fn collider_velocity(
    bodies: &RigidBodySet,
    colliders: &ColliderSet,
    handle: ColliderHandle,
) -> Vector {
    colliders
        .get(handle)
        .and_then(|collider| collider.parent())
        .and_then(|parent| bodies.get(parent))
        .map_or(Vector::ZERO, |body| body.linvel())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::math::NormedVectorSpace;

    #[test]
    fn world_creation_uses_fixed_dt() {
        let world = PhysicsWorld::new();
        assert_eq!(world.frame, 0);
        assert_eq!(world.integration_parameters.dt, PHYSICS_DT);
        assert_eq!(world.gravity.y, -9.82);
    }

    #[test]
    fn step_advances_frame() {
        let mut world = PhysicsWorld::new();
        assert_eq!(world.current_frame(), 0);

        world.step();
        assert_eq!(world.current_frame(), 1);

        world.step_n(10);
        assert_eq!(world.current_frame(), 11);
    }

    #[test]
    fn add_and_remove_body() {
        let mut world = PhysicsWorld::new();

        let (body, collider) = ball_body(0.5, Vector::new(0.0, 2.0, 0.0));
        let handle = world.add_rigid_body(body);
        world.add_collider(collider, handle);

        assert!(world.get_rigid_body(handle).is_some());
        assert_eq!(world.dynamic_body_count(), 1);

        world.remove_rigid_body(handle);
        assert!(world.get_rigid_body(handle).is_none());
        assert_eq!(world.dynamic_body_count(), 0);
    }

    #[test]
    fn dropped_ball_settles_on_floor() {
        let mut world = PhysicsWorld::new();

        let (floor, floor_collider) = floor_body();
        let floor_handle = world.add_rigid_body(floor);
        world.add_collider(floor_collider, floor_handle);

        let (ball, ball_collider) = ball_body(0.5, Vector::new(0.0, 2.0, 0.0));
        let ball_handle = world.add_rigid_body(ball);
        world.add_collider(ball_collider, ball_handle);

        // 10 simulated seconds is plenty for a 2m drop with 0.7 restitution.
        world.step_n(600);

        let ball = world.get_rigid_body(ball_handle).unwrap();
        let pos = ball.translation();
        // Resting on the top face of the floor: center at ~radius above y=0.
        assert!(
            (pos.y - 0.5).abs() < 0.05,
            "ball should rest at radius height, got y={}",
            pos.y
        );
        assert!(ball.linvel().norm() < 0.1, "ball should be at rest");
    }

    #[test]
    fn floor_impact_reports_speed_along_normal() {
        let mut world = PhysicsWorld::new();

        let (floor, floor_collider) = floor_body();
        let floor_handle = world.add_rigid_body(floor);
        world.add_collider(floor_collider, floor_handle);

        let (ball, ball_collider) = ball_body(0.3, Vector::new(0.0, 1.0, 0.0));
        let ball_handle = world.add_rigid_body(ball);
        world.add_collider(ball_collider, ball_handle);

        let mut first_impact = None;
        for _ in 0..120 {
            let impacts = world.step();
            if let Some(impact) = impacts.first() {
                first_impact = Some(*impact);
                break;
            }
        }

        let impact = first_impact.expect("ball must hit the floor within 2s");
        // Free fall from 1m minus the radius: v = sqrt(2 * g * h) ≈ 3.7 m/s.
        let expected = (2.0_f32 * 9.82 * 0.7).sqrt();
        assert!(
            (impact.impact_speed - expected).abs() < 0.5,
            "impact speed {} should be near {}",
            impact.impact_speed,
            expected
        );
        let _ = ball_handle;
    }
}
