use softfall::{GroundResponse, Particle, Spring, Vec2};

fn pair(ax: f32, ay: f32, bx: f32, by: f32) -> Vec<Particle<f32>> {
    vec![
        Particle::new(Vec2::new(ax, ay), 0.0),
        Particle::new(Vec2::new(bx, by), 0.0),
    ]
}

#[test]
fn rest_length_is_captured_once() {
    let mut particles = pair(0.0, 0.0, 2.0, 0.0);
    let spring = Spring::from_particles(0, 1, &particles, 100.0, 10.0);
    assert_eq!(spring.rest_length, 2.0);

    for _ in 0..50 {
        spring.apply(&mut particles);
        for p in particles.iter_mut() {
            p.integrate(0.01, GroundResponse::ElasticReflect);
            p.reset_forces(0.0);
        }
    }
    assert_eq!(spring.rest_length, 2.0);
}

#[test]
fn forces_are_equal_and_opposite() {
    let mut particles = pair(0.0, 0.0, 2.0, 1.0);
    let spring = Spring::from_particles(0, 1, &particles, 100.0, 10.0);

    // Give the pair some relative motion so the damping term participates.
    particles[0].vel = Vec2::new(0.5, -0.25);
    particles[1].vel = Vec2::new(-1.0, 0.75);
    // Stretch past rest so the Hooke term participates too.
    particles[1].pos = Vec2::new(3.0, 1.5);

    spring.apply(&mut particles);
    assert_eq!(particles[0].force.x, -particles[1].force.x);
    assert_eq!(particles[0].force.y, -particles[1].force.y);
}

#[test]
fn stretched_spring_pulls_endpoints_together() {
    let mut particles = pair(0.0, 0.0, 2.0, 0.0);
    let spring = Spring::new(0, 1, 1.0, 100.0, 0.0);
    spring.apply(&mut particles);

    // Endpoint a is pulled toward b and vice versa.
    assert!(particles[0].force.x > 0.0, "force on a: {:?}", particles[0].force);
    assert!(particles[1].force.x < 0.0, "force on b: {:?}", particles[1].force);
    assert!((particles[0].force.x - 100.0).abs() < 1e-4);
}

#[test]
fn compressed_spring_pushes_endpoints_apart() {
    let mut particles = pair(0.0, 0.0, 0.5, 0.0);
    let spring = Spring::new(0, 1, 1.0, 100.0, 0.0);
    spring.apply(&mut particles);

    assert!(particles[0].force.x < 0.0);
    assert!(particles[1].force.x > 0.0);
    assert!((particles[0].force.x - (-50.0)).abs() < 1e-4);
}

#[test]
fn damping_opposes_closing_velocity() {
    // At exactly rest length only the damping term contributes.
    let mut particles = pair(0.0, 0.0, 1.0, 0.0);
    particles[1].vel = Vec2::new(-1.0, 0.0);
    let spring = Spring::new(0, 1, 1.0, 100.0, 10.0);
    spring.apply(&mut particles);

    assert!((particles[0].force.x - (-10.0)).abs() < 1e-5);
    assert!((particles[1].force.x - 10.0).abs() < 1e-5);
}

#[test]
fn released_pair_oscillates_without_drifting() {
    // No gravity, no damping: the pair must trade stretch for compression
    // with the center of mass staying put.
    let mut particles = pair(0.0, 0.0, 1.5, 0.0);
    let spring = Spring::new(0, 1, 1.0, 100.0, 0.0);
    let dt = 0.001f32;

    let mut previous_sign = 1.0f32;
    let mut sign_changes = 0;
    for _ in 0..2000 {
        spring.apply(&mut particles);
        for p in particles.iter_mut() {
            p.integrate(dt, GroundResponse::ElasticReflect);
            p.reset_forces(0.0);
        }

        let separation = particles[0].pos.distance(particles[1].pos);
        let sign = if separation >= 1.0 { 1.0 } else { -1.0 };
        if sign != previous_sign {
            sign_changes += 1;
            previous_sign = sign;
        }

        let com_vel = particles[0].vel + particles[1].vel;
        assert!(
            com_vel.length() < 1e-4,
            "center of mass drifted: {:?}",
            com_vel
        );
    }

    assert!(
        sign_changes >= 2,
        "expected stretch/compression cycles, saw {} crossings",
        sign_changes
    );
}

#[test]
fn coincident_endpoints_are_a_noop() {
    let mut particles = pair(1.0, 1.0, 1.0, 1.0);
    particles[0].vel = Vec2::new(0.3, -0.2);
    particles[1].vel = Vec2::new(-0.1, 0.4);
    let spring = Spring::new(0, 1, 1.0, 100.0, 10.0);

    let before: Vec<_> = particles.iter().map(|p| (p.vel, p.force)).collect();
    spring.apply(&mut particles);
    for (p, (vel, force)) in particles.iter().zip(before) {
        assert_eq!(p.vel, vel);
        assert_eq!(p.force, force);
    }
}

#[test]
fn near_contact_reflects_velocities_instead_of_forcing() {
    let mut particles = pair(0.0, 0.0, 0.05, 0.0);
    particles[0].vel = Vec2::new(1.0, 0.0);
    particles[1].vel = Vec2::new(-1.0, 0.0);
    let spring = Spring::new(0, 1, 1.0, 100.0, 10.0);
    spring.apply(&mut particles);

    // Axis points a -> b. Endpoint a gets v - 2(v.u)u, endpoint b gets
    // v + 2(v.u)u, each from its own projection.
    assert!((particles[0].vel.x - (-1.0)).abs() < 1e-5, "a: {:?}", particles[0].vel);
    assert!((particles[1].vel.x - (-3.0)).abs() < 1e-5, "b: {:?}", particles[1].vel);
    assert!(particles[0].vel.y.abs() < 1e-6);
    assert!(particles[1].vel.y.abs() < 1e-6);

    // No spring force in the contact branch.
    assert_eq!(particles[0].force, Vec2::new(0.0, 0.0));
    assert_eq!(particles[1].force, Vec2::new(0.0, 0.0));
}

#[test]
fn contact_reflection_ignores_transverse_velocity() {
    let mut particles = pair(0.0, 0.0, 0.05, 0.0);
    particles[0].vel = Vec2::new(0.0, 2.0);
    particles[1].vel = Vec2::new(0.0, -3.0);
    let spring = Spring::new(0, 1, 1.0, 100.0, 10.0);
    spring.apply(&mut particles);

    // Velocities perpendicular to the axis have zero projection on it.
    assert_eq!(particles[0].vel, Vec2::new(0.0, 2.0));
    assert_eq!(particles[1].vel, Vec2::new(0.0, -3.0));
}
