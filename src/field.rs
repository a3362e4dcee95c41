use crate::content::AI_PHRASES;

pub const MAX_PARTICLES: usize = 160;
pub const DENSITY_DIVISOR: f64 = 10_000.0;
pub const INTERACTION_RADIUS: f64 = 300.0;
pub const CONNECT_DISTANCE: f64 = 140.0;
pub const GLYPH_HOVER_DISTANCE: f64 = 150.0;

const DRIFT_SPAN: f64 = 0.4;
const GLYPH_CHANCE: f64 = 0.6;
const GLYPH_FONT_SIZE: f64 = 14.0;
const DOT_SIZE_MIN: f64 = 1.5;
const DOT_SIZE_SPAN: f64 = 2.5;
const GLYPH_ALPHA_MIN: f64 = 0.4;
const DOT_ALPHA_MIN: f64 = 0.2;
const ALPHA_SPAN: f64 = 0.5;
const MESH_BASE_SCALE: f64 = 0.3;
const MESH_BASE_WIDTH: f64 = 0.5;
const MESH_BOOST_FACTOR: f64 = 3.0;
const MESH_BOOST_CAP: f64 = 0.8;
const MESH_BOOST_WIDTH: f64 = 1.2;
const CURSOR_LINK_WIDTH: f64 = 1.5;
const CURSOR_GLOW_BLUR: f64 = 10.0;
const GLYPH_HOVER_BOOST: f64 = 0.4;

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum ParticleKind {
    Dot,
    Glyph(&'static str),
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub size: f64,
    pub alpha: f64,
    pub kind: ParticleKind,
}

#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct Cursor {
    pub x: f64,
    pub y: f64,
}

impl Cursor {
    pub fn distance_to(self, x: f64, y: f64) -> f64 {
        (self.x - x).hypot(self.y - y)
    }
}

pub struct ParticleField {
    width: f64,
    height: f64,
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn seeded(width: f64, height: f64, rng: &mut fastrand::Rng) -> Self {
        let mut field = Self {
            width,
            height,
            particles: Vec::new(),
        };
        field.reseed(width, height, rng);
        field
    }

    pub fn population(width: f64, height: f64) -> usize {
        let by_area = (width * height / DENSITY_DIVISOR).floor().max(0.0) as usize;
        by_area.min(MAX_PARTICLES)
    }

    pub fn reseed(&mut self, width: f64, height: f64, rng: &mut fastrand::Rng) {
        self.width = width;
        self.height = height;
        let count = Self::population(width, height);
        self.particles.clear();
        self.particles.reserve(count);
        for _ in 0..count {
            self.particles.push(spawn(width, height, rng));
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn step(&mut self, index: usize) {
        let p = &mut self.particles[index];
        p.x += p.vx;
        p.y += p.vy;
        // Only a component still carrying the particle outward flips, so an
        // overshooting particle settles back instead of jittering at the edge.
        if (p.x < 0.0 && p.vx < 0.0) || (p.x > self.width && p.vx > 0.0) {
            p.vx = -p.vx;
        }
        if (p.y < 0.0 && p.vy < 0.0) || (p.y > self.height && p.vy > 0.0) {
            p.vy = -p.vy;
        }
    }
}

fn spawn(width: f64, height: f64, rng: &mut fastrand::Rng) -> Particle {
    let kind = if rng.f64() < GLYPH_CHANCE {
        ParticleKind::Glyph(AI_PHRASES[rng.usize(..AI_PHRASES.len())])
    } else {
        ParticleKind::Dot
    };
    let (size, alpha_min) = match kind {
        ParticleKind::Glyph(_) => (GLYPH_FONT_SIZE, GLYPH_ALPHA_MIN),
        ParticleKind::Dot => (DOT_SIZE_MIN + rng.f64() * DOT_SIZE_SPAN, DOT_ALPHA_MIN),
    };

    Particle {
        x: rng.f64() * width,
        y: rng.f64() * height,
        vx: (rng.f64() - 0.5) * DRIFT_SPAN,
        vy: (rng.f64() - 0.5) * DRIFT_SPAN,
        size,
        alpha: alpha_min + rng.f64() * ALPHA_SPAN,
        kind,
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct CursorLink {
    pub opacity: f64,
    pub width: f64,
    pub glow: f64,
}

pub fn cursor_link(distance: f64) -> Option<CursorLink> {
    if distance >= INTERACTION_RADIUS {
        return None;
    }
    let opacity = 1.0 - distance / INTERACTION_RADIUS;
    Some(CursorLink {
        opacity,
        width: CURSOR_LINK_WIDTH * opacity,
        glow: CURSOR_GLOW_BLUR * opacity,
    })
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct MeshLink {
    pub opacity: f64,
    pub width: f64,
    pub highlighted: bool,
}

pub fn mesh_link(distance: f64, cursor_d1: f64, cursor_d2: f64) -> Option<MeshLink> {
    if distance >= CONNECT_DISTANCE {
        return None;
    }
    let base = (1.0 - distance / CONNECT_DISTANCE) * MESH_BASE_SCALE;
    if cursor_d1 < INTERACTION_RADIUS && cursor_d2 < INTERACTION_RADIUS {
        Some(MeshLink {
            opacity: (base * MESH_BOOST_FACTOR).min(MESH_BOOST_CAP),
            width: MESH_BOOST_WIDTH,
            highlighted: true,
        })
    } else {
        Some(MeshLink {
            opacity: base,
            width: MESH_BASE_WIDTH,
            highlighted: false,
        })
    }
}

pub fn glyph_hovered(cursor_distance: f64) -> bool {
    cursor_distance < GLYPH_HOVER_DISTANCE
}

pub fn boosted_alpha(base: f64) -> f64 {
    (base + GLYPH_HOVER_BOOST).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rng() -> fastrand::Rng {
        fastrand::Rng::with_seed(0x5eed)
    }

    fn field_with(width: f64, height: f64, particles: Vec<Particle>) -> ParticleField {
        ParticleField {
            width,
            height,
            particles,
        }
    }

    fn dot(x: f64, y: f64, vx: f64, vy: f64) -> Particle {
        Particle {
            x,
            y,
            vx,
            vy,
            size: 2.0,
            alpha: 0.5,
            kind: ParticleKind::Dot,
        }
    }

    #[test]
    fn population_follows_area_formula() {
        assert_eq!(ParticleField::population(1000.0, 1000.0), 100);
        assert_eq!(ParticleField::population(200.0, 100.0), 2);
        assert_eq!(ParticleField::population(99.0, 99.0), 0);
        assert_eq!(ParticleField::population(0.0, 0.0), 0);
    }

    #[test]
    fn population_is_capped() {
        assert_eq!(ParticleField::population(1920.0, 1080.0), MAX_PARTICLES);
        assert_eq!(ParticleField::population(10_000.0, 10_000.0), MAX_PARTICLES);
    }

    #[test]
    fn seeded_field_starts_inside_bounds_with_bounded_drift() {
        let mut rng = rng();
        let field = ParticleField::seeded(1000.0, 1000.0, &mut rng);
        assert_eq!(field.len(), 100);
        for p in field.particles() {
            assert!((0.0..1000.0).contains(&p.x));
            assert!((0.0..1000.0).contains(&p.y));
            assert!((-0.2..0.2).contains(&p.vx));
            assert!((-0.2..0.2).contains(&p.vy));
        }
    }

    #[test]
    fn seeded_particles_carry_kind_specific_size_and_alpha() {
        let mut rng = rng();
        let field = ParticleField::seeded(1600.0, 1000.0, &mut rng);
        let mut saw_glyph = false;
        let mut saw_dot = false;
        for p in field.particles() {
            match p.kind {
                ParticleKind::Glyph(text) => {
                    saw_glyph = true;
                    assert!(AI_PHRASES.contains(&text));
                    assert_eq!(p.size, GLYPH_FONT_SIZE);
                    assert!((GLYPH_ALPHA_MIN..GLYPH_ALPHA_MIN + ALPHA_SPAN).contains(&p.alpha));
                }
                ParticleKind::Dot => {
                    saw_dot = true;
                    assert!((DOT_SIZE_MIN..DOT_SIZE_MIN + DOT_SIZE_SPAN).contains(&p.size));
                    assert!((DOT_ALPHA_MIN..DOT_ALPHA_MIN + ALPHA_SPAN).contains(&p.alpha));
                }
            }
        }
        assert!(saw_glyph);
        assert!(saw_dot);
    }

    #[test]
    fn reseed_discards_the_previous_set() {
        let mut rng = rng();
        let mut field = ParticleField::seeded(1000.0, 1000.0, &mut rng);
        assert_eq!(field.len(), 100);

        field.reseed(500.0, 400.0, &mut rng);
        assert_eq!(field.len(), 20);
        for p in field.particles() {
            assert!((0.0..500.0).contains(&p.x));
            assert!((0.0..400.0).contains(&p.y));
        }
    }

    #[test]
    fn degenerate_canvas_seeds_nothing() {
        let mut rng = rng();
        let field = ParticleField::seeded(0.0, 0.0, &mut rng);
        assert_eq!(field.len(), 0);
    }

    #[test]
    fn step_reflects_velocity_when_a_bound_is_crossed() {
        let mut field = field_with(100.0, 100.0, vec![dot(99.9, 50.0, 0.2, 0.0)]);
        field.step(0);
        let p = field.particles()[0];
        assert!(p.x > 100.0);
        assert!(p.vx < 0.0);
    }

    #[test]
    fn step_reflects_at_the_lower_bounds_too() {
        let mut field = field_with(100.0, 100.0, vec![dot(0.1, 0.1, -0.2, -0.2)]);
        field.step(0);
        let p = field.particles()[0];
        assert!(p.vx > 0.0);
        assert!(p.vy > 0.0);
    }

    #[test]
    fn reflected_particle_returns_inside_on_the_next_step() {
        let mut field = field_with(100.0, 100.0, vec![dot(99.9, 50.0, 0.2, 0.0)]);
        field.step(0);
        field.step(0);
        let p = field.particles()[0];
        assert!(p.x <= 100.0);
        assert!(p.vx < 0.0);
    }

    #[test]
    fn interior_particle_keeps_its_velocity() {
        let mut field = field_with(100.0, 100.0, vec![dot(50.0, 50.0, 0.15, -0.05)]);
        field.step(0);
        let p = field.particles()[0];
        assert_eq!(p.vx, 0.15);
        assert_eq!(p.vy, -0.05);
        assert_eq!(p.x, 50.15);
        assert_eq!(p.y, 49.95);
    }

    #[test]
    fn long_run_never_escapes_more_than_one_tick_of_drift() {
        let mut rng = rng();
        let mut field = ParticleField::seeded(800.0, 600.0, &mut rng);
        for _ in 0..2000 {
            for i in 0..field.len() {
                field.step(i);
            }
        }
        for p in field.particles() {
            assert!(p.x >= -0.2 && p.x <= 800.2);
            assert!(p.y >= -0.2 && p.y <= 600.2);
        }
    }

    #[test]
    fn cursor_link_is_maximal_at_zero_distance() {
        let link = cursor_link(0.0).expect("link inside radius");
        assert_eq!(link.opacity, 1.0);
        assert_eq!(link.width, CURSOR_LINK_WIDTH);
        assert_eq!(link.glow, CURSOR_GLOW_BLUR);
    }

    #[test]
    fn cursor_link_fades_monotonically_and_ends_at_the_radius() {
        let mut last = f64::INFINITY;
        for distance in [0.0, 50.0, 150.0, 250.0, 299.9] {
            let link = cursor_link(distance).expect("link inside radius");
            assert!(link.opacity <= last);
            assert!(link.opacity > 0.0);
            assert!(link.width <= CURSOR_LINK_WIDTH);
            last = link.opacity;
        }
        assert!(cursor_link(INTERACTION_RADIUS).is_none());
        assert!(cursor_link(450.0).is_none());
    }

    #[test]
    fn mesh_link_fades_monotonically_and_ends_at_the_threshold() {
        let far = INTERACTION_RADIUS * 2.0;
        let mut last = f64::INFINITY;
        for distance in [0.0, 35.0, 70.0, 105.0, 139.9] {
            let link = mesh_link(distance, far, far).expect("link inside threshold");
            assert!(!link.highlighted);
            assert!(link.opacity <= last);
            last = link.opacity;
        }
        assert!(mesh_link(CONNECT_DISTANCE, far, far).is_none());
    }

    #[test]
    fn cursor_proximity_cannot_rescue_an_out_of_range_pair() {
        assert!(mesh_link(200.0, 0.0, 0.0).is_none());
    }

    #[test]
    fn mesh_link_base_opacity_tops_out_at_the_base_scale() {
        let far = INTERACTION_RADIUS * 2.0;
        let link = mesh_link(0.0, far, far).expect("link inside threshold");
        assert!((link.opacity - MESH_BASE_SCALE).abs() < 1e-12);
        assert_eq!(link.width, MESH_BASE_WIDTH);
    }

    #[test]
    fn mesh_link_highlights_only_when_both_ends_are_near_the_cursor() {
        let boosted = mesh_link(70.0, 100.0, 200.0).expect("link inside threshold");
        assert!(boosted.highlighted);
        assert_eq!(boosted.width, MESH_BOOST_WIDTH);

        let base = mesh_link(70.0, 100.0, 600.0).expect("link inside threshold");
        assert!(!base.highlighted);
        assert!(boosted.opacity >= base.opacity);
    }

    #[test]
    fn mesh_boost_caps_at_the_ceiling() {
        let link = mesh_link(0.0, 0.0, 0.0).expect("link inside threshold");
        assert_eq!(link.opacity, MESH_BOOST_CAP);
    }

    #[test]
    fn glyph_hover_brightens_and_saturates() {
        assert!(glyph_hovered(149.9));
        assert!(!glyph_hovered(GLYPH_HOVER_DISTANCE));
        assert_eq!(boosted_alpha(0.4), 0.8);
        assert_eq!(boosted_alpha(0.9), 1.0);
    }

    #[test]
    fn cursor_distance_is_euclidean() {
        let cursor = Cursor { x: 3.0, y: 0.0 };
        assert_eq!(cursor.distance_to(0.0, 4.0), 5.0);
        assert_eq!(cursor.distance_to(3.0, 0.0), 0.0);
    }
}
