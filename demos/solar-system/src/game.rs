/// Solar System — a sun, planets on circular orbits, a starfield and orbit
/// rings, with hover labels, click-to-focus camera flights, per-planet speed
/// sliders, pause and a light/dark theme.
///
/// Tick order: camera flight step → input → orbits (unless paused) →
/// label tracking → hover pick.

use glam::{Vec2, Vec3};
use orrery_engine::*;

use crate::bodies::{self, FOCUS_OFFSET, ORBIT_HEIGHT, OVERVIEW_POSITION, OVERVIEW_TARGET};
use crate::controls::{
    self, CONTAINER_ID, CUSTOM_SET_SPEED, CUSTOM_SET_STAR_SIZE, CUSTOM_TOGGLE_PAUSE,
    CUSTOM_TOGGLE_THEME, EVENT_FOCUS, EVENT_PAUSE, EVENT_THEME, PAUSE_BUTTON_ID,
};
use crate::orbit::{self, SELF_ROTATION_STEP};
use crate::scene::{self, PlanetEntities};
use crate::theme::{Theme, LIGHT_THEME_CLASS};

/// Hover label placement relative to the cursor, in CSS pixels.
const HOVER_LABEL_OFFSET: Vec2 = Vec2::new(12.0, -8.0);

/// Runtime state of one orbiting body.
#[derive(Debug, Clone)]
pub struct Planet {
    pub name: String,
    /// Base radius before theme scaling.
    pub size: f32,
    pub distance: f32,
    /// Radians per second; written by the speed sliders.
    pub speed: f32,
    /// Orbital angle, accumulated without wrapping.
    pub angle: f64,
    pub entities: PlanetEntities,
}

/// Last pointer position over the render surface.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Pointer {
    ndc: Vec2,
    client: Vec2,
}

pub struct SolarSystem {
    manifest: SceneManifest,
    planets: Vec<Planet>,
    sun: Option<EntityId>,
    stars: Option<EntityId>,
    theme: Theme,
    paused: bool,
    tween: CameraTween,
    /// `None` until the first pointer move; no hover pick runs before that.
    pointer: Option<Pointer>,
    hovered: Option<usize>,
    rng: Rng,
    /// Planet names the speed sliders were bound to, by slider index.
    slider_targets: Vec<String>,
}

impl SolarSystem {
    pub fn new() -> Self {
        Self::with_manifest(bodies::default_manifest())
    }

    pub fn with_manifest(manifest: SceneManifest) -> Self {
        let slider_targets = manifest.bodies.iter().map(|b| b.name.clone()).collect();
        Self {
            manifest,
            planets: Vec::new(),
            sun: None,
            stars: None,
            theme: Theme::Dark,
            paused: false,
            tween: CameraTween::default(),
            pointer: None,
            hovered: None,
            rng: Rng::new(bodies::SCENE_SEED),
            slider_targets,
        }
    }

    // ── Scene construction ─────────────────────────────────────────

    fn build_scene(&mut self, ctx: &mut EngineContext) {
        scene::add_lights(&mut ctx.lights);
        ctx.camera.position = OVERVIEW_POSITION;
        ctx.camera.look_at(OVERVIEW_TARGET);

        self.sun = Some(scene::spawn_sun(ctx));
        self.stars = Some(scene::spawn_starfield(ctx, &self.manifest.starfield, &mut self.rng));
        self.spawn_planets(ctx);
        self.apply_theme(ctx);
    }

    fn spawn_planets(&mut self, ctx: &mut EngineContext) {
        let preset = self.theme.preset();
        self.planets.clear();
        for body in &self.manifest.bodies {
            let angle = self.rng.range(0.0, std::f32::consts::TAU) as f64;
            let entities = scene::spawn_planet(ctx, body, angle, &preset);
            self.planets.push(Planet {
                name: body.name.clone(),
                size: body.size,
                distance: body.distance,
                speed: body.speed,
                angle,
                entities,
            });
        }
    }

    fn despawn_planets(&mut self, ctx: &mut EngineContext) {
        for planet in self.planets.drain(..) {
            let PlanetEntities { body, ring, label } = planet.entities;
            for id in [body, ring, label] {
                ctx.despawn(id);
            }
        }
        self.hovered = None;
    }

    // ── Orbits ─────────────────────────────────────────────────────

    /// Advance every orbit by `dt` seconds and apply one self-rotation step.
    pub fn advance(&mut self, ctx: &mut EngineContext, dt: f32) {
        for planet in &mut self.planets {
            planet.angle = orbit::advance_angle(planet.angle, planet.speed, dt);
            if let Some(body) = ctx.scene.get_mut(planet.entities.body) {
                body.pos = orbit::orbit_position(planet.distance, planet.angle, ORBIT_HEIGHT);
                body.rotation.y += SELF_ROTATION_STEP;
            }
        }
    }

    /// Park each label just above its planet's current surface.
    fn track_labels(&self, ctx: &mut EngineContext) {
        let scale = self.theme.preset().scale;
        for planet in &self.planets {
            let Some(pos) = ctx.scene.get(planet.entities.body).map(|e| e.pos) else {
                continue;
            };
            if let Some(label) = ctx.scene.get_mut(planet.entities.label) {
                label.pos = scene::label_position(pos, planet.size * scale);
            }
        }
    }

    // ── Picking ────────────────────────────────────────────────────

    /// Index of the nearest planet hit by `ray`.
    pub fn pick(&self, ctx: &EngineContext, ray: &Ray) -> Option<usize> {
        let hit = pick_nearest(&ctx.scene, &ctx.geometries, ray)?;
        self.planets.iter().position(|p| p.entities.body == hit.entity.id)
    }

    /// Fly to the planet under `ndc`, or back to the overview on a miss.
    fn focus(&mut self, ctx: &mut EngineContext, ndc: Vec2) {
        let ray = ctx.camera.ray_from_ndc(ndc);
        let target = self.pick(ctx, &ray).and_then(|i| {
            ctx.scene
                .get(self.planets[i].entities.body)
                .map(|body| (i, body.pos))
        });

        let (end, look_at, index) = match target {
            Some((i, pos)) => (pos + FOCUS_OFFSET, pos, i as f32),
            None => (OVERVIEW_POSITION, OVERVIEW_TARGET, -1.0),
        };
        self.tween.start(&mut ctx.camera, end, look_at);
        ctx.emit_event(GameEvent { kind: EVENT_FOCUS, a: index, b: 0.0, c: 0.0 });
    }

    fn update_hover(&mut self, ctx: &mut EngineContext) {
        let Some(pointer) = self.pointer else {
            return;
        };
        let ray = ctx.camera.ray_from_ndc(pointer.ndc);
        self.hovered = self.pick(ctx, &ray);
        match self.hovered {
            Some(i) => ctx
                .overlay
                .show_hover(&self.planets[i].name, pointer.client + HOVER_LABEL_OFFSET),
            None => ctx.overlay.hide_hover(),
        }
    }

    // ── Theme ──────────────────────────────────────────────────────

    pub fn set_theme(&mut self, ctx: &mut EngineContext, theme: Theme) {
        self.theme = theme;
        self.apply_theme(ctx);
        ctx.emit_event(GameEvent {
            kind: EVENT_THEME,
            a: if theme.is_light() { 1.0 } else { 0.0 },
            b: 0.0,
            c: 0.0,
        });
        log::info!("theme: {theme:?}");
    }

    /// Bring every themed property in line with `self.theme`.
    fn apply_theme(&mut self, ctx: &mut EngineContext) {
        let preset = self.theme.preset();
        ctx.clear_color = preset.clear_color;
        ctx.overlay.set_label_style(preset.label_style.clone());
        ctx.overlay.set_body_class(LIGHT_THEME_CLASS, self.theme.is_light());

        for planet in &self.planets {
            if let Some(mesh) = ctx.scene.get_mut(planet.entities.body).and_then(|e| e.mesh.as_mut()) {
                let wanted = scene::planet_geometry(planet.size, preset.scale);
                mesh.geometry = scene::ensure_geometry(&mut ctx.geometries, mesh.geometry, wanted);
            }
            if let Some(mesh) = ctx.scene.get_mut(planet.entities.ring).and_then(|e| e.mesh.as_mut()) {
                let wanted = scene::ring_geometry(planet.distance, preset.ring_half_width);
                mesh.geometry = scene::ensure_geometry(&mut ctx.geometries, mesh.geometry, wanted);
                mesh.material.color = preset.ring_color;
            }
            if let Some(label) = ctx.scene.get_mut(planet.entities.label).and_then(|e| e.label.as_mut()) {
                label.size = scene::label_size(planet.size, preset.scale);
            }
        }

        if let Some(sun) = self.sun.and_then(|id| ctx.scene.get_mut(id)) {
            sun.scale = Vec3::splat(preset.scale);
        }
        self.track_labels(ctx);
    }

    // ── Controls ───────────────────────────────────────────────────

    fn handle_control(&mut self, ctx: &mut EngineContext, kind: u32, a: f32, b: f32) {
        match kind {
            CUSTOM_SET_SPEED => self.set_speed(a, b),
            CUSTOM_TOGGLE_PAUSE => self.set_paused(ctx, !self.paused),
            CUSTOM_TOGGLE_THEME => self.set_theme(ctx, self.theme.toggled()),
            CUSTOM_SET_STAR_SIZE => self.set_star_size(ctx, b),
            other => log::debug!("ignoring custom event kind {other}"),
        }
    }

    fn set_speed(&mut self, slider: f32, speed: f32) {
        let name = (slider >= 0.0)
            .then(|| self.slider_targets.get(slider as usize))
            .flatten();
        let Some(name) = name else {
            log::debug!("speed slider {slider} is not bound");
            return;
        };
        match self.planets.iter_mut().find(|p| p.name.eq_ignore_ascii_case(name)) {
            Some(planet) => planet.speed = speed,
            None => log::debug!("speed slider for {name}: no such planet in the current catalog"),
        }
    }

    pub fn set_paused(&mut self, ctx: &mut EngineContext, paused: bool) {
        self.paused = paused;
        ctx.overlay.set_text(PAUSE_BUTTON_ID, controls::pause_button_text(paused));
        ctx.emit_event(GameEvent {
            kind: EVENT_PAUSE,
            a: if paused { 1.0 } else { 0.0 },
            b: 0.0,
            c: 0.0,
        });
    }

    fn set_star_size(&mut self, ctx: &mut EngineContext, size: f32) {
        if let Some(points) = self
            .stars
            .and_then(|id| ctx.scene.get_mut(id))
            .and_then(|e| e.points.as_mut())
        {
            points.size = size;
        }
    }
}

impl Game for SolarSystem {
    fn config(&self) -> GameConfig {
        GameConfig {
            container_id: CONTAINER_ID.to_owned(),
            max_meshes: 128,
            max_labels: 64,
            max_points: 4096,
            ..GameConfig::default()
        }
    }

    fn init(&mut self, ctx: &mut EngineContext) {
        self.build_scene(ctx);
        log::info!(
            "solar-system: {} planets, {} stars",
            self.planets.len(),
            self.manifest.starfield.count
        );
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue, dt: f32) {
        // ── Camera flight ────────────────────────────────────────────
        self.tween.step(&mut ctx.camera);

        // ── Handle input ─────────────────────────────────────────────
        for event in input.iter() {
            match *event {
                InputEvent::PointerMove { x, y, client_x, client_y } => {
                    self.pointer = Some(Pointer {
                        ndc: Vec2::new(x, y),
                        client: Vec2::new(client_x, client_y),
                    });
                }
                InputEvent::Click { x, y, .. } => self.focus(ctx, Vec2::new(x, y)),
                InputEvent::Custom { kind, a, b, .. } => self.handle_control(ctx, kind, a, b),
                // Camera aspect is handled by the runner.
                InputEvent::Resize { .. } => {}
            }
        }

        // ── Orbits ───────────────────────────────────────────────────
        if !self.paused {
            self.advance(ctx, dt);
        }
        self.track_labels(ctx);

        // ── Hover ────────────────────────────────────────────────────
        self.update_hover(ctx);
    }

    fn manifest_limits(&self, config: &GameConfig) -> ManifestLimits {
        // The sun, then a sphere and a ring per planet; one label each.
        ManifestLimits::for_scene(config, 1, 2, 1)
    }

    fn controls(&self) -> Vec<ControlBinding> {
        controls::bindings(self.slider_targets.iter().map(String::as_str))
    }

    fn load_manifest(&mut self, ctx: &mut EngineContext, manifest: SceneManifest) {
        self.despawn_planets(ctx);
        if let Some(stars) = self.stars.take() {
            ctx.despawn(stars);
        }
        ctx.overlay.hide_hover();

        self.manifest = manifest;
        self.stars = Some(scene::spawn_starfield(ctx, &self.manifest.starfield, &mut self.rng));
        self.spawn_planets(ctx);
        self.apply_theme(ctx);
        log::info!("solar-system: catalog replaced, {} planets", self.planets.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orrery_engine::assets::manifest::HexColor;

    fn setup(manifest: SceneManifest) -> (SolarSystem, EngineContext) {
        let mut game = SolarSystem::with_manifest(manifest);
        let mut ctx = EngineContext::new(&game.config());
        game.init(&mut ctx);
        (game, ctx)
    }

    fn single_body() -> SceneManifest {
        SceneManifest {
            bodies: vec![BodyDescriptor {
                name: "Earth".into(),
                color: HexColor(0x2a5cdd),
                size: 1.3,
                distance: 18.0,
                speed: 0.6,
            }],
            starfield: StarfieldDescriptor { count: 10, ..Default::default() },
        }
    }

    fn tick(game: &mut SolarSystem, ctx: &mut EngineContext, events: &[InputEvent], dt: f32) {
        let mut input = InputQueue::new();
        for event in events {
            input.push(*event);
        }
        ctx.clear_frame_data();
        game.update(ctx, &input, dt);
    }

    fn custom(kind: u32, a: f32, b: f32) -> InputEvent {
        InputEvent::Custom { kind, a, b, c: 0.0 }
    }

    fn body_pos(game: &SolarSystem, ctx: &EngineContext, i: usize) -> Vec3 {
        ctx.scene.get(game.planets[i].entities.body).unwrap().pos
    }

    #[test]
    fn init_builds_dark_scene() {
        let (game, ctx) = setup(bodies::default_manifest());
        assert_eq!(game.planets.len(), bodies::PLANET_COUNT);
        // sun + stars + (body, ring, label) per planet
        assert_eq!(ctx.scene.len(), 2 + 3 * bodies::PLANET_COUNT);
        assert_eq!(ctx.lights.count(), 1);
        assert_eq!(ctx.clear_color, Color::BLACK);
        assert!(!ctx.overlay.has_body_class(LIGHT_THEME_CLASS));
        assert_eq!(ctx.camera.position, OVERVIEW_POSITION);

        let sun = ctx.scene.find_by_tag(scene::SUN_TAG).unwrap();
        assert_eq!(sun.scale, Vec3::splat(1.7));
        assert!(!sun.mesh.unwrap().pickable);

        for planet in &game.planets {
            assert!(planet.angle >= 0.0 && planet.angle < std::f64::consts::TAU);
        }
    }

    #[test]
    fn earth_moves_by_delta_times_speed() {
        let (mut game, mut ctx) = setup(single_body());
        game.planets[0].angle = 0.0;
        tick(&mut game, &mut ctx, &[], 1.0);

        assert!((game.planets[0].angle - 0.6).abs() < 1e-6);
        let pos = body_pos(&game, &ctx, 0);
        assert!((pos.x - 14.856).abs() < 1e-2);
        assert!((pos.z - 10.164).abs() < 1e-2);
        let spin = ctx.scene.get(game.planets[0].entities.body).unwrap().rotation.y;
        assert!((spin - SELF_ROTATION_STEP).abs() < 1e-6);
    }

    #[test]
    fn labels_follow_planets() {
        let (mut game, mut ctx) = setup(single_body());
        tick(&mut game, &mut ctx, &[], 0.5);
        let pos = body_pos(&game, &ctx, 0);
        let label = ctx.scene.get(game.planets[0].entities.label).unwrap();
        assert_eq!(label.pos.x, pos.x);
        assert!((label.pos.y - (1.3 * 1.7 + bodies::LABEL_LIFT)).abs() < 1e-5);
    }

    #[test]
    fn pause_freezes_and_resume_continues() {
        let (mut game, mut ctx) = setup(single_body());
        tick(&mut game, &mut ctx, &[custom(CUSTOM_TOGGLE_PAUSE, 0.0, 0.0)], 0.1);
        assert!(game.paused);
        assert_eq!(ctx.overlay.text(PAUSE_BUTTON_ID), Some("Resume"));

        let frozen = game.planets[0].angle;
        let frozen_pos = body_pos(&game, &ctx, 0);
        for _ in 0..10 {
            tick(&mut game, &mut ctx, &[], 0.5);
        }
        assert_eq!(game.planets[0].angle, frozen);
        assert_eq!(body_pos(&game, &ctx, 0), frozen_pos);

        tick(&mut game, &mut ctx, &[custom(CUSTOM_TOGGLE_PAUSE, 0.0, 0.0)], 0.1);
        assert_eq!(ctx.overlay.text(PAUSE_BUTTON_ID), Some("Pause"));
        let expected = frozen + 0.1f32 as f64 * 0.6f32 as f64;
        assert!((game.planets[0].angle - expected).abs() < 1e-6);
    }

    #[test]
    fn theme_toggle_round_trips() {
        let (mut game, mut ctx) = setup(bodies::default_manifest());
        let geometry_of = |ctx: &EngineContext, id: EntityId| {
            let mesh = ctx.scene.get(id).unwrap().mesh.unwrap();
            *ctx.geometries.get(mesh.geometry).unwrap()
        };
        let ring = game.planets[3].entities.ring;
        let body = game.planets[3].entities.body;
        let before = (ctx.clear_color, geometry_of(&ctx, ring), geometry_of(&ctx, body));
        let old_ring_id = ctx.scene.get(ring).unwrap().mesh.unwrap().geometry;

        tick(&mut game, &mut ctx, &[custom(CUSTOM_TOGGLE_THEME, 0.0, 0.0)], 0.0);
        assert_eq!(game.theme, Theme::Light);
        assert!(ctx.overlay.has_body_class(LIGHT_THEME_CLASS));
        assert_eq!(ctx.overlay.label_style().color, "#222");
        assert_eq!(geometry_of(&ctx, body), scene::planet_geometry(1.1, 1.0));
        assert_eq!(ctx.scene.get(ring).unwrap().mesh.unwrap().material.color, Color::BLACK);
        assert!(!ctx.geometries.contains(old_ring_id));
        assert!(ctx.events.iter().any(|e| e.kind == EVENT_THEME && e.a == 1.0));

        tick(&mut game, &mut ctx, &[custom(CUSTOM_TOGGLE_THEME, 0.0, 0.0)], 0.0);
        assert_eq!(game.theme, Theme::Dark);
        assert_eq!((ctx.clear_color, geometry_of(&ctx, ring), geometry_of(&ctx, body)), before);
        let sun = ctx.scene.find_by_tag(scene::SUN_TAG).unwrap();
        assert_eq!(sun.scale, Vec3::splat(1.7));
        // Replacement geometry never reuses the disposed id.
        assert_ne!(ctx.scene.get(ring).unwrap().mesh.unwrap().geometry, old_ring_id);
    }

    #[test]
    fn click_on_planet_flies_there() {
        let (mut game, mut ctx) = setup(single_body());
        game.paused = true;
        let pos = body_pos(&game, &ctx, 0);
        let ndc = ctx.camera.project(pos).unwrap();

        tick(&mut game, &mut ctx, &[InputEvent::Click { x: ndc.x, y: ndc.y, client_x: 0.0, client_y: 0.0 }], 0.0);
        assert!(ctx.events.iter().any(|e| e.kind == EVENT_FOCUS && e.a == 0.0));
        match game.tween.phase() {
            TweenPhase::Animating { end, look_at, frame, .. } => {
                assert_eq!(end, pos + FOCUS_OFFSET);
                assert_eq!(look_at, pos);
                assert_eq!(frame, 1);
            }
            TweenPhase::Idle => panic!("click should start a flight"),
        }

        for _ in 0..39 {
            tick(&mut game, &mut ctx, &[], 0.0);
        }
        assert!(!game.tween.is_animating());
        assert_eq!(ctx.camera.position, pos + FOCUS_OFFSET);
        assert_eq!(ctx.camera.target, pos);
    }

    #[test]
    fn click_on_empty_space_returns_to_overview() {
        let (mut game, mut ctx) = setup(single_body());
        // Looking straight out of the system: nothing pickable is in view.
        ctx.camera.position = Vec3::new(0.0, 10.0, 60.0);
        ctx.camera.look_at(Vec3::new(0.0, 10.0, 100.0));

        tick(&mut game, &mut ctx, &[InputEvent::Click { x: 0.95, y: 0.95, client_x: 0.0, client_y: 0.0 }], 0.0);
        assert!(ctx.events.iter().any(|e| e.kind == EVENT_FOCUS && e.a == -1.0));
        for _ in 0..39 {
            tick(&mut game, &mut ctx, &[], 0.0);
        }
        assert_eq!(ctx.camera.position, OVERVIEW_POSITION);
        assert_eq!(ctx.camera.target, OVERVIEW_TARGET);
    }

    #[test]
    fn hover_waits_for_pointer_then_tracks_it() {
        let (mut game, mut ctx) = setup(single_body());
        game.paused = true;
        let settled = ctx.overlay.revision();
        tick(&mut game, &mut ctx, &[], 0.016);
        assert_eq!(ctx.overlay.hover(), &HoverLabel::Hidden);
        assert_eq!(ctx.overlay.revision(), settled);

        let ndc = ctx.camera.project(body_pos(&game, &ctx, 0)).unwrap();
        let over = InputEvent::PointerMove { x: ndc.x, y: ndc.y, client_x: 300.0, client_y: 200.0 };
        tick(&mut game, &mut ctx, &[over], 0.016);
        assert_eq!(game.hovered, Some(0));
        assert_eq!(
            ctx.overlay.hover(),
            &HoverLabel::Visible { text: "Earth".into(), at: Vec2::new(312.0, 192.0) }
        );

        let away = InputEvent::PointerMove { x: -0.95, y: 0.95, client_x: 5.0, client_y: 5.0 };
        tick(&mut game, &mut ctx, &[away], 0.016);
        assert_eq!(ctx.overlay.hover(), &HoverLabel::Hidden);
    }

    #[test]
    fn speed_sliders_drive_named_planets() {
        let (mut game, mut ctx) = setup(bodies::default_manifest());
        tick(&mut game, &mut ctx, &[custom(CUSTOM_SET_SPEED, 2.0, 1.5)], 0.0);
        assert_eq!(game.planets[2].speed, 1.5);

        let speeds: Vec<f32> = game.planets.iter().map(|p| p.speed).collect();
        tick(
            &mut game,
            &mut ctx,
            &[custom(CUSTOM_SET_SPEED, -1.0, 9.0), custom(CUSTOM_SET_SPEED, 42.0, 9.0)],
            0.0,
        );
        assert_eq!(game.planets.iter().map(|p| p.speed).collect::<Vec<_>>(), speeds);
    }

    #[test]
    fn star_size_slider_sets_point_size() {
        let (mut game, mut ctx) = setup(single_body());
        tick(&mut game, &mut ctx, &[custom(CUSTOM_SET_STAR_SIZE, 0.0, 4.5)], 0.0);
        let stars = ctx.scene.find_by_tag(scene::STARS_TAG).unwrap();
        assert_eq!(stars.points.as_ref().unwrap().size, 4.5);
    }

    #[test]
    fn load_manifest_replaces_catalog() {
        let (mut game, mut ctx) = setup(bodies::default_manifest());
        let old_body = game.planets[0].entities.body;
        let old_geometry = ctx.scene.get(old_body).unwrap().mesh.unwrap().geometry;

        game.load_manifest(&mut ctx, single_body());
        assert_eq!(game.planets.len(), 1);
        assert!(ctx.scene.get(old_body).is_none());
        assert!(!ctx.geometries.contains(old_geometry));
        assert_eq!(ctx.scene.len(), 2 + 3);
        // Still dark: new spheres carry the dark scale.
        let body = ctx.scene.get(game.planets[0].entities.body).unwrap();
        assert_eq!(
            ctx.geometries.get(body.mesh.unwrap().geometry),
            Some(&scene::planet_geometry(1.3, 1.7))
        );

        // Earth's slider (index 2 in the startup catalog) still finds Earth.
        tick(&mut game, &mut ctx, &[custom(CUSTOM_SET_SPEED, 2.0, 0.1)], 0.0);
        assert_eq!(game.planets[0].speed, 0.1);
    }

    #[test]
    fn catalog_limits_fit_frame() {
        let game = SolarSystem::new();
        let config = game.config();
        let limits = game.manifest_limits(&config);
        assert_eq!(limits.max_bodies, 63);
        assert!(1 + 2 * limits.max_bodies <= config.max_meshes);
        assert!(limits.max_bodies <= config.max_labels);
        assert_eq!(limits.max_stars, config.max_points);
        assert!(bodies::default_manifest().validate_for(&limits).is_ok());

        let crowded = SceneManifest {
            bodies: (0..=limits.max_bodies)
                .map(|i| BodyDescriptor {
                    name: format!("Body {i}"),
                    color: HexColor(0xffffff),
                    size: 1.0,
                    distance: 10.0 + i as f32,
                    speed: 0.1,
                })
                .collect(),
            starfield: StarfieldDescriptor::default(),
        };
        assert!(matches!(
            crowded.validate_for(&limits),
            Err(ManifestError::TooManyBodies { .. })
        ));
    }

    #[test]
    fn controls_bind_startup_catalog() {
        let game = SolarSystem::new();
        let bindings = game.controls();
        assert_eq!(bindings.len(), bodies::PLANET_COUNT + 3);
        assert_eq!(bindings[0].element_id, "speed-mercury");
    }
}
