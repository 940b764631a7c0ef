use orrery_engine::{
    Game, GameConfig, EngineContext,
    InputEvent, InputQueue, RenderBuffer,
    FrameClock, FrameBuffer, FrameSource, ProtocolLayout,
    ControlBinding, GeometryChanges, LabelEntry, Overlay, SceneManifest,
    build_render_buffer, label_entries,
};

/// Generic runner that wires a `Game` into the frame loop.
///
/// Each concrete scene creates a `thread_local!` GameRunner through
/// `export_game!`, because wasm-bindgen cannot export generic structs directly.
pub struct GameRunner<G: Game> {
    game: G,
    ctx: EngineContext,
    input: InputQueue,
    render_buffer: RenderBuffer,
    frame: FrameBuffer,
    clock: FrameClock,
    config: GameConfig,
    initialized: bool,
    labels: Vec<LabelEntry>,
    label_revision: u32,
    geometry_revision: u32,
}

impl<G: Game> GameRunner<G> {
    pub fn new(game: G) -> Self {
        let config = game.config();
        let layout = ProtocolLayout::from_config(&config);

        Self {
            game,
            ctx: EngineContext::new(&config),
            input: InputQueue::new(),
            render_buffer: RenderBuffer::new(),
            frame: FrameBuffer::new(layout),
            clock: FrameClock::new(config.max_frame_dt),
            config,
            initialized: false,
            labels: Vec::new(),
            label_revision: 0,
            geometry_revision: 0,
        }
    }

    /// Initialize the game. Call once after construction.
    pub fn init(&mut self) {
        self.game.init(&mut self.ctx);
        self.initialized = true;
        self.pack_frame();
        log::debug!(
            "runner: {} entities, {} geometries, frame buffer {} floats",
            self.ctx.scene.len(),
            self.ctx.geometries.len(),
            self.frame.len()
        );
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one frame: update the game with the clamped delta, then pack the frame.
    pub fn tick(&mut self, dt: f32) {
        if !self.initialized {
            return;
        }

        self.ctx.clear_frame_data();
        let dt = self.clock.tick(dt);

        for event in self.input.iter() {
            if let InputEvent::Resize { width, height } = *event {
                self.ctx.resize(width, height);
            }
        }

        self.game.update(&mut self.ctx, &self.input, dt);
        self.input.drain();

        self.pack_frame();
    }

    fn pack_frame(&mut self) {
        build_render_buffer(self.ctx.scene.iter(), &mut self.render_buffer);

        let labels = label_entries(self.ctx.scene.iter());
        if labels != self.labels {
            self.labels = labels;
            self.label_revision += 1;
        }
        if self.ctx.geometries.has_pending_changes() {
            self.geometry_revision += 1;
        }

        let camera = self.ctx.camera.uniform();
        self.frame.write(&FrameSource {
            viewport: self.ctx.viewport,
            clear_color: self.ctx.clear_color,
            elapsed: self.clock.elapsed() as f32,
            geometry_revision: self.geometry_revision,
            label_revision: self.label_revision,
            camera: &camera,
            render: &self.render_buffer,
            lights: &self.ctx.lights,
            events: &self.ctx.events,
        });
    }

    /// Parse, validate and hand a JSON scene manifest to the game.
    /// On error the current scene is kept.
    pub fn load_manifest(&mut self, json: &str) {
        let limits = self.game.manifest_limits(&self.config);
        let parsed = SceneManifest::from_json(json)
            .and_then(|manifest| manifest.validate_for(&limits).map(|()| manifest));
        match parsed {
            Ok(manifest) => {
                log::info!("load_manifest: {} bodies", manifest.bodies.len());
                self.game.load_manifest(&mut self.ctx, manifest);
            }
            Err(err) => log::error!("load_manifest: {err}"),
        }
    }

    /// Drain geometry lifecycle changes for the host.
    pub fn take_geometry_changes(&mut self) -> GeometryChanges {
        self.ctx.geometries.take_changes()
    }

    pub fn take_geometry_changes_json(&mut self) -> String {
        let changes = self.take_geometry_changes();
        serde_json::to_string(&changes).unwrap_or_else(|err| {
            log::error!("take_geometry_changes: {err}");
            String::from("{\"created\":[],\"disposed\":[]}")
        })
    }

    pub fn labels(&self) -> &[LabelEntry] {
        &self.labels
    }

    pub fn labels_json(&self) -> String {
        serde_json::to_string(&self.labels).unwrap_or_else(|err| {
            log::error!("get_labels_json: {err}");
            String::from("[]")
        })
    }

    pub fn controls(&self) -> Vec<ControlBinding> {
        self.game.controls()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn overlay(&self) -> &Overlay {
        &self.ctx.overlay
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn context(&self) -> &EngineContext {
        &self.ctx
    }

    // ---- Frame buffer accessors ----

    pub fn frame_ptr(&self) -> *const f32 {
        self.frame.as_ptr()
    }

    pub fn frame_len(&self) -> u32 {
        self.frame.len() as u32
    }

    pub fn frame_data(&self) -> &[f32] {
        self.frame.data()
    }

    // ---- Capacity accessors ----

    pub fn max_meshes(&self) -> u32 {
        self.frame.layout().max_meshes as u32
    }

    pub fn max_labels(&self) -> u32 {
        self.frame.layout().max_labels as u32
    }

    pub fn max_lights(&self) -> u32 {
        self.frame.layout().max_lights as u32
    }

    pub fn max_points(&self) -> u32 {
        self.frame.layout().max_points as u32
    }

    pub fn max_events(&self) -> u32 {
        self.frame.layout().max_events as u32
    }

    pub fn buffer_total_floats(&self) -> u32 {
        self.frame.layout().buffer_total_floats as u32
    }
}
