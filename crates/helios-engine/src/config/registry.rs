use crate::scene::{BoxedSceneDescriptor, SceneDescriptor};

use super::{divisor_tile_size, RenderSettings, SampleSchedule, SaveFormat};

/// Process-wide, read-only render-configuration registry.
///
/// Built once by the composition root from [`RenderSettings`] and the scene
/// descriptor selected for this run, then passed by reference to every
/// component that needs it (renderer, window loop, image writer). No field is
/// ever mutated after construction, so concurrent reads from the renderer's
/// worker threads are safe with no locking.
///
/// Derived parameters (absolute resolution, tile size, window scale) are
/// computed on demand from the base state rather than stored, so they can
/// never go stale relative to it.
///
/// `A` is the asset-loading collaborator type, `S` the scene type the bound
/// descriptor builds; both are opaque here and forwarded unchanged.
pub struct RenderConfig<A, S> {
    settings: RenderSettings,
    descriptor: BoxedSceneDescriptor<A, S>,
}

impl<A, S> RenderConfig<A, S> {
    /// Binds `descriptor` into `settings` and freezes the result.
    ///
    /// Logs the resolved geometry, and warns when the tile-size search fell
    /// back to a size that does not evenly divide the frame (the tiled
    /// renderer must then handle a partial edge tile).
    pub fn new(settings: RenderSettings, descriptor: BoxedSceneDescriptor<A, S>) -> Self {
        debug_assert!(settings.diffuse_subsamples.len() >= settings.ray_depth);
        debug_assert!(settings.specular_subsamples.len() >= settings.ray_depth);
        debug_assert!(settings.refraction_subsamples.len() >= settings.ray_depth);

        let config = Self {
            settings,
            descriptor,
        };

        let (w, h) = (config.width(), config.height());
        let tile = config.tile_size();
        log::info!(
            "render configuration resolved: {w}x{h}, tile size {tile}, {} threads, ray depth {}",
            config.threads(),
            config.ray_depth(),
        );
        if w % tile != 0 || h % tile != 0 {
            log::warn!(
                "tile size {tile} does not evenly divide {w}x{h}; expect a partial edge tile"
            );
        }

        config
    }

    // ── derived parameters (computed, never cached) ───────────────────────

    /// Absolute output width in pixels; whatever the descriptor reports,
    /// clamped to at least 1.
    #[inline]
    pub fn width(&self) -> u32 {
        self.descriptor.preferred_width().max(1) as u32
    }

    /// Absolute output height in pixels; whatever the descriptor reports,
    /// clamped to at least 1.
    #[inline]
    pub fn height(&self) -> u32 {
        self.descriptor.preferred_height().max(1) as u32
    }

    /// Scale the display window applies to the rendered frame, the inverse of
    /// [`render_scale`](Self::render_scale).
    #[inline]
    pub fn window_scale(&self) -> f64 {
        1.0 / self.settings.render_scale
    }

    /// Parallel-tile edge length for the resolved frame.
    ///
    /// See [`divisor_tile_size`] for the search and its fallback path.
    #[inline]
    pub fn tile_size(&self) -> u32 {
        divisor_tile_size(self.width(), self.height(), self.settings.preferred_tile_size)
    }

    /// Conventional descriptor output width, `BASE_WIDTH * render_scale`.
    #[inline]
    pub fn default_width(&self) -> u32 {
        self.settings.default_width()
    }

    /// Conventional descriptor output height, `BASE_HEIGHT * render_scale`.
    #[inline]
    pub fn default_height(&self) -> u32 {
        self.settings.default_height()
    }

    // ── scene construction ────────────────────────────────────────────────

    /// Builds a scene through the bound descriptor.
    ///
    /// Pure pass-through, no memoization: calling this twice invokes the
    /// descriptor twice and yields two independent scenes. Intended for the
    /// initializing thread only.
    #[inline]
    pub fn create_scene(&self, assets: &mut A) -> S {
        self.descriptor.build_scene(assets)
    }

    /// The scene-descriptor strategy bound at construction.
    #[inline]
    pub fn descriptor(&self) -> &(dyn SceneDescriptor<Assets = A, Scene = S> + Send + Sync) {
        self.descriptor.as_ref()
    }

    // ── base parameters ───────────────────────────────────────────────────

    #[inline]
    pub fn render_scale(&self) -> f64 {
        self.settings.render_scale
    }

    #[inline]
    pub fn preferred_tile_size(&self) -> u32 {
        self.settings.preferred_tile_size
    }

    #[inline]
    pub fn save_format(&self) -> SaveFormat {
        self.settings.save_format
    }

    #[inline]
    pub fn jpg_quality(&self) -> f32 {
        self.settings.jpg_quality
    }

    #[inline]
    pub fn show_footer_in_files(&self) -> bool {
        self.settings.show_footer_in_files
    }

    #[inline]
    pub fn max_passes(&self) -> u32 {
        self.settings.max_passes
    }

    #[inline]
    pub fn threads(&self) -> usize {
        self.settings.threads
    }

    #[inline]
    pub fn ray_depth(&self) -> usize {
        self.settings.ray_depth
    }

    #[inline]
    pub fn diffuse_subsamples(&self) -> &SampleSchedule {
        &self.settings.diffuse_subsamples
    }

    #[inline]
    pub fn specular_subsamples(&self) -> &SampleSchedule {
        &self.settings.specular_subsamples
    }

    #[inline]
    pub fn refraction_subsamples(&self) -> &SampleSchedule {
        &self.settings.refraction_subsamples
    }

    #[inline]
    pub fn camera_dof_size(&self) -> f64 {
        self.settings.camera_dof_size
    }

    #[inline]
    pub fn camera_auto_focus(&self) -> bool {
        self.settings.camera_auto_focus
    }

    #[inline]
    pub fn spatial_tree_max_depth(&self) -> u32 {
        self.settings.spatial_tree_max_depth
    }

    #[inline]
    pub fn spatial_tree_split_node_size(&self) -> u32 {
        self.settings.spatial_tree_split_node_size
    }

    /// Root for resource resolution by external loaders.
    #[inline]
    pub fn base_path(&self) -> &str {
        &self.settings.base_path
    }
}
