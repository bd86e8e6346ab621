use super::SampleSchedule;

/// Nominal base resolution; [`RenderSettings::render_scale`] multiplies this.
pub const BASE_WIDTH: u32 = 1920;
pub const BASE_HEIGHT: u32 = 1200;

/// Output format policy for saved frames.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SaveFormat {
    Jpg,
    Png,
    /// Write both a JPG and a PNG per save.
    Both,
}

/// Base rendering parameters.
///
/// Plain data with public fields: the composition root fills this in (or takes
/// the defaults), then hands it to [`RenderConfig`](super::RenderConfig),
/// which freezes it for the process lifetime. Nothing here is validated for
/// physical sensibleness; garbage in, garbage out.
///
/// The three subsample schedules must be provisioned with at least
/// `ray_depth` entries so every bounce depth has a defined sampling policy.
#[derive(Debug, Clone)]
pub struct RenderSettings {
    /// Multiplier over the nominal base resolution (highest exercised: 4.0,
    /// i.e. 8K).
    pub render_scale: f64,
    pub preferred_tile_size: u32,

    // Save-to-file policy.
    pub save_format: SaveFormat,
    /// JPG encoder quality in `[0, 1]`.
    pub jpg_quality: f32,
    pub show_footer_in_files: bool,

    // Tracer limits.
    /// Upper bound for progressive refinement passes.
    pub max_passes: u32,
    /// Worker-thread count for the tiled renderer.
    pub threads: usize,
    /// Maximum ray recursion depth.
    pub ray_depth: usize,
    pub diffuse_subsamples: SampleSchedule,
    pub specular_subsamples: SampleSchedule,
    pub refraction_subsamples: SampleSchedule,

    // Camera.
    /// Aperture size for depth of field; 0 disables it.
    pub camera_dof_size: f64,
    pub camera_auto_focus: bool,

    // Acceleration-structure build limits.
    pub spatial_tree_max_depth: u32,
    pub spatial_tree_split_node_size: u32,

    /// Root for resource resolution by external loaders; not validated here.
    pub base_path: String,
}

impl RenderSettings {
    /// Default output width scene descriptors conventionally report,
    /// `BASE_WIDTH * render_scale`.
    #[inline]
    pub fn default_width(&self) -> u32 {
        (BASE_WIDTH as f64 * self.render_scale) as u32
    }

    /// Default output height scene descriptors conventionally report,
    /// `BASE_HEIGHT * render_scale`.
    #[inline]
    pub fn default_height(&self) -> u32 {
        (BASE_HEIGHT as f64 * self.render_scale) as u32
    }
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            render_scale: 4.0,
            preferred_tile_size: 15,

            save_format: SaveFormat::Both,
            jpg_quality: 1.0,
            show_footer_in_files: true,

            max_passes: u32::MAX,
            threads: 24,
            ray_depth: 5,
            diffuse_subsamples: SampleSchedule::uniform(1, 16),
            specular_subsamples: SampleSchedule::uniform(1, 16),
            // Refraction sampling only kicks in at deeper bounces.
            refraction_subsamples: [0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1].into(),

            camera_dof_size: 0.05,
            camera_auto_focus: true,

            spatial_tree_max_depth: 15,
            spatial_tree_split_node_size: 10,

            base_path: "./assets/".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_scale_base_resolution() {
        let s = RenderSettings::default();
        assert_eq!(s.default_width(), 7680);
        assert_eq!(s.default_height(), 4800);
    }

    #[test]
    fn default_schedules_cover_ray_depth() {
        let s = RenderSettings::default();
        assert!(s.diffuse_subsamples.len() >= s.ray_depth);
        assert!(s.specular_subsamples.len() >= s.ray_depth);
        assert!(s.refraction_subsamples.len() >= s.ray_depth);
    }

    #[test]
    fn halved_scale_halves_the_defaults() {
        let s = RenderSettings {
            render_scale: 0.5,
            ..Default::default()
        };
        assert_eq!(s.default_width(), 960);
        assert_eq!(s.default_height(), 600);
    }
}
