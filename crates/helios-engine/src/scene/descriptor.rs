/// Pluggable scene-loading strategy.
///
/// Each implementation represents one renderable scene variant. It reports the
/// output resolution it was authored for and materializes the scene graph when
/// asked. The configuration registry treats all variants uniformly through
/// this trait; the concrete variant is selected once by the composition root,
/// before the registry is constructed, and never revisited.
///
/// `Assets` is the asset-loading collaborator handed through to
/// [`build_scene`](Self::build_scene); `Scene` is whatever the renderer
/// consumes. This crate imposes no contract on either beyond forwarding.
pub trait SceneDescriptor {
    type Assets;
    type Scene;

    /// Output width this scene was authored for, in pixels.
    ///
    /// May report zero or a negative value; the registry clamps to 1.
    fn preferred_width(&self) -> i32;

    /// Output height this scene was authored for, in pixels.
    ///
    /// May report zero or a negative value; the registry clamps to 1.
    fn preferred_height(&self) -> i32;

    /// Builds a fresh scene instance.
    ///
    /// Called through [`RenderConfig::create_scene`](crate::config::RenderConfig::create_scene);
    /// every call is expected to produce an independent scene (no caching
    /// contract exists at this seam).
    fn build_scene(&self, assets: &mut Self::Assets) -> Self::Scene;
}

/// Owned, thread-shareable descriptor as injected by the composition root.
///
/// `Send + Sync` keeps the registry itself `Sync`, so the renderer's worker
/// threads can read configuration concurrently without locking.
pub type BoxedSceneDescriptor<A, S> = Box<dyn SceneDescriptor<Assets = A, Scene = S> + Send + Sync>;
