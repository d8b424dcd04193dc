/// Orbiting camera rig and its model/view/projection matrices
use nalgebra::{Matrix4, Point3, Vector3, Vector4};
use std::f32::consts::PI;

/// Vertical field of view (60 degrees)
const FIELD_OF_VIEW: f32 = 60.0 * PI / 180.0;
const NEAR_PLANE: f32 = 0.2;
const FAR_PLANE: f32 = 100.0;
/// Uniform scale applied to the model once at initialization
const MODEL_SCALE: f32 = 0.5;
/// Orbit circle radius in the XZ plane, centered at the origin
const ORBIT_RADIUS: f32 = 25.0;
/// Orbit speed in radians per second
const ANGULAR_RATE: f32 = 2.0;

/// Camera state for a time-driven orbit around the origin.
///
/// `model` and `projection` are computed once at construction; `view` is
/// recomputed from the orbital position on every [`CameraRig::update`]. The
/// rig is the sole mutator of its own state; consumers read matrices through
/// the accessors and bind them as the `model`/`view`/`projection` shader
/// uniforms (binding itself happens outside this crate).
pub struct CameraRig {
    position: Point3<f32>,
    target: Point3<f32>,
    up: Vector3<f32>,
    angle: f32,
    model: Matrix4<f32>,
    view: Matrix4<f32>,
    projection: Matrix4<f32>,
}

impl CameraRig {
    /// Initialize the rig for a viewport. Must be called before any update
    /// or matrix query; a viewport size change requires
    /// [`CameraRig::set_viewport`] (the rig does not watch resize events).
    pub fn new(viewport_width: u32, viewport_height: u32) -> Self {
        let position = Point3::new(0.0, 0.0, 10.0);
        let target = Point3::origin();
        let up = Vector3::y();
        let aspect = viewport_width as f32 / viewport_height as f32;

        Self {
            model: Matrix4::new_scaling(MODEL_SCALE),
            view: Matrix4::look_at_rh(&position, &target, &up),
            projection: Matrix4::new_perspective(aspect, FIELD_OF_VIEW, NEAR_PLANE, FAR_PLANE),
            position,
            target,
            up,
            angle: 0.0,
        }
    }

    /// Recompute the projection for a new viewport size. Model and view are
    /// unaffected.
    pub fn set_viewport(&mut self, viewport_width: u32, viewport_height: u32) {
        let aspect = viewport_width as f32 / viewport_height as f32;
        self.projection = Matrix4::new_perspective(aspect, FIELD_OF_VIEW, NEAR_PLANE, FAR_PLANE);
    }

    /// Advance the orbit by `elapsed_seconds` and rebuild the view matrix.
    ///
    /// The camera circles the origin in the XZ plane at height zero:
    /// `x = r·sin(angle)`, `z = r·cos(angle)`. Deterministic in accumulated
    /// elapsed time; a zero elapsed time changes nothing after the first
    /// call placed the camera on the circle.
    pub fn update(&mut self, elapsed_seconds: f32) {
        self.angle += ANGULAR_RATE * elapsed_seconds;
        self.position = Point3::new(
            ORBIT_RADIUS * self.angle.sin(),
            0.0,
            ORBIT_RADIUS * self.angle.cos(),
        );
        self.view = Matrix4::look_at_rh(&self.position, &self.target, &self.up);
    }

    pub fn model(&self) -> &Matrix4<f32> {
        &self.model
    }

    pub fn view(&self) -> &Matrix4<f32> {
        &self.view
    }

    pub fn projection(&self) -> &Matrix4<f32> {
        &self.projection
    }

    /// Current camera position, for specular view-direction terms in the
    /// consumer's lighting.
    pub fn position(&self) -> Point3<f32> {
        self.position
    }

    /// Accumulated orbit angle in radians.
    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// Project an object-space point through model/view/projection to
    /// screen pixels, returning `(x, y, depth)`. Points at near-zero clip
    /// depth or outside the unit NDC square are rejected.
    pub fn project_to_screen(
        &self,
        point: &Point3<f32>,
        width: u32,
        height: u32,
    ) -> Option<(f32, f32, f32)> {
        let mvp = self.projection * self.view * self.model;
        let clip: Vector4<f32> = mvp * point.to_homogeneous();

        if clip.w.abs() < 1e-6 {
            return None;
        }

        let ndc_x = clip.x / clip.w;
        let ndc_y = clip.y / clip.w;
        let depth = clip.z / clip.w;

        // Clip test
        if !(-1.0..=1.0).contains(&ndc_x) || !(-1.0..=1.0).contains(&ndc_y) {
            return None;
        }

        let screen_x = (ndc_x + 1.0) * 0.5 * width as f32;
        let screen_y = (1.0 - ndc_y) * 0.5 * height as f32;

        Some((screen_x, screen_y, depth))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rig_creation() {
        let rig = CameraRig::new(1280, 720);
        assert_eq!(rig.angle(), 0.0);
        assert_eq!(rig.position(), Point3::new(0.0, 0.0, 10.0));
        // Model is the fixed uniform scale.
        assert!((rig.model() - Matrix4::new_scaling(0.5)).norm() < 1e-6);
    }

    #[test]
    fn test_zero_elapsed_update_is_idempotent() {
        let mut rig = CameraRig::new(800, 600);
        rig.update(0.0);
        let position = rig.position();
        let angle = rig.angle();
        let view = *rig.view();

        rig.update(0.0);
        rig.update(0.0);
        assert_eq!(rig.position(), position);
        assert_eq!(rig.angle(), angle);
        assert!((rig.view() - view).norm() < 1e-6);
    }

    #[test]
    fn test_orbit_position() {
        let mut rig = CameraRig::new(800, 600);
        rig.update(0.25);
        let angle = ANGULAR_RATE * 0.25;
        assert!((rig.angle() - angle).abs() < 1e-6);
        let position = rig.position();
        assert!((position.x - ORBIT_RADIUS * angle.sin()).abs() < 1e-4);
        assert!((position.y).abs() < 1e-6);
        assert!((position.z - ORBIT_RADIUS * angle.cos()).abs() < 1e-4);
    }

    #[test]
    fn test_update_leaves_model_and_projection_alone() {
        let mut rig = CameraRig::new(800, 600);
        let model = *rig.model();
        let projection = *rig.projection();
        let view = *rig.view();

        rig.update(1.5);
        assert_eq!(*rig.model(), model);
        assert_eq!(*rig.projection(), projection);
        assert!((rig.view() - view).norm() > 1e-3);
    }

    #[test]
    fn test_set_viewport_only_touches_projection() {
        let mut rig = CameraRig::new(800, 600);
        let view = *rig.view();
        let projection = *rig.projection();

        rig.set_viewport(1920, 1080);
        assert_eq!(*rig.view(), view);
        assert!((rig.projection() - projection).norm() > 1e-6);
    }

    #[test]
    fn test_origin_projects_to_screen_center() {
        let rig = CameraRig::new(800, 600);
        let (x, y, _depth) = rig
            .project_to_screen(&Point3::origin(), 800, 600)
            .expect("origin is in view");
        assert!((x - 400.0).abs() < 1e-3);
        assert!((y - 300.0).abs() < 1e-3);
    }

    #[test]
    fn test_far_off_axis_point_is_clipped() {
        let rig = CameraRig::new(800, 600);
        assert!(rig
            .project_to_screen(&Point3::new(1000.0, 0.0, 0.0), 800, 600)
            .is_none());
    }
}
