//! The declarative YAML scene format: deserialize into a tree of plain
//! data, validate it, then assemble a [`World`] and [`Camera`] from it.
//!
//! [`World`]: ../world/struct.World.html
//! [`Camera`]: ../camera/struct.Camera.html

use crate::camera::{Camera, CameraAnimation};
use crate::error::RenderError;
use crate::light::PointLight;
use crate::material::Material;
use crate::obj::{self, MeshNode};
use crate::shape::{Cone, Cube, Cylinder, Group, Plane, ShapeEnum, ShapeId, Sphere};
use crate::transform::{self, Transform};
use crate::world::World;
use nalgebra::{Point3, Vector3};
use std::convert::{TryFrom, TryInto};
use serde::{Deserialize, Deserializer};
use std::path::PathBuf;

/// A fully assembled scene, ready to render.
pub struct Scene {
    /// The scene graph and light.
    pub world: World,
    /// The camera looking at it.
    pub camera: Camera,
}

impl Scene {
    /// Parse and build a [`Scene`] from a YAML reader, validating it first.
    ///
    /// [`Scene`]: struct.Scene.html
    pub fn load<R: std::io::Read>(reader: R) -> Result<Self, RenderError> {
        let serialized: SerializedScene = serde_yaml::from_reader(reader)?;
        serialized.validate()?;
        serialized.try_into()
    }
}

#[derive(Debug, Deserialize)]
struct SerializedCamera {
    width: u32,
    height: u32,
    fov_degrees: f64,
    from: [f64; 3],
    to: [f64; 3],
    #[serde(default = "default_up")]
    up: [f64; 3],
    #[serde(default)]
    antialias: bool,
    #[serde(default)]
    animation: Option<SerializedAnimation>,
}

fn default_up() -> [f64; 3] {
    [0.0, 1.0, 0.0]
}

#[derive(Debug, Deserialize)]
struct SerializedAnimation {
    movement_time: f64,
    fps: f64,
    full_motion_degrees: f64,
}

impl From<SerializedCamera> for Camera {
    fn from(cam: SerializedCamera) -> Self {
        let from = Point3::new(cam.from[0], cam.from[1], cam.from[2]);
        let to = Point3::new(cam.to[0], cam.to[1], cam.to[2]);
        let up = Vector3::new(cam.up[0], cam.up[1], cam.up[2]);
        let mut camera = Camera::looking_at(
            cam.width,
            cam.height,
            cam.fov_degrees.to_radians(),
            from,
            to,
            up,
        );
        camera.antialias = cam.antialias;
        camera.animation = cam.animation.map(|a| CameraAnimation {
            to,
            up,
            movement_time: a.movement_time,
            fps: a.fps,
            full_motion_radians: a.full_motion_degrees.to_radians(),
        });
        camera
    }
}

/// One transform step, applied in the order it appears in a shape's
/// `transform:` list: the first entry is applied to the object first.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
enum TransformOp {
    Translate([f64; 3]),
    Scale([f64; 3]),
    RotateX(f64),
    RotateY(f64),
    RotateZ(f64),
    Shear([f64; 6]),
}

impl TransformOp {
    fn to_transform(&self) -> Transform {
        match self {
            TransformOp::Translate([x, y, z]) => transform::translation(*x, *y, *z),
            TransformOp::Scale([x, y, z]) => transform::scaling(*x, *y, *z),
            TransformOp::RotateX(r) => transform::rotation_x(r.to_radians()),
            TransformOp::RotateY(r) => transform::rotation_y(r.to_radians()),
            TransformOp::RotateZ(r) => transform::rotation_z(r.to_radians()),
            TransformOp::Shear([xy, xz, yx, yz, zx, zy]) => {
                transform::shearing(*xy, *xz, *yx, *yz, *zx, *zy)
            }
        }
    }
}

fn build_transform(ops: &[TransformOp]) -> Transform {
    ops.iter()
        .fold(Transform::identity(), |acc, op| op.to_transform().then(&acc))
}

#[derive(Debug, Deserialize)]
struct SerializedShape {
    #[serde(rename = "type")]
    kind: ShapeKind,
    #[serde(default)]
    transform: Vec<TransformOp>,
    #[serde(default)]
    material: Material,
    #[serde(default)]
    minimum: f64,
    #[serde(default = "default_infinity")]
    maximum: f64,
    #[serde(default)]
    closed: bool,
    #[serde(default)]
    children: Vec<SerializedShape>,
    #[serde(default)]
    file: Option<PathBuf>,
}

fn default_infinity() -> f64 {
    f64::INFINITY
}

#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
enum ShapeKind {
    Sphere,
    Plane,
    Cube,
    Cylinder,
    Cone,
    Group,
    Obj,
}

impl SerializedShape {
    /// Build the leaf shape this node describes, `Group`/`Obj` aside (those
    /// need a [`World`] to attach children to, handled by `insert_into`).
    ///
    /// [`World`]: ../world/struct.World.html
    fn into_leaf(&self, transform: Transform) -> Option<ShapeEnum> {
        let material = self.material.clone();
        match self.kind {
            ShapeKind::Sphere => Some(ShapeEnum::Sphere(Sphere::with(transform, material))),
            ShapeKind::Plane => Some(ShapeEnum::Plane(Plane::with(transform, material))),
            ShapeKind::Cube => Some(ShapeEnum::Cube(Cube::with(transform, material))),
            ShapeKind::Cylinder => Some(ShapeEnum::Cylinder(Cylinder::with(
                transform,
                material,
                self.minimum,
                self.maximum,
                self.closed,
            ))),
            ShapeKind::Cone => Some(ShapeEnum::Cone(Cone::with(
                transform,
                material,
                self.minimum,
                self.maximum,
                self.closed,
            ))),
            ShapeKind::Group | ShapeKind::Obj => None,
        }
    }

    /// Insert this node (and, recursively, its children) into `world`,
    /// either as a root or under `parent`.
    fn insert_into(&self, world: &mut World, parent: Option<ShapeId>) -> Result<ShapeId, RenderError> {
        let transform = build_transform(&self.transform);

        if self.kind == ShapeKind::Obj {
            let path = self
                .file
                .as_ref()
                .expect("validation rejects an obj shape with no file");
            let mesh = obj::load(path, &self.material)?;
            return Ok(insert_mesh(world, parent, mesh, transform));
        }

        if self.kind == ShapeKind::Group {
            let group = ShapeEnum::Group(Group::with_transform(transform));
            let id = match parent {
                Some(p) => world.add_child(p, group),
                None => world.insert_root(group),
            };
            for child in &self.children {
                child.insert_into(world, Some(id))?;
            }
            return Ok(id);
        }

        let shape = self
            .into_leaf(transform)
            .expect("sphere/plane/cube/cylinder/cone always build a leaf");
        Ok(match parent {
            Some(p) => world.add_child(p, shape),
            None => world.insert_root(shape),
        })
    }
}

fn insert_mesh(world: &mut World, parent: Option<ShapeId>, node: MeshNode, transform: Transform) -> ShapeId {
    let combined = transform.then(&node.transform);
    let group = ShapeEnum::Group(Group::with_transform(combined));
    let id = match parent {
        Some(p) => world.add_child(p, group),
        None => world.insert_root(group),
    };
    for triangle in node.triangles {
        world.add_child(id, triangle);
    }
    for child in node.children {
        insert_mesh(world, Some(id), child, Transform::identity());
    }
    id
}

#[derive(Debug, Deserialize)]
struct SerializedScene {
    camera: SerializedCamera,
    light: PointLight,
    #[serde(default)]
    shapes: Vec<SerializedShape>,
}

impl SerializedScene {
    fn validate(&self) -> Result<(), RenderError> {
        let mut errors = Vec::new();
        self.validate_shapes(&self.shapes, &mut errors);
        if self.camera.width == 0 || self.camera.height == 0 {
            errors.push("camera width and height must both be nonzero".to_string());
        }
        if let Some(animation) = &self.camera.animation {
            if animation.fps <= 0.0 || animation.movement_time <= 0.0 {
                errors.push("animation fps and movement_time must both be positive".to_string());
            }
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(RenderError::Validation(errors))
        }
    }

    fn validate_shapes(&self, shapes: &[SerializedShape], errors: &mut Vec<String>) {
        for shape in shapes {
            match shape.kind {
                ShapeKind::Cylinder | ShapeKind::Cone if shape.minimum >= shape.maximum => {
                    errors.push(format!(
                        "{:?} has minimum {} >= maximum {}",
                        shape.kind, shape.minimum, shape.maximum
                    ));
                }
                ShapeKind::Obj if shape.file.is_none() => {
                    errors.push("an obj shape must set `file`".to_string());
                }
                ShapeKind::Group => self.validate_shapes(&shape.children, errors),
                _ => {}
            }
        }
    }
}

impl TryFrom<SerializedScene> for Scene {
    type Error = RenderError;

    fn try_from(serialized: SerializedScene) -> Result<Self, RenderError> {
        let camera = serialized.camera.into();
        let mut world = World::new(serialized.light);
        for shape in &serialized.shapes {
            shape.insert_into(&mut world, None)?;
        }
        Ok(Scene { world, camera })
    }
}

impl<'de> Deserialize<'de> for Scene {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let serialized: SerializedScene = Deserialize::deserialize(deserializer)?;
        serialized.validate().map_err(serde::de::Error::custom)?;
        serialized
            .try_into()
            .map_err(|e: RenderError| serde::de::Error::custom(e.to_string()))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const YAML: &str = r#"
camera:
  width: 40
  height: 20
  fov_degrees: 60.0
  from: [0.0, 1.5, -5.0]
  to: [0.0, 1.0, 0.0]
  up: [0.0, 1.0, 0.0]
  antialias: true

light:
  position: [-10.0, 10.0, -10.0]
  intensity: {r: 1.0, g: 1.0, b: 1.0}

shapes:
  - type: sphere
    transform:
      - scale: [10.0, 0.01, 10.0]
    material:
      color: {r: 1.0, g: 0.9, b: 0.9}
      specular: 0.0
  - type: group
    transform:
      - translate: [0.0, 1.0, 0.0]
    children:
      - type: sphere
        material:
          color: {r: 0.1, g: 1.0, b: 0.5}
"#;

    #[test]
    fn deserialization_builds_a_world_and_camera() {
        let scene: Scene = serde_yaml::from_str(YAML).unwrap();
        assert_eq!(scene.camera.hsize(), 40);
        assert_eq!(scene.world.roots().len(), 2);
    }

    #[test]
    fn transform_list_applies_first_entry_first() {
        let ops = vec![
            TransformOp::Translate([10.0, 0.0, 0.0]),
            TransformOp::Scale([2.0, 2.0, 2.0]),
        ];
        let combined = build_transform(&ops);
        let p = combined.matrix().transform_point(&Point3::origin());
        assert_eq!(p, Point3::new(20.0, 0.0, 0.0));
    }

    #[test]
    fn a_cylinder_with_an_inverted_range_fails_validation() {
        let yaml = r#"
camera:
  width: 10
  height: 10
  fov_degrees: 60.0
  from: [0.0, 0.0, -5.0]
  to: [0.0, 0.0, 0.0]
light:
  position: [0.0, 0.0, 0.0]
  intensity: {r: 1.0, g: 1.0, b: 1.0}
shapes:
  - type: cylinder
    minimum: 2.0
    maximum: 1.0
"#;
        let result: Result<Scene, _> = serde_yaml::from_str(yaml);
        assert!(result.is_err());
    }
}
