//! The scene container and the recursive surface integrator.

use crate::color::Color;
use crate::light::PointLight;
use crate::material::{self, Material};
use crate::ray::Ray;
use crate::shape::{hit, Hit, Intersection, Shape, ShapeEnum, ShapeId};
use nalgebra::{Point3, Vector3};

/// How many times `reflected_color`/`refracted_color` may recurse before a
/// ray gives up and contributes nothing further.
pub const MAX_RECURSION_DEPTH: u8 = 5;

const EPSILON: f64 = 1e-5;

/// An arena of shapes, some of them top-level ("roots"), plus the single
/// point light that illuminates them.
///
/// Groups own their children only in the logical sense: the arena owns
/// every shape by value, and a `Group` records its children's ids. Shapes
/// are immutable once a render starts; every cached quantity (transform
/// inverses, group bounds) is filled in as shapes are inserted.
pub struct World {
    arena: Vec<ShapeEnum>,
    roots: Vec<ShapeId>,
    /// The scene's single light source.
    pub light: PointLight,
}

impl World {
    /// An empty world lit by `light`.
    pub fn new(light: PointLight) -> Self {
        World {
            arena: Vec::new(),
            roots: Vec::new(),
            light,
        }
    }

    /// Insert a shape with no parent, becoming one of the roots intersected
    /// directly by every primary ray.
    pub fn insert_root(&mut self, shape: ShapeEnum) -> ShapeId {
        let id = self.insert(shape);
        self.roots.push(id);
        id
    }

    /// Insert `child` as a member of the group at `parent`, growing the
    /// group's cached bounds by the child's box mapped through the child's
    /// own transform.
    pub fn add_child(&mut self, parent: ShapeId, child: ShapeEnum) -> ShapeId {
        let bounds_in_group_space = child.local_bounds().transform(child.transform().matrix());
        let id = self.insert(child);
        self.arena[id.0].set_parent(parent);
        if let ShapeEnum::Group(group) = &mut self.arena[parent.0] {
            group.push_child(id, bounds_in_group_space);
        }
        id
    }

    fn insert(&mut self, mut shape: ShapeEnum) -> ShapeId {
        let id = ShapeId(self.arena.len());
        shape.set_id(id);
        self.arena.push(shape);
        id
    }

    /// The root shapes, in the order they were inserted.
    pub fn roots(&self) -> &[ShapeId] {
        &self.roots
    }

    /// Look up a shape by id.
    pub fn shape(&self, id: ShapeId) -> &ShapeEnum {
        &self.arena[id.0]
    }

    fn material_of(&self, id: ShapeId) -> &Material {
        self.shape(id)
            .material()
            .expect("an intersection never tags a group, only material-bearing shapes")
    }

    /// Map a world point into `id`'s own object space, walking up through
    /// every ancestor group's transform along the way.
    pub fn world_to_object(&self, id: ShapeId, world_point: Point3<f64>) -> Point3<f64> {
        let shape = self.shape(id);
        let point = match shape.parent() {
            Some(parent) => self.world_to_object(parent, world_point),
            None => world_point,
        };
        shape.transform().inverse().transform_point(&point)
    }

    /// Lift an object-space normal at `id` back to world space, walking
    /// back down through every ancestor group's inverse-transpose.
    pub fn normal_to_world(&self, id: ShapeId, object_normal: Vector3<f64>) -> Vector3<f64> {
        let shape = self.shape(id);
        let world_normal = shape
            .transform()
            .inverse_transpose()
            .transform_vector(&object_normal)
            .normalize();
        match shape.parent() {
            Some(parent) => self.normal_to_world(parent, world_normal),
            None => world_normal,
        }
    }

    /// The world-space normal at `world_point` on shape `id`'s surface.
    pub fn normal_at(&self, id: ShapeId, world_point: Point3<f64>, hit: Hit) -> Vector3<f64> {
        let local_point = self.world_to_object(id, world_point);
        let local_normal = self.shape(id).local_normal(local_point, hit);
        self.normal_to_world(id, local_normal)
    }

    /// Every intersection of `ray` against the scene, sorted by ascending
    /// `t`. Groups are tested bounds-first and only recursed into on a hit.
    pub fn intersect(&self, ray: &Ray) -> Vec<Intersection> {
        let mut xs: Vec<Intersection> = self
            .roots
            .iter()
            .flat_map(|&id| self.intersect_shape(id, ray))
            .collect();
        xs.sort_by(|a, b| a.t.partial_cmp(&b.t).expect("t is never NaN"));
        xs
    }

    fn intersect_shape(&self, id: ShapeId, ray_in_parent_space: &Ray) -> Vec<Intersection> {
        let shape = self.shape(id);
        let inverse = shape.transform().inverse();
        let local_ray = Ray::new(
            inverse.transform_point(&ray_in_parent_space.origin),
            inverse.transform_vector(&ray_in_parent_space.direction),
        );

        match shape {
            ShapeEnum::Group(group) => {
                if !group.bounds_hit(&local_ray) {
                    return Vec::new();
                }
                group
                    .children()
                    .iter()
                    .flat_map(|&child| self.intersect_shape(child, &local_ray))
                    .collect()
            }
            _ => shape
                .local_intersect(&local_ray)
                .into_iter()
                .map(|(t, hit)| Intersection { t, shape: id, hit })
                .collect(),
        }
    }

    /// Derive the shading inputs for `target`, the intersection selected as
    /// the hit out of the full sorted list `xs` for `ray`.
    pub fn precompute(&self, target: Intersection, ray: &Ray, xs: &[Intersection]) -> Comps {
        let point = ray.position(target.t);
        let eyev = -ray.direction;
        let mut normalv = self.normal_at(target.shape, point, target.hit);
        let inside = normalv.dot(&eyev) < 0.0;
        if inside {
            normalv = -normalv;
        }
        let reflectv = crate::tuple::reflect(ray.direction, normalv);
        let over_point = point + normalv * EPSILON;
        let under_point = point - normalv * EPSILON;
        let (n1, n2) = self.refractive_indices(target, xs);

        Comps {
            t: target.t,
            shape: target.shape,
            point,
            eyev,
            normalv,
            inside,
            reflectv,
            over_point,
            under_point,
            n1,
            n2,
        }
    }

    /// The standard containers algorithm: walk the sorted intersection
    /// list, tracking which shapes the ray is currently inside, and read
    /// off the refractive index on each side of `target`.
    fn refractive_indices(&self, target: Intersection, xs: &[Intersection]) -> (f64, f64) {
        let mut containers: Vec<ShapeId> = Vec::new();
        let mut n1 = 1.0;
        let mut n2 = 1.0;

        for &x in xs {
            let is_target = x == target;

            if is_target {
                n1 = containers
                    .last()
                    .map_or(1.0, |&id| self.material_of(id).refractive_index);
            }

            match containers.iter().position(|&id| id == x.shape) {
                Some(position) => {
                    containers.remove(position);
                }
                None => containers.push(x.shape),
            }

            if is_target {
                n2 = containers
                    .last()
                    .map_or(1.0, |&id| self.material_of(id).refractive_index);
                break;
            }
        }

        (n1, n2)
    }

    /// `color_at` is the entry point: intersect, find the hit, shade it.
    /// `depth` bounds how many reflective/refractive bounces remain.
    pub fn color_at(&self, ray: &Ray, depth: u8) -> Color {
        let xs = self.intersect(ray);
        match hit(&xs) {
            None => Color::black(),
            Some(target) => {
                let comps = self.precompute(target, ray, &xs);
                self.shade_hit(&comps, depth)
            }
        }
    }

    /// Combine the Phong surface term with reflection and refraction,
    /// Schlick-blending the two when the material is both reflective and
    /// transparent.
    pub fn shade_hit(&self, comps: &Comps, depth: u8) -> Color {
        let mat = self.material_of(comps.shape);
        let object_point = self.world_to_object(comps.shape, comps.point);
        let shadowed = self.is_shadowed(comps.over_point);
        let surface = material::lighting(
            mat,
            comps.point,
            object_point,
            &self.light,
            comps.eyev,
            comps.normalv,
            shadowed,
        );

        let reflected = self.reflected_color(comps, mat, depth);
        let refracted = self.refracted_color(comps, mat, depth);

        if mat.reflective > 0.0 && mat.transparency > 0.0 {
            let reflectance = self.schlick(comps);
            surface + reflected * reflectance + refracted * (1.0 - reflectance)
        } else {
            surface + reflected + refracted
        }
    }

    fn reflected_color(&self, comps: &Comps, mat: &Material, depth: u8) -> Color {
        if mat.reflective == 0.0 || depth == 0 {
            return Color::black();
        }
        let reflected_ray = Ray::new(comps.over_point, comps.reflectv);
        self.color_at(&reflected_ray, depth - 1) * mat.reflective
    }

    fn refracted_color(&self, comps: &Comps, mat: &Material, depth: u8) -> Color {
        if mat.transparency == 0.0 || depth == 0 {
            return Color::black();
        }

        let ratio = comps.n1 / comps.n2;
        let cos_i = comps.eyev.dot(&comps.normalv);
        let sin2_t = ratio * ratio * (1.0 - cos_i * cos_i);
        if sin2_t > 1.0 {
            return Color::black();
        }

        let cos_t = (1.0 - sin2_t).sqrt();
        let direction = comps.normalv * (ratio * cos_i - cos_t) - comps.eyev * ratio;
        let refracted_ray = Ray::new(comps.under_point, direction);
        self.color_at(&refracted_ray, depth - 1) * mat.transparency
    }

    /// The Fresnel reflectance at `comps`, via the Schlick approximation.
    pub fn schlick(&self, comps: &Comps) -> f64 {
        let mut cos = comps.eyev.dot(&comps.normalv);

        if comps.n1 > comps.n2 {
            let ratio = comps.n1 / comps.n2;
            let sin2_t = ratio * ratio * (1.0 - cos * cos);
            if sin2_t > 1.0 {
                return 1.0;
            }
            cos = (1.0 - sin2_t).sqrt();
        }

        let r0 = ((comps.n1 - comps.n2) / (comps.n1 + comps.n2)).powi(2);
        r0 + (1.0 - r0) * (1.0 - cos).powi(5)
    }

    /// Whether `point` lies in the shadow of the light: something is hit
    /// strictly between `point` and the light.
    pub fn is_shadowed(&self, point: Point3<f64>) -> bool {
        let to_light = self.light.position - point;
        let distance = to_light.norm();
        let ray = Ray::new(point, to_light.normalize());
        self.intersect(&ray)
            .iter()
            .any(|x| x.t > 0.0 && x.t < distance)
    }
}

/// Derived, per-hit shading inputs.
#[derive(Debug, Clone, Copy)]
pub struct Comps {
    /// The ray parameter at which the hit occurs.
    pub t: f64,
    /// The shape that was hit.
    pub shape: ShapeId,
    /// The world-space point of the hit.
    pub point: Point3<f64>,
    /// The unit vector back towards the ray's origin.
    pub eyev: Vector3<f64>,
    /// The world-space surface normal, flipped to face the eye if needed.
    pub normalv: Vector3<f64>,
    /// Whether the hit is on the inside of the surface (normal was flipped).
    pub inside: bool,
    /// The ray's direction reflected about `normalv`.
    pub reflectv: Vector3<f64>,
    /// `point` nudged along `+normalv`, used as the origin of shadow and
    /// reflection feelers to avoid self-intersection.
    pub over_point: Point3<f64>,
    /// `point` nudged along `-normalv`, used as the origin of refraction
    /// feelers for the same reason.
    pub under_point: Point3<f64>,
    /// The refractive index of the medium the ray is leaving.
    pub n1: f64,
    /// The refractive index of the medium the ray is entering.
    pub n2: f64,
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::color::Color;
    use crate::light::PointLight;
    use crate::material::Material;
    use crate::shape::{Group, Hit, Plane, Sphere};
    use crate::transform;
    use nalgebra::Vector3;

    fn default_world() -> World {
        let light = PointLight::new(Point3::new(-10., 10., -10.), Color::white());
        let mut world = World::new(light);

        let outer_material = Material {
            color: Color::new(0.8, 1.0, 0.6),
            diffuse: 0.7,
            specular: 0.2,
            ..Material::default()
        };
        let outer = Sphere::with(crate::transform::Transform::identity(), outer_material);
        let inner = Sphere::with(transform::scaling(0.5, 0.5, 0.5), Material::default());

        world.insert_root(ShapeEnum::Sphere(outer));
        world.insert_root(ShapeEnum::Sphere(inner));
        world
    }

    #[test]
    fn intersecting_the_default_world_with_a_ray() {
        let world = default_world();
        let ray = Ray::new(Point3::new(0., 0., -5.), Vector3::new(0., 0., 1.));
        let xs = world.intersect(&ray);
        let ts: Vec<f64> = xs.iter().map(|x| x.t).collect();
        assert_eq!(ts, vec![4.0, 4.5, 5.5, 6.0]);
    }

    #[test]
    fn shading_an_intersection_from_the_outside() {
        let world = default_world();
        let ray = Ray::new(Point3::new(0., 0., -5.), Vector3::new(0., 0., 1.));
        let shape = world.roots()[0];
        let target = Intersection::new(4.0, shape);
        let comps = world.precompute(target, &ray, &[target]);
        let color = world.shade_hit(&comps, MAX_RECURSION_DEPTH);
        assert!((color.r - 0.38066).abs() < 1e-4);
        assert!((color.g - 0.47583).abs() < 1e-4);
        assert!((color.b - 0.28550).abs() < 1e-4);
    }

    #[test]
    fn shading_an_intersection_from_the_inside() {
        let mut world = default_world();
        world.light = PointLight::new(Point3::new(0., 0.25, 0.), Color::white());
        let ray = Ray::new(Point3::origin(), Vector3::new(0., 0., 1.));
        let shape = world.roots()[1];
        let target = Intersection::new(0.5, shape);
        let comps = world.precompute(target, &ray, &[target]);
        let color = world.shade_hit(&comps, MAX_RECURSION_DEPTH);
        assert!((color.r - 0.90498).abs() < 1e-4);
        assert!((color.g - 0.90498).abs() < 1e-4);
        assert!((color.b - 0.90498).abs() < 1e-4);
    }

    #[test]
    fn color_when_a_ray_misses() {
        let world = default_world();
        let ray = Ray::new(Point3::new(0., 0., -5.), Vector3::new(0., 1., 0.));
        assert_eq!(world.color_at(&ray, MAX_RECURSION_DEPTH), Color::black());
    }

    #[test]
    fn there_is_no_shadow_when_nothing_is_collinear() {
        let world = default_world();
        assert!(!world.is_shadowed(Point3::new(0., 10., 0.)));
    }

    #[test]
    fn shadow_when_an_object_is_between_point_and_light() {
        let world = default_world();
        assert!(world.is_shadowed(Point3::new(10., -10., 10.)));
    }

    #[test]
    fn shade_hit_is_given_an_intersection_in_shadow() {
        let light = PointLight::new(Point3::new(0., 0., -10.), Color::white());
        let mut world = World::new(light);
        world.insert_root(ShapeEnum::Sphere(Sphere::new()));
        let s2 = Sphere::with(transform::translation(0., 0., 10.), Material::default());
        let s2_id = world.insert_root(ShapeEnum::Sphere(s2));

        let ray = Ray::new(Point3::new(0., 0., 5.), Vector3::new(0., 0., 1.));
        let target = Intersection::new(4.0, s2_id);
        let comps = world.precompute(target, &ray, &[target]);
        let color = world.shade_hit(&comps, MAX_RECURSION_DEPTH);
        assert_eq!(color, Color::new(0.1, 0.1, 0.1));
    }

    #[test]
    fn reflected_color_for_a_nonreflective_material() {
        let mut world = default_world();
        let ray = Ray::new(Point3::origin(), Vector3::new(0., 0., 1.));
        let shape_id = world.roots()[1];
        if let ShapeEnum::Sphere(s) = world.arena.get_mut(shape_id.0).unwrap() {
            *s = Sphere::with(
                transform::scaling(0.5, 0.5, 0.5),
                Material {
                    ambient: 1.0,
                    ..Material::default()
                },
            );
        }
        let target = Intersection::new(1.0, shape_id);
        let comps = world.precompute(target, &ray, &[target]);
        assert_eq!(world.reflected_color(&comps, world.material_of(shape_id), MAX_RECURSION_DEPTH), Color::black());
    }

    #[test]
    fn reflected_color_at_the_maximum_recursion_depth_is_black() {
        let mut world = default_world();
        let plane_material = Material {
            reflective: 0.5,
            ..Material::default()
        };
        let plane = Plane::with(transform::translation(0., -1., 0.), plane_material);
        let plane_id = world.insert_root(ShapeEnum::Plane(plane));

        let frac = std::f64::consts::FRAC_1_SQRT_2;
        let ray = Ray::new(Point3::new(0., 0., -3.), Vector3::new(0., -frac, frac));
        let target = Intersection::new(2f64.sqrt(), plane_id);
        let comps = world.precompute(target, &ray, &[target]);
        let color = world.reflected_color(&comps, world.material_of(plane_id), 0);
        assert_eq!(color, Color::black());
    }

    #[test]
    fn shade_hit_with_a_reflective_material() {
        let mut world = default_world();
        let plane_material = Material {
            reflective: 0.5,
            ..Material::default()
        };
        let plane = Plane::with(transform::translation(0., -1., 0.), plane_material);
        let plane_id = world.insert_root(ShapeEnum::Plane(plane));

        let frac = std::f64::consts::FRAC_1_SQRT_2;
        let ray = Ray::new(Point3::new(0., 0., -3.), Vector3::new(0., -frac, frac));
        let target = Intersection::new(2f64.sqrt(), plane_id);
        let comps = world.precompute(target, &ray, &[target]);
        let color = world.shade_hit(&comps, 1);
        assert!((color.r - 0.87675).abs() < 1e-4);
        assert!((color.g - 0.92434).abs() < 1e-4);
        assert!((color.b - 0.82917).abs() < 1e-4);
    }

    #[test]
    fn refracted_color_with_an_opaque_surface_is_black() {
        let world = default_world();
        let ray = Ray::new(Point3::new(0., 0., -5.), Vector3::new(0., 0., 1.));
        let shape_id = world.roots()[0];
        let xs = vec![Intersection::new(4.0, shape_id), Intersection::new(6.0, shape_id)];
        let comps = world.precompute(xs[0], &ray, &xs);
        let color = world.refracted_color(&comps, world.material_of(shape_id), MAX_RECURSION_DEPTH);
        assert_eq!(color, Color::black());
    }

    #[test]
    fn refracted_color_under_total_internal_reflection() {
        let mut world = default_world();
        let shape_id = world.roots()[0];
        if let ShapeEnum::Sphere(s) = world.arena.get_mut(shape_id.0).unwrap() {
            *s = Sphere::with(crate::transform::Transform::identity(), Material::glass());
        }
        let frac = std::f64::consts::FRAC_1_SQRT_2;
        let ray = Ray::new(Point3::new(0., 0., frac), Vector3::new(0., 1., 0.));
        let xs = vec![Intersection::new(-frac, shape_id), Intersection::new(frac, shape_id)];
        let comps = world.precompute(xs[1], &ray, &xs);
        let color = world.refracted_color(&comps, world.material_of(shape_id), MAX_RECURSION_DEPTH);
        assert_eq!(color, Color::black());
    }

    #[test]
    fn schlick_approximation_under_total_internal_reflection() {
        let mut world = World::new(PointLight::new(Point3::origin(), Color::white()));
        let shape = Sphere::with(crate::transform::Transform::identity(), Material::glass());
        let id = world.insert_root(ShapeEnum::Sphere(shape));
        let frac = std::f64::consts::FRAC_1_SQRT_2;
        let ray = Ray::new(Point3::new(0., 0., frac), Vector3::new(0., 1., 0.));
        let xs = vec![Intersection::new(-frac, id), Intersection::new(frac, id)];
        let comps = world.precompute(xs[1], &ray, &xs);
        assert_eq!(world.schlick(&comps), 1.0);
    }

    #[test]
    fn schlick_approximation_with_a_perpendicular_ray() {
        let mut world = World::new(PointLight::new(Point3::origin(), Color::white()));
        let shape = Sphere::with(crate::transform::Transform::identity(), Material::glass());
        let id = world.insert_root(ShapeEnum::Sphere(shape));
        let ray = Ray::new(Point3::new(0., 0., 0.), Vector3::new(0., 1., 0.));
        let xs = vec![Intersection::new(-1.0, id), Intersection::new(1.0, id)];
        let comps = world.precompute(xs[1], &ray, &xs);
        assert!((world.schlick(&comps) - 0.04).abs() < 1e-2);
    }

    #[test]
    fn finds_n1_and_n2_at_various_intersections() {
        let mut world = World::new(PointLight::new(Point3::origin(), Color::white()));

        let a = Sphere::with(transform::scaling(2., 2., 2.), Material::glass());
        let mut b_material = Material::glass();
        b_material.refractive_index = 2.0;
        let b = Sphere::with(transform::translation(0., 0., -0.25), b_material);
        let mut c_material = Material::glass();
        c_material.refractive_index = 2.5;
        let c = Sphere::with(transform::translation(0., 0., 0.25), c_material);

        let a_id = world.insert_root(ShapeEnum::Sphere(a));
        let b_id = world.insert_root(ShapeEnum::Sphere(b));
        let c_id = world.insert_root(ShapeEnum::Sphere(c));

        let ray = Ray::new(Point3::new(0., 0., -4.), Vector3::new(0., 0., 1.));
        let xs = vec![
            Intersection::new(2.0, a_id),
            Intersection::new(2.75, b_id),
            Intersection::new(3.25, c_id),
            Intersection::new(4.75, b_id),
            Intersection::new(5.25, c_id),
            Intersection::new(6.0, a_id),
        ];

        let expected = [
            (1.0, 1.5),
            (1.5, 2.0),
            (2.0, 2.5),
            (2.5, 2.5),
            (2.5, 1.5),
            (1.5, 1.0),
        ];
        for (i, &(n1, n2)) in expected.iter().enumerate() {
            let comps = world.precompute(xs[i], &ray, &xs);
            assert!((comps.n1 - n1).abs() < 1e-5, "n1 at {}: {} != {}", i, comps.n1, n1);
            assert!((comps.n2 - n2).abs() < 1e-5, "n2 at {}: {} != {}", i, comps.n2, n2);
        }
    }

    #[test]
    fn groups_are_tested_bounds_first() {
        let mut world = World::new(PointLight::new(Point3::origin(), Color::white()));
        let group_id = world.insert_root(ShapeEnum::Group(Group::new()));
        world.add_child(group_id, ShapeEnum::Sphere(Sphere::new()));

        let ray = Ray::new(Point3::new(0., 0., -5.), Vector3::new(0., 0., 1.));
        let xs = world.intersect(&ray);
        assert_eq!(xs.len(), 2);

        let miss = Ray::new(Point3::new(5., 0., -5.), Vector3::new(0., 0., 1.));
        assert!(world.intersect(&miss).is_empty());
    }

    #[test]
    fn converting_a_point_from_world_to_object_space_through_nested_groups() {
        let mut world = World::new(PointLight::new(Point3::origin(), Color::white()));
        let g1 = Group::with_transform(transform::rotation_y(std::f64::consts::FRAC_PI_2));
        let g1_id = world.insert_root(ShapeEnum::Group(g1));
        let g2 = Group::with_transform(transform::scaling(2., 2., 2.));
        let g2_id = world.add_child(g1_id, ShapeEnum::Group(g2));
        let sphere = Sphere::with(transform::translation(5., 0., 0.), Material::default());
        let sphere_id = world.add_child(g2_id, ShapeEnum::Sphere(sphere));

        let object_point = world.world_to_object(sphere_id, Point3::new(-2., 0., -10.));
        assert!(object_point.x.abs() < 1e-5);
        assert!(object_point.y.abs() < 1e-5);
        assert!((object_point.z - (-1.0)).abs() < 1e-5);
    }

    #[test]
    fn finding_the_normal_on_a_child_object() {
        let mut world = World::new(PointLight::new(Point3::origin(), Color::white()));
        let g1 = Group::with_transform(transform::rotation_y(std::f64::consts::FRAC_PI_2));
        let g1_id = world.insert_root(ShapeEnum::Group(g1));
        let g2 = Group::with_transform(transform::scaling(1., 2., 3.));
        let g2_id = world.add_child(g1_id, ShapeEnum::Group(g2));
        let sphere = Sphere::with(transform::translation(5., 0., 0.), Material::default());
        let sphere_id = world.add_child(g2_id, ShapeEnum::Sphere(sphere));

        let normal = world.normal_at(
            sphere_id,
            Point3::new(1.7321, 1.1547, -5.5774),
            Hit::default(),
        );
        assert!((normal.x - 0.2857).abs() < 1e-3);
        assert!((normal.y - 0.4286).abs() < 1e-3);
        assert!((normal.z - (-0.8571)).abs() < 1e-3);
    }
}
