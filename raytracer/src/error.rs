//! Error types shared across the renderer.

use thiserror::Error;

/// Errors that can surface while loading a scene or rendering it.
#[derive(Error, Debug)]
pub enum RenderError {
    /// A transform matrix has no inverse, so it cannot map rays or normals
    /// between object and world space.
    #[error("transform matrix is singular and cannot be inverted")]
    SingularMatrix,

    /// A triangle's three vertices are colinear, so it has no well-defined
    /// normal.
    #[error("triangle vertices {0:?}, {1:?}, {2:?} are colinear")]
    DegenerateGeometry(String, String, String),

    /// The scene's YAML failed to parse or deserialize.
    #[error("failed to load scene: {0}")]
    SceneLoad(#[from] serde_yaml::Error),

    /// The scene failed the post-deserialization validation pass.
    #[error("scene is invalid:\n{}", .0.join("\n"))]
    Validation(Vec<String>),

    /// An OBJ mesh collaborator file could not be parsed.
    #[error("failed to load mesh: {0}")]
    MeshLoad(#[from] tobj::LoadError),

    /// A still image failed to encode or write to disk.
    #[error("failed to encode image: {0}")]
    Encode(#[from] image::ImageError),

    /// An animated GIF failed to encode.
    #[error("failed to encode animation: {0}")]
    Gif(#[from] gif::EncodingError),

    /// Reading or writing a file on disk failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
