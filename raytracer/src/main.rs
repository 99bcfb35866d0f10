use raytracer::scene::Scene;
use raytracer::RenderError;
use std::path::PathBuf;
use structopt::StructOpt;

#[derive(StructOpt, Debug)]
struct Options {
    /// YAML description of the scene to render.
    #[structopt(short, long, parse(from_os_str), default_value = "scene.yaml")]
    input: PathBuf,
    /// Output file. The extension selects PPM, PNG, or GIF.
    #[structopt(short, long, parse(from_os_str), default_value = "scene.png")]
    output: PathBuf,
    /// Worker thread count; defaults to the available parallelism.
    #[structopt(short, long)]
    threads: Option<usize>,
    /// Disable anti-aliasing even if the scene requests it.
    #[structopt(long)]
    no_aa: bool,
    /// Increase logging verbosity; repeatable.
    #[structopt(short, long, parse(from_occurrences))]
    verbose: u8,
}

fn main() -> Result<(), RenderError> {
    let options = Options::from_args();

    let level = match options.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    if let Some(threads) = options.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .expect("thread pool is only ever built once, at startup");
    }

    let file = std::fs::File::open(&options.input)?;
    let mut scene: Scene = Scene::load(file)?;
    if options.no_aa {
        scene.camera.antialias = false;
    }

    log::info!("loaded scene from {}", options.input.display());

    if scene.camera.animation.is_some() {
        let frames = scene.camera.render_frames(&scene.world);
        let out = std::fs::File::create(&options.output)?;
        raytracer::canvas::encode_gif(&frames, out, 100)?;
    } else {
        let canvas = scene.camera.render(&scene.world);
        match options.output.extension().and_then(|ext| ext.to_str()) {
            Some("ppm") => {
                let out = std::fs::File::create(&options.output)?;
                canvas.write_ppm(out)?;
            }
            _ => canvas.save_png(&options.output)?,
        }
    }

    log::info!("wrote {}", options.output.display());
    Ok(())
}
