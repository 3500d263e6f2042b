use pxdrift::Simulation;

fn main() {
    env_logger::init();

    let path = match std::env::args().nth(1) {
        Some(path) => path,
        None => {
            eprintln!("usage: pxdrift <image>");
            std::process::exit(2);
        }
    };

    let image = match image::open(&path) {
        Ok(image) => image.to_rgba8(),
        Err(e) => {
            eprintln!("failed to open {}: {}", path, e);
            std::process::exit(1);
        }
    };

    if let Err(e) = Simulation::from_image(image).with_title("pxdrift").run() {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
