use wavefield::Viewer;

fn main() {
    env_logger::init();

    if let Err(err) = Viewer::new().run() {
        eprintln!("wavefield: {}", err);
        std::process::exit(1);
    }
}
