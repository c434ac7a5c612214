use clap::Parser;
use log::info;
use macroquad::window::Conf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Window width
    #[arg(short = 'w', long, default_value = "800")]
    width: u32,

    /// Window height (no short flag to avoid conflict with --help)
    #[arg(long, default_value = "600")]
    height: u32,
}

fn main() {
    env_logger::init();

    if std::env::var("RUST_LOG").is_err() {
        eprintln!("Set RUST_LOG=info for detailed logging");
    }

    let args = Args::parse();

    info!("Starting visualizer...");
    info!("Controls: drag from anywhere onto a server bar to assign load");
    info!("Press 'c' to spawn a client, Escape to quit");

    let conf = Conf {
        window_title: "Fleet Load Visualizer".to_owned(),
        window_width: args.width as i32,
        window_height: args.height as i32,
        ..Default::default()
    };

    macroquad::Window::from_config(conf, viz::app::run());
}
