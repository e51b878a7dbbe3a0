use clap::Parser;
use crashlens_roads::app::RoadDataApp;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = RoadDataApp::parse();
    match args.run() {
        Ok(summary) => {
            if summary.failure_count() > 0 {
                log::warn!("{} jurisdiction(s) failed", summary.failure_count());
            }
        }
        Err(e) => {
            log::error!("crashlens_roads failed: {e}");
            std::process::exit(1);
        }
    }
}
