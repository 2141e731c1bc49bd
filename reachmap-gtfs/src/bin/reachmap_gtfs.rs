//! reads a GTFS schedule feed from a directory, zip archive or web server and
//! derives its stop-to-stop minimum travel time graph.
use clap::Parser;
use reachmap_gtfs::app::ReachmapGtfsApp;

fn main() {
    env_logger::init();
    let args = ReachmapGtfsApp::parse();
    match args.op.run() {
        Ok(_) => log::info!("finished."),
        Err(e) => {
            log::error!("reachmap-gtfs failed: {e}");
            std::process::exit(1);
        }
    }
}
