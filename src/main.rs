use host_dashboard::app::DashboardApp;

fn main() {
    env_logger::init();

    let app = DashboardApp::new();
    std::process::exit(app.run());
}
