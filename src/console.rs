//! Pretty terminal output with colors.

use colored::Colorize;

use crate::config::Config;

// === Startup ===

pub fn print_banner() {
    let title = format!("Dashboard Proxy v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("{}", "╔═══════════════════════════════════════════════════════════╗".cyan());
    println!("║  {:<57}║", title.bold().white());
    println!("║  {:<57}║", "App-list proxy and chart configurations".dimmed());
    println!("{}", "╚═══════════════════════════════════════════════════════════╝".cyan());
    println!();
}

pub fn print_startup(config: &Config, charts: usize) {
    println!("{} {}", "✓".green().bold(), "Server ready".white().bold());
    println!("  {} {}", "→".dimmed(), format!("http://{}", config.bind_addr).cyan().underline());
    println!("  {} {} {}", "↳".dimmed(), "upstream".dimmed(), config.upstream_url.as_str().white());
    match &config.charts_dir {
        Some(dir) => println!("  {} {} {}", "↳".dimmed(), "charts dir".dimmed(), dir.display()),
        None => println!("  {} {} {}", "↳".dimmed(), "charts".dimmed(), format!("{charts} bundled").white()),
    }
    println!();
    println!("{}", "Endpoints:".white().bold());
    println!("  {} {}  {}", "GET".green(), "/api/apps     ".white(), "Proxied app list".dimmed());
    println!("  {} {}  {}", "GET".green(), "/charts       ".white(), "Chart index".dimmed());
    println!("  {} {}  {}", "GET".green(), "/charts/:name ".white(), "Chart configuration".dimmed());
    println!("  {} {}  {}", "GET".green(), "/metrics      ".white(), "Telemetry".dimmed());
    println!("  {} {}  {}", "GET".green(), "/health       ".white(), "Health check".dimmed());
    println!();
}
