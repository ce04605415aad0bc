//! Argument parsing through to report execution.

use clap::Parser;
use lti_cli::Error;
use lti_cli::cli::Cli;
use lti_cli::commands::{self, Context};
use lti_cli::config::LtiConfig;
use serde_json::json;
use tempfile::TempDir;

struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let store = json!({
            "savedMeetings": [{
                "date": "2025-01-10",
                "isolations": [{"id": "NPHE-303-001", "Planned Start Date": "2024-01-01"}],
                "responses": {"NPHE-303-001": {"riskLevel": "Critical", "actionRequired": "Urgent"}}
            }]
        });
        std::fs::write(dir.path().join("store.json"), store.to_string()).unwrap();
        std::fs::write(
            dir.path().join("config.toml"),
            "[ids]\nprefix = \"NPHE\"\n\n[systems]\n\"303\" = \"Boiler House\"\n",
        )
        .unwrap();
        Self { dir }
    }

    fn path(&self, name: &str) -> String {
        self.dir.path().join(name).to_str().unwrap().to_string()
    }

    fn parse(&self, args: &[&str]) -> Cli {
        let config = self.path("config.toml");
        let store = self.path("store.json");
        let mut argv: Vec<&str> = vec![
            "lti",
            "--config",
            config.as_str(),
            "--store",
            store.as_str(),
            "--now",
            "2025-01-10",
        ];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }
}

#[test]
fn test_every_report_runs() {
    let ws = Workspace::new();
    for args in [
        &["dashboard", "--diagnostics"][..],
        &["related", "--all"],
        &["history"],
        &["summary"],
        &["review", "NPHE-303-001"],
        &["agenda"],
        &["agenda", "--json"],
    ] {
        let cli = ws.parse(args);
        let config = LtiConfig::load(cli.config.as_deref()).unwrap();
        commands::run(&cli, &config).unwrap();
    }
}

#[test]
fn test_configured_prefix_and_systems_apply() {
    let ws = Workspace::new();
    let cli = ws.parse(&["history"]);
    let config = LtiConfig::load(cli.config.as_deref()).unwrap();
    let ctx = Context::from_args(&config, cli.store.as_deref(), cli.now.as_deref()).unwrap();

    let stats = commands::dashboard(&ctx, false).unwrap().stats;
    assert_eq!(stats.critical_risk, 1);
    assert_eq!(stats.urgent_action, 1);
    assert_eq!(stats.six_months_plus, 1);

    assert_eq!(ctx.system_names["303"], "Boiler House");
    let agenda = commands::agenda(&ctx).unwrap().to_string();
    assert!(agenda.contains("NPHE-303-001: 1 year old, Critical risk"));
}

#[test]
fn test_missing_store_file_is_io_error() {
    let ws = Workspace::new();
    let config = ws.path("config.toml");
    let missing = ws.path("missing.json");
    let cli = Cli::try_parse_from(["lti", "--config", config.as_str(), "--store", missing.as_str(), "history"])
        .unwrap();
    let loaded = LtiConfig::load(cli.config.as_deref()).unwrap();
    let err = commands::run(&cli, &loaded).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
}

#[test]
fn test_config_init_then_get() {
    let ws = Workspace::new();
    let fresh = ws.path("fresh/config.toml");
    let cli = Cli::try_parse_from(["lti", "config", "init", "--file", fresh.as_str()]).unwrap();
    commands::run(&cli, &LtiConfig::default()).unwrap();

    let loaded = LtiConfig::load(Some(fresh.as_str())).unwrap();
    assert_eq!(loaded, LtiConfig::default());
}
