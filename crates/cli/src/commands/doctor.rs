use serde::Serialize;
use skincircuit_core::config::{AppConfig, LoadOptions};
use skincircuit_core::classify::FALLBACK_RULE_ID;
use skincircuit_core::Advisor;

use super::{CommandResult, EXIT_LOAD_FAILURE, EXIT_OK};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
enum CheckStatus {
    Pass,
    Warn,
    Fail,
    Skipped,
}

#[derive(Debug, Serialize)]
struct DoctorCheck {
    name: &'static str,
    status: CheckStatus,
    details: String,
}

#[derive(Debug, Serialize)]
struct DoctorReport {
    overall_status: CheckStatus,
    summary: String,
    checks: Vec<DoctorCheck>,
}

pub fn run(json_output: bool) -> CommandResult {
    let report = build_report();
    let exit_code =
        if report.overall_status == CheckStatus::Fail { EXIT_LOAD_FAILURE } else { EXIT_OK };

    if json_output {
        let output = serde_json::to_string_pretty(&report).unwrap_or_else(|error| {
            format!(
                "{{\"overall_status\":\"fail\",\"summary\":\"doctor serialization failed\",\"error\":\"{}\"}}",
                escape_json(&error.to_string())
            )
        });
        return CommandResult { exit_code, output };
    }

    CommandResult { exit_code, output: render_human(&report) }
}

fn build_report() -> DoctorReport {
    let mut checks = Vec::new();

    match AppConfig::load(LoadOptions::default()) {
        Ok(config) => {
            checks.push(DoctorCheck {
                name: "config_validation",
                status: CheckStatus::Pass,
                details: "configuration loaded and validated".to_string(),
            });
            match Advisor::load(&config.catalog) {
                Ok(advisor) => {
                    checks.push(check_catalog(&advisor));
                    checks.push(check_rule_table(&advisor));
                }
                Err(error) => {
                    checks.push(DoctorCheck {
                        name: "catalog_load",
                        status: CheckStatus::Fail,
                        details: error.to_string(),
                    });
                    checks.push(skipped("rule_table", "catalog did not load"));
                }
            }
            checks.push(check_frontend_dir(&config));
        }
        Err(error) => {
            checks.push(DoctorCheck {
                name: "config_validation",
                status: CheckStatus::Fail,
                details: error.to_string(),
            });
            checks.push(skipped("catalog_load", "configuration did not load"));
            checks.push(skipped("rule_table", "configuration did not load"));
            checks.push(skipped("frontend_dir", "configuration did not load"));
        }
    }

    let any_fail = checks.iter().any(|check| check.status == CheckStatus::Fail);
    let all_pass = checks.iter().all(|check| check.status == CheckStatus::Pass);
    let (overall_status, summary) = if any_fail {
        (CheckStatus::Fail, "doctor: one or more readiness checks failed")
    } else if all_pass {
        (CheckStatus::Pass, "doctor: all readiness checks passed")
    } else {
        (CheckStatus::Warn, "doctor: ready with warnings")
    };

    DoctorReport { overall_status, summary: summary.to_string(), checks }
}

fn skipped(name: &'static str, reason: &str) -> DoctorCheck {
    DoctorCheck { name, status: CheckStatus::Skipped, details: format!("skipped because {reason}") }
}

fn check_catalog(advisor: &Advisor) -> DoctorCheck {
    let catalog = advisor.catalog();
    if catalog.is_empty() {
        return DoctorCheck {
            name: "catalog_load",
            status: CheckStatus::Fail,
            details: "catalog loaded but holds no categories".to_string(),
        };
    }

    DoctorCheck {
        name: "catalog_load",
        status: CheckStatus::Pass,
        details: format!(
            "{} products across categories: {}",
            catalog.product_count(),
            catalog.category_keys().collect::<Vec<_>>().join(", ")
        ),
    }
}

fn check_rule_table(advisor: &Advisor) -> DoctorCheck {
    let table = advisor.classifier().table();
    let ids: Vec<&str> = table.iter().map(|rule| rule.id).collect();
    let fallback_last = ids.last().copied() == Some(FALLBACK_RULE_ID);

    DoctorCheck {
        name: "rule_table",
        status: if fallback_last { CheckStatus::Pass } else { CheckStatus::Fail },
        details: format!("{} rules in order: {}", ids.len(), ids.join(" > ")),
    }
}

/// A missing frontend directory only affects page routes, so it warns
/// instead of failing.
fn check_frontend_dir(config: &AppConfig) -> DoctorCheck {
    let dir = &config.server.frontend_dir;
    if dir.is_dir() {
        DoctorCheck {
            name: "frontend_dir",
            status: CheckStatus::Pass,
            details: format!("serving pages from `{}`", dir.display()),
        }
    } else {
        DoctorCheck {
            name: "frontend_dir",
            status: CheckStatus::Warn,
            details: format!("`{}` is not a directory; page routes will return 404", dir.display()),
        }
    }
}

fn render_human(report: &DoctorReport) -> String {
    let mut lines = Vec::new();
    lines.push(report.summary.clone());

    for check in &report.checks {
        let marker = match check.status {
            CheckStatus::Pass => "ok",
            CheckStatus::Warn => "warn",
            CheckStatus::Fail => "fail",
            CheckStatus::Skipped => "skip",
        };
        lines.push(format!("- [{marker}] {}: {}", check.name, check.details));
    }

    lines.join("\n")
}

fn escape_json(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
