//! Script rendering.
//!
//! Assembles header, one block per selected rule, and the completion
//! footer into a single script string. Rendering is deterministic:
//! identical rules, OS, risk level and timestamp produce byte-identical
//! output, so scripts are reproducible and diffable.

pub mod shell;
pub mod types;

pub use shell::ShellDialect;
pub use types::GeneratedScript;

use chrono::{DateTime, SecondsFormat, Utc};
use log::debug;

use crate::config::compile_time::artifact;
use crate::rules::{HardeningRule, Os, RiskLevel};

/// Render the selected rules into a complete script
///
/// `rules` must already be filtered for `os` and `risk_level`; a rule
/// without a command body for `os` is skipped silently. An empty slice
/// yields a valid script of header and footer only.
pub fn render_script(
    os: Os,
    risk_level: RiskLevel,
    rules: &[&HardeningRule],
    now: DateTime<Utc>,
) -> GeneratedScript {
    let dialect = ShellDialect::for_os(os);
    // Millisecond precision with a literal Z suffix
    let timestamp = now.to_rfc3339_opts(SecondsFormat::Millis, true);

    let mut content = dialect.header(os, risk_level, &timestamp);

    let mut rule_count = 0;
    for rule in rules {
        if let Some(command) = rule.commands.get(os) {
            content.push_str(&dialect.rule_block(&rule.name, &rule.description, command));
            rule_count += 1;
        }
    }

    content.push_str(&dialect.footer());

    debug!(
        "rendered {} rule(s) into a {} byte {} script",
        rule_count,
        content.len(),
        os
    );

    GeneratedScript {
        content,
        filename: script_filename(os),
        os,
        risk_level,
        generated_at: now,
        rule_count,
    }
}

/// Suggested filename for a script targeting `os`
pub fn script_filename(os: Os) -> String {
    let extension = if os == Os::Windows {
        artifact::WINDOWS_EXTENSION
    } else {
        artifact::UNIX_EXTENSION
    };
    format!("{}.{}", artifact::SCRIPT_BASENAME, extension)
}

/// Step-by-step run instructions for a script targeting `os`
pub fn usage_instructions(os: Os) -> Vec<String> {
    if os == Os::Windows {
        vec![
            "Open PowerShell as Administrator".to_string(),
            "Navigate to download folder: cd Downloads".to_string(),
            "Allow script execution: Set-ExecutionPolicy -Scope Process -ExecutionPolicy Bypass"
                .to_string(),
            format!("Run the script: .\\{}", script_filename(os)),
        ]
    } else {
        vec![
            "Open Terminal".to_string(),
            "Navigate to download folder: cd ~/Downloads".to_string(),
            format!("Make executable: chmod +x {}", script_filename(os)),
            format!("Run the script: ./{}", script_filename(os)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::rules::RuleLibrary;

    fn timestamp() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    fn rule(id: &str) -> HardeningRule {
        HardeningRule::new(id, "Test Rule", "A rule for tests")
            .with_os(&[Os::Linux, Os::Windows])
            .with_risk(&[RiskLevel::Basic])
            .with_linux_command("echo hardened")
            .with_windows_command("Write-Host hardened")
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let r = rule("r1");
        let rules = vec![&r];
        let first = render_script(Os::Linux, RiskLevel::Basic, &rules, timestamp());
        let second = render_script(Os::Linux, RiskLevel::Basic, &rules, timestamp());
        assert_eq!(first.content, second.content);
        assert_eq!(first, second);
    }

    #[test]
    fn test_timestamp_uses_millisecond_utc_format() {
        let script = render_script(Os::Linux, RiskLevel::Basic, &[], timestamp());
        assert!(script
            .content
            .contains("# Generated: 2024-06-01T12:00:00.000Z"));
    }

    #[test]
    fn test_empty_rule_set_still_renders_header_and_footer() {
        let script = render_script(Os::MacOs, RiskLevel::Maximum, &[], timestamp());
        assert_eq!(script.rule_count, 0);
        assert!(script.content.starts_with("#!/bin/bash\n"));
        assert!(script.content.contains("Risk Level: MAXIMUM"));
        assert!(script.content.contains("HARDENING COMPLETE"));
        assert!(script.content.ends_with("\n"));
    }

    #[test]
    fn test_rule_without_body_for_target_is_skipped() {
        let with_body = rule("has_linux");
        let windows_only = HardeningRule::new("win_only", "Win", "Windows only")
            .with_os(&[Os::Windows])
            .with_risk(&[RiskLevel::Basic])
            .with_windows_command("Write-Host win");
        let rules = vec![&with_body, &windows_only];

        let script = render_script(Os::Linux, RiskLevel::Basic, &rules, timestamp());
        assert_eq!(script.rule_count, 1);
        assert!(script.content.contains("echo hardened"));
        assert!(!script.content.contains("Write-Host win"));
    }

    #[test]
    fn test_filename_mapping() {
        assert_eq!(script_filename(Os::MacOs), "fk94-harden.sh");
        assert_eq!(script_filename(Os::Linux), "fk94-harden.sh");
        assert_eq!(script_filename(Os::Windows), "fk94-harden.ps1");
    }

    #[test]
    fn test_usage_instructions_per_os() {
        let unix = usage_instructions(Os::Linux);
        assert_eq!(unix.len(), 4);
        assert_eq!(unix[0], "Open Terminal");
        assert_eq!(unix[3], "Run the script: ./fk94-harden.sh");

        let windows = usage_instructions(Os::Windows);
        assert_eq!(windows.len(), 4);
        assert_eq!(windows[0], "Open PowerShell as Administrator");
        assert_eq!(windows[3], "Run the script: .\\fk94-harden.ps1");
    }

    #[test]
    fn test_windows_script_has_no_bash_prologue() {
        let r = rule("r1");
        let script = render_script(Os::Windows, RiskLevel::Basic, &[&r], timestamp());
        assert!(!script.content.contains("#!/bin/bash"));
        assert!(!script.content.contains("set -e"));
        assert!(script.content.contains("Write-Host hardened"));
        assert_eq!(script.filename, "fk94-harden.ps1");
        assert_eq!(script.os, Os::Windows);
    }

    #[test]
    fn test_rule_sections_preserve_order() {
        let first = rule("first");
        let second = HardeningRule::new("second", "Second Rule", "Comes after")
            .with_os(&[Os::Linux])
            .with_risk(&[RiskLevel::Basic])
            .with_linux_command("echo second");
        let rules = vec![&first, &second];

        let script = render_script(Os::Linux, RiskLevel::Basic, &rules, timestamp());
        let first_at = script.content.find("# Test Rule").unwrap();
        let second_at = script.content.find("# Second Rule").unwrap();
        assert!(first_at < second_at);
        assert_eq!(script.rule_count, 2);
    }

    #[test]
    fn test_builtin_linux_basic_script_content() {
        let library = RuleLibrary::builtin();
        let rules: Vec<&HardeningRule> = library
            .iter()
            .filter(|r| r.applicable_to_os(Os::Linux) && r.targets_risk(RiskLevel::Basic))
            .filter(|r| r.conditions.is_empty())
            .collect();

        let script = render_script(Os::Linux, RiskLevel::Basic, &rules, timestamp());
        assert!(script.content.contains("# Enable Firewall"));
        assert!(script.content.contains("ufw"));
        assert!(script.content.contains("BROWSER SECURITY CHECKLIST"));
        assert!(script.content.contains("https://fk94security.com"));
    }
}
