//! Shell dialect abstraction for script assembly.
//!
//! Encapsulates the bash vs PowerShell differences: shebang and
//! strict-mode prologue, the print builtin, and the admin guidance in
//! the comment header. Rule command bodies already carry their own
//! dialect and pass through untouched.

use crate::config::compile_time::{artifact, product};
use crate::rules::{Os, RiskLevel};

/// Target scripting dialect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellDialect {
    Bash,
    PowerShell,
}

impl ShellDialect {
    pub fn for_os(os: Os) -> Self {
        if os.is_unix_shell() {
            ShellDialect::Bash
        } else {
            ShellDialect::PowerShell
        }
    }

    /// The dialect's print-a-line builtin
    pub fn print_builtin(&self) -> &'static str {
        match self {
            ShellDialect::Bash => "echo",
            ShellDialect::PowerShell => "Write-Host",
        }
    }

    /// A single `echo "text"` / `Write-Host "text"` statement
    fn print(&self, text: &str) -> String {
        format!("{} \"{}\"", self.print_builtin(), text)
    }

    /// Comment header and banner that open every script
    pub fn header(&self, os: Os, risk_level: RiskLevel, timestamp: &str) -> String {
        let banner_heading = format!("  {} - System Hardening Script", product::TOOL_NAME);
        let banner_risk = format!("  Risk Level: {}", risk_level.as_str().to_uppercase());

        match self {
            ShellDialect::Bash => format!(
                "#!/bin/bash\n\
                 #\n\
                 # {title}\n\
                 # Generated: {timestamp}\n\
                 # OS: {os}\n\
                 # Risk Level: {risk}\n\
                 #\n\
                 # Run with: chmod +x {file} && ./{file}\n\
                 #\n\
                 \n\
                 set -e\n\
                 \n\
                 {banner}\n{heading}\n{risk_line}\n{banner}\n{blank}\n\n",
                title = script_title(),
                timestamp = timestamp,
                os = os.as_str(),
                risk = risk_level.as_str(),
                file = unix_filename(),
                banner = self.print(artifact::BANNER),
                heading = self.print(&banner_heading),
                risk_line = self.print(&banner_risk),
                blank = self.print(""),
            ),
            ShellDialect::PowerShell => format!(
                "#\n\
                 # {title}\n\
                 # Generated: {timestamp}\n\
                 # OS: {os}\n\
                 # Risk Level: {risk}\n\
                 #\n\
                 # Run as Administrator in PowerShell\n\
                 #\n\
                 \n\
                 {banner}\n{heading}\n{risk_line}\n{banner}\n{blank}\n\n",
                title = script_title(),
                timestamp = timestamp,
                os = os.label(),
                risk = risk_level.as_str(),
                banner = self.print(artifact::BANNER),
                heading = self.print(&banner_heading),
                risk_line = self.print(&banner_risk),
                blank = self.print(""),
            ),
        }
    }

    /// One rule's section: name and description comments, the command
    /// body verbatim, and a trailing blank print for readability
    pub fn rule_block(&self, name: &str, description: &str, command: &str) -> String {
        format!(
            "\n# {name}\n# {description}\n{command}\n{blank}\n\n",
            blank = self.print("")
        )
    }

    /// Completion banner that closes every script
    pub fn footer(&self) -> String {
        let url = format!("  {}", product::SITE_URL);
        format!(
            "\n{banner}\n{done}\n{restart}\n{blank}\n{visit}\n{url}\n{banner}\n",
            banner = self.print(artifact::BANNER),
            done = self.print("  HARDENING COMPLETE"),
            restart = self.print("  Some changes may require a restart."),
            blank = self.print(""),
            visit = self.print("  For more security tools, visit:"),
            url = self.print(&url),
        )
    }
}

fn script_title() -> String {
    format!("{} - Hardening Script", product::TOOL_NAME)
}

fn unix_filename() -> String {
    format!("{}.{}", artifact::SCRIPT_BASENAME, artifact::UNIX_EXTENSION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dialect_for_os() {
        assert_eq!(ShellDialect::for_os(Os::MacOs), ShellDialect::Bash);
        assert_eq!(ShellDialect::for_os(Os::Linux), ShellDialect::Bash);
        assert_eq!(ShellDialect::for_os(Os::Windows), ShellDialect::PowerShell);
    }

    #[test]
    fn test_bash_header_shape() {
        let header = ShellDialect::Bash.header(Os::Linux, RiskLevel::Medium, "2024-01-01T00:00:00.000Z");
        assert!(header.starts_with("#!/bin/bash\n"));
        assert!(header.contains("# Generated: 2024-01-01T00:00:00.000Z\n"));
        assert!(header.contains("# OS: linux\n"));
        assert!(header.contains("# Risk Level: medium\n"));
        assert!(header.contains("# Run with: chmod +x fk94-harden.sh && ./fk94-harden.sh\n"));
        assert!(header.contains("\nset -e\n"));
        assert!(header.contains("echo \"  Risk Level: MEDIUM\""));
        assert!(header.ends_with("echo \"\"\n\n"));
    }

    #[test]
    fn test_powershell_header_shape() {
        let header =
            ShellDialect::PowerShell.header(Os::Windows, RiskLevel::Basic, "2024-01-01T00:00:00.000Z");
        assert!(!header.contains("#!/bin/bash"));
        assert!(!header.contains("set -e"));
        assert!(header.contains("# OS: Windows\n"));
        assert!(header.contains("# Run as Administrator in PowerShell\n"));
        assert!(header.contains("Write-Host \"  Risk Level: BASIC\""));
    }

    #[test]
    fn test_rule_block_keeps_command_verbatim() {
        let block = ShellDialect::Bash.rule_block("Firewall", "Enable it", "ufw enable\nufw status");
        assert_eq!(
            block,
            "\n# Firewall\n# Enable it\nufw enable\nufw status\necho \"\"\n\n"
        );
    }

    #[test]
    fn test_footer_mentions_site() {
        let footer = ShellDialect::PowerShell.footer();
        assert!(footer.contains("Write-Host \"  HARDENING COMPLETE\""));
        assert!(footer.contains("https://fk94security.com"));
        assert!(footer.ends_with("\n"));
    }
}
