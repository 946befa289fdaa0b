//! Built-in hardening rule library.
//!
//! The canonical rule table shipped with the product. Ordering here is
//! the rendering order: the selection pass preserves it and never
//! reorders or scores. Command bodies are verbatim shell/PowerShell
//! text, rendered untouched into the generated script.

use super::types::{HardeningRule, Os, RiskLevel};

/// The canonical rule table, in rendering order
pub(crate) fn builtin_rules() -> Vec<HardeningRule> {
    vec![
        // Enable Firewall
        HardeningRule::new(
            "firewall",
            "Enable Firewall",
            "Block unauthorized incoming connections",
        )
        .with_os(&[Os::MacOs, Os::Windows, Os::Linux])
        .with_risk(&[RiskLevel::Basic, RiskLevel::Medium, RiskLevel::Maximum])
        .with_mac_command(
            r#"# Enable firewall
sudo /usr/libexec/ApplicationFirewall/socketfilterfw --setglobalstate on
sudo /usr/libexec/ApplicationFirewall/socketfilterfw --setblockall on
sudo /usr/libexec/ApplicationFirewall/socketfilterfw --setstealthmode on
echo "✓ Firewall enabled with stealth mode""#,
        )
        .with_windows_command(
            r#"# Enable Windows Firewall
Set-NetFirewallProfile -Profile Domain,Public,Private -Enabled True
Write-Host "✓ Firewall enabled""#,
        )
        .with_linux_command(
            r#"# Enable UFW firewall
sudo ufw default deny incoming
sudo ufw default allow outgoing
sudo ufw enable
echo "✓ UFW firewall enabled""#,
        ),

        // Enable Full Disk Encryption
        HardeningRule::new(
            "disk_encryption",
            "Enable Full Disk Encryption",
            "Encrypt your entire disk to protect data at rest",
        )
        .with_os(&[Os::MacOs, Os::Windows])
        .with_risk(&[RiskLevel::Basic, RiskLevel::Medium, RiskLevel::Maximum])
        .with_mac_command(
            r#"# Check FileVault status and enable if needed
if ! fdesetup status | grep -q "On"; then
    echo "FileVault is OFF. To enable, run:"
    echo "sudo fdesetup enable"
    echo "⚠️  You will need to restart and save the recovery key!"
else
    echo "✓ FileVault is already enabled"
fi"#,
        )
        .with_windows_command(
            r#"# Check BitLocker status
$status = Get-BitLockerVolume -MountPoint "C:"
if ($status.ProtectionStatus -eq "Off") {
    Write-Host "BitLocker is OFF. To enable, run:"
    Write-Host "Enable-BitLocker -MountPoint 'C:' -EncryptionMethod Aes256"
    Write-Host "⚠️  Save your recovery key!"
} else {
    Write-Host "✓ BitLocker is already enabled"
}"#,
        ),

        // Configure Encrypted DNS
        HardeningRule::new(
            "dns_encryption",
            "Configure Encrypted DNS",
            "Use DNS over HTTPS to prevent DNS snooping",
        )
        .with_os(&[Os::MacOs, Os::Windows, Os::Linux])
        .with_risk(&[RiskLevel::Basic, RiskLevel::Medium, RiskLevel::Maximum])
        .with_mac_command(
            r#"# Set DNS to Cloudflare (1.1.1.1) with DoH
networksetup -setdnsservers Wi-Fi 1.1.1.1 1.0.0.1
echo "✓ DNS set to Cloudflare (1.1.1.1)"
echo "For full DoH, configure in System Settings > Network > DNS""#,
        )
        .with_windows_command(
            r#"# Set DNS to Cloudflare
Set-DnsClientServerAddress -InterfaceAlias "Wi-Fi" -ServerAddresses ("1.1.1.1","1.0.0.1")
Set-DnsClientServerAddress -InterfaceAlias "Ethernet" -ServerAddresses ("1.1.1.1","1.0.0.1")
Write-Host "✓ DNS set to Cloudflare (1.1.1.1)""#,
        )
        .with_linux_command(
            r#"# Set DNS to Cloudflare
echo "nameserver 1.1.1.1" | sudo tee /etc/resolv.conf
echo "nameserver 1.0.0.1" | sudo tee -a /etc/resolv.conf
echo "✓ DNS set to Cloudflare (1.1.1.1)""#,
        ),

        // Disable Remote Access
        HardeningRule::new(
            "disable_remote",
            "Disable Remote Access",
            "Turn off remote login and screen sharing",
        )
        .with_os(&[Os::MacOs, Os::Windows])
        .with_risk(&[RiskLevel::Basic, RiskLevel::Medium, RiskLevel::Maximum])
        .with_mac_command(
            r#"# Disable remote login
sudo systemsetup -setremotelogin off 2>/dev/null || true
# Disable remote management
sudo /System/Library/CoreServices/RemoteManagement/ARDAgent.app/Contents/Resources/kickstart -deactivate -stop 2>/dev/null || true
echo "✓ Remote access disabled""#,
        )
        .with_windows_command(
            r#"# Disable Remote Desktop
Set-ItemProperty -Path 'HKLM:\System\CurrentControlSet\Control\Terminal Server' -Name "fDenyTSConnections" -Value 1
Write-Host "✓ Remote Desktop disabled""#,
        ),

        // Configure Auto Screen Lock
        HardeningRule::new(
            "screen_lock",
            "Configure Auto Screen Lock",
            "Lock screen automatically after inactivity",
        )
        .with_os(&[Os::MacOs, Os::Windows])
        .with_risk(&[RiskLevel::Basic, RiskLevel::Medium, RiskLevel::Maximum])
        .with_mac_command(
            r#"# Require password immediately after sleep
defaults write com.apple.screensaver askForPassword -int 1
defaults write com.apple.screensaver askForPasswordDelay -int 0
# Set screen saver to 5 minutes
defaults -currentHost write com.apple.screensaver idleTime -int 300
echo "✓ Screen lock configured (5 min timeout)""#,
        )
        .with_windows_command(
            r#"# Set screen lock timeout to 5 minutes
powercfg -change -monitor-timeout-ac 5
powercfg -change -monitor-timeout-dc 5
Write-Host "✓ Screen lock timeout set to 5 minutes""#,
        ),

        // Disable Bluetooth When Not In Use
        HardeningRule::new(
            "bluetooth",
            "Disable Bluetooth When Not In Use",
            "Bluetooth can be used for tracking and attacks",
        )
        .with_os(&[Os::MacOs])
        .with_risk(&[RiskLevel::Medium, RiskLevel::Maximum])
        .with_mac_command(
            r#"# Note: This disables Bluetooth. Re-enable in System Settings if needed.
sudo defaults write /Library/Preferences/com.apple.Bluetooth ControllerPowerState -int 0
sudo killall -HUP blued
echo "✓ Bluetooth disabled (re-enable in System Settings when needed)""#,
        ),

        // Disable Analytics & Telemetry
        HardeningRule::new(
            "telemetry",
            "Disable Analytics & Telemetry",
            "Stop sending usage data to Apple/Microsoft",
        )
        .with_os(&[Os::MacOs, Os::Windows])
        .with_risk(&[RiskLevel::Basic, RiskLevel::Medium, RiskLevel::Maximum])
        .with_mac_command(
            r#"# Disable Apple analytics
defaults write com.apple.assistant.support "Siri Data Sharing Opt-In Status" -int 2
defaults write com.apple.CrashReporter DialogType none
defaults write com.apple.SoftwareUpdate ScheduleFrequency -int 1
# Disable personalized ads
defaults write com.apple.AdLib allowApplePersonalizedAdvertising -bool false
echo "✓ Apple telemetry and personalized ads disabled""#,
        )
        .with_windows_command(
            r#"# Disable Windows telemetry
Set-ItemProperty -Path "HKLM:\SOFTWARE\Policies\Microsoft\Windows\DataCollection" -Name "AllowTelemetry" -Value 0
Set-Service -Name "DiagTrack" -StartupType Disabled
Stop-Service -Name "DiagTrack" -Force
Write-Host "✓ Windows telemetry disabled""#,
        ),

        // Enable Gatekeeper
        HardeningRule::new(
            "gatekeeper",
            "Enable Gatekeeper",
            "Only allow apps from identified developers",
        )
        .with_os(&[Os::MacOs])
        .with_risk(&[RiskLevel::Basic, RiskLevel::Medium, RiskLevel::Maximum])
        .with_mac_command(
            r#"# Enable Gatekeeper
sudo spctl --master-enable
echo "✓ Gatekeeper enabled""#,
        ),

        // Disable Guest Account
        HardeningRule::new(
            "guest_account",
            "Disable Guest Account",
            "Remove guest login option",
        )
        .with_os(&[Os::MacOs, Os::Windows])
        .with_risk(&[RiskLevel::Basic, RiskLevel::Medium, RiskLevel::Maximum])
        .with_mac_command(
            r#"# Disable guest account
sudo defaults write /Library/Preferences/com.apple.loginwindow GuestEnabled -bool false
echo "✓ Guest account disabled""#,
        )
        .with_windows_command(
            r#"# Disable Guest account
net user Guest /active:no
Write-Host "✓ Guest account disabled""#,
        ),

        // Randomize Device Hostname
        HardeningRule::new(
            "hostname",
            "Randomize Device Hostname",
            "Use a generic hostname to avoid identification",
        )
        .with_os(&[Os::MacOs])
        .with_risk(&[RiskLevel::Medium, RiskLevel::Maximum])
        .with_mac_command(
            r#"# Set generic hostname
HOSTNAME="MacBook-$(openssl rand -hex 3)"
sudo scutil --set ComputerName "$HOSTNAME"
sudo scutil --set HostName "$HOSTNAME"
sudo scutil --set LocalHostName "$HOSTNAME"
echo "✓ Hostname changed to: $HOSTNAME""#,
        ),

        // Disable Location Services
        HardeningRule::new(
            "location",
            "Disable Location Services",
            "Prevent apps from accessing your location",
        )
        .with_os(&[Os::MacOs])
        .with_risk(&[RiskLevel::Maximum])
        .with_mac_command(
            r#"# Disable location services (requires restart)
sudo defaults write /var/db/locationd/Library/Preferences/ByHost/com.apple.locationd LocationServicesEnabled -int 0
echo "✓ Location services disabled (restart required)""#,
        ),

        // Clear Clipboard Regularly
        HardeningRule::new(
            "clipboard_crypto",
            "Clear Clipboard Regularly",
            "Prevent clipboard malware from stealing wallet addresses",
        )
        .with_os(&[Os::MacOs, Os::Windows])
        .with_risk(&[RiskLevel::Medium, RiskLevel::Maximum])
        .with_condition("has_crypto", &["yes"])
        .with_mac_command(
            r#"# Clear clipboard now
pbcopy < /dev/null
echo "✓ Clipboard cleared"
echo "TIP: Consider using a clipboard manager that auto-clears (like Maccy)""#,
        )
        .with_windows_command(
            r#"# Clear clipboard
Set-Clipboard -Value $null
Write-Host "✓ Clipboard cleared""#,
        ),

        // Disable AirDrop
        HardeningRule::new(
            "airdrop",
            "Disable AirDrop",
            "Prevent unauthorized file sharing",
        )
        .with_os(&[Os::MacOs])
        .with_risk(&[RiskLevel::Medium, RiskLevel::Maximum])
        .with_mac_command(
            r#"# Disable AirDrop
defaults write com.apple.NetworkBrowser DisableAirDrop -bool true
echo "✓ AirDrop disabled""#,
        ),

        // Secure SSH Configuration
        HardeningRule::new(
            "ssh_security",
            "Secure SSH Configuration",
            "Harden SSH if you use it",
        )
        .with_os(&[Os::MacOs, Os::Linux])
        .with_risk(&[RiskLevel::Medium, RiskLevel::Maximum])
        .with_condition("work_type", &["tech"])
        .with_mac_command(
            r#"# Secure SSH (if enabled)
if [ -f /etc/ssh/sshd_config ]; then
    echo "SSH detected. Recommended settings:"
    echo "  PermitRootLogin no"
    echo "  PasswordAuthentication no"
    echo "  PubkeyAuthentication yes"
    echo "Apply manually in /etc/ssh/sshd_config"
else
    echo "✓ SSH not enabled"
fi"#,
        )
        .with_linux_command(
            r#"# Secure SSH
sudo sed -i 's/#PermitRootLogin yes/PermitRootLogin no/' /etc/ssh/sshd_config
sudo sed -i 's/#PasswordAuthentication yes/PasswordAuthentication no/' /etc/ssh/sshd_config
sudo systemctl restart sshd
echo "✓ SSH hardened""#,
        ),

        // Browser Security Reminder
        HardeningRule::new(
            "browser_reminder",
            "Browser Security Reminder",
            "Important browser settings",
        )
        .with_os(&[Os::MacOs, Os::Windows, Os::Linux])
        .with_risk(&[RiskLevel::Basic, RiskLevel::Medium, RiskLevel::Maximum])
        .with_mac_command(
            r#"echo ""
echo "═══════════════════════════════════════════"
echo "BROWSER SECURITY CHECKLIST"
echo "═══════════════════════════════════════════"
echo "1. Install uBlock Origin extension"
echo "2. Use DuckDuckGo or Brave Search"
echo "3. Disable third-party cookies"
echo "4. Enable Enhanced Tracking Protection"
echo "5. Consider using Firefox or Brave"
echo "═══════════════════════════════════════════""#,
        )
        .with_windows_command(
            r#"Write-Host ""
Write-Host "═══════════════════════════════════════════"
Write-Host "BROWSER SECURITY CHECKLIST"
Write-Host "═══════════════════════════════════════════"
Write-Host "1. Install uBlock Origin extension"
Write-Host "2. Use DuckDuckGo or Brave Search"
Write-Host "3. Disable third-party cookies"
Write-Host "4. Enable Enhanced Tracking Protection"
Write-Host "5. Consider using Firefox or Brave"
Write-Host "═══════════════════════════════════════════""#,
        )
        .with_linux_command(
            r#"echo ""
echo "═══════════════════════════════════════════"
echo "BROWSER SECURITY CHECKLIST"
echo "═══════════════════════════════════════════"
echo "1. Install uBlock Origin extension"
echo "2. Use DuckDuckGo or Brave Search"
echo "3. Disable third-party cookies"
echo "4. Enable Enhanced Tracking Protection"
echo "5. Consider using Firefox or Brave"
echo "═══════════════════════════════════════════""#,
        ),
    ]
}
