pub mod compile_time {
    pub mod product {
        /// Tool identity printed in script headers and banners
        pub const TOOL_NAME: &str = "FK94 Security";

        /// Reference link rendered in every script footer
        pub const SITE_URL: &str = "https://fk94security.com";
    }

    pub mod artifact {
        /// Base name of the generated script file
        pub const SCRIPT_BASENAME: &str = "fk94-harden";

        /// Extension for POSIX shell scripts (macOS, Linux)
        pub const UNIX_EXTENSION: &str = "sh";

        /// Extension for PowerShell scripts (Windows)
        pub const WINDOWS_EXTENSION: &str = "ps1";

        /// Banner line used in script headers and footers
        pub const BANNER: &str = "═══════════════════════════════════════════";
    }

    pub mod flow {
        /// Perceived-progress delay between the last answer and the
        /// result, in milliseconds. UX only; generation itself is
        /// synchronous and effectively instant.
        pub const GENERATING_DELAY_MS: u64 = 1500;
    }

    pub mod validation {
        /// Maximum rule identifier length
        /// Keeps ids usable in logs and debug output
        pub const MAX_RULE_ID_LENGTH: usize = 64;

        /// Maximum rules accepted in one library
        /// Guards against accidentally loading a malformed document
        pub const MAX_LIBRARY_RULES: usize = 500;
    }
}
