// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Default configuration values.

use super::schema::GradeConfig;

/// Get the default configuration.
pub fn default_config() -> GradeConfig {
    GradeConfig::default()
}

/// Generate an example configuration file.
pub fn example_config() -> &'static str {
    r#"# gitgrade Configuration File

# GitHub REST API
[github]
api_url = "https://api.github.com"
user_agent = "gitgrade"
# Most recent commits inspected for Git Practices (1-100)
commit_count = 30
timeout_secs = 30

# Reuse fetched snapshots when the same repository is analyzed again
[cache]
enabled = true
ttl_secs = 900

[ui]
color = true
hints = true
# text | json | markdown
format = "text"
"#
}
